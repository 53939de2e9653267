//! Frame-loop bookkeeping independent of the host's callback mechanism.

use std::fmt::Debug;

/// Host frame-callback service (e.g. `requestAnimationFrame`).
pub trait FrameScheduler {
    type Handle: Copy + PartialEq + Debug;

    /// Ask for one callback on the next frame. `None` if the host refused.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Explicit start/stop/cancel handle around a [`FrameScheduler`].
///
/// At most one callback is ever pending, so restarting can never leave two
/// loops running side by side.
#[derive(Debug)]
pub struct AnimationLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
    running: bool,
    frames: u64,
}

impl<S: FrameScheduler> AnimationLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            running: false,
            frames: 0,
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn pending(&self) -> Option<S::Handle> {
        self.pending
    }

    /// Frames started since construction.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Mark the loop running and make sure a frame is on its way.
    pub fn start(&mut self) {
        self.running = true;
        self.schedule_next();
    }

    /// Drop the pending callback and mark the loop running without requesting a
    /// new one; the caller draws a frame straight away, which reschedules.
    pub fn restart(&mut self) {
        self.cancel_pending();
        self.running = true;
    }

    /// Cancel any pending callback and keep the loop from rescheduling.
    pub fn stop(&mut self) {
        self.cancel_pending();
        self.running = false;
    }

    pub fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    /// Called at the top of a frame: the callback that got us here is spent.
    pub fn begin_frame(&mut self) {
        self.pending = None;
        self.frames += 1;
    }

    /// Request the next frame unless stopped or one is already pending.
    pub fn schedule_next(&mut self) {
        if !self.running || self.pending.is_some() {
            return;
        }
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("[loop] host refused a frame callback");
        }
    }
}
