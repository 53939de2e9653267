mod common;

use common::ManualScheduler;
use stellar_core::{AnimationLoop, FrameScheduler};

struct RefusingScheduler;

impl FrameScheduler for RefusingScheduler {
    type Handle = u8;

    fn request_frame(&mut self) -> Option<u8> {
        None
    }

    fn cancel_frame(&mut self, _handle: u8) {}
}

#[test]
fn start_requests_once() {
    let mut lp = AnimationLoop::new(ManualScheduler::default());
    lp.start();
    lp.start();
    assert_eq!(lp.scheduler().requested, vec![1]);
    assert_eq!(lp.pending(), Some(1));
}

#[test]
fn begin_frame_consumes_the_pending_handle() {
    let mut lp = AnimationLoop::new(ManualScheduler::default());
    lp.start();
    lp.begin_frame();
    assert_eq!(lp.pending(), None);
    assert_eq!(lp.frames(), 1);
    lp.schedule_next();
    assert_eq!(lp.pending(), Some(2));
    assert!(lp.scheduler().cancelled.is_empty());
}

#[test]
fn restart_cancels_without_requesting() {
    let mut lp = AnimationLoop::new(ManualScheduler::default());
    lp.start();
    lp.restart();
    assert!(lp.is_running());
    assert_eq!(lp.pending(), None);
    assert_eq!(lp.scheduler().cancelled, vec![1]);
    assert_eq!(lp.scheduler().requested.len(), 1);
}

#[test]
fn stopped_loop_does_not_reschedule() {
    let mut lp = AnimationLoop::new(ManualScheduler::default());
    lp.start();
    lp.stop();
    lp.schedule_next();
    assert_eq!(lp.pending(), None);
    assert_eq!(lp.scheduler().requested, vec![1]);
}

#[test]
fn refused_request_leaves_nothing_pending() {
    let mut lp = AnimationLoop::new(RefusingScheduler);
    lp.start();
    assert!(lp.is_running());
    assert_eq!(lp.pending(), None);
}
