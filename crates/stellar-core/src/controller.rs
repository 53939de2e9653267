//! Owns the live simulation state and drives classification and drawing.

use crate::animation::{AnimationLoop, FrameScheduler};
use crate::background::BackgroundField;
use crate::canvas::{Canvas, Size};
use crate::classify::{Classification, SimulationInput};
use crate::render::ObjectRenderer;
use crate::zoom::{Zoom, ZoomCommand};
use rand::Rng;

/// Everything a frame reads: one live classification, the zoom and the star field.
#[derive(Clone, Debug, Default)]
pub struct SimulationContext {
    pub input: Option<SimulationInput>,
    pub classification: Option<Classification>,
    pub zoom: Zoom,
    pub background: BackgroundField,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Drawn,
    /// Zero-area surface; the loop retries on the next frame.
    Skipped,
}

pub struct Controller<S: FrameScheduler, R: Rng> {
    ctx: SimulationContext,
    renderer: ObjectRenderer<R>,
    animation: AnimationLoop<S>,
    layout_rng: R,
}

impl<S: FrameScheduler, R: Rng> Controller<S, R> {
    /// `layout_rng` scatters the star field, `flare_rng` jitters flares.
    pub fn new(scheduler: S, layout_rng: R, flare_rng: R) -> Self {
        Self {
            ctx: SimulationContext::default(),
            renderer: ObjectRenderer::new(flare_rng),
            animation: AnimationLoop::new(scheduler),
            layout_rng,
        }
    }

    pub fn context(&self) -> &SimulationContext {
        &self.ctx
    }

    pub fn animation(&self) -> &AnimationLoop<S> {
        &self.animation
    }

    pub fn renderer(&self) -> &ObjectRenderer<R> {
        &self.renderer
    }

    #[inline]
    pub fn zoom_level(&self) -> f64 {
        self.ctx.zoom.level()
    }

    /// Reclassify for new control values and restart the frame sequence.
    ///
    /// The pending callback is cancelled before drawing, so the replacement
    /// frame is the only one produced for this change.
    pub fn apply_input<C: Canvas + ?Sized>(
        &mut self,
        input: SimulationInput,
        canvas: &mut C,
        time_ms: f64,
    ) -> Classification {
        self.animation.restart();
        let classification = input.classify();
        log::info!(
            "[classify] {} ({})",
            classification.state.stellar_type.display_name,
            classification.phase.header()
        );
        self.ctx.input = Some(input);
        self.ctx.classification = Some(classification.clone());
        self.frame(canvas, time_ms);
        classification
    }

    /// Replace the star field for a new surface size.
    pub fn resize(&mut self, size: Size) {
        self.ctx.background.regenerate(&mut self.layout_rng, size);
        log::info!(
            "[resize] {}x{} stars={}",
            size.width,
            size.height,
            self.ctx.background.stars().len()
        );
    }

    /// Cancel whatever is pending and draw immediately.
    pub fn redraw<C: Canvas + ?Sized>(&mut self, canvas: &mut C, time_ms: f64) -> FrameOutcome {
        self.animation.restart();
        self.frame(canvas, time_ms)
    }

    /// One iteration of the loop: background, then the object, then reschedule.
    ///
    /// Call from the scheduled callback; use [`Controller::redraw`] otherwise.
    pub fn frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C, time_ms: f64) -> FrameOutcome {
        self.animation.begin_frame();
        let outcome = if canvas.size().is_empty() {
            log::trace!("[loop] zero-area surface, retrying next frame");
            FrameOutcome::Skipped
        } else {
            self.ctx.background.render(canvas, time_ms);
            if let Some(c) = &self.ctx.classification {
                self.renderer
                    .render_frame(canvas, &c.state, self.ctx.zoom.level(), time_ms);
            }
            FrameOutcome::Drawn
        };
        self.animation.schedule_next();
        outcome
    }

    /// Apply a zoom command; the running loop picks the new level up next frame.
    pub fn zoom(&mut self, command: ZoomCommand) -> bool {
        let changed = self.ctx.zoom.apply(command);
        if changed {
            log::debug!("[zoom] {:?} -> {:.2}", command, self.ctx.zoom.level());
        }
        changed
    }

    pub fn wheel(&mut self, delta_y: f64) -> bool {
        match ZoomCommand::from_wheel_delta(delta_y) {
            Some(command) => self.zoom(command),
            None => false,
        }
    }

    pub fn stop(&mut self) {
        self.animation.stop();
    }
}
