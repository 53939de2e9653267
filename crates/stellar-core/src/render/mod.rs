//! Per-frame procedural drawing of the classified object.

use crate::canvas::{Canvas, Size};
use crate::catalog::{RenderMode, StellarTypeDef};
use crate::classify::StarState;
use crate::constants::*;
use glam::DVec2;
use rand::Rng;

mod accretion;
mod corona;
mod nebula;
mod pulsar;

pub use corona::flare_count;
pub use pulsar::PulseOscillator;

/// Single knob coupling the simulation parameters to visual intensity, in `[0.5, 2.0]`.
pub fn activity_modifier(state: &StarState) -> f64 {
    let m = 1.0
        + (state.gravity_influence - 1.0) * 0.5
        + (state.hydrogen_level / 100.0 - 0.5) * 0.3
        + (state.effective_mass / 20.0 - 0.5) * 0.2;
    if m.is_nan() {
        return ACTIVITY_MODIFIER_MIN;
    }
    m.clamp(ACTIVITY_MODIFIER_MIN, ACTIVITY_MODIFIER_MAX)
}

/// Values shared by every draw mode for one frame, authored at zoom = 1.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrameGeometry {
    pub center: DVec2,
    pub min_dimension: f64,
    pub base_radius: f64,
    pub activity_modifier: f64,
    /// Slow phase accumulator driving breathing and colour shifts.
    pub general_pulse: f64,
    pub zoom: f64,
    pub time_ms: f64,
}

impl FrameGeometry {
    fn new(size: Size, def: &StellarTypeDef, state: &StarState, zoom: f64, time_ms: f64) -> Self {
        let am = activity_modifier(state);
        let min_dimension = size.min_dimension();
        Self {
            center: size.center(),
            min_dimension,
            base_radius: min_dimension * def.size_factor / BASE_RADIUS_DIVISOR,
            activity_modifier: am,
            general_pulse: time_ms * GENERAL_PULSE_RATE * def.activity * am,
            zoom,
            time_ms,
        }
    }
}

/// Draws the object for the current [`StarState`].
///
/// Owns the cross-frame oscillator state and the random source used for flare
/// jitter, so tests can substitute a seeded generator.
#[derive(Debug)]
pub struct ObjectRenderer<R> {
    pulse: PulseOscillator,
    rng: R,
}

impl<R: Rng> ObjectRenderer<R> {
    pub fn new(rng: R) -> Self {
        Self {
            pulse: PulseOscillator::default(),
            rng,
        }
    }

    pub fn pulse(&self) -> &PulseOscillator {
        &self.pulse
    }

    /// Paint one frame. The zoom transform about the surface centre is the
    /// only transform applied; every mode leaves the stack balanced.
    pub fn render_frame<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        state: &StarState,
        zoom: f64,
        time_ms: f64,
    ) {
        let size = canvas.size();
        if size.is_empty() {
            return;
        }
        let zoom = if zoom.is_finite() && zoom > 0.0 {
            zoom
        } else {
            DEFAULT_ZOOM
        };
        let def = state.stellar_type;
        let frame = FrameGeometry::new(size, def, state, zoom, time_ms);

        canvas.save();
        canvas.translate(frame.center.x, frame.center.y);
        canvas.scale(zoom, zoom);
        canvas.translate(-frame.center.x, -frame.center.y);

        match def.mode {
            RenderMode::Nebula { color, size_factor } => {
                nebula::draw(canvas, &frame, def, color, size_factor)
            }
            RenderMode::AccretionDisk => accretion::draw(canvas, &frame),
            RenderMode::Pulsing => pulsar::draw(canvas, &frame, def, &mut self.pulse),
            RenderMode::GenericCorona { corona } => {
                corona::draw(canvas, &frame, def, corona, &mut self.rng)
            }
        }

        canvas.restore();
    }
}
