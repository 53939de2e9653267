use super::{corona, FrameGeometry};
use crate::canvas::{Canvas, LinearGradient};
use crate::catalog::StellarTypeDef;
use crate::color::Rgba;
use crate::constants::*;
use glam::DVec2;
use std::f64::consts::TAU;

/// Ping-pong oscillator in `[0, 1]` advanced once per pulsing frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseOscillator {
    t: f64,
    direction: f64,
}

impl Default for PulseOscillator {
    fn default() -> Self {
        Self {
            t: 0.0,
            direction: 1.0,
        }
    }
}

impl PulseOscillator {
    #[inline]
    pub fn t(&self) -> f64 {
        self.t
    }

    /// Advance by `step`, reflecting at the bounds.
    pub fn advance(&mut self, step: f64) {
        self.t += self.direction * step;
        if self.t > 1.0 {
            self.t = 1.0;
            self.direction = -1.0;
        } else if self.t < 0.0 {
            self.t = 0.0;
            self.direction = 1.0;
        }
    }

    /// Scale applied to beams and body, in `[0.7, 1.3]`.
    #[inline]
    pub fn factor(&self) -> f64 {
        PULSE_FACTOR_MIN + self.t * PULSE_FACTOR_SPAN
    }
}

pub(super) fn draw<C: Canvas + ?Sized>(
    canvas: &mut C,
    frame: &FrameGeometry,
    def: &StellarTypeDef,
    pulse: &mut PulseOscillator,
) {
    let am = frame.activity_modifier;
    pulse.advance(PULSE_STEP * am);
    let pulse_factor = pulse.factor();
    let radius = frame.base_radius;

    // Divided by zoom so the beams stay screen-sized
    let beam_length = frame.min_dimension * BEAM_LENGTH_FRACTION / frame.zoom;
    let angle = (frame.time_ms * BEAM_ROTATION_RATE * am) % TAU;
    let head = Rgba::new(220, 220, 255, 0.8 * pulse_factor);
    let tail = Rgba::new(200, 200, 255, 0.0);

    canvas.save();
    canvas.translate(frame.center.x, frame.center.y);
    canvas.rotate(angle);
    canvas.set_line_width((3.0 + pulse_factor * 2.0) * am);
    for dir in [1.0, -1.0] {
        let beam = LinearGradient::new(DVec2::ZERO, DVec2::new(dir * beam_length, 0.0))
            .with_stop(0.0, head)
            .with_stop(1.0, tail);
        canvas.set_stroke(&beam.into());
        canvas.stroke_line(
            DVec2::new(dir * radius * 1.2, 0.0),
            DVec2::new(dir * beam_length, 0.0),
        );
    }
    canvas.restore();

    corona::draw_body(canvas, frame, def, None, radius * pulse_factor);
}
