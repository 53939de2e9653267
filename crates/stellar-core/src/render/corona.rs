use super::FrameGeometry;
use crate::canvas::{Canvas, RadialGradient};
use crate::catalog::StellarTypeDef;
use crate::color::Rgba;
use crate::constants::*;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

pub(super) fn draw<C: Canvas + ?Sized, R: Rng>(
    canvas: &mut C,
    frame: &FrameGeometry,
    def: &StellarTypeDef,
    corona: Option<Rgba>,
    rng: &mut R,
) {
    let am = frame.activity_modifier;
    let mut radius = frame.base_radius;
    if def.activity > BREATHING_ACTIVITY_MIN {
        radius *= 1.0 + frame.general_pulse.sin() * 0.02 * def.activity * am;
    }

    draw_body(canvas, frame, def, corona, radius);

    if def.activity > FLARE_ACTIVITY_MIN {
        draw_flares(canvas, frame, def, radius, rng);
    }
}

/// Number of flare strokes drawn per frame for an active star.
#[inline]
pub fn flare_count(activity: f64, activity_modifier: f64) -> usize {
    let n = (activity * FLARES_PER_ACTIVITY * activity_modifier).floor();
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}

/// Glow gradient followed by the solid disk.
pub(super) fn draw_body<C: Canvas + ?Sized>(
    canvas: &mut C,
    frame: &FrameGeometry,
    def: &StellarTypeDef,
    corona: Option<Rgba>,
    radius: f64,
) {
    let am = frame.activity_modifier;
    let mut corona_size = 1.5 + def.activity * am;
    if corona.is_some() {
        corona_size += 0.5;
    }
    let glow_radius = radius * corona_size * (1.0 + (frame.general_pulse * 1.5).sin() * 0.05 * am);
    let core_brightness = (0.5 + def.activity * 0.2 * am).min(1.0);
    let glow_color = corona.unwrap_or_else(|| def.base_color.with_alpha(0.3 * am));

    let gradient = RadialGradient::concentric(frame.center, radius * 0.3, glow_radius)
        .with_stop(0.0, Rgba::WHITE.with_alpha(core_brightness))
        .with_stop(0.2, def.base_color)
        .with_stop(0.6, glow_color)
        .with_stop(1.0, Rgba::TRANSPARENT);
    canvas.set_fill(&gradient.into());
    canvas.fill_circle(frame.center, glow_radius.max(0.0));

    canvas.set_fill(&def.base_color.into());
    canvas.fill_circle(frame.center, radius.max(0.0));
}

fn draw_flares<C: Canvas + ?Sized, R: Rng>(
    canvas: &mut C,
    frame: &FrameGeometry,
    def: &StellarTypeDef,
    radius: f64,
    rng: &mut R,
) {
    let am = frame.activity_modifier;
    for i in 0..flare_count(def.activity, am) {
        let drift = if i % 2 == 0 { 1.0 } else { -1.0 };
        let angle = rng.gen::<f64>() * TAU + frame.general_pulse * drift * 0.5;
        let length = radius * (0.1 + rng.gen::<f64>() * 0.3) * am;
        let start = radius * (0.9 + rng.gen::<f64>() * 0.1);
        let dir = DVec2::from_angle(angle);

        canvas.set_stroke(&Rgba::new(255, 255, 230, 0.3 + rng.gen::<f64>() * 0.3).into());
        canvas.set_line_width(1.0 + rng.gen::<f64>() * 2.0);
        canvas.stroke_line(
            frame.center + dir * start,
            frame.center + dir * (start + length),
        );
    }
}
