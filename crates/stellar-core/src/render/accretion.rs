use super::FrameGeometry;
use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::constants::{ACCRETION_ROTATION_RATE, ACCRETION_SEGMENTS};
use std::f64::consts::PI;

const LENSING_RING: Rgba = Rgba::new(50, 50, 80, 0.1);

pub(super) fn draw<C: Canvas + ?Sized>(canvas: &mut C, frame: &FrameGeometry) {
    let am = frame.activity_modifier;
    let radius = frame.base_radius;
    let c = frame.center;
    let outer = radius * 15.0 * am;
    let inner = radius * 1.5;
    let rotation = ACCRETION_ROTATION_RATE * am;

    for i in 0..ACCRETION_SEGMENTS {
        let t = i as f64 / ACCRETION_SEGMENTS as f64;
        // neighbouring segments counter-rotate
        let spin = if i % 2 == 0 { 1.0 } else { -1.1 };
        let angle_offset = frame.time_ms * rotation * (1.0 + t * 1.5) * spin;
        let sweep = (PI / 15.0) * (1.0 - t * 0.7);
        let r = inner + (outer - inner) * t.powf(0.6);
        let jitter = 1.0 + (angle_offset * 5.0 + t * PI * 10.0).sin() * 0.05 * t;
        let start = angle_offset + t * PI * 7.0;

        let hue = (200.0 + t * 100.0 - (frame.general_pulse * 2.0).sin() * 20.0 + 360.0) % 360.0;
        let lightness = 50.0 + t * 30.0 + (angle_offset * 3.0).sin() * 10.0;
        let alpha = 0.1 + t.sqrt() * 0.4;

        canvas.begin_path();
        canvas.arc(c.x, c.y, (r * jitter).max(0.0), start, start + sweep);
        canvas.set_stroke(&Rgba::from_hsla(hue, 100.0, lightness, alpha).into());
        canvas.set_line_width((2.0 + (1.0 - t) * 8.0) * (1.0 + (angle_offset * 2.0 + t).sin() * 0.1));
        canvas.stroke();
    }

    // event horizon
    canvas.set_fill(&Rgba::BLACK.into());
    canvas.fill_circle(c, radius);

    canvas.set_stroke(&LENSING_RING.into());
    canvas.set_line_width((radius * 0.1).max(1.0));
    canvas.begin_path();
    canvas.arc(
        c.x,
        c.y,
        radius * (1.1 + (frame.general_pulse * 0.3).sin() * 0.05),
        0.0,
        std::f64::consts::TAU,
    );
    canvas.stroke();
}
