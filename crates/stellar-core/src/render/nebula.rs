use super::FrameGeometry;
use crate::canvas::{Canvas, RadialGradient};
use crate::catalog::StellarTypeDef;
use crate::color::Rgba;

pub(super) fn draw<C: Canvas + ?Sized>(
    canvas: &mut C,
    frame: &FrameGeometry,
    def: &StellarTypeDef,
    nebula_color: Rgba,
    nebula_size_factor: f64,
) {
    let core_radius = frame.base_radius;
    let breathing = 0.9 + (frame.general_pulse * 0.5).sin() * 0.1;
    let nebula_radius = frame.base_radius * nebula_size_factor * breathing * frame.activity_modifier;
    let ratio = if nebula_radius > 0.0 {
        core_radius / nebula_radius
    } else {
        0.0
    };

    let gradient = RadialGradient::concentric(frame.center, core_radius * 0.8, nebula_radius)
        .with_stop(0.0, def.base_color)
        .with_stop(0.2 * ratio, def.base_color)
        .with_stop(0.3 * ratio + 0.1, nebula_color)
        .with_stop(1.0, Rgba::TRANSPARENT);
    canvas.set_fill(&gradient.into());
    canvas.fill_circle(frame.center, nebula_radius);
}
