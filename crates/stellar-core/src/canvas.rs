//! Immediate-mode 2D drawing surface consumed by the renderers.
//!
//! Mirrors the subset of the HTML canvas 2D context the explorer needs, so the
//! web front-end can forward calls one-to-one while tests record them.

use crate::color::Rgba;
use glam::DVec2;
use smallvec::SmallVec;

/// Surface dimensions in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// No drawable area (also true for NaN dimensions).
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgba,
}

pub type GradientStops = SmallVec<[GradientStop; 4]>;

/// Push a stop, clamping the offset into `[0, 1]` as canvas gradients require.
fn push_stop(stops: &mut GradientStops, offset: f64, color: Rgba) {
    let offset = if offset.is_nan() {
        0.0
    } else {
        offset.clamp(0.0, 1.0)
    };
    stops.push(GradientStop { offset, color });
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub from: DVec2,
    pub to: DVec2,
    pub stops: GradientStops,
}

impl LinearGradient {
    pub fn new(from: DVec2, to: DVec2) -> Self {
        Self {
            from,
            to,
            stops: GradientStops::new(),
        }
    }

    pub fn with_stop(mut self, offset: f64, color: Rgba) -> Self {
        push_stop(&mut self.stops, offset, color);
        self
    }
}

/// Two-circle radial gradient; radii are kept non-negative.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub inner_center: DVec2,
    pub inner_radius: f64,
    pub outer_center: DVec2,
    pub outer_radius: f64,
    pub stops: GradientStops,
}

impl RadialGradient {
    /// Concentric gradient around `center`.
    pub fn concentric(center: DVec2, inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            inner_center: center,
            inner_radius: non_negative(inner_radius),
            outer_center: center,
            outer_radius: non_negative(outer_radius),
            stops: GradientStops::new(),
        }
    }

    pub fn with_stop(mut self, offset: f64, color: Rgba) -> Self {
        push_stop(&mut self.stops, offset, color);
        self
    }
}

#[inline]
fn non_negative(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

/// Fill or stroke style.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl From<Rgba> for Paint {
    fn from(color: Rgba) -> Self {
        Paint::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    fn from(g: LinearGradient) -> Self {
        Paint::Linear(g)
    }
}

impl From<RadialGradient> for Paint {
    fn from(g: RadialGradient) -> Self {
        Paint::Radial(g)
    }
}

/// Drawing surface with a save/restore transform stack.
///
/// Implementations must not panic on degenerate geometry; a rejected call is
/// simply dropped for that frame.
pub trait Canvas {
    fn size(&self) -> Size;

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn scale(&mut self, sx: f64, sy: f64);
    fn rotate(&mut self, angle: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);

    fn set_fill(&mut self, paint: &Paint);
    fn set_stroke(&mut self, paint: &Paint);
    fn set_line_width(&mut self, width: f64);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Filled full circle with the current fill style.
    fn fill_circle(&mut self, center: DVec2, radius: f64) {
        self.begin_path();
        self.arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU);
        self.fill();
    }

    /// Straight stroked segment with the current stroke style.
    fn stroke_line(&mut self, from: DVec2, to: DVec2) {
        self.begin_path();
        self.move_to(from.x, from.y);
        self.line_to(to.x, to.y);
        self.stroke();
    }
}
