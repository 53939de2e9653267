//! Twinkling star field painted behind the object.

use crate::canvas::{Canvas, Size};
use crate::color::Rgba;
use crate::constants::NUM_BACKGROUND_STARS;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

const STAR_TINT: (u8, u8, u8) = (220, 220, 255);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundStar {
    pub position: DVec2,
    pub radius: f64,
    pub base_alpha: f64,
    /// Radians per millisecond.
    pub twinkle_speed: f64,
    pub twinkle_offset: f64,
}

impl BackgroundStar {
    fn random<R: Rng>(rng: &mut R, size: Size) -> Self {
        Self {
            position: DVec2::new(rng.gen::<f64>() * size.width, rng.gen::<f64>() * size.height),
            radius: rng.gen::<f64>() * 1.2 + 0.3,
            base_alpha: rng.gen::<f64>() * 0.4 + 0.2,
            twinkle_speed: rng.gen::<f64>() * 0.001 + 0.0005,
            twinkle_offset: rng.gen::<f64>() * TAU,
        }
    }

    /// Opacity at `time_ms`, oscillating ±25% around three quarters of the base alpha.
    #[inline]
    pub fn alpha_at(&self, time_ms: f64) -> f64 {
        let phase = time_ms * self.twinkle_speed + self.twinkle_offset;
        self.base_alpha * (0.75 + 0.25 * phase.sin())
    }

    /// Position folded into `size`, so a shrunk surface keeps every star visible.
    #[inline]
    pub fn wrapped_position(&self, size: Size) -> DVec2 {
        DVec2::new(
            self.position.x.rem_euclid(size.width),
            self.position.y.rem_euclid(size.height),
        )
    }
}

#[derive(Clone, Debug, Default)]
pub struct BackgroundField {
    stars: Vec<BackgroundStar>,
}

impl BackgroundField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stars(&self) -> &[BackgroundStar] {
        &self.stars
    }

    /// Discard the current set and scatter a fresh one over `size`.
    pub fn regenerate<R: Rng>(&mut self, rng: &mut R, size: Size) {
        self.stars.clear();
        if size.is_empty() {
            return;
        }
        self.stars
            .extend((0..NUM_BACKGROUND_STARS).map(|_| BackgroundStar::random(rng, size)));
    }

    /// Clear to black and paint every star. No-op on a zero-area surface.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C, time_ms: f64) {
        let size = canvas.size();
        if size.is_empty() {
            return;
        }
        canvas.set_fill(&Rgba::BLACK.into());
        canvas.fill_rect(0.0, 0.0, size.width, size.height);

        let (r, g, b) = STAR_TINT;
        for star in &self.stars {
            let color = Rgba::new(r, g, b, star.alpha_at(time_ms));
            canvas.set_fill(&color.into());
            canvas.fill_circle(star.wrapped_position(size), star.radius);
        }
    }
}
