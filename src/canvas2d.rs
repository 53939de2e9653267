//! [`Canvas`] over an HTML `CanvasRenderingContext2d`.

use stellar_core::{Canvas, GradientStop, LinearGradient, Paint, RadialGradient, Size};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct Canvas2d {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("not a 2d context"))?;
        Ok(Self { canvas, ctx })
    }

    pub fn element(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    fn linear(&self, g: &LinearGradient) -> web::CanvasGradient {
        let gradient = self.ctx.create_linear_gradient(g.from.x, g.from.y, g.to.x, g.to.y);
        add_stops(&gradient, &g.stops);
        gradient
    }

    fn radial(&self, g: &RadialGradient) -> Option<web::CanvasGradient> {
        match self.ctx.create_radial_gradient(
            g.inner_center.x,
            g.inner_center.y,
            g.inner_radius,
            g.outer_center.x,
            g.outer_center.y,
            g.outer_radius,
        ) {
            Ok(gradient) => {
                add_stops(&gradient, &g.stops);
                Some(gradient)
            }
            Err(e) => {
                log_rejected("radial gradient", &e);
                None
            }
        }
    }
}

fn add_stops(gradient: &web::CanvasGradient, stops: &[GradientStop]) {
    for stop in stops {
        if let Err(e) = gradient.add_color_stop(stop.offset as f32, &stop.color.to_css()) {
            log_rejected("color stop", &e);
        }
    }
}

#[inline]
fn log_rejected(what: &str, e: &JsValue) {
    log::debug!("[canvas] {} rejected: {:?}", what, e);
}

impl Canvas for Canvas2d {
    fn size(&self) -> Size {
        Size::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        if let Err(e) = self.ctx.translate(x, y) {
            log_rejected("translate", &e);
        }
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        if let Err(e) = self.ctx.scale(sx, sy) {
            log_rejected("scale", &e);
        }
    }

    fn rotate(&mut self, angle: f64) {
        if let Err(e) = self.ctx.rotate(angle) {
            log_rejected("rotate", &e);
        }
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        // negative radii throw IndexSizeError
        if radius.is_nan() || radius < 0.0 {
            return;
        }
        if let Err(e) = self.ctx.arc(x, y, radius, start_angle, end_angle) {
            log_rejected("arc", &e);
        }
    }

    fn set_fill(&mut self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Paint::Linear(g) => {
                let gradient = self.linear(g);
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
            Paint::Radial(g) => {
                if let Some(gradient) = self.radial(g) {
                    self.ctx.set_fill_style_canvas_gradient(&gradient);
                }
            }
        }
    }

    fn set_stroke(&mut self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_stroke_style_str(&color.to_css()),
            Paint::Linear(g) => {
                let gradient = self.linear(g);
                self.ctx.set_stroke_style_canvas_gradient(&gradient);
            }
            Paint::Radial(g) => {
                if let Some(gradient) = self.radial(g) {
                    self.ctx.set_stroke_style_canvas_gradient(&gradient);
                }
            }
        }
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }
}
