use crate::canvas2d::Canvas2d;
use crate::constants::*;
use crate::dom;
use crate::panel;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use stellar_core::{
    Canvas, Controller, FrameScheduler, Readouts, SimulationInput, StarReport, ZoomCommand,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Slot holding the `requestAnimationFrame` callback; filled by [`start_loop`].
pub type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// [`FrameScheduler`] backed by `requestAnimationFrame` / `cancelAnimationFrame`.
pub struct RafScheduler {
    window: web::Window,
    tick: TickSlot,
}

impl RafScheduler {
    pub fn new(window: web::Window, tick: TickSlot) -> Self {
        Self { window, tick }
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let slot = self.tick.borrow();
        let callback = slot.as_ref()?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| log::error!("[frame] requestAnimationFrame failed: {:?}", e))
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

/// Everything the frame callback and the DOM handlers share.
pub struct App {
    pub document: web::Document,
    pub canvas: Canvas2d,
    pub controller: Controller<RafScheduler, StdRng>,
    pub started: Instant,
}

impl App {
    #[inline]
    fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Scheduled callback body.
    pub fn tick(&mut self) {
        if self.canvas.size().is_empty() {
            log::warn!("[frame] canvas not sized, resyncing");
            self.resize();
        }
        let now = self.now_ms();
        self.controller.frame(&mut self.canvas, now);
    }

    /// Resync the backing store with the CSS box and rebuild the star field.
    pub fn resize(&mut self) {
        let size = dom::sync_canvas_backing_size(self.canvas.element());
        self.controller.resize(size);
    }

    fn read_input(&self) -> anyhow::Result<SimulationInput> {
        let value = |id: &str| {
            dom::input_value(&self.document, id).ok_or_else(|| anyhow::anyhow!("missing #{}", id))
        };
        let input = SimulationInput::parse(
            &value(MASS_SLIDER_ID)?,
            &value(GRAVITY_SLIDER_ID)?,
            &value(HYDROGEN_SLIDER_ID)?,
        )?;
        Ok(input)
    }

    /// Read the sliders, reclassify and restart the animation.
    pub fn apply_controls(&mut self) {
        let input = match self.read_input() {
            Ok(input) => input,
            Err(e) => {
                log::warn!("[controls] {}", e);
                panel::show_message(&self.document, "Unable to read simulation parameters.");
                return;
            }
        };
        panel::update_readouts(&self.document, &Readouts::from_input(&input));

        let now = self.now_ms();
        let classification = self.controller.apply_input(input, &mut self.canvas, now);
        panel::show_report(&self.document, &StarReport::new(&classification));
    }

    pub fn zoom(&mut self, command: ZoomCommand) {
        self.controller.zoom(command);
        panel::update_zoom(&self.document, self.controller.zoom_level());
    }

    pub fn wheel(&mut self, delta_y: f64) {
        if self.controller.wheel(delta_y) {
            panel::update_zoom(&self.document, self.controller.zoom_level());
        }
    }

    /// Window resize: new star field, then a fresh frame sequence.
    pub fn on_window_resize(&mut self) {
        self.resize();
        if self.controller.context().classification.is_some() {
            self.apply_controls();
        } else {
            let now = self.now_ms();
            self.controller.redraw(&mut self.canvas, now);
        }
    }
}

/// Install the frame callback. Frames are requested by the controller.
pub fn start_loop(app: Rc<RefCell<App>>, tick: &TickSlot) {
    let app_tick = app.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        app_tick.borrow_mut().tick();
    }) as Box<dyn FnMut()>));
}
