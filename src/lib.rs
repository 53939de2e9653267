#![cfg(target_arch = "wasm32")]
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use stellar_core::Controller;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas2d;
mod constants;
mod dom;
mod events;
mod frame;
mod layout;
mod panel;

use constants::CANVAS_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("stellar-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let canvas_2d = canvas2d::Canvas2d::new(canvas.clone())?;

    let tick: frame::TickSlot = Rc::new(RefCell::new(None));
    let controller = Controller::new(
        frame::RafScheduler::new(window.clone(), tick.clone()),
        StdRng::from_entropy(),
        StdRng::from_entropy(),
    );
    let app = Rc::new(RefCell::new(frame::App {
        document: document.clone(),
        canvas: canvas_2d,
        controller,
        started: Instant::now(),
    }));
    frame::start_loop(app.clone(), &tick);

    events::wire_controls(&document, &app);
    events::wire_canvas_wheel(&canvas, &app);
    events::wire_window_resize(&window, &app);

    // Initial size, star field and first classification; this also starts the loop
    {
        let mut app = app.borrow_mut();
        app.resize();
        let zoom = app.controller.zoom_level();
        panel::update_zoom(&document, zoom);
        app.apply_controls();
    }
    log::info!("[init] ready");
    Ok(())
}
