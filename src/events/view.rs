use crate::frame::App;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_canvas_wheel(canvas: &web::HtmlCanvasElement, app: &Rc<RefCell<App>>) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        app.borrow_mut().wheel(ev.delta_y());
    }) as Box<dyn FnMut(_)>);
    let _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_window_resize(window: &web::Window, app: &Rc<RefCell<App>>) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move || {
        app.borrow_mut().on_window_resize();
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
