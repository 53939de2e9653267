use crate::layout;
use stellar_core::Size;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up an element and cast it; `None` if missing or of another type.
#[inline]
pub fn element_by_id<T: JsCast>(document: &web::Document, element_id: &str) -> Option<T> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
            let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        None => log::warn!("[dom] missing #{}", element_id),
    }
}

#[inline]
pub fn add_input_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
            let _ = el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        None => log::warn!("[dom] missing #{}", element_id),
    }
}

pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

pub fn input_value(document: &web::Document, element_id: &str) -> Option<String> {
    element_by_id::<web::HtmlInputElement>(document, element_id).map(|input| input.value())
}

/// Size the drawing buffer to the canvas' CSS box and return the new size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Size {
    let parent = canvas
        .parent_element()
        .map(|p| (p.client_width() as f64, p.client_height() as f64));
    let client = (canvas.client_width() as f64, canvas.client_height() as f64);
    let inner_width = web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);

    let (w_px, h_px) = layout::canvas_backing_size(parent, client, inner_width);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    Size::new(w_px as f64, h_px as f64)
}
