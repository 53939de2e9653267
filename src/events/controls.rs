use crate::constants::*;
use crate::dom;
use crate::frame::App;
use std::cell::RefCell;
use std::rc::Rc;
use stellar_core::ZoomCommand;
use web_sys as web;

/// Sliders reclassify on every `input` event; buttons issue zoom commands.
pub fn wire_controls(document: &web::Document, app: &Rc<RefCell<App>>) {
    for id in SLIDER_IDS {
        let app = app.clone();
        dom::add_input_listener(document, id, move || {
            app.borrow_mut().apply_controls();
        });
    }

    for (id, command) in [
        (ZOOM_IN_BUTTON_ID, ZoomCommand::In),
        (ZOOM_OUT_BUTTON_ID, ZoomCommand::Out),
        (RESET_ZOOM_BUTTON_ID, ZoomCommand::Reset),
    ] {
        let app = app.clone();
        dom::add_click_listener(document, id, move || {
            app.borrow_mut().zoom(command);
        });
    }
}
