use crate::constants::*;
use crate::dom;
use stellar_core::{zoom_label, Readouts, StarReport};
use web_sys as web;

#[inline]
pub fn show_report(document: &web::Document, report: &StarReport) {
    match document.get_element_by_id(INFO_PANEL_ID) {
        Some(el) => el.set_inner_html(&report.to_html()),
        None => log::error!("[panel] missing #{}", INFO_PANEL_ID),
    }
}

#[inline]
pub fn show_message(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(INFO_PANEL_ID) {
        el.set_inner_html(&format!("<p>{}</p>", message));
    }
}

pub fn update_readouts(document: &web::Document, readouts: &Readouts) {
    dom::set_text(document, MASS_VALUE_ID, &readouts.mass);
    dom::set_text(document, GRAVITY_VALUE_ID, &readouts.gravity);
    dom::set_text(document, HYDROGEN_VALUE_ID, &readouts.hydrogen);
}

#[inline]
pub fn update_zoom(document: &web::Document, zoom: f64) {
    dom::set_text(document, ZOOM_VALUE_ID, &zoom_label(zoom));
}
