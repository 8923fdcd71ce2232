use crate::constants::{LOADING_OVERLAY_ID, NO_CONTENT_ID, STATUS_ID};
use web_sys as web;

#[inline]
fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

pub fn show_loading(document: &web::Document) {
    show(document, LOADING_OVERLAY_ID);
}

pub fn hide_loading(document: &web::Document) {
    hide(document, LOADING_OVERLAY_ID);
}

/// Replace the viewport with the "no content" message.
pub fn show_no_content(document: &web::Document, reason: &str) {
    hide_loading(document);
    if let Some(el) = document.get_element_by_id(NO_CONTENT_ID) {
        el.set_text_content(Some(reason));
    }
    show(document, NO_CONTENT_ID);
}

/// One-line status readout, e.g. "grid · 1200 items".
pub fn update_status(document: &web::Document, mode: &str, items: usize) {
    if let Some(el) = document.get_element_by_id(STATUS_ID) {
        el.set_text_content(Some(&format!("{} · {} items", mode, items)));
    }
}
