use crate::constants::{
    ACTIVE_CLASS, AUTO_ROTATE_ID, CLUSTER_SELECT_ID, MODE_BUTTONS, PROJECTION_SELECT_ID,
};
use crate::dom;
use embedview_core::{ClusterAlgorithm, LayoutMode, Projection, Viewer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Switch the viewer's layout and reflect it in the page controls.
pub fn apply_mode(document: &web::Document, viewer: &Rc<RefCell<Viewer>>, mode: LayoutMode) {
    viewer.borrow_mut().set_mode(mode);
    sync_mode_buttons(document, mode);
    crate::overlay::update_status(document, mode.as_str(), viewer.borrow().len());
}

pub fn sync_mode_buttons(document: &web::Document, mode: LayoutMode) {
    let ids: Vec<&str> = MODE_BUTTONS.iter().map(|(id, _)| *id).collect();
    if let Some((active, _)) = MODE_BUTTONS.iter().find(|(_, m)| *m == mode) {
        dom::set_exclusive_class(document, &ids, active, ACTIVE_CLASS);
    }
}

pub fn wire_controls(document: &web::Document, viewer: Rc<RefCell<Viewer>>) {
    for (id, mode) in MODE_BUTTONS {
        let viewer = viewer.clone();
        let doc = document.clone();
        dom::add_click_listener(document, id, move || apply_mode(&doc, &viewer, mode));
    }

    {
        let viewer = viewer.clone();
        dom::add_change_listener(document, AUTO_ROTATE_ID, move |el| {
            if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
                let on = input.checked();
                viewer.borrow_mut().set_auto_rotate(on);
                log::info!("[controls] auto-rotate {}", if on { "on" } else { "off" });
            }
        });
    }

    {
        let viewer = viewer.clone();
        dom::add_change_listener(document, CLUSTER_SELECT_ID, move |el| {
            if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
                match select.value().parse::<ClusterAlgorithm>() {
                    Ok(alg) => viewer.borrow_mut().set_cluster_algorithm(alg),
                    Err(e) => log::warn!("[controls] {}", e),
                }
            }
        });
    }

    dom::add_change_listener(document, PROJECTION_SELECT_ID, move |el| {
        if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
            match select.value().parse::<Projection>() {
                Ok(projection) => viewer.borrow_mut().set_projection(projection),
                Err(e) => log::warn!("[controls] {}", e),
            }
        }
    });
}
