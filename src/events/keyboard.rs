use crate::constants::{AUTO_ROTATE_ID, PROJECTION_SELECT_ID};
use crate::dom;
use crate::events::controls::apply_mode;
use crate::input::{action_for_key, KeyAction};
use embedview_core::Viewer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, viewer: &Rc<RefCell<Viewer>>) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(document) = dom::window_document() else {
        return;
    };
    match action_for_key(&ev.key()) {
        Some(KeyAction::SetMode(mode)) => apply_mode(&document, viewer, mode),
        Some(KeyAction::ToggleAutoRotate) => {
            let on = !viewer.borrow().auto_rotate_requested();
            viewer.borrow_mut().set_auto_rotate(on);
            dom::set_checked(&document, AUTO_ROTATE_ID, on);
        }
        Some(KeyAction::ToggleProjection) => {
            let projection = viewer.borrow().projection().toggled();
            viewer.borrow_mut().set_projection(projection);
            dom::set_select_value(&document, PROJECTION_SELECT_ID, projection.as_str());
        }
        None => return,
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(viewer: Rc<RefCell<Viewer>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &viewer);
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
