use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::debug!("[dom] no #{} on page; control not wired", element_id);
    }
}

pub fn add_change_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::Element) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let target = el.clone();
        let closure = Closure::wrap(Box::new(move || handler(target.clone())) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::debug!("[dom] no #{} on page; control not wired", element_id);
    }
}

/// Mark `active_id` with `class` and clear it from every other id in `ids`.
pub fn set_exclusive_class(document: &web::Document, ids: &[&str], active_id: &str, class: &str) {
    for id in ids {
        if let Some(el) = document.get_element_by_id(id) {
            let cl = el.class_list();
            if *id == active_id {
                _ = cl.add_1(class);
            } else {
                _ = cl.remove_1(class);
            }
        }
    }
}

pub fn set_checked(document: &web::Document, element_id: &str, checked: bool) {
    if let Some(input) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    {
        input.set_checked(checked);
    }
}

pub fn set_select_value(document: &web::Document, element_id: &str, value: &str) {
    if let Some(select) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlSelectElement>().ok())
    {
        select.set_value(value);
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
