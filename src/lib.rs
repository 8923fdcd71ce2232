#![cfg(target_arch = "wasm32")]
use embedview_core::{Viewer, ViewerParams};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod bridge;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod loader;
mod overlay;
mod signal;

use constants::{CANVAS_ID, DATASET_URL_ATTR, DEFAULT_DATASET_URL, PARAMS_ATTR, PROJECTION_SELECT_ID};
use signal::Deferred;

thread_local! {
    // Reached from the exported callbacks the renderer invokes.
    static VIEWER: RefCell<Option<Rc<RefCell<Viewer>>>> = const { RefCell::new(None) };
    // assets_loaded() that arrived while the viewer was borrowed
    static ASSETS_PENDING: Deferred = const { Deferred::new() };
}

/// Whether an `assets_loaded()` call is waiting for the frame loop; clears it.
pub(crate) fn take_pending_assets() -> bool {
    ASSETS_PENDING.with(Deferred::take)
}

fn with_viewer(f: impl FnOnce(&Rc<RefCell<Viewer>>)) {
    VIEWER.with(|slot| {
        if let Some(v) = slot.borrow().as_ref() {
            f(v);
        }
    });
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Page-supplied overrides from `data-viewer-params`; bad JSON falls back to
/// defaults with a warning.
fn read_params(canvas: &web::HtmlCanvasElement) -> ViewerParams {
    match canvas.get_attribute(PARAMS_ATTR) {
        Some(json) => ViewerParams::from_json(&json).unwrap_or_else(|e| {
            log::warn!("[init] ignoring invalid {}: {}", PARAMS_ATTR, e);
            ViewerParams::default()
        }),
        None => ViewerParams::default(),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("embedview-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    wire_canvas_resize(&canvas);

    let params = read_params(&canvas);
    let url = canvas
        .get_attribute(DATASET_URL_ATTR)
        .unwrap_or_else(|| DEFAULT_DATASET_URL.to_string());

    overlay::show_loading(&document);
    let items = match loader::fetch_dataset(&window, &url).await {
        Ok(items) => items,
        Err(e) => {
            overlay::show_no_content(&document, "Could not load the dataset.");
            return Err(e);
        }
    };

    let initial_mode = params.initial_mode;
    let auto_rotate = params.auto_rotate;
    let projection = params.projection;
    let viewer = Viewer::new(items, params);
    if viewer.is_empty() {
        overlay::show_no_content(&document, "This dataset has no images.");
        return Ok(());
    }
    let viewer = Rc::new(RefCell::new(viewer));
    // registered before the renderer hears about items, so an early
    // assets_loaded() still finds it
    VIEWER.with(|slot| *slot.borrow_mut() = Some(viewer.clone()));
    let ids = bridge::item_ids(viewer.borrow().items());
    bridge::set_items(&ids);

    events::wire_controls(&document, viewer.clone());
    events::wire_global_keydown(viewer.clone());
    events::sync_mode_buttons(&document, initial_mode);
    dom::set_checked(&document, constants::AUTO_ROTATE_ID, auto_rotate);
    dom::set_select_value(&document, PROJECTION_SELECT_ID, projection.as_str());
    overlay::update_status(&document, initial_mode.as_str(), viewer.borrow().len());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(viewer, canvas)));
    frame::start_loop(frame_ctx);
    Ok(())
}

/// Called by the renderer once item textures are ready; runs the first,
/// snapped layout pass. If the viewer is busy (the renderer called back from
/// inside a bridge call) the pass runs on the next frame instead.
#[wasm_bindgen]
pub fn assets_loaded() {
    let mut ran = false;
    with_viewer(|v| {
        ran = ASSETS_PENDING.with(|pending| {
            signal::deliver_or_defer(&**v, pending, Viewer::on_assets_loaded)
        });
    });
    if !ran {
        log::debug!("[assets] viewer busy; first layout deferred to next frame");
        ASSETS_PENDING.with(Deferred::raise);
        return;
    }
    if let Some(document) = dom::window_document() {
        overlay::hide_loading(&document);
    }
}

/// Called by the renderer when one item's texture fails. The item keeps its
/// slot in every layout.
#[wasm_bindgen]
pub fn asset_failed(id: String) {
    log::warn!("[assets] failed to load texture for {}", id);
}
