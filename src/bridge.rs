//! Adapter to the JavaScript renderer.
//!
//! The page provides `window.embeddingScene`, which owns the scene graph,
//! textures and orbit controls. Rust only tells it which items exist, where
//! they are and how the camera should be framed.

use embedview_core::{CameraUpdate, EmbeddingItem};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = embeddingScene, js_name = setItems)]
    fn js_set_items(ids: &js_sys::Array) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = embeddingScene, js_name = setPositions)]
    fn js_set_positions(positions: &js_sys::Float32Array) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = embeddingScene, js_name = setCamera)]
    fn js_set_camera(
        eye: &js_sys::Float32Array,
        target: &js_sys::Float32Array,
        controls: &JsValue,
    ) -> Result<(), JsValue>;
}

/// Item ids in dataset order, detached from the viewer so no borrow is held
/// while JS runs.
pub fn item_ids(items: &[EmbeddingItem]) -> Vec<String> {
    items.iter().map(|it| it.filename.clone()).collect()
}

/// Announce the dataset so the renderer can start loading one texture per item.
/// The renderer may call `assets_loaded()` before this returns.
pub fn set_items(ids: &[String]) {
    let ids = ids
        .iter()
        .map(|id| JsValue::from_str(id))
        .collect::<js_sys::Array>();
    if let Err(e) = js_set_items(&ids) {
        log::error!("[bridge] setItems failed: {:?}", e);
    }
}

/// Flat `[x, y, z, ...]` positions, one triple per item in dataset order.
pub fn push_positions(flat: &[f32]) {
    let array = js_sys::Float32Array::from(flat);
    if let Err(e) = js_set_positions(&array) {
        log::error!("[bridge] setPositions failed: {:?}", e);
    }
}

pub fn push_camera(update: &CameraUpdate) {
    let eye = js_sys::Float32Array::from(&update.eye.to_array()[..]);
    let target = js_sys::Float32Array::from(&update.target.to_array()[..]);
    let controls = match serde_json::to_string(&update.controls)
        .map_err(|e| JsValue::from_str(&e.to_string()))
        .and_then(|json| js_sys::JSON::parse(&json))
    {
        Ok(v) => v,
        Err(e) => {
            log::error!("[bridge] could not encode orbit controls: {:?}", e);
            return;
        }
    };
    if let Err(e) = js_set_camera(&eye, &target, &controls) {
        log::error!("[bridge] setCamera failed: {:?}", e);
    }
}
