use anyhow::{anyhow, bail, Context};
use embedview_core::{parse_dataset, EmbeddingItem};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

async fn fetch_text(window: &web::Window, url: &str) -> anyhow::Result<String> {
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?;
    let resp: web::Response = resp_value.dyn_into().map_err(js_err)?;
    if !resp.ok() {
        bail!("GET {} returned HTTP {}", url, resp.status());
    }
    let text = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    text.as_string()
        .ok_or_else(|| anyhow!("response body from {} is not text", url))
}

/// Fetch and parse the dataset once at startup.
pub async fn fetch_dataset(window: &web::Window, url: &str) -> anyhow::Result<Vec<EmbeddingItem>> {
    let text = fetch_text(window, url).await?;
    let items = parse_dataset(&text).with_context(|| format!("parsing dataset from {}", url))?;
    Ok(items)
}
