use anyhow::anyhow;
use trail_core::EffectsConfig;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::CONFIG_SCRIPT_ID;

#[inline]
pub fn window_document() -> anyhow::Result<(web::Window, web::Document)> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;
    Ok((window, document))
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("#{} has the wrong element type: {:?}", id, e))
}

/// `innerWidth` / `innerHeight` in CSS pixels; zero when unavailable.
pub fn inner_size(window: &web::Window) -> (f64, f64) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64());
    let h = window.inner_height().ok().and_then(|v| v.as_f64());
    (w.unwrap_or(0.0), h.unwrap_or(0.0))
}

/// Read the optional JSON config block. Missing or invalid config falls
/// back to defaults; the effects never fail because of it.
pub fn read_config(document: &web::Document) -> EffectsConfig {
    let Some(el) = document.get_element_by_id(CONFIG_SCRIPT_ID) else {
        return EffectsConfig::default();
    };
    let text = el.text_content().unwrap_or_default();
    match EffectsConfig::from_json(&text) {
        Ok(cfg) => {
            log::info!("[config] loaded #{}", CONFIG_SCRIPT_ID);
            cfg
        }
        Err(e) => {
            log::warn!("[config] ignoring #{}: {}", CONFIG_SCRIPT_ID, e);
            EffectsConfig::default()
        }
    }
}
