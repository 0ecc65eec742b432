//! Model fetching on top of the shared cache.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use viewer_core::{AssetCache, AssetError, AssetOrigin, Catalog, ModelMesh};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub type SharedCache = Rc<RefCell<AssetCache>>;

async fn fetch_bytes(locator: &str) -> Result<Vec<u8>, AssetError> {
    let fail = |reason: String| AssetError::Fetch {
        locator: locator.to_string(),
        reason,
    };
    let window = web::window().ok_or_else(|| fail("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_str(locator))
        .await
        .map_err(|e| fail(format!("{:?}", e)))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| fail(format!("{:?}", e)))?;
    if !resp.ok() {
        return Err(fail(format!("HTTP {}", resp.status())));
    }
    let promise = resp.array_buffer().map_err(|e| fail(format!("{:?}", e)))?;
    let buffer = JsFuture::from(promise)
        .await
        .map_err(|e| fail(format!("{:?}", e)))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

async fn fetch_model(locator: &str) -> Result<ModelMesh, AssetError> {
    let bytes = fetch_bytes(locator).await?;
    ModelMesh::from_glb(&bytes)
}

/// Resolve `locator` for a viewer, reusing a cached model when there is one.
pub async fn load_on_demand(
    cache: &SharedCache,
    locator: &str,
) -> Result<Arc<ModelMesh>, AssetError> {
    let cached = cache.borrow().get(locator);
    if let Some(mesh) = cached {
        return Ok(mesh);
    }
    cache.borrow_mut().begin(locator, AssetOrigin::OnDemand);
    let result = fetch_model(locator).await;
    cache
        .borrow_mut()
        .complete(locator, AssetOrigin::OnDemand, result)
}

/// Fire-and-forget fetch of every catalog model. Failures stay in the cache.
pub fn preload_all(catalog: &Catalog, cache: &SharedCache) {
    for locator in catalog.asset_locators() {
        if !cache.borrow_mut().begin(locator, AssetOrigin::Preload) {
            continue;
        }
        let cache = cache.clone();
        spawn_local(async move {
            let result = fetch_model(locator).await;
            if let Err(e) = cache
                .borrow_mut()
                .complete(locator, AssetOrigin::Preload, result)
            {
                log::debug!("[asset] preload of {} failed: {}", locator, e);
            }
        });
    }
    log::info!("[asset] preloading {} models", catalog.len());
}
