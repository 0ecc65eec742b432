#![cfg(target_arch = "wasm32")]
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod layout;
mod loader;
mod overlay;
mod render;
mod ui;
mod viewer;

use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{AppState, ProductId};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("viewer-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let viewer = viewer::Viewer::new(document.clone(), AppState::default());

    let year = js_sys::Date::new_0().get_full_year();
    dom::set_text(&document, constants::ID_FOOTER_YEAR, &layout::footer_text(year));

    let on_select: Rc<dyn Fn(ProductId)> = {
        let viewer = viewer.clone();
        Rc::new(move |id| viewer.select(id))
    };
    {
        let app = viewer.app.borrow();
        ui::render_catalog(&document, app.catalog(), on_select)?;
        loader::preload_all(app.catalog(), &viewer.cache);
    }
    overlay::show_catalog(&document);

    events::wire_buttons(&viewer);
    events::wire_stage_input(&viewer);
    events::wire_global_keydown(viewer.clone());
    events::wire_resize(viewer.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(viewer)));
    frame::start_loop(frame_ctx);
    Ok(())
}
