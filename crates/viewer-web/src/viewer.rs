//! Glue between DOM events, the application state and the render stage.

use crate::constants::*;
use crate::dom;
use crate::frame;
use crate::loader::{self, SharedCache};
use crate::overlay;
use crate::render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use viewer_core::{AppState, Delivery, LoadTicket, ProductId, SessionId, ViewPhase};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Render surface of one `(session, reset epoch)` pair.
pub struct Stage {
    pub session: SessionId,
    pub epoch: u64,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<GpuState>,
}

impl Stage {
    pub fn matches(&self, ticket: &LoadTicket) -> bool {
        self.session == ticket.session && self.epoch == ticket.epoch
    }
}

#[derive(Clone)]
pub struct Viewer {
    pub document: web::Document,
    pub app: Rc<RefCell<AppState>>,
    pub cache: SharedCache,
    pub stage: Rc<RefCell<Option<Stage>>>,
}

impl Viewer {
    pub fn new(document: web::Document, app: AppState) -> Self {
        Self {
            document,
            app: Rc::new(RefCell::new(app)),
            cache: SharedCache::default(),
            stage: Rc::new(RefCell::new(None)),
        }
    }

    pub fn select(&self, id: ProductId) {
        let ticket = match self.app.borrow_mut().select(id) {
            Some(t) => t,
            None => {
                log::warn!("[catalog] unknown product {}", id);
                return;
            }
        };
        if let Some(product) = self.app.borrow().selection() {
            overlay::show_viewer(&self.document, product);
        }
        self.mount_stage(ticket);
        self.load(ticket);
        self.refresh_phase();
    }

    pub fn back(&self) {
        if !self.app.borrow_mut().back() {
            return;
        }
        *self.stage.borrow_mut() = None;
        if let Some(stage_el) = self.document.get_element_by_id(ID_VIEWER_STAGE) {
            dom::clear_children(&stage_el);
        }
        overlay::show_catalog(&self.document);
    }

    pub fn reset_view(&self) {
        let ticket = self.app.borrow_mut().reset_view();
        if let Some(ticket) = ticket {
            log::info!("[viewer] reset to epoch {}", ticket.epoch);
            self.mount_stage(ticket);
            self.load(ticket);
            self.refresh_phase();
        }
    }

    /// Reload a failed model. Returns false when there was nothing to retry.
    pub fn retry(&self) -> bool {
        let ticket = self.app.borrow_mut().retry();
        match ticket {
            Some(ticket) => {
                self.load(ticket);
                self.refresh_phase();
                true
            }
            None => false,
        }
    }

    pub fn refresh_phase(&self) {
        let app = self.app.borrow();
        if let Some(session) = app.session() {
            overlay::show_phase(&self.document, session.phase());
        }
    }

    /// Pixel ratio for the live session, or the default level without one.
    pub fn pixel_ratio(&self) -> f32 {
        self.app
            .borrow()
            .session()
            .map(|s| s.quality_level())
            .unwrap_or_default()
            .pixel_ratio()
    }

    fn load(&self, ticket: LoadTicket) {
        let locator = match self.app.borrow().selection() {
            Some(p) => p.model,
            None => return,
        };
        let this = self.clone();
        spawn_local(async move {
            let result = loader::load_on_demand(&this.cache, locator).await;
            let delivery = this.app.borrow_mut().deliver(ticket, result);
            if delivery == Delivery::Applied {
                this.refresh_phase();
                this.upload_model();
            }
        });
    }

    /// Swap in a fresh canvas for `ticket` and start GPU setup on it.
    fn mount_stage(&self, ticket: LoadTicket) {
        *self.stage.borrow_mut() = None;
        let stage_el = match dom::element(&self.document, ID_VIEWER_STAGE) {
            Some(el) => el,
            None => return,
        };
        let canvas = match dom::mount_fresh_canvas(&stage_el) {
            Ok(c) => c,
            Err(e) => {
                log::error!("[viewer] canvas error: {:?}", e);
                return;
            }
        };
        dom::sync_canvas_backing_size(&canvas, self.pixel_ratio());
        *self.stage.borrow_mut() = Some(Stage {
            session: ticket.session,
            epoch: ticket.epoch,
            canvas: canvas.clone(),
            gpu: None,
        });

        let this = self.clone();
        spawn_local(async move {
            let gpu = match frame::init_gpu(&canvas).await {
                Some(g) => g,
                None => return,
            };
            {
                let mut slot = this.stage.borrow_mut();
                match slot.as_mut() {
                    Some(stage) if stage.matches(&ticket) => stage.gpu = Some(gpu),
                    _ => {
                        log::debug!("[gpu] dropping surface for retired stage {:?}", ticket);
                        return;
                    }
                }
            }
            this.upload_model();
        });
    }

    /// Put the session's model on the current stage once both exist.
    fn upload_model(&self) {
        let app = self.app.borrow();
        let session = match app.session() {
            Some(s) if *s.phase() == ViewPhase::Ready => s,
            _ => return,
        };
        let model = match session.model() {
            Some(m) => m,
            None => return,
        };
        let mut slot = self.stage.borrow_mut();
        if let Some(stage) = slot.as_mut() {
            if stage.matches(&session.ticket()) {
                if let Some(gpu) = stage.gpu.as_mut() {
                    gpu.set_model(model);
                }
            }
        }
    }
}
