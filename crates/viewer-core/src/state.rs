//! Top-level application state: the catalog plus the single selection slot.
//!
//! The selection is not stored separately; it is the product of the live
//! [`ViewportSession`], so a session exists exactly when something is
//! selected.

use crate::asset::AssetError;
use crate::catalog::{Catalog, Product, ProductId};
use crate::mesh::ModelMesh;
use crate::quality::{PerformanceSignal, QualityLevel};
use crate::session::{Delivery, LoadTicket, SessionId, ViewportSession};
use std::sync::Arc;
use std::time::Duration;

/// Which of the two top-level views is showing.
#[derive(Clone, Copy, Debug)]
pub enum View<'a> {
    Catalog,
    Viewer(&'a ViewportSession),
}

#[derive(Clone, Debug)]
pub struct AppState {
    catalog: Catalog,
    session: Option<ViewportSession>,
    next_session: u64,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            session: None,
            next_session: 1,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> View<'_> {
        match &self.session {
            Some(s) => View::Viewer(s),
            None => View::Catalog,
        }
    }

    pub fn selection(&self) -> Option<&'static Product> {
        self.session.as_ref().map(|s| s.product())
    }

    pub fn session(&self) -> Option<&ViewportSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut ViewportSession> {
        self.session.as_mut()
    }

    /// Open the viewer for `id` with a fresh session. Any previous session
    /// is dropped along with its in-flight load. Returns the ticket for the
    /// load the caller must now issue, or `None` for an unknown product.
    pub fn select(&mut self, id: ProductId) -> Option<LoadTicket> {
        let product = self.catalog.get(id)?;
        let session = ViewportSession::new(SessionId(self.next_session), product);
        self.next_session += 1;
        let ticket = session.ticket();
        log::info!("[catalog] selected {} (session {})", product.name, ticket.session.0);
        self.session = Some(session);
        Some(ticket)
    }

    /// Close the viewer. Returns false when already on the catalog.
    pub fn back(&mut self) -> bool {
        match self.session.take() {
            Some(s) => {
                log::info!("[viewer] back from {} (session {})", s.product().name, s.id().0);
                true
            }
            None => false,
        }
    }

    pub fn reset_view(&mut self) -> Option<LoadTicket> {
        let ticket = self.session.as_mut()?.reset_view()?;
        log::info!("[viewer] reset view, epoch {}", ticket.epoch);
        Some(ticket)
    }

    pub fn retry(&mut self) -> Option<LoadTicket> {
        let ticket = self.session.as_mut()?.retry()?;
        log::info!("[viewer] retry load, attempt {}", ticket.attempt);
        Some(ticket)
    }

    /// Route a finished load to the live session. Results for a session that
    /// no longer exists are stale.
    pub fn deliver(
        &mut self,
        ticket: LoadTicket,
        result: Result<Arc<ModelMesh>, AssetError>,
    ) -> Delivery {
        let delivery = match self.session.as_mut() {
            Some(s) => s.deliver(ticket, result),
            None => Delivery::Stale,
        };
        if delivery == Delivery::Stale {
            log::debug!("[viewer] discarded stale load {:?}", ticket);
        }
        delivery
    }

    pub fn record_frame(&mut self, dt: Duration) -> Option<QualityLevel> {
        self.session.as_mut()?.record_frame(dt)
    }

    pub fn on_performance(&mut self, signal: PerformanceSignal) -> Option<QualityLevel> {
        self.session.as_mut()?.apply_performance(signal)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}
