//! Viewport session: everything the detail viewer owns for one selection.
//!
//! A session is created when a product is selected and dropped on back, so
//! nothing here outlives a single visit to the viewer.

use crate::asset::AssetError;
use crate::camera::OrbitCamera;
use crate::catalog::{Product, ProductId};
use crate::mesh::ModelMesh;
use crate::quality::{AdaptiveQuality, PerformanceSignal, QualityLevel};
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(pub u64);

/// Identifies one load issued for a session. Results are applied only when
/// all three fields still match the live session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub session: SessionId,
    pub epoch: u64,
    pub attempt: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewPhase {
    Loading,
    Ready,
    Failed(AssetError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    Applied,
    /// The ticket belongs to an abandoned session, an older epoch or attempt,
    /// or the session already settled.
    Stale,
}

/// Comparable view of the session state, without the session identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub product: ProductId,
    pub phase: ViewPhase,
    pub reset_epoch: u64,
    pub attempt: u32,
    pub quality: QualityLevel,
}

#[derive(Clone, Debug)]
pub struct ViewportSession {
    id: SessionId,
    product: &'static Product,
    phase: ViewPhase,
    reset_epoch: u64,
    attempt: u32,
    quality: AdaptiveQuality,
    camera: OrbitCamera,
    model: Option<Arc<ModelMesh>>,
}

impl ViewportSession {
    pub fn new(id: SessionId, product: &'static Product) -> Self {
        Self {
            id,
            product,
            phase: ViewPhase::Loading,
            reset_epoch: 0,
            attempt: 0,
            quality: AdaptiveQuality::default(),
            camera: OrbitCamera::default(),
            model: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn product(&self) -> &'static Product {
        self.product
    }

    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    pub fn reset_epoch(&self) -> u64 {
        self.reset_epoch
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn quality_level(&self) -> QualityLevel {
        self.quality.level()
    }

    pub fn quality(&self) -> &AdaptiveQuality {
        &self.quality
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn model(&self) -> Option<&Arc<ModelMesh>> {
        self.model.as_ref()
    }

    pub fn ticket(&self) -> LoadTicket {
        LoadTicket {
            session: self.id,
            epoch: self.reset_epoch,
            attempt: self.attempt,
        }
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        *ticket == self.ticket()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            product: self.product.id,
            phase: self.phase.clone(),
            reset_epoch: self.reset_epoch,
            attempt: self.attempt,
            quality: self.quality.level(),
        }
    }

    /// Apply a finished load. Only the current ticket in `Loading` counts.
    pub fn deliver(
        &mut self,
        ticket: LoadTicket,
        result: Result<Arc<ModelMesh>, AssetError>,
    ) -> Delivery {
        if !self.is_current(&ticket) || self.phase != ViewPhase::Loading {
            return Delivery::Stale;
        }
        match result {
            Ok(model) => {
                self.camera.frame(&model.bounds);
                self.model = Some(model);
                self.phase = ViewPhase::Ready;
            }
            Err(error) => {
                log::warn!("[viewer] {} failed to load: {}", self.product.name, error);
                self.phase = ViewPhase::Failed(error);
            }
        }
        Delivery::Applied
    }

    /// Throw away the render surface and camera state and rebuild from
    /// scratch. A no-op unless the model is displayed.
    pub fn reset_view(&mut self) -> Option<LoadTicket> {
        if self.phase != ViewPhase::Ready {
            return None;
        }
        self.reset_epoch += 1;
        self.phase = ViewPhase::Loading;
        self.model = None;
        self.camera = OrbitCamera::default();
        Some(self.ticket())
    }

    /// Start another load after a failure. A no-op in any other phase.
    pub fn retry(&mut self) -> Option<LoadTicket> {
        if !matches!(self.phase, ViewPhase::Failed(_)) {
            return None;
        }
        self.attempt += 1;
        self.phase = ViewPhase::Loading;
        Some(self.ticket())
    }

    pub fn record_frame(&mut self, dt: Duration) -> Option<QualityLevel> {
        self.quality.record_frame(dt)
    }

    pub fn apply_performance(&mut self, signal: PerformanceSignal) -> Option<QualityLevel> {
        self.quality.apply(signal)
    }
}
