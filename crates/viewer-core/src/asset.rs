//! Process-lifetime model cache keyed by locator.
//!
//! Entries are never evicted. A `Ready` entry is final; a `Failed` entry can
//! be re-requested, which is how an on-demand view recovers from a failed
//! speculative preload.

use crate::mesh::ModelMesh;
use fnv::FnvHashMap;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssetError {
    #[error("failed to fetch {locator}: {reason}")]
    Fetch { locator: String, reason: String },
    #[error("failed to parse glTF: {0}")]
    Parse(String),
    #[error("glTF references external buffer {0}; only self-contained GLB files are supported")]
    ExternalBuffer(String),
    #[error("GLB file references binary chunk but it is missing")]
    MissingBinaryChunk,
    #[error("model contains no triangle geometry")]
    NoGeometry,
}

/// Why a load was started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetOrigin {
    /// Speculative load issued when the catalog is first shown.
    Preload,
    /// Load issued because a viewer needs the model now.
    OnDemand,
}

#[derive(Clone, Debug)]
pub enum AssetStatus {
    Pending { origin: AssetOrigin },
    Ready(Arc<ModelMesh>),
    Failed { origin: AssetOrigin, error: AssetError },
}

impl AssetStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, AssetStatus::Ready(_))
    }
}

#[derive(Default)]
pub struct AssetCache {
    entries: FnvHashMap<String, AssetStatus>,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn status(&self, locator: &str) -> Option<&AssetStatus> {
        self.entries.get(locator)
    }

    pub fn get(&self, locator: &str) -> Option<Arc<ModelMesh>> {
        match self.entries.get(locator) {
            Some(AssetStatus::Ready(mesh)) => Some(mesh.clone()),
            _ => None,
        }
    }

    /// Mark `locator` as being loaded. Returns true when the caller should
    /// start a fetch.
    ///
    /// A preload only fetches locators the cache has never seen. An on-demand
    /// request fetches anything that is not ready yet, so a viewer never waits
    /// on a preload that may fail or on a fetch owned by an abandoned session.
    pub fn begin(&mut self, locator: &str, origin: AssetOrigin) -> bool {
        let fetch = match (self.entries.get(locator), origin) {
            (Some(AssetStatus::Ready(_)), _) => false,
            (None, _) => true,
            (Some(_), AssetOrigin::OnDemand) => true,
            (Some(_), AssetOrigin::Preload) => false,
        };
        if fetch {
            self.entries
                .insert(locator.to_string(), AssetStatus::Pending { origin });
        }
        fetch
    }

    /// Record the outcome of a fetch + parse. The first success wins; a late
    /// failure never replaces a ready model.
    pub fn complete(
        &mut self,
        locator: &str,
        origin: AssetOrigin,
        result: Result<ModelMesh, AssetError>,
    ) -> Result<Arc<ModelMesh>, AssetError> {
        if let Some(AssetStatus::Ready(mesh)) = self.entries.get(locator) {
            return Ok(mesh.clone());
        }
        match result {
            Ok(mesh) => {
                let mesh = Arc::new(mesh);
                log::debug!(
                    "[asset] ready {} ({} triangles, {:?})",
                    locator,
                    mesh.triangle_count(),
                    origin
                );
                self.entries
                    .insert(locator.to_string(), AssetStatus::Ready(mesh.clone()));
                Ok(mesh)
            }
            Err(error) => {
                // An on-demand fetch may still be running for a failed preload.
                let superseded = origin == AssetOrigin::Preload
                    && matches!(
                        self.entries.get(locator),
                        Some(AssetStatus::Pending {
                            origin: AssetOrigin::OnDemand
                        })
                    );
                if !superseded {
                    self.entries.insert(
                        locator.to_string(),
                        AssetStatus::Failed {
                            origin,
                            error: error.clone(),
                        },
                    );
                }
                Err(error)
            }
        }
    }

    /// Locators whose last load failed, with the origin of that load.
    pub fn failures(&self) -> Vec<(&str, AssetOrigin, &AssetError)> {
        let mut out: Vec<_> = self
            .entries
            .iter()
            .filter_map(|(locator, status)| match status {
                AssetStatus::Failed { origin, error } => Some((locator.as_str(), *origin, error)),
                _ => None,
            })
            .collect();
        out.sort_by(|a, b| a.0.cmp(b.0));
        out
    }
}
