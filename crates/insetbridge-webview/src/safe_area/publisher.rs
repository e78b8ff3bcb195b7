//! Converts inset snapshots to logical units and writes them into the
//! content surface's style environment.

use insetbridge_common::{Edge, SurfaceError, DEFAULT_PROPERTY_PREFIX};
use tracing::{debug, warn};

use crate::css::{safe_area_value, CssVariable};

use super::host::{DensitySource, Responder, StyleSurface};
use super::types::{InsetSnapshot, LogicalInsets};

/// Result of a publish or recover attempt. Never an error for the caller:
/// every variant is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// All four properties were handed to the surface.
    Written(LogicalInsets),
    /// Recover ran before any snapshot existed; nothing was written.
    NoSnapshot,
    /// The write did not land and was dropped.
    Discarded(SurfaceError),
}

/// Writes `{prefix}-{top,right,bottom,left}` custom properties.
#[derive(Debug, Clone)]
pub struct InsetPublisher {
    prefix: String,
}

impl Default for InsetPublisher {
    fn default() -> Self {
        Self::new(DEFAULT_PROPERTY_PREFIX)
    }
}

impl InsetPublisher {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn property_name(&self, edge: Edge) -> String {
        format!("{}-{}", self.prefix, edge.as_str())
    }

    /// The four properties for `logical`, in top/right/bottom/left order.
    pub fn style_properties(&self, logical: &LogicalInsets) -> Vec<CssVariable> {
        Edge::ALL
            .iter()
            .map(|&edge| {
                CssVariable::new(
                    self.property_name(edge),
                    safe_area_value(edge, logical.get(edge)),
                )
            })
            .collect()
    }

    /// Convert `snapshot` with the density current at this moment and write it.
    ///
    /// Must run on the surface's owning thread. Write failures are logged
    /// and reported in the outcome, never propagated.
    pub fn publish(
        &self,
        snapshot: InsetSnapshot,
        surface: &dyn StyleSurface,
        density: &dyn DensitySource,
    ) -> PublishOutcome {
        let density = density.density();
        let logical = LogicalInsets::from_physical(snapshot, density);
        let properties = self.style_properties(&logical);

        match surface.set_style_properties(&properties) {
            Ok(()) => {
                debug!(
                    top = logical.top,
                    right = logical.right,
                    bottom = logical.bottom,
                    left = logical.left,
                    density = density.get(),
                    "safe-area insets published"
                );
                PublishOutcome::Written(logical)
            }
            Err(SurfaceError::Unavailable) => {
                debug!("safe-area publish dropped: surface torn down");
                PublishOutcome::Discarded(SurfaceError::Unavailable)
            }
            Err(e) => {
                warn!(error = %e, "safe-area publish failed");
                PublishOutcome::Discarded(e)
            }
        }
    }

    /// Re-publish `latest` on request from the content, then resolve.
    ///
    /// With no snapshot yet this writes nothing. `responder` is resolved
    /// exactly once in every case.
    pub fn recover(
        &self,
        latest: Option<InsetSnapshot>,
        surface: &dyn StyleSurface,
        density: &dyn DensitySource,
        responder: impl Responder,
    ) -> PublishOutcome {
        let outcome = match latest {
            Some(snapshot) => self.publish(snapshot, surface, density),
            None => {
                debug!("safe-area recover before first inset event");
                PublishOutcome::NoSnapshot
            }
        };
        responder.resolve();
        outcome
    }
}
