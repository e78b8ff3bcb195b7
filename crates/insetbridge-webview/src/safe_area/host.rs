//! Seams between the inset pipeline and the host shell.

use insetbridge_common::{MarginPolicy, SurfaceError};

use crate::css::CssVariable;

use super::types::DensityFactor;

/// The content surface's live style environment.
///
/// Implementors are bound to the thread that owns the surface; the pipeline
/// only calls into them from that thread.
pub trait StyleSurface {
    /// Set CSS custom properties on the document root in one batch.
    fn set_style_properties(&self, properties: &[CssVariable]) -> Result<(), SurfaceError>;
}

/// A surface slot that may already have been torn down.
impl<S: StyleSurface> StyleSurface for Option<S> {
    fn set_style_properties(&self, properties: &[CssVariable]) -> Result<(), SurfaceError> {
        match self {
            Some(surface) => surface.set_style_properties(properties),
            None => Err(SurfaceError::Unavailable),
        }
    }
}

/// Current display density, queried on every conversion.
pub trait DensitySource {
    fn density(&self) -> DensityFactor;
}

impl DensitySource for DensityFactor {
    fn density(&self) -> DensityFactor {
        *self
    }
}

/// One-time window chrome configuration on the host.
pub trait HostChrome {
    /// Render status and navigation bars with fully transparent backgrounds.
    fn request_transparent_system_bars(&mut self);
    /// Enable or disable the host's own inset-based margin adjustment.
    fn set_margin_policy(&mut self, policy: MarginPolicy);
}

/// What to ask of the host when the surface is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostSetup {
    pub transparent_system_bars: bool,
    pub margin_policy: MarginPolicy,
}

impl Default for HostSetup {
    fn default() -> Self {
        Self {
            transparent_system_bars: true,
            margin_policy: MarginPolicy::Disabled,
        }
    }
}

/// Single success continuation of a request/response call.
///
/// There is no error continuation: recovery always resolves.
pub trait Responder {
    fn resolve(self);
}

impl<F: FnOnce()> Responder for F {
    fn resolve(self) {
        self()
    }
}
