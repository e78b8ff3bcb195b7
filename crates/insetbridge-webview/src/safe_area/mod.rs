//! Safe-area inset pipeline.
//!
//! The host reports window insets per category (system bars, display
//! cutout, soft keyboard) in physical pixels. [`InsetObserver`] merges them
//! into one snapshot and hands it to [`InsetPublisher`], which converts to
//! logical pixels and writes four CSS custom properties into the page.
//! The page can ask for a re-publish at any time (e.g. after a reload)
//! through the `safe_area_initialize` IPC request.

mod host;
mod observer;
mod publisher;
mod source;
mod types;

#[cfg(test)]
mod tests;

pub use host::{DensitySource, HostChrome, HostSetup, Responder, StyleSurface};
pub use observer::InsetObserver;
pub use publisher::{InsetPublisher, PublishOutcome};
pub use source::{InsetDisposition, InsetEventSource, InsetListener, InsetSubscription};
pub use types::{DensityFactor, InsetSnapshot, LogicalInsets, RawInsetEvent};
