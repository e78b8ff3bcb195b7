//! WebView lifecycle management.
//!
//! `WebViewManager` creates the `wry::WebView` for the content surface and
//! owns the event sink that its callbacks (and the host inset listener)
//! push into.

use std::sync::Arc;

use crate::events::{EventSink, WebViewEvent};

mod handle;
mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

/// Creates the content surface and collects its events.
pub struct WebViewManager {
    /// Events pushed by callbacks, drained by the main event loop.
    pub(crate) events: EventSink,
}

impl WebViewManager {
    /// Create a new WebView manager.
    pub fn new() -> Self {
        Self {
            events: Arc::default(),
        }
    }

    /// A clone of the event sink, for producers outside the WebView.
    pub fn event_sink(&self) -> EventSink {
        Arc::clone(&self.events)
    }

    /// Drain all pending events in arrival order.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
