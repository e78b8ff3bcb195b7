//! Internal constants for the app state module.

use std::time::Duration;

/// How often to drain the WebView event sink.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);
