//! Host inset emission and content bounds upkeep.

use insetbridge_webview::safe_area::InsetDisposition;

use super::core::InsetBridgeApp;
use super::host::{content_bounds, emulated_insets};

impl InsetBridgeApp {
    /// Report the window's current insets through the host event source.
    ///
    /// Called at startup and whenever window geometry or scale changes.
    pub(super) fn emit_host_insets(&self) {
        let Some(window) = &self.window else {
            return;
        };
        let event = emulated_insets(&self.config.emulation, window.scale_factor());
        match self.inset_source.emit(event) {
            InsetDisposition::Consumed => tracing::trace!(?event, "Host insets consumed"),
            InsetDisposition::PassThrough => {
                tracing::trace!(?event, "Host insets left to default handling")
            }
        }
    }

    /// Resize the WebView to the window, honouring the margin policy.
    pub(super) fn sync_webview_bounds(&self) {
        let (Some(window), Some(surface)) = (&self.window, &self.surface) else {
            return;
        };
        let size = window.inner_size();
        let bars = emulated_insets(&self.config.emulation, window.scale_factor()).system_bars;
        let bounds = content_bounds(size.width, size.height, self.chrome.policy(), bars);
        if let Err(e) = surface.set_bounds(bounds) {
            tracing::warn!("Failed to set WebView bounds: {e}");
        }
    }
}
