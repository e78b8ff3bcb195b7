use std::fmt;
use std::sync::Arc;

use insetbridge_common::{BridgeError, Result};
use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// Wrap a wry failure in the workspace error type.
pub(crate) fn webview_error(e: impl fmt::Display) -> BridgeError {
    BridgeError::WebView(e.to_string())
}

impl WebViewManager {
    /// Create the WebView as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The WebView is positioned at `bounds` within the parent window.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_initialization_script(IPC_INIT_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&self.events));
        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events));
        builder = Self::attach_title_handler(builder, Arc::clone(&self.events));

        let initial_url;
        if let Some(url) = &config.url {
            builder = builder.with_url(url);
            initial_url = url.clone();
        } else if let Some(html) = &config.html {
            builder = builder.with_html(html);
            initial_url = "about:blank".to_string();
        } else {
            builder = builder.with_html("<html><body></body></html>");
            initial_url = "about:blank".to_string();
        }

        let webview = builder.build_as_child(window).map_err(webview_error)?;

        debug!(url = %initial_url, "WebView created");

        Ok(WebViewHandle {
            webview,
            current_url: initial_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webview_failures_map_to_bridge_error() {
        let err = webview_error("window handle unsupported");
        assert!(matches!(
            err,
            BridgeError::WebView(ref msg) if msg == "window handle unsupported"
        ));
        assert_eq!(err.to_string(), "webview error: window handle unsupported");
    }
}
