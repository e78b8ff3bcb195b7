use insetbridge_common::SurfaceError;
use wry::WebView;

use crate::css::{generate_css_injection_js, CssVariable};
use crate::safe_area::StyleSurface;

/// Handle to the managed WebView instance.
pub struct WebViewHandle {
    /// The underlying wry WebView.
    pub(super) webview: WebView,
    /// Current URL (best-effort tracking).
    pub(super) current_url: String,
}

impl WebViewHandle {
    /// Get the current URL.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Update the tracked URL.
    pub fn set_url(&mut self, url: String) {
        self.current_url = url;
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Send a typed IPC message to JavaScript.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script)
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }
}

impl StyleSurface for WebViewHandle {
    fn set_style_properties(&self, properties: &[CssVariable]) -> Result<(), SurfaceError> {
        let script = generate_css_injection_js(properties);
        self.webview
            .evaluate_script(&script)
            .map_err(|e| SurfaceError::Script(e.to_string()))
    }
}
