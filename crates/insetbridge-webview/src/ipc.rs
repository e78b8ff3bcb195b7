//! IPC (Inter-Process Communication) protocol between Rust and JavaScript.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: JavaScript calls `window.ipc.postMessage(JSON.stringify({...}))`,
//!   which triggers the `ipc_handler` registered on the WebView.
//! - **Rust -> JS**: Rust calls `webview.evaluate_script("...")` to invoke
//!   JavaScript functions in the WebView context.
//!
//! Requests that expect an answer carry a `request_id` in their payload;
//! Rust answers by resolving the matching promise on the JS side.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::manager::WebViewHandle;
use crate::safe_area::Responder;

/// Page asks for the current safe-area insets to be published again.
pub const SAFE_AREA_INITIALIZE: &str = "safe_area_initialize";

/// Round-trip check; answered with a `pong` dispatch.
pub const PING: &str = "ping";

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload (arbitrary JSON).
    #[serde(default = "IpcPayload::none")]
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a plain string or structured JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    None,
}

impl IpcPayload {
    fn none() -> Self {
        IpcPayload::None
    }
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Create a JSON message.
    pub fn json(kind: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Json(value),
        }
    }

    /// The `request_id` of a request-style message, if present.
    pub fn request_id(&self) -> Option<u64> {
        match &self.payload {
            IpcPayload::Json(value) => value.get("request_id")?.as_u64(),
            _ => None,
        }
    }
}

/// JavaScript snippet that sets up the IPC bridge on the JS side.
/// This is injected as an initialization script into the WebView, so it
/// runs again after every reload.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.insetbridge = window.insetbridge || {};
    var ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload || null
            }));
        },
        // Promise-style request; resolved from Rust via _resolve(id).
        _nextId: 1,
        _pending: {},
        request: function(kind, payload) {
            var self = this;
            var id = self._nextId++;
            var body = payload || {};
            body.request_id = id;
            return new Promise(function(resolve) {
                self._pending[id] = resolve;
                self.send(kind, body);
            });
        },
        _resolve: function(id, value) {
            var resolve = this._pending[id];
            if (resolve) {
                delete this._pending[id];
                resolve(value);
            }
        },
        // Callbacks registered by JS code to handle messages from Rust
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
    window.insetbridge.ipc = ipc;
    window.insetbridge.safeArea = {
        initialize: function() {
            return ipc.request('safe_area_initialize');
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.insetbridge.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

/// Generate a JS snippet that resolves a pending request with no value.
pub fn js_resolve_request(request_id: u64) -> String {
    format!(
        "window.insetbridge && window.insetbridge.ipc && window.insetbridge.ipc._resolve({request_id});"
    )
}

/// Resolves one JS request promise through a WebView.
pub struct IpcResponder<'a> {
    handle: Option<&'a WebViewHandle>,
    request_id: u64,
}

impl<'a> IpcResponder<'a> {
    pub fn new(handle: Option<&'a WebViewHandle>, request_id: u64) -> Self {
        Self { handle, request_id }
    }
}

impl Responder for IpcResponder<'_> {
    fn resolve(self) {
        let Some(handle) = self.handle else {
            debug!(request_id = self.request_id, "request dropped: surface gone");
            return;
        };
        if let Err(e) = handle.evaluate_script(&js_resolve_request(self.request_id)) {
            debug!(request_id = self.request_id, error = %e, "failed to resolve request");
        }
    }
}
