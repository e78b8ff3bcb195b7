//! IPC message validation and dispatch from the page to Rust handlers.

use insetbridge_webview::ipc::{PING, SAFE_AREA_INITIALIZE};
use insetbridge_webview::{IpcMessage, IpcResponder};

use super::core::InsetBridgeApp;
use super::host::WindowDensity;

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Allowed IPC message kinds from JavaScript.
///
/// Any message with a `kind` not in this list is rejected and logged.
const ALLOWED_IPC_KINDS: &[&str] = &[SAFE_AREA_INITIALIZE, PING];

/// Check whether an IPC message kind is in the allowlist.
pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

// =============================================================================
// DISPATCH
// =============================================================================

impl InsetBridgeApp {
    /// Handle a single IPC message from the content surface.
    pub(super) fn handle_ipc_message(&mut self, body: &str) {
        let msg = match IpcMessage::from_json(body) {
            Some(m) => m,
            None => {
                tracing::warn!(body_len = body.len(), "IPC message rejected: failed to parse");
                return;
            }
        };

        if !is_ipc_kind_allowed(&msg.kind) {
            tracing::warn!(kind = %msg.kind, "IPC message rejected: unknown kind");
            return;
        }

        tracing::debug!(kind = %msg.kind, "IPC message dispatched");

        match msg.kind.as_str() {
            SAFE_AREA_INITIALIZE => self.handle_safe_area_initialize(&msg),
            PING => {
                if let Some(ref handle) = self.surface {
                    let payload = serde_json::json!("pong");
                    if let Err(e) = handle.send_ipc("pong", &payload) {
                        tracing::warn!(error = %e, "Failed to send pong");
                    }
                }
            }
            _ => {
                tracing::warn!(kind = %msg.kind, "Unhandled IPC kind");
            }
        }
    }

    /// Re-publish the latest insets and resolve the page's request.
    fn handle_safe_area_initialize(&self, msg: &IpcMessage) {
        let density = WindowDensity(self.window.as_deref());
        let outcome = match msg.request_id() {
            Some(id) => self.observer.recover(
                &self.surface,
                &density,
                IpcResponder::new(self.surface.as_ref(), id),
            ),
            None => {
                tracing::debug!("safe_area_initialize without request_id");
                self.observer.recover(&self.surface, &density, || {})
            }
        };
        tracing::debug!(?outcome, "Safe-area recover handled");
    }
}

// =============================================================================
// TESTS
// =============================================================================
