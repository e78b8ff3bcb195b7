use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{push_event, EventSink, PageLoadState, WebViewEvent};

use super::WebViewManager;

/// Whether an IPC body is worth forwarding: valid JSON, bounded size.
pub(crate) fn is_ipc_body_acceptable(body: &str) -> bool {
    const MAX_IPC_BODY: usize = 64 * 1024;
    body.len() <= MAX_IPC_BODY && serde_json::from_str::<serde_json::Value>(body).is_ok()
}

impl WebViewManager {
    pub(super) fn attach_ipc_handler(
        builder: WebViewBuilder<'_>,
        events: EventSink,
    ) -> WebViewBuilder<'_> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if !is_ipc_body_acceptable(&body) {
                warn!(body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(body_len = body.len(), "IPC message from JS");
            push_event(&events, WebViewEvent::IpcMessage { body });
        })
    }

    pub(super) fn attach_page_load_handler(
        builder: WebViewBuilder<'_>,
        events: EventSink,
    ) -> WebViewBuilder<'_> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            push_event(&events, WebViewEvent::PageLoad { state, url });
        })
    }

    pub(super) fn attach_title_handler(
        builder: WebViewBuilder<'_>,
        events: EventSink,
    ) -> WebViewBuilder<'_> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(title = %title, "title changed");
            push_event(&events, WebViewEvent::TitleChanged { title });
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_json_bodies() {
        assert!(is_ipc_body_acceptable(r#"{"kind":"ping"}"#));
        assert!(is_ipc_body_acceptable("null"));
    }

    #[test]
    fn rejects_non_json() {
        assert!(!is_ipc_body_acceptable(""));
        assert!(!is_ipc_body_acceptable("{kind: ping}"));
    }

    #[test]
    fn rejects_oversized_bodies() {
        let big = format!("\"{}\"", "a".repeat(64 * 1024));
        assert!(!is_ipc_body_acceptable(&big));
    }
}
