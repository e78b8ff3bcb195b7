//! WebView event types.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::safe_area::RawInsetEvent;

/// Shared queue that host callbacks push into and the UI loop drains.
pub type EventSink = Arc<Mutex<Vec<WebViewEvent>>>;

/// Push an event, tolerating a poisoned lock.
pub(crate) fn push_event(sink: &EventSink, event: WebViewEvent) {
    match sink.lock() {
        Ok(mut events) => events.push(event),
        Err(poisoned) => poisoned.into_inner().push(event),
    }
}

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted towards the UI loop.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad { state: PageLoadState, url: String },
    /// Document title changed.
    TitleChanged { title: String },
    /// An IPC message was received from JavaScript.
    IpcMessage { body: String },
    /// The host reported new window insets.
    InsetsChanged(RawInsetEvent),
}
