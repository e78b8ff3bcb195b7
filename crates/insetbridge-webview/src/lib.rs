//! WebView bridge that publishes host window insets as CSS safe-area values.
//!
//! Wraps the `wry` crate to provide:
//! - A managed WebView instance for the content surface
//! - Bidirectional IPC (Rust <-> JavaScript) with promise-style requests
//! - The safe-area pipeline: inset observer, density conversion, and
//!   publication of `--<prefix>-{top,right,bottom,left}` custom properties

pub mod css;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod safe_area;

pub use events::{EventSink, PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, IpcPayload, IpcResponder};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
pub use safe_area::{InsetEventSource, InsetObserver, InsetPublisher, RawInsetEvent};
