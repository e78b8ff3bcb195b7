//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the content WebView, and the safe-area
//! observer that publishes host insets into it.

mod core;
mod event_handler;
mod host;
mod init;
mod insets;
mod ipc_dispatch;
mod polling;
mod shutdown;
mod types;

pub use core::InsetBridgeApp;
