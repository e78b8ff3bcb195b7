//! Event sink draining and wake-up scheduling.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use insetbridge_webview::safe_area::PublishOutcome;
use insetbridge_webview::WebViewEvent;

use super::core::InsetBridgeApp;
use super::host::WindowDensity;
use super::types::POLL_INTERVAL;

impl InsetBridgeApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Apply every queued event in arrival order.
    ///
    /// Inset notifications and IPC requests share one queue, so a recover
    /// request always sees the snapshot of every inset event before it.
    pub(super) fn poll_webview_events(&mut self) {
        for event in self.webviews.drain_events() {
            match event {
                WebViewEvent::InsetsChanged(raw) => self.apply_insets(&raw),
                WebViewEvent::IpcMessage { body } => self.handle_ipc_message(&body),
                WebViewEvent::PageLoad { state, url } => {
                    tracing::debug!(?state, url = %url, "Page load");
                    if let Some(surface) = self.surface.as_mut() {
                        surface.set_url(url);
                    }
                }
                WebViewEvent::TitleChanged { title } => {
                    if let Some(window) = &self.window {
                        window.set_title(&title);
                    }
                }
            }
        }
    }

    fn apply_insets(&mut self, raw: &insetbridge_webview::RawInsetEvent) {
        let density = WindowDensity(self.window.as_deref());
        let outcome = self.observer.on_inset_changed(raw, &self.surface, &density);
        if let PublishOutcome::Written(logical) = outcome {
            tracing::trace!(?logical, "Insets applied");
        }
    }
}
