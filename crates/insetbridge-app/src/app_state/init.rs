//! Window creation, host chrome setup, and content surface creation.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use insetbridge_webview::safe_area::HostSetup;
use insetbridge_webview::WebViewConfig;

use super::core::InsetBridgeApp;
use super::host::{content_bounds, emulated_insets};

impl InsetBridgeApp {
    /// Configure the chrome, create the window, and build the WebView.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let setup = HostSetup {
            transparent_system_bars: self.config.safe_area.transparent_system_bars,
            margin_policy: self.config.edge_to_edge.margin_policy(),
        };
        self.observer.configure_host(&mut self.chrome, setup);

        let surface = &self.config.surface;
        let attrs = WindowAttributes::default()
            .with_title(surface.title.clone())
            .with_transparent(self.chrome.transparent_bars)
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(surface.width),
                f64::from(surface.height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let size = window.inner_size();
        let bars = emulated_insets(&self.config.emulation, window.scale_factor()).system_bars;
        let bounds = content_bounds(size.width, size.height, self.chrome.policy(), bars);

        let webview_config = WebViewConfig {
            url: surface.url.clone(),
            html: surface.html.clone(),
            transparent: self.chrome.transparent_bars,
            devtools: surface.devtools,
            user_agent: surface.user_agent.clone(),
        };

        match self.webviews.create(window.as_ref(), bounds, webview_config) {
            Ok(handle) => {
                tracing::info!(url = %handle.current_url(), "Content surface created");
                self.surface = Some(handle);
            }
            Err(e) => {
                tracing::error!("Failed to create WebView: {e}");
                return false;
            }
        }

        self.window = Some(window);
        self.attach_observer();
        true
    }

    /// Subscribe the observer to host inset events, if enabled.
    fn attach_observer(&mut self) {
        if !self.config.safe_area.enabled {
            tracing::info!("Safe-area publishing disabled by config");
            return;
        }
        if let Err(e) = self
            .observer
            .attach(&self.inset_source, self.webviews.event_sink())
        {
            tracing::warn!("Inset observer not attached: {e}");
        }
    }
}
