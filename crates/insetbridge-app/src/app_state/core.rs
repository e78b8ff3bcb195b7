//! InsetBridgeApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use insetbridge_config::InsetBridgeConfig;
use insetbridge_webview::safe_area::{InsetEventSource, InsetObserver, InsetPublisher};
use insetbridge_webview::{WebViewHandle, WebViewManager};

use super::host::DesktopChrome;

/// Top-level application state.
pub struct InsetBridgeApp {
    pub(super) config: InsetBridgeConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) chrome: DesktopChrome,

    // Content surface; `None` before creation and after teardown
    pub(super) webviews: WebViewManager,
    pub(super) surface: Option<WebViewHandle>,

    // Safe-area pipeline
    pub(super) inset_source: InsetEventSource,
    pub(super) observer: InsetObserver,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl InsetBridgeApp {
    pub fn new(config: InsetBridgeConfig) -> Self {
        let publisher = InsetPublisher::new(config.safe_area.property_prefix.clone());
        Self {
            config,
            window: None,
            chrome: DesktopChrome::default(),
            webviews: WebViewManager::new(),
            surface: None,
            inset_source: InsetEventSource::new(),
            observer: InsetObserver::new(publisher),
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
