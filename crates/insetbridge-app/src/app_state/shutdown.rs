//! Teardown of the inset pipeline and the content surface.

use super::core::InsetBridgeApp;

impl InsetBridgeApp {
    /// Tear down in dependency order.
    ///
    /// The observer unsubscribes first so no further host events are
    /// queued; anything still queued is then published to a missing
    /// surface and dropped.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating shutdown");

        self.observer.detach();
        self.surface = None;
        self.should_exit = true;

        let dropped = self.webviews.drain_events().len();
        if dropped > 0 {
            tracing::debug!(dropped, "Discarded pending events");
        }

        tracing::info!("Shutdown complete");
    }
}

#[cfg(test)]
mod tests {
    use crate::app_state::core::InsetBridgeApp;
    use insetbridge_config::InsetBridgeConfig;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = InsetBridgeApp::new(InsetBridgeConfig::default());
        app.shutdown();
        assert!(app.should_exit);
        assert!(app.surface.is_none());
        assert!(!app.observer.is_attached());
    }

    #[test]
    fn shutdown_detaches_observer() {
        let mut app = InsetBridgeApp::new(InsetBridgeConfig::default());
        app.observer
            .attach(&app.inset_source, app.webviews.event_sink())
            .unwrap();
        assert!(app.inset_source.has_subscriber());

        app.shutdown();
        assert!(!app.inset_source.has_subscriber());
        assert!(app.observer.latest().is_none());
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = InsetBridgeApp::new(InsetBridgeConfig::default());
        app.shutdown();
        app.shutdown();
        assert!(app.should_exit);
    }
}
