//! Inset observer: owns the latest snapshot and drives publication.

use insetbridge_common::{BridgeError, MarginPolicy, Result};
use tracing::{debug, info, trace, warn};

use crate::events::{push_event, EventSink, WebViewEvent};

use super::host::{DensitySource, HostChrome, HostSetup, Responder, StyleSurface};
use super::publisher::{InsetPublisher, PublishOutcome};
use super::source::{InsetDisposition, InsetEventSource, InsetSubscription};
use super::types::{InsetSnapshot, RawInsetEvent};

/// Per-surface inset state.
///
/// Lives on the surface's owning thread. Host notifications reach it through
/// the event sink, so passive updates and recover requests are applied in
/// one serialized order.
#[derive(Debug)]
pub struct InsetObserver {
    publisher: InsetPublisher,
    latest: Option<InsetSnapshot>,
    subscription: Option<InsetSubscription>,
    host_configured: bool,
}

impl InsetObserver {
    pub fn new(publisher: InsetPublisher) -> Self {
        Self {
            publisher,
            latest: None,
            subscription: None,
            host_configured: false,
        }
    }

    /// Most recent merged snapshot, if any event has arrived since attach.
    pub fn latest(&self) -> Option<InsetSnapshot> {
        self.latest
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Apply the one-time host chrome setup. Later calls do nothing.
    pub fn configure_host(&mut self, chrome: &mut dyn HostChrome, setup: HostSetup) {
        if self.host_configured {
            debug!("host chrome already configured");
            return;
        }
        self.host_configured = true;

        if setup.transparent_system_bars {
            chrome.request_transparent_system_bars();
        }
        chrome.set_margin_policy(setup.margin_policy);
        if setup.margin_policy == MarginPolicy::HostAdjusts {
            warn!("host margin adjustment is on; safe-area insets may be applied twice");
        }
        info!(
            transparent_system_bars = setup.transparent_system_bars,
            margin_policy = ?setup.margin_policy,
            "host chrome configured"
        );
    }

    /// Subscribe to `source`, forwarding every event into `sink`.
    ///
    /// Events are claimed as consumed so the host skips its own inset layout.
    pub fn attach(&mut self, source: &InsetEventSource, sink: EventSink) -> Result<()> {
        if self.subscription.is_some() {
            return Err(BridgeError::AlreadyAttached);
        }
        let subscription = source.subscribe(Box::new(move |event: &RawInsetEvent| {
            trace!(?event, "inset event queued");
            push_event(&sink, WebViewEvent::InsetsChanged(*event));
            InsetDisposition::Consumed
        }))?;
        self.subscription = Some(subscription);
        info!("inset observer attached");
        Ok(())
    }

    /// Unsubscribe and discard the snapshot. Called on surface teardown.
    pub fn detach(&mut self) {
        if self.subscription.take().is_some() {
            info!("inset observer detached");
        }
        self.latest = None;
    }

    /// Merge, store, and immediately publish a host notification.
    pub fn on_inset_changed(
        &mut self,
        event: &RawInsetEvent,
        surface: &dyn StyleSurface,
        density: &dyn DensitySource,
    ) -> PublishOutcome {
        let snapshot = event.merged();
        self.latest = Some(snapshot);
        self.publisher.publish(snapshot, surface, density)
    }

    /// Handle the content's explicit re-publish request.
    pub fn recover(
        &self,
        surface: &dyn StyleSurface,
        density: &dyn DensitySource,
        responder: impl Responder,
    ) -> PublishOutcome {
        self.publisher
            .recover(self.latest, surface, density, responder)
    }
}
