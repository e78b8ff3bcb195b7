//! End-to-end tests for the observer/publisher pipeline against fake hosts.

use std::cell::{Cell, RefCell};
use std::sync::Arc;

use insetbridge_common::{
    BridgeError, Edge, Insets, MarginPolicy, SurfaceError, DEFAULT_PROPERTY_PREFIX,
};

use super::*;
use crate::css::CssVariable;
use crate::events::{EventSink, WebViewEvent};

// =============================================================================
// FAKES
// =============================================================================

#[derive(Default)]
struct RecordingSurface {
    writes: RefCell<Vec<Vec<CssVariable>>>,
    gone: Cell<bool>,
    script_error: Cell<bool>,
}

impl RecordingSurface {
    fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }

    fn last_write(&self) -> Vec<CssVariable> {
        self.writes.borrow().last().cloned().unwrap_or_default()
    }

    fn value_of(&self, name: &str) -> Option<String> {
        self.last_write()
            .into_iter()
            .find(|v| v.name == name)
            .map(|v| v.value)
    }
}

impl StyleSurface for RecordingSurface {
    fn set_style_properties(&self, properties: &[CssVariable]) -> Result<(), SurfaceError> {
        if self.gone.get() {
            return Err(SurfaceError::Unavailable);
        }
        if self.script_error.get() {
            return Err(SurfaceError::Script("TypeError".into()));
        }
        self.writes.borrow_mut().push(properties.to_vec());
        Ok(())
    }
}

/// Density that can change between publishes, like a window moving displays.
struct VaryingDensity(Cell<f64>);

impl DensitySource for VaryingDensity {
    fn density(&self) -> DensityFactor {
        DensityFactor::new(self.0.get()).unwrap_or(DensityFactor::ONE)
    }
}

#[derive(Default)]
struct RecordingChrome {
    transparent_requests: usize,
    policies: Vec<MarginPolicy>,
}

impl HostChrome for RecordingChrome {
    fn request_transparent_system_bars(&mut self) {
        self.transparent_requests += 1;
    }

    fn set_margin_policy(&mut self, policy: MarginPolicy) {
        self.policies.push(policy);
    }
}

fn density(v: f64) -> DensityFactor {
    DensityFactor::new(v).unwrap()
}

fn top_only(top: u32) -> RawInsetEvent {
    RawInsetEvent {
        system_bars: Insets::new(top, 0, 0, 0),
        ..Default::default()
    }
}

fn drain(sink: &EventSink) -> Vec<WebViewEvent> {
    std::mem::take(&mut *sink.lock().unwrap())
}

// =============================================================================
// PUBLISH
// =============================================================================

#[test]
fn publish_writes_four_properties_in_order() {
    let publisher = InsetPublisher::default();
    let surface = RecordingSurface::default();

    let outcome = publisher.publish(Insets::new(63, 0, 126, 0), &surface, &density(2.625));

    assert!(matches!(
        outcome,
        PublishOutcome::Written(l) if l.top == 24 && l.bottom == 48
    ));
    let names: Vec<String> = surface.last_write().into_iter().map(|v| v.name).collect();
    assert_eq!(
        names,
        [
            "--android-safe-area-top",
            "--android-safe-area-right",
            "--android-safe-area-bottom",
            "--android-safe-area-left",
        ]
    );
    assert_eq!(
        surface.value_of("--android-safe-area-top").as_deref(),
        Some("max(env(safe-area-inset-top), 24px)")
    );
    assert_eq!(
        surface.value_of("--android-safe-area-right").as_deref(),
        Some("max(env(safe-area-inset-right), 0px)")
    );
}

#[test]
fn default_publisher_uses_shared_prefix() {
    let publisher = InsetPublisher::default();
    assert_eq!(
        publisher.property_name(Edge::Bottom),
        format!("{DEFAULT_PROPERTY_PREFIX}-bottom")
    );
}

#[test]
fn publish_uses_custom_prefix() {
    let publisher = InsetPublisher::new("--shell-safe-area");
    let surface = RecordingSurface::default();
    publisher.publish(Insets::new(30, 0, 0, 0), &surface, &density(3.0));
    assert_eq!(
        surface.value_of("--shell-safe-area-top").as_deref(),
        Some("max(env(safe-area-inset-top), 10px)")
    );
}

#[test]
fn publish_reads_density_each_time() {
    let publisher = InsetPublisher::default();
    let surface = RecordingSurface::default();
    let density = VaryingDensity(Cell::new(2.0));

    publisher.publish(Insets::new(96, 0, 0, 0), &surface, &density);
    assert_eq!(
        surface.value_of("--android-safe-area-top").as_deref(),
        Some("max(env(safe-area-inset-top), 48px)")
    );

    density.0.set(3.0);
    publisher.publish(Insets::new(96, 0, 0, 0), &surface, &density);
    assert_eq!(
        surface.value_of("--android-safe-area-top").as_deref(),
        Some("max(env(safe-area-inset-top), 32px)")
    );
}

#[test]
fn publish_to_torn_down_surface_is_discarded() {
    let publisher = InsetPublisher::default();
    let surface = RecordingSurface::default();
    surface.gone.set(true);

    let outcome = publisher.publish(Insets::new(48, 0, 0, 0), &surface, &density(3.0));
    assert_eq!(outcome, PublishOutcome::Discarded(SurfaceError::Unavailable));
    assert_eq!(surface.write_count(), 0);
}

#[test]
fn publish_to_missing_surface_slot_is_discarded() {
    let publisher = InsetPublisher::default();
    let slot: Option<RecordingSurface> = None;
    let outcome = publisher.publish(Insets::new(48, 0, 0, 0), &slot, &density(3.0));
    assert_eq!(outcome, PublishOutcome::Discarded(SurfaceError::Unavailable));
}

#[test]
fn publish_script_failure_is_swallowed() {
    let publisher = InsetPublisher::default();
    let surface = RecordingSurface::default();
    surface.script_error.set(true);
    let outcome = publisher.publish(Insets::new(48, 0, 0, 0), &surface, &density(3.0));
    assert!(matches!(
        outcome,
        PublishOutcome::Discarded(SurfaceError::Script(_))
    ));
}

#[test]
fn logical_values_match_round_of_division_for_many_inputs() {
    let publisher = InsetPublisher::default();
    for &d in &[0.75, 1.0, 1.5, 2.0, 2.625, 2.75, 3.0, 3.5, 4.0] {
        for raw in [0u32, 1, 7, 24, 63, 100, 131, 2400] {
            let surface = RecordingSurface::default();
            let outcome = publisher.publish(Insets::new(raw, raw, raw, raw), &surface, &density(d));
            let expected = (f64::from(raw) / d).round() as u32;
            match outcome {
                PublishOutcome::Written(l) => {
                    assert_eq!([l.top, l.right, l.bottom, l.left], [expected; 4]);
                }
                other => panic!("unexpected outcome {other:?}"),
            }
        }
    }
}

// =============================================================================
// OBSERVER
// =============================================================================

#[test]
fn inset_change_stores_merged_snapshot_and_publishes() {
    let mut observer = InsetObserver::new(InsetPublisher::default());
    let surface = RecordingSurface::default();
    let event = RawInsetEvent {
        system_bars: Insets::new(24, 0, 0, 0),
        display_cutout: Insets::new(40, 0, 0, 0),
        ime: Insets::new(0, 0, 0, 0),
    };

    observer.on_inset_changed(&event, &surface, &DensityFactor::ONE);

    assert_eq!(observer.latest(), Some(Insets::new(40, 0, 0, 0)));
    assert_eq!(
        surface.value_of("--android-safe-area-top").as_deref(),
        Some("max(env(safe-area-inset-top), 40px)")
    );
}

#[test]
fn snapshot_is_replaced_wholesale() {
    let mut observer = InsetObserver::new(InsetPublisher::default());
    let surface = RecordingSurface::default();

    observer.on_inset_changed(
        &RawInsetEvent {
            system_bars: Insets::new(24, 0, 48, 0),
            ..Default::default()
        },
        &surface,
        &DensityFactor::ONE,
    );
    observer.on_inset_changed(&top_only(30), &surface, &DensityFactor::ONE);

    assert_eq!(observer.latest(), Some(Insets::new(30, 0, 0, 0)));
}

#[test]
fn repeated_identical_events_write_identically() {
    let mut observer = InsetObserver::new(InsetPublisher::default());
    let surface = RecordingSurface::default();

    for _ in 0..3 {
        observer.on_inset_changed(&top_only(48), &surface, &density(3.0));
    }

    let writes = surface.writes.borrow();
    assert_eq!(writes.len(), 3);
    assert!(writes.iter().all(|w| *w == writes[0]));
}

#[test]
fn recover_before_any_event_resolves_without_writing() {
    let observer = InsetObserver::new(InsetPublisher::default());
    let surface = RecordingSurface::default();
    let resolved = Cell::new(0);

    let outcome = observer.recover(&surface, &density(3.0), || resolved.set(resolved.get() + 1));

    assert_eq!(outcome, PublishOutcome::NoSnapshot);
    assert_eq!(resolved.get(), 1);
    assert_eq!(surface.write_count(), 0);
}

#[test]
fn recover_reproduces_last_passive_publish() {
    let mut observer = InsetObserver::new(InsetPublisher::default());
    let surface = RecordingSurface::default();
    let d = density(2.625);

    observer.on_inset_changed(
        &RawInsetEvent {
            system_bars: Insets::new(63, 0, 126, 0),
            ..Default::default()
        },
        &surface,
        &d,
    );
    let passive = surface.last_write();

    let resolved = Cell::new(0);
    for _ in 0..3 {
        observer.recover(&surface, &d, || resolved.set(resolved.get() + 1));
        assert_eq!(surface.last_write(), passive);
    }
    assert_eq!(resolved.get(), 3);
    assert_eq!(surface.write_count(), 4);
}

#[test]
fn recover_on_torn_down_surface_still_resolves() {
    let mut observer = InsetObserver::new(InsetPublisher::default());
    let surface = RecordingSurface::default();
    observer.on_inset_changed(&top_only(48), &surface, &density(3.0));
    surface.gone.set(true);

    let resolved = Cell::new(false);
    let outcome = observer.recover(&surface, &density(3.0), || resolved.set(true));

    assert_eq!(outcome, PublishOutcome::Discarded(SurfaceError::Unavailable));
    assert!(resolved.get());
}

#[test]
fn attach_forwards_events_into_sink_and_consumes() {
    let mut observer = InsetObserver::new(InsetPublisher::default());
    let source = InsetEventSource::new();
    let sink: EventSink = Arc::default();

    observer.attach(&source, Arc::clone(&sink)).unwrap();
    assert!(observer.is_attached());

    assert_eq!(source.emit(top_only(48)), InsetDisposition::Consumed);
    let events = drain(&sink);
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], WebViewEvent::InsetsChanged(e) if e == top_only(48)));
}

#[test]
fn attach_twice_is_rejected() {
    let mut observer = InsetObserver::new(InsetPublisher::default());
    let source = InsetEventSource::new();
    let sink: EventSink = Arc::default();

    observer.attach(&source, Arc::clone(&sink)).unwrap();
    let err = observer.attach(&source, sink).unwrap_err();
    assert!(matches!(err, BridgeError::AlreadyAttached));
}

#[test]
fn attach_to_busy_source_is_rejected() {
    let source = InsetEventSource::new();
    let sink: EventSink = Arc::default();
    let mut first = InsetObserver::new(InsetPublisher::default());
    let mut second = InsetObserver::new(InsetPublisher::default());

    first.attach(&source, Arc::clone(&sink)).unwrap();
    let err = second.attach(&source, sink).unwrap_err();
    assert!(matches!(err, BridgeError::SourceBusy));
    assert!(!second.is_attached());
}

#[test]
fn detach_discards_snapshot_and_releases_source() {
    let mut observer = InsetObserver::new(InsetPublisher::default());
    let source = InsetEventSource::new();
    let sink: EventSink = Arc::default();
    let surface = RecordingSurface::default();

    observer.attach(&source, Arc::clone(&sink)).unwrap();
    observer.on_inset_changed(&top_only(48), &surface, &density(3.0));
    observer.detach();

    assert!(observer.latest().is_none());
    assert!(!observer.is_attached());
    assert_eq!(source.emit(top_only(48)), InsetDisposition::PassThrough);
    assert!(drain(&sink).is_empty());

    let outcome = observer.recover(&surface, &density(3.0), || {});
    assert_eq!(outcome, PublishOutcome::NoSnapshot);
}

#[test]
fn configure_host_runs_once() {
    let mut observer = InsetObserver::new(InsetPublisher::default());
    let mut chrome = RecordingChrome::default();

    observer.configure_host(&mut chrome, HostSetup::default());
    observer.configure_host(&mut chrome, HostSetup::default());

    assert_eq!(chrome.transparent_requests, 1);
    assert_eq!(chrome.policies, vec![MarginPolicy::Disabled]);
}

#[test]
fn configure_host_without_transparent_bars() {
    let mut observer = InsetObserver::new(InsetPublisher::default());
    let mut chrome = RecordingChrome::default();

    observer.configure_host(
        &mut chrome,
        HostSetup {
            transparent_system_bars: false,
            margin_policy: MarginPolicy::HostAdjusts,
        },
    );

    assert_eq!(chrome.transparent_requests, 0);
    assert_eq!(chrome.policies, vec![MarginPolicy::HostAdjusts]);
}

// =============================================================================
// SCENARIO
// =============================================================================

/// Surface created -> host configured once -> first event -> property written;
/// then the content reloads and asks to recover.
#[test]
fn surface_lifecycle_scenario() {
    let source = InsetEventSource::new();
    let sink: EventSink = Arc::default();
    let surface = RecordingSurface::default();
    let mut chrome = RecordingChrome::default();
    let d = density(3.0);

    let mut observer = InsetObserver::new(InsetPublisher::default());
    observer.configure_host(&mut chrome, HostSetup::default());
    observer.attach(&source, Arc::clone(&sink)).unwrap();
    assert_eq!(chrome.transparent_requests, 1);
    assert_eq!(chrome.policies, vec![MarginPolicy::Disabled]);

    // Content initialises before the host has reported anything.
    let early = Cell::new(false);
    observer.recover(&surface, &d, || early.set(true));
    assert!(early.get());
    assert_eq!(surface.write_count(), 0);

    // Host reports from its own thread; the UI loop drains and applies.
    let host = source.clone();
    std::thread::spawn(move || host.emit(top_only(48))).join().unwrap();
    for event in drain(&sink) {
        if let WebViewEvent::InsetsChanged(raw) = event {
            observer.on_inset_changed(&raw, &surface, &d);
        }
    }
    assert_eq!(
        surface.value_of("--android-safe-area-top").as_deref(),
        Some("max(env(safe-area-inset-top), 16px)")
    );

    // Reload: content asks again and gets the same values.
    let before = surface.last_write();
    let resolved = Cell::new(false);
    observer.recover(&surface, &d, || resolved.set(true));
    assert!(resolved.get());
    assert_eq!(surface.last_write(), before);
    assert_eq!(chrome.transparent_requests, 1);
}
