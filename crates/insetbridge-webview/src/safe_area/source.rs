//! Single-subscriber inset event source.
//!
//! Models the host's "apply window insets" listener slot: at most one
//! listener, whose return value tells the host whether the event was
//! consumed. A consumed event suppresses the host's default inset handling.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use insetbridge_common::{BridgeError, Result};
use tracing::trace;

use super::types::RawInsetEvent;

/// Listener verdict returned to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsetDisposition {
    /// Handled; the host must not apply its own inset layout.
    Consumed,
    /// Not handled; the host applies its default behaviour.
    PassThrough,
}

pub type InsetListener = Box<dyn FnMut(&RawInsetEvent) -> InsetDisposition + Send>;

type Slot = Mutex<Option<InsetListener>>;

fn lock(slot: &Slot) -> MutexGuard<'_, Option<InsetListener>> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Host-side inset event source. Cheap to clone; clones share the slot.
#[derive(Clone, Default)]
pub struct InsetEventSource {
    slot: Arc<Slot>,
}

impl InsetEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `listener` as the sole subscriber.
    ///
    /// Fails with [`BridgeError::SourceBusy`] while another subscription is live.
    pub fn subscribe(&self, listener: InsetListener) -> Result<InsetSubscription> {
        let mut slot = lock(&self.slot);
        if slot.is_some() {
            return Err(BridgeError::SourceBusy);
        }
        *slot = Some(listener);
        Ok(InsetSubscription {
            slot: Arc::downgrade(&self.slot),
        })
    }

    /// Deliver an event to the subscriber, if any.
    ///
    /// May be called from any thread.
    pub fn emit(&self, event: RawInsetEvent) -> InsetDisposition {
        let mut slot = lock(&self.slot);
        match slot.as_mut() {
            Some(listener) => listener(&event),
            None => {
                trace!(?event, "inset event with no subscriber");
                InsetDisposition::PassThrough
            }
        }
    }

    pub fn has_subscriber(&self) -> bool {
        lock(&self.slot).is_some()
    }
}

impl fmt::Debug for InsetEventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsetEventSource")
            .field("has_subscriber", &self.has_subscriber())
            .finish()
    }
}

/// Live subscription; dropping it frees the source for a new subscriber.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct InsetSubscription {
    slot: Weak<Slot>,
}

impl fmt::Debug for InsetSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsetSubscription")
            .field("source_alive", &(self.slot.strong_count() > 0))
            .finish()
    }
}

impl Drop for InsetSubscription {
    fn drop(&mut self) {
        if let Some(slot) = self.slot.upgrade() {
            lock(&slot).take();
        }
    }
}
