//! The inbound message channel.
//!
//! Host-side analog of a page's message listener table. Listeners run in
//! registration order, each to completion per delivery. Every
//! registration is owned by an explicit [`Subscription`] handle;
//! unsubscribing (or dropping the handle) detaches the listener, so
//! nothing leaks past component teardown.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::message::MessageEnvelope;

type Listener = Arc<dyn Fn(&MessageEnvelope) + Send + Sync>;
type ListenerTable = Arc<Mutex<BTreeMap<u64, Listener>>>;

/// Identifier of one registration on a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(pub u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// A channel delivering cross-document message envelopes to listeners.
pub struct MessageChannel {
    listeners: ListenerTable,
    next_id: AtomicU64,
}

impl MessageChannel {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register a listener. The returned handle owns the registration;
    /// keep it alive for as long as the listener should receive messages.
    pub fn subscribe(
        &self,
        listener: impl Fn(&MessageEnvelope) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut table) = self.listeners.lock() {
            table.insert(id, Arc::new(listener));
        }
        debug!(subscription = %SubscriptionId(id), "listener subscribed");
        Subscription {
            id,
            listeners: Arc::clone(&self.listeners),
        }
    }

    /// Deliver one envelope to every current listener, in registration
    /// order, each run to completion. Returns how many listeners ran.
    ///
    /// The listener table is snapshotted before any listener runs, so a
    /// listener may subscribe or unsubscribe reentrantly; such changes
    /// take effect from the next delivery.
    pub fn deliver(&self, envelope: &MessageEnvelope) -> usize {
        let snapshot: Vec<Listener> = match self.listeners.lock() {
            Ok(table) => table.values().cloned().collect(),
            Err(_) => return 0,
        };
        for listener in &snapshot {
            listener(envelope);
        }
        snapshot.len()
    }

    /// How many listeners are currently registered.
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().map(|t| t.len()).unwrap_or(0)
    }
}

impl Default for MessageChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to one registered listener.
///
/// Call [`Subscription::unsubscribe`] at component teardown; dropping the
/// handle detaches the listener as well.
pub struct Subscription {
    id: u64,
    listeners: ListenerTable,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        SubscriptionId(self.id)
    }

    /// Remove the listener from the channel.
    pub fn unsubscribe(self) {
        self.detach();
    }

    fn detach(&self) {
        if let Ok(mut table) = self.listeners.lock() {
            if table.remove(&self.id).is_some() {
                debug!(subscription = %SubscriptionId(self.id), "listener unsubscribed");
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope() -> MessageEnvelope {
        MessageEnvelope::new("https://docs.example.org", json!({ "height": 250 }))
    }

    #[test]
    fn delivers_to_subscribed_listener() {
        let channel = MessageChannel::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let _sub = channel.subscribe(move |env| {
            sink.lock().unwrap().push(env.origin.clone());
        });

        let count = channel.deliver(&envelope());
        assert_eq!(count, 1);
        assert_eq!(seen.lock().unwrap().as_slice(), ["https://docs.example.org"]);
    }

    #[test]
    fn deliver_with_no_listeners_returns_zero() {
        let channel = MessageChannel::new();
        assert_eq!(channel.deliver(&envelope()), 0);
    }

    #[test]
    fn delivers_in_registration_order() {
        let channel = MessageChannel::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let a = Arc::clone(&order);
        let _sub_a = channel.subscribe(move |_| a.lock().unwrap().push("a"));
        let b = Arc::clone(&order);
        let _sub_b = channel.subscribe(move |_| b.lock().unwrap().push("b"));
        let c = Arc::clone(&order);
        let _sub_c = channel.subscribe(move |_| c.lock().unwrap().push("c"));

        channel.deliver(&envelope());
        assert_eq!(order.lock().unwrap().as_slice(), ["a", "b", "c"]);
    }

    #[test]
    fn unsubscribe_detaches_listener() {
        let channel = MessageChannel::new();
        let hits = Arc::new(Mutex::new(0u32));

        let sink = Arc::clone(&hits);
        let sub = channel.subscribe(move |_| *sink.lock().unwrap() += 1);

        channel.deliver(&envelope());
        sub.unsubscribe();
        channel.deliver(&envelope());

        assert_eq!(*hits.lock().unwrap(), 1);
        assert_eq!(channel.listener_count(), 0);
    }

    #[test]
    fn dropping_handle_detaches_listener() {
        let channel = MessageChannel::new();
        let hits = Arc::new(Mutex::new(0u32));

        {
            let sink = Arc::clone(&hits);
            let _sub = channel.subscribe(move |_| *sink.lock().unwrap() += 1);
            channel.deliver(&envelope());
        }

        channel.deliver(&envelope());
        assert_eq!(*hits.lock().unwrap(), 1);
    }

    #[test]
    fn reentrant_unsubscribe_during_delivery_is_safe() {
        let channel = Arc::new(MessageChannel::new());
        let parked: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        let slot = Arc::clone(&parked);
        let sub = channel.subscribe(move |_| {
            // Detach ourselves from inside the listener.
            if let Some(own) = slot.lock().unwrap().take() {
                own.unsubscribe();
            }
        });
        *parked.lock().unwrap() = Some(sub);

        assert_eq!(channel.deliver(&envelope()), 1);
        assert_eq!(channel.listener_count(), 0);
        assert_eq!(channel.deliver(&envelope()), 0);
    }

    #[test]
    fn subscription_ids_are_distinct_and_ordered() {
        let channel = MessageChannel::new();
        let a = channel.subscribe(|_| {});
        let b = channel.subscribe(|_| {});
        assert!(a.id() < b.id());
        assert_eq!(a.id().to_string(), "sub-1");
    }
}
