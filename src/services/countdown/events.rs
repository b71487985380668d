//! Change notifications for the countdown store.

use crate::models::countdown::CountdownId;

/// A change that has already been applied to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// The collection was replaced from persisted state
    Loaded { count: usize },
    Added(CountdownId),
    Updated(CountdownId),
    Removed(Vec<CountdownId>),
    PremiumChanged(bool),
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type StoreListener = Box<dyn FnMut(&StoreEvent)>;

/// Registered listeners, called in subscription order.
#[derive(Default)]
pub(super) struct Subscribers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, StoreListener)>,
}

impl Subscribers {
    pub(super) fn subscribe(&mut self, listener: StoreListener) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.listeners.push((id, listener));
        id
    }

    pub(super) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub(super) fn notify(&mut self, event: &StoreEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}
