//! Snapshot bus for roster change notifications
//!
//! Push-based: subscribers register callbacks that are invoked with the
//! full roster snapshot after each mutation. The bus holds strong
//! references to subscribers, so they persist until the bus is dropped.
//!
//! Dispatch is synchronous and runs in registration order, on the thread
//! performing the mutation, before the mutating call returns. The whole
//! tracker is single-threaded by design, so there is no locking here.

use tracing::debug;

use crate::snapshot::RosterSnapshot;

type SnapshotListener = Box<dyn FnMut(&RosterSnapshot)>;

/// Subscriber list for roster snapshots.
#[derive(Default)]
pub struct SnapshotBus {
    subscribers: Vec<SnapshotListener>,
}

impl SnapshotBus {
    /// Create a new bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to all roster changes.
    ///
    /// The callback will be invoked for every mutation with the full
    /// current snapshot.
    pub fn subscribe(&mut self, callback: impl FnMut(&RosterSnapshot) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Dispatch a snapshot to all subscribers, in registration order.
    pub fn dispatch(&mut self, snapshot: &RosterSnapshot) {
        debug!(
            subscribers = self.subscribers.len(),
            players = snapshot.player_count,
            enemies = snapshot.enemy_count,
            "dispatching roster snapshot"
        );
        for subscriber in self.subscribers.iter_mut() {
            subscriber(snapshot);
        }
    }

    /// Get the number of subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Clear all subscribers.
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }
}
