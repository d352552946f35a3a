//! Application composition root
//!
//! Owns the roster store and the notes service. The view layer holds an
//! `App`, subscribes to the store, and calls the store/notes methods for
//! every user action. There are no ambient globals: everything hangs off
//! this explicitly constructed value.

use std::sync::Arc;

use crate::infrastructure::storage::FileStorageProvider;
use crate::notes::NotesService;
use crate::ports::outbound::StorageProvider;
use crate::seed::seed_example_battle;
use crate::snapshot::RosterSnapshot;
use crate::store::RosterStore;

/// The assembled battle tracker.
pub struct App {
    store: RosterStore,
    notes: NotesService,
}

impl App {
    /// Assemble a tracker over the given storage backend.
    pub fn new(storage: Arc<dyn StorageProvider>) -> Self {
        Self {
            store: RosterStore::new(),
            notes: NotesService::new(storage),
        }
    }

    /// Assemble a tracker with file-backed notes at the platform config
    /// location.
    pub fn with_file_storage() -> Self {
        Self::new(Arc::new(FileStorageProvider::new()))
    }

    /// Seed the example battle (when empty) and hand back the initial
    /// snapshot for the first render.
    ///
    /// The snapshot is returned directly rather than relying on the
    /// seeding notifications, so callers can render the initial state even
    /// if they subscribe afterwards.
    pub fn init(&mut self) -> RosterSnapshot {
        seed_example_battle(&mut self.store);
        self.store.snapshot()
    }

    /// The roster store (mutable - all roster operations go through it).
    pub fn store(&mut self) -> &mut RosterStore {
        &mut self.store
    }

    /// Read-only access to the roster store.
    pub fn store_ref(&self) -> &RosterStore {
        &self.store
    }

    /// The notes sidecar.
    pub fn notes(&self) -> &NotesService {
        &self.notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryStorageProvider;

    fn app() -> App {
        App::new(Arc::new(InMemoryStorageProvider::new()))
    }

    #[test]
    fn init_seeds_and_returns_initial_snapshot() {
        let mut app = app();
        let snapshot = app.init();
        assert_eq!(snapshot.player_count, 1);
        assert_eq!(snapshot.enemy_count, 2);
    }

    #[test]
    fn init_is_idempotent() {
        let mut app = app();
        app.init();
        let snapshot = app.init();
        assert_eq!(snapshot.player_count, 1);
        assert_eq!(snapshot.enemy_count, 2);
    }

    #[test]
    fn notes_are_reachable_through_the_app() {
        let app = app();
        app.notes().save("session 1");
        assert_eq!(app.notes().load().as_deref(), Some("session 1"));
    }
}
