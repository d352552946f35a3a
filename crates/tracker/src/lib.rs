//! BtlTrkr Tracker - Observable roster store, notes sidecar, and
//! composition root
//!
//! The application layer of the battle tracker. A view binding (out of
//! scope here) holds an [`App`], subscribes to the [`RosterStore`], calls
//! its operations for every user action, and re-renders the full roster
//! from each [`RosterSnapshot`] notification.

pub mod app;
pub mod bus;
pub mod infrastructure;
pub mod notes;
pub mod ports;
pub mod seed;
pub mod snapshot;
pub mod store;

#[cfg(test)]
mod e2e_tests;

pub use app::App;
pub use bus::SnapshotBus;
pub use infrastructure::storage::{FileStorageProvider, InMemoryStorageProvider};
pub use notes::{NotesService, NOTES_STORAGE_KEY};
pub use ports::outbound::StorageProvider;
pub use seed::seed_example_battle;
pub use snapshot::{CreatureView, RosterSnapshot};
pub use store::{NewCreature, RosterStore};

// Re-export the domain surface callers need alongside the store
pub use btltrkr_domain::{
    ArmorClass, Creature, CreatureId, CreatureName, DomainError, HealthBand, HitPoints, Roster,
    Side,
};
