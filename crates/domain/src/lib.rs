//! BtlTrkr Domain - Core domain types, value objects, and invariants
//!
//! The pure state model of the battle tracker: validated creature records,
//! the roster aggregate that owns them, and the mutation-outcome events
//! the application layer turns into subscriber notifications.
//!
//! No I/O, no logging, no async - those concerns live in `btltrkr-tracker`.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::Roster;
pub use entities::Creature;
pub use error::DomainError;
pub use events::{HpChange, HpUpdateOutcome};
pub use ids::CreatureId;
pub use value_objects::{ArmorClass, CreatureName, HealthBand, HitPoints, Side};
