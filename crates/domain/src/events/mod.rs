//! Domain Events
//!
//! Return types from aggregate mutations, communicating what happened
//! when state was modified. The tracker layer maps these to subscriber
//! notifications at its boundary.

pub mod roster_events;

pub use roster_events::*;
