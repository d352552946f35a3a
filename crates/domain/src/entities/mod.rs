//! Domain entities

mod creature;

pub use creature::Creature;
