//! Example battle seed
//!
//! When the tracker starts with an empty roster it is pre-populated with a
//! small example encounter so the UI has something to show: one player
//! ("Knight", HP 60, AC 16) and two enemies ("Zombie", HP 30, AC 10 each).
//! These exact values are part of the interface-compatibility contract.

use tracing::error;

use btltrkr_domain::Side;

use crate::store::{NewCreature, RosterStore};

/// One seeded creature: (name, max HP, armor class, side).
const EXAMPLE_CREATURES: [(&str, i32, i32, Side); 3] = [
    ("Knight", 60, 16, Side::Player),
    ("Zombie", 30, 10, Side::Enemy),
    ("Zombie", 30, 10, Side::Enemy),
];

/// Populate the example encounter if - and only if - the roster is empty.
///
/// Returns whether anything was seeded. Each added creature notifies
/// subscribers as usual.
pub fn seed_example_battle(store: &mut RosterStore) -> bool {
    if !store.roster().is_empty() {
        return false;
    }

    for (name, max_hp, armor_class, side) in EXAMPLE_CREATURES {
        // Seed values are known-valid; a rejection here is a bug worth hearing about.
        if let Err(e) = store.add_creature(NewCreature::new(name, max_hp, armor_class), side) {
            error!("Example creature '{}' rejected: {}", name, e);
        }
    }
    true
}
