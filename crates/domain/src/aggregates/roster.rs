//! Roster aggregate - the full set of currently tracked creatures
//!
//! Two insertion-ordered collections (players, enemies). No creature spans
//! both: a record always lives in the collection matching its `side`, which
//! is enforced structurally because `add` derives the collection from the
//! creature itself.

use serde::{Deserialize, Serialize};

use crate::entities::Creature;
use crate::events::HpUpdateOutcome;
use crate::ids::CreatureId;
use crate::value_objects::Side;

/// The authoritative creature collections, partitioned by side.
///
/// Insertion order is preserved for display purposes. All mutating
/// operations report what happened (found / not found, changed /
/// unchanged) so the owning store can notify subscribers only on actual
/// mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    players: Vec<Creature>,
    enemies: Vec<Creature>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Players in insertion order.
    #[inline]
    pub fn players(&self) -> &[Creature] {
        &self.players
    }

    /// Enemies in insertion order.
    #[inline]
    pub fn enemies(&self) -> &[Creature] {
        &self.enemies
    }

    /// The collection for one side, in insertion order.
    pub fn side(&self, side: Side) -> &[Creature] {
        match side {
            Side::Player => &self.players,
            Side::Enemy => &self.enemies,
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.enemies.is_empty()
    }

    /// Look up a creature by id across both collections.
    pub fn find(&self, id: CreatureId) -> Option<&Creature> {
        self.players
            .iter()
            .chain(self.enemies.iter())
            .find(|c| c.id() == id)
    }

    /// Look up a creature by id within one side.
    pub fn find_in(&self, id: CreatureId, side: Side) -> Option<&Creature> {
        self.side(side).iter().find(|c| c.id() == id)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a creature to the collection matching its side.
    ///
    /// The creature is valid by construction, so the roster never stores a
    /// record violating the data-model invariants. Returns the appended
    /// record's id.
    pub fn add(&mut self, creature: Creature) -> CreatureId {
        let id = creature.id();
        let side = creature.side();
        self.collection_mut(side).push(creature);
        id
    }

    /// Remove the matching record from the `side` collection.
    ///
    /// Returns the removed creature, or `None` (no mutation) if the id is
    /// not present on that side.
    pub fn remove(&mut self, id: CreatureId, side: Side) -> Option<Creature> {
        let collection = self.collection_mut(side);
        let index = collection.iter().position(|c| c.id() == id)?;
        Some(collection.remove(index))
    }

    /// Copy the record found in `side` into a fresh full-health creature
    /// appended to the same collection.
    ///
    /// Returns the new record's id, or `None` (no mutation) if the source
    /// id is not present on that side.
    pub fn duplicate(&mut self, id: CreatureId, side: Side) -> Option<CreatureId> {
        let copy = self.find_in(id, side)?.duplicated();
        let new_id = copy.id();
        self.collection_mut(side).push(copy);
        Some(new_id)
    }

    /// Write a creature's current HP, searching both collections.
    ///
    /// The value is clamped into `[0, max HP]`; the outcome reports whether
    /// the record was found and whether the stored value changed.
    pub fn update_hp(&mut self, id: CreatureId, new_hp: i32) -> HpUpdateOutcome {
        let creature = self
            .players
            .iter_mut()
            .chain(self.enemies.iter_mut())
            .find(|c| c.id() == id);

        match creature {
            Some(creature) => HpUpdateOutcome::Updated {
                id,
                change: creature.set_current_hp(new_hp),
            },
            None => HpUpdateOutcome::NotFound,
        }
    }

    /// Unconditionally empty both collections.
    ///
    /// Returns the number of records dropped (which may be 0).
    pub fn clear(&mut self) -> usize {
        let dropped = self.players.len() + self.enemies.len();
        self.players.clear();
        self.enemies.clear();
        dropped
    }

    fn collection_mut(&mut self, side: Side) -> &mut Vec<Creature> {
        match side {
            Side::Player => &mut self.players,
            Side::Enemy => &mut self.enemies,
        }
    }
}
