//! The observable roster store
//!
//! Sole owner of the authoritative creature collections; single point of
//! mutation; single source of change notifications. Every mutating call
//! that actually changes state (plus `clear`, which always counts) emits
//! exactly one notification carrying the full current snapshot, delivered
//! synchronously before the call returns.

use tracing::debug;

use btltrkr_domain::{
    ArmorClass, Creature, CreatureId, CreatureName, DomainError, HitPoints, HpChange,
    HpUpdateOutcome, Roster, Side,
};

use crate::bus::SnapshotBus;
use crate::snapshot::RosterSnapshot;

/// Raw input for adding a creature, as collected from a form.
///
/// Validation happens when the store turns these fields into domain value
/// objects; the store never stores a record violating the data-model
/// invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCreature {
    name: String,
    max_hp: i32,
    armor_class: i32,
    current_hp: Option<i32>,
}

impl NewCreature {
    pub fn new(name: impl Into<String>, max_hp: i32, armor_class: i32) -> Self {
        Self {
            name: name.into(),
            max_hp,
            armor_class,
            current_hp: None,
        }
    }

    /// Supply an explicit current HP (clamped into range on add) instead
    /// of defaulting to max.
    pub fn with_current_hp(mut self, current_hp: i32) -> Self {
        self.current_hp = Some(current_hp);
        self
    }
}

/// Observable state container for the battle roster.
///
/// Owned by the application's top-level composition point; there are no
/// ambient globals. Single-threaded by design - dispatch happens on the
/// thread performing the mutation.
#[derive(Default)]
pub struct RosterStore {
    roster: Roster,
    bus: SnapshotBus,
}

impl RosterStore {
    /// Create an empty store with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    /// Register a callback invoked with the full snapshot after each
    /// mutation, in registration order, before the mutating call returns.
    pub fn subscribe(&mut self, callback: impl FnMut(&RosterSnapshot) + 'static) {
        self.bus.subscribe(callback);
    }

    pub fn subscriber_count(&self) -> usize {
        self.bus.subscriber_count()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Read-only view of the current state.
    ///
    /// Never mutates; safe to call at any time. The notification payload
    /// is this same full snapshot.
    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot::capture(&self.roster)
    }

    /// Direct read access to the underlying aggregate.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Validate the input, construct a creature at full health (or at the
    /// supplied current HP, clamped), and append it to the `side`
    /// collection.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for an empty name, a
    /// non-positive max HP, or a negative armor class. On error there is
    /// no state change and no notification.
    pub fn add_creature(&mut self, input: NewCreature, side: Side) -> Result<CreatureId, DomainError> {
        let name = CreatureName::new(input.name)?;
        let hit_points = match input.current_hp {
            Some(current) => HitPoints::with_current(input.max_hp, current)?,
            None => HitPoints::new(input.max_hp)?,
        };
        let armor_class = ArmorClass::new(input.armor_class)?;

        let creature = Creature::new(name, hit_points, armor_class, side);
        let id = self.roster.add(creature);

        debug!(%id, %side, "creature added");
        self.publish();
        Ok(id)
    }

    /// Remove the matching record from the `side` collection.
    ///
    /// Returns whether a record was found. Notifies only if a removal
    /// occurred; removing an unknown id is a silent no-op.
    pub fn remove_creature(&mut self, id: CreatureId, side: Side) -> bool {
        match self.roster.remove(id, side) {
            Some(_) => {
                debug!(%id, %side, "creature removed");
                self.publish();
                true
            }
            None => {
                debug!(%id, %side, "remove ignored: creature not found");
                false
            }
        }
    }

    /// Copy the record found in `side` into a fresh full-health creature.
    ///
    /// Returns the new record's id. A missing source id is a silent no-op
    /// with no notification.
    pub fn duplicate_creature(&mut self, id: CreatureId, side: Side) -> Option<CreatureId> {
        match self.roster.duplicate(id, side) {
            Some(new_id) => {
                debug!(source = %id, new = %new_id, %side, "creature duplicated");
                self.publish();
                Some(new_id)
            }
            None => {
                debug!(%id, %side, "duplicate ignored: creature not found");
                None
            }
        }
    }

    /// Write a creature's current HP, clamped into `[0, max HP]`. The
    /// caller does not need to know the side; both collections are
    /// searched.
    ///
    /// Returns whether a record was found; notifies when found.
    pub fn update_hp(&mut self, id: CreatureId, new_hp: i32) -> bool {
        match self.roster.update_hp(id, new_hp) {
            HpUpdateOutcome::Updated { id, change } => {
                match change {
                    HpChange::Changed { from, to } => debug!(%id, from, to, "hp updated"),
                    HpChange::Unchanged { value } => debug!(%id, value, "hp write left value unchanged"),
                }
                self.publish();
                true
            }
            HpUpdateOutcome::NotFound => {
                debug!(%id, "hp update ignored: creature not found");
                false
            }
        }
    }

    /// Parse a raw HP edit (as read from an input field) and apply it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Parse` if the text is not an integer; the
    /// invalid edit does not mutate state and does not notify.
    pub fn update_hp_input(&mut self, id: CreatureId, raw: &str) -> Result<bool, DomainError> {
        let value: i32 = raw
            .trim()
            .parse()
            .map_err(|_| DomainError::parse(format!("Invalid HP value: '{}'", raw)))?;
        Ok(self.update_hp(id, value))
    }

    /// Empty both collections unconditionally.
    ///
    /// Always notifies, even when the roster was already empty.
    pub fn clear(&mut self) {
        let dropped = self.roster.clear();
        debug!(dropped, "battle cleared");
        self.publish();
    }

    fn publish(&mut self) {
        let snapshot = RosterSnapshot::capture(&self.roster);
        self.bus.dispatch(&snapshot);
    }
}
