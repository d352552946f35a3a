//! Creature entity - a tracked combatant
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: all fields are encapsulated
//! - **Newtypes**: `CreatureName`, `HitPoints`, `ArmorClass` for validated values
//! - **Valid by construction**: `new()` takes pre-validated types
//!
//! Identity (`id`) and the `name`/`max HP`/`armor class`/`side` attributes
//! are fixed at creation; only current HP is mutable.

use serde::{Deserialize, Serialize};

use crate::events::HpChange;
use crate::ids::CreatureId;
use crate::value_objects::{ArmorClass, CreatureName, HealthBand, HitPoints, Side};

/// A tracked combatant (player or enemy) with HP and armor class.
///
/// # Invariants
///
/// - `name` is always non-empty (enforced by `CreatureName`)
/// - `0 <= current HP <= max HP`, `max HP > 0` (enforced by `HitPoints`)
/// - `armor class >= 0` (enforced by `ArmorClass`)
///
/// # Example
///
/// ```
/// use btltrkr_domain::entities::Creature;
/// use btltrkr_domain::value_objects::{ArmorClass, CreatureName, HitPoints, Side};
///
/// let knight = Creature::new(
///     CreatureName::new("Knight").unwrap(),
///     HitPoints::new(60).unwrap(),
///     ArmorClass::new(16).unwrap(),
///     Side::Player,
/// );
///
/// assert_eq!(knight.name().as_str(), "Knight");
/// assert_eq!(knight.current_hp(), 60);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    // Identity
    id: CreatureId,

    // Fixed attributes (newtypes)
    name: CreatureName,
    armor_class: ArmorClass,
    side: Side,

    // Mutable state
    hit_points: HitPoints,
}

impl Creature {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a new creature at full health with a fresh id.
    ///
    /// All parameters are pre-validated newtypes - validation happens when
    /// creating them, not here.
    pub fn new(name: CreatureName, hit_points: HitPoints, armor_class: ArmorClass, side: Side) -> Self {
        Self {
            id: CreatureId::new(),
            name,
            armor_class,
            side,
            hit_points,
        }
    }

    /// Copy this creature into a fresh record: new id, full health, same
    /// name, max HP, armor class, and side.
    ///
    /// The source's current HP is deliberately not carried over.
    pub fn duplicated(&self) -> Self {
        let mut hit_points = self.hit_points;
        hit_points.restore_full();
        Self {
            id: CreatureId::new(),
            name: self.name.clone(),
            armor_class: self.armor_class,
            side: self.side,
            hit_points,
        }
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    /// Returns the creature's unique identifier.
    #[inline]
    pub fn id(&self) -> CreatureId {
        self.id
    }

    /// Returns the creature's name.
    #[inline]
    pub fn name(&self) -> &CreatureName {
        &self.name
    }

    /// Returns the creature's hit points.
    #[inline]
    pub fn hit_points(&self) -> &HitPoints {
        &self.hit_points
    }

    /// Current HP, always within `[0, max]`.
    #[inline]
    pub fn current_hp(&self) -> i32 {
        self.hit_points.current()
    }

    /// Maximum HP, fixed at creation.
    #[inline]
    pub fn max_hp(&self) -> i32 {
        self.hit_points.max()
    }

    /// Returns the creature's armor class.
    #[inline]
    pub fn armor_class(&self) -> ArmorClass {
        self.armor_class
    }

    /// Returns which side this creature fights on.
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Coarse health classification for display layers.
    pub fn health_band(&self) -> HealthBand {
        HealthBand::of(&self.hit_points)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Write the current HP, clamped into `[0, max HP]`.
    ///
    /// Reports whether the stored value actually changed so callers can
    /// skip notifications for no-op writes.
    pub fn set_current_hp(&mut self, value: i32) -> HpChange {
        let from = self.hit_points.current();
        let to = self.hit_points.set_current(value);
        if from == to {
            HpChange::Unchanged { value: to }
        } else {
            HpChange::Changed { from, to }
        }
    }
}
