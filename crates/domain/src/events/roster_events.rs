//! Roster mutation events
//!
//! These enums communicate what happened when roster state was modified,
//! allowing callers to react appropriately - in particular, to notify
//! subscribers only when a mutation actually occurred.

use crate::ids::CreatureId;

/// Outcome of writing a creature's current HP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HpChange {
    /// The stored value changed (after clamping)
    Changed { from: i32, to: i32 },
    /// The clamped value equals what was already stored
    Unchanged { value: i32 },
}

impl HpChange {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// Outcome of an HP update addressed by id across the whole roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HpUpdateOutcome {
    /// The creature was found and its HP written (possibly unchanged
    /// after clamping)
    Updated { id: CreatureId, change: HpChange },
    /// No creature with this id exists on either side
    NotFound,
}

impl HpUpdateOutcome {
    /// Whether a creature was found at all.
    pub fn found(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hp_change_reports_changed() {
        assert!(HpChange::Changed { from: 10, to: 5 }.is_changed());
        assert!(!HpChange::Unchanged { value: 10 }.is_changed());
    }

    #[test]
    fn outcome_reports_found() {
        let id = CreatureId::new();
        let outcome = HpUpdateOutcome::Updated {
            id,
            change: HpChange::Unchanged { value: 10 },
        };
        assert!(outcome.found());
        assert!(!HpUpdateOutcome::NotFound.found());
    }
}
