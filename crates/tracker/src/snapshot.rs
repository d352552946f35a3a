//! Roster snapshot DTOs
//!
//! The change-notification payload and the read-only view of store state.
//! Wire-format principles: serde-serializable, raw `Uuid` ids, no business
//! logic. Consumers re-render the whole roster from a snapshot; there is
//! no diffing (full snapshot, not incremental - roster sizes are small and
//! inputs are human-driven).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use btltrkr_domain::{Creature, HealthBand, Roster, Side};

/// Read-only view of one tracked creature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureView {
    pub id: Uuid,
    pub name: String,
    pub current_hp: i32,
    pub max_hp: i32,
    pub armor_class: i32,
    pub side: Side,
    /// Coarse health classification for HP-bar styling.
    pub health_band: HealthBand,
}

impl CreatureView {
    pub fn from_creature(creature: &Creature) -> Self {
        Self {
            id: creature.id().to_uuid(),
            name: creature.name().as_str().to_string(),
            current_hp: creature.current_hp(),
            max_hp: creature.max_hp(),
            armor_class: creature.armor_class().value(),
            side: creature.side(),
            health_band: creature.health_band(),
        }
    }
}

/// Immutable copy of the roster's state at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSnapshot {
    pub players: Vec<CreatureView>,
    pub enemies: Vec<CreatureView>,
    pub player_count: usize,
    pub enemy_count: usize,
}

impl RosterSnapshot {
    /// Capture the current state of a roster.
    pub fn capture(roster: &Roster) -> Self {
        Self {
            players: roster.players().iter().map(CreatureView::from_creature).collect(),
            enemies: roster.enemies().iter().map(CreatureView::from_creature).collect(),
            player_count: roster.player_count(),
            enemy_count: roster.enemy_count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.player_count == 0 && self.enemy_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use btltrkr_domain::{ArmorClass, CreatureName, HitPoints};

    fn roster_with_knight_and_zombie() -> Roster {
        let mut roster = Roster::new();
        roster.add(Creature::new(
            CreatureName::new("Knight").unwrap(),
            HitPoints::new(60).unwrap(),
            ArmorClass::new(16).unwrap(),
            Side::Player,
        ));
        roster.add(Creature::new(
            CreatureName::new("Zombie").unwrap(),
            HitPoints::new(30).unwrap(),
            ArmorClass::new(10).unwrap(),
            Side::Enemy,
        ));
        roster
    }

    #[test]
    fn capture_copies_counts_and_fields() {
        let roster = roster_with_knight_and_zombie();
        let snapshot = RosterSnapshot::capture(&roster);

        assert_eq!(snapshot.player_count, 1);
        assert_eq!(snapshot.enemy_count, 1);

        let knight = &snapshot.players[0];
        assert_eq!(knight.name, "Knight");
        assert_eq!(knight.current_hp, 60);
        assert_eq!(knight.max_hp, 60);
        assert_eq!(knight.armor_class, 16);
        assert_eq!(knight.side, Side::Player);
        assert_eq!(knight.health_band, HealthBand::Healthy);
    }

    #[test]
    fn capture_of_empty_roster_is_empty() {
        let snapshot = RosterSnapshot::capture(&Roster::new());
        assert!(snapshot.is_empty());
    }

    #[test]
    fn snapshot_serializes_with_camel_case_keys() {
        let roster = roster_with_knight_and_zombie();
        let json = serde_json::to_string(&RosterSnapshot::capture(&roster)).unwrap();
        assert!(json.contains("\"playerCount\":1"));
        assert!(json.contains("\"currentHp\":60"));
        assert!(json.contains("\"armorClass\":16"));
    }
}
