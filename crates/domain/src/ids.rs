use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tracked creature.
///
/// Assigned once at creation and never reused or changed; duplicating a
/// creature always mints a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureId(Uuid);

impl CreatureId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for CreatureId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for CreatureId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<CreatureId> for Uuid {
    fn from(value: CreatureId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        let a = CreatureId::new();
        let b = CreatureId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn uuid_round_trip() {
        let id = CreatureId::new();
        let uuid = id.to_uuid();
        assert_eq!(CreatureId::from_uuid(uuid), id);
        assert_eq!(CreatureId::from(uuid), id);
        assert_eq!(Uuid::from(id), uuid);
    }

    #[test]
    fn display_matches_inner_uuid() {
        let id = CreatureId::new();
        assert_eq!(id.to_string(), id.as_uuid().to_string());
    }
}
