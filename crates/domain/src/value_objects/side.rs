//! Which side of the battle a creature fights on

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The side a creature belongs to, fixed at creation.
///
/// Membership in the roster's collections always agrees with this value:
/// a creature is stored in the collection matching its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// The opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Enemy => "enemy",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "player" => Ok(Self::Player),
            "enemy" => Ok(Self::Enemy),
            _ => Err(DomainError::parse(format!("Unknown side: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_flips_sides() {
        assert_eq!(Side::Player.opponent(), Side::Enemy);
        assert_eq!(Side::Enemy.opponent(), Side::Player);
    }

    #[test]
    fn parse_round_trip() {
        for side in [Side::Player, Side::Enemy] {
            assert_eq!(side.as_str().parse::<Side>().unwrap(), side);
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("npc".parse::<Side>().is_err());
    }

    #[test]
    fn serde_uses_camel_case() {
        assert_eq!(serde_json::to_string(&Side::Player).unwrap(), "\"player\"");
        assert_eq!(serde_json::to_string(&Side::Enemy).unwrap(), "\"enemy\"");
    }
}
