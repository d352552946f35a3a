//! Coarse health classification for display layers
//!
//! Maps a remaining-HP fraction to one of three bands. Rendering layers
//! use the band to pick a color or icon; the thresholds live here so every
//! consumer agrees on them.

use serde::{Deserialize, Serialize};

use crate::value_objects::HitPoints;

/// Three-way classification of remaining health.
///
/// - `Healthy`: more than 60 % remaining
/// - `Bloodied`: more than 25 % and up to 60 %
/// - `Critical`: 25 % or less (including 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HealthBand {
    Healthy,
    Bloodied,
    Critical,
}

impl HealthBand {
    const HEALTHY_ABOVE: f32 = 0.60;
    const BLOODIED_ABOVE: f32 = 0.25;

    /// Classify a remaining-HP fraction in `[0.0, 1.0]`.
    pub fn from_fraction(fraction: f32) -> Self {
        if fraction > Self::HEALTHY_ABOVE {
            Self::Healthy
        } else if fraction > Self::BLOODIED_ABOVE {
            Self::Bloodied
        } else {
            Self::Critical
        }
    }

    pub fn of(hit_points: &HitPoints) -> Self {
        Self::from_fraction(hit_points.fraction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_health_is_healthy() {
        assert_eq!(HealthBand::from_fraction(1.0), HealthBand::Healthy);
    }

    #[test]
    fn thresholds_are_exclusive_at_the_top() {
        assert_eq!(HealthBand::from_fraction(0.61), HealthBand::Healthy);
        assert_eq!(HealthBand::from_fraction(0.60), HealthBand::Bloodied);
        assert_eq!(HealthBand::from_fraction(0.26), HealthBand::Bloodied);
        assert_eq!(HealthBand::from_fraction(0.25), HealthBand::Critical);
    }

    #[test]
    fn zero_is_critical() {
        assert_eq!(HealthBand::from_fraction(0.0), HealthBand::Critical);
    }

    #[test]
    fn of_reads_hit_points() {
        let mut hp = HitPoints::new(100).unwrap();
        assert_eq!(HealthBand::of(&hp), HealthBand::Healthy);
        hp.set_current(30);
        assert_eq!(HealthBand::of(&hp), HealthBand::Bloodied);
        hp.set_current(10);
        assert_eq!(HealthBand::of(&hp), HealthBand::Critical);
    }
}
