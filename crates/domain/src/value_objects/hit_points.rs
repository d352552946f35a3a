//! Hit point tracking for creatures
//!
//! A current/max pair where `max` is fixed at creation and every write to
//! `current` is clamped into `[0, max]`. This is the one numeric rule the
//! tracker enforces: negative edits floor to 0, excess edits ceiling to max.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Hit points with the invariant `0 <= current <= max`, `max > 0`.
///
/// Valid by construction: the fallible constructors reject a non-positive
/// max, and `current` can only be written through the clamping setter.
///
/// # Examples
///
/// ```
/// use btltrkr_domain::value_objects::HitPoints;
///
/// let mut hp = HitPoints::new(60).unwrap();
/// assert_eq!(hp.current(), 60);
///
/// hp.set_current(1000);
/// assert_eq!(hp.current(), 60);
///
/// hp.set_current(-5);
/// assert_eq!(hp.current(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHitPoints", into = "RawHitPoints")]
pub struct HitPoints {
    current: i32,
    max: i32,
}

impl HitPoints {
    /// Create hit points at full health.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `max <= 0`.
    pub fn new(max: i32) -> Result<Self, DomainError> {
        if max <= 0 {
            return Err(DomainError::validation(format!(
                "Max HP must be greater than 0, got {}",
                max
            )));
        }
        Ok(Self { current: max, max })
    }

    /// Create hit points with an explicit current value.
    ///
    /// The current value is clamped into `[0, max]` rather than rejected,
    /// so records loaded from untrusted edits stay valid.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `max <= 0`.
    pub fn with_current(max: i32, current: i32) -> Result<Self, DomainError> {
        let mut hp = Self::new(max)?;
        hp.set_current(current);
        Ok(hp)
    }

    /// Current hit points, always within `[0, max]`.
    #[inline]
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Maximum hit points, fixed at creation.
    #[inline]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Write the current value, clamped into `[0, max]`.
    ///
    /// Returns the value actually stored.
    pub fn set_current(&mut self, value: i32) -> i32 {
        self.current = value.clamp(0, self.max);
        self.current
    }

    /// Restore to full health (used when duplicating a creature).
    pub fn restore_full(&mut self) {
        self.current = self.max;
    }

    /// Remaining health as a fraction in `[0.0, 1.0]`.
    pub fn fraction(&self) -> f32 {
        self.current as f32 / self.max as f32
    }

    pub fn is_full(&self) -> bool {
        self.current == self.max
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }
}

impl fmt::Display for HitPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

/// Wire shape for (de)serialization; re-validated on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHitPoints {
    current: i32,
    max: i32,
}

impl From<HitPoints> for RawHitPoints {
    fn from(hp: HitPoints) -> Self {
        Self {
            current: hp.current,
            max: hp.max,
        }
    }
}

impl TryFrom<RawHitPoints> for HitPoints {
    type Error = DomainError;

    fn try_from(raw: RawHitPoints) -> Result<Self, Self::Error> {
        Self::with_current(raw.max, raw.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_at_full_health() {
        let hp = HitPoints::new(30).unwrap();
        assert_eq!(hp.current(), 30);
        assert_eq!(hp.max(), 30);
        assert!(hp.is_full());
        assert!(hp.is_alive());
    }

    #[test]
    fn new_rejects_zero_and_negative_max() {
        assert!(HitPoints::new(0).is_err());
        assert!(HitPoints::new(-10).is_err());
    }

    #[test]
    fn with_current_clamps_into_range() {
        let hp = HitPoints::with_current(30, 45).unwrap();
        assert_eq!(hp.current(), 30);

        let hp = HitPoints::with_current(30, -5).unwrap();
        assert_eq!(hp.current(), 0);

        let hp = HitPoints::with_current(30, 12).unwrap();
        assert_eq!(hp.current(), 12);
    }

    #[test]
    fn set_current_clamps_negative_to_zero() {
        let mut hp = HitPoints::new(60).unwrap();
        assert_eq!(hp.set_current(-100), 0);
        assert_eq!(hp.current(), 0);
        assert!(!hp.is_alive());
    }

    #[test]
    fn set_current_clamps_excess_to_max() {
        let mut hp = HitPoints::new(60).unwrap();
        assert_eq!(hp.set_current(1000), 60);
        assert_eq!(hp.current(), 60);
    }

    #[test]
    fn set_current_stores_in_range_values_verbatim() {
        let mut hp = HitPoints::new(60).unwrap();
        assert_eq!(hp.set_current(42), 42);
        assert_eq!(hp.current(), 42);
    }

    #[test]
    fn restore_full_resets_current() {
        let mut hp = HitPoints::new(30).unwrap();
        hp.set_current(3);
        hp.restore_full();
        assert_eq!(hp.current(), 30);
    }

    #[test]
    fn fraction_reflects_remaining_health() {
        let mut hp = HitPoints::new(100).unwrap();
        hp.set_current(25);
        assert!((hp.fraction() - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn display_formats_current_over_max() {
        let mut hp = HitPoints::new(30).unwrap();
        hp.set_current(12);
        assert_eq!(hp.to_string(), "12/30");
    }

    #[test]
    fn serde_round_trip() {
        let hp = HitPoints::with_current(30, 12).unwrap();
        let json = serde_json::to_string(&hp).unwrap();
        let back: HitPoints = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hp);
    }

    #[test]
    fn serde_rejects_invalid_max() {
        let result: Result<HitPoints, _> =
            serde_json::from_str(r#"{"current":5,"max":0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serde_clamps_out_of_range_current() {
        let hp: HitPoints = serde_json::from_str(r#"{"current":99,"max":30}"#).unwrap();
        assert_eq!(hp.current(), 30);
    }
}
