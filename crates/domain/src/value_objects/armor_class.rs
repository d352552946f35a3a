//! Armor class (validated newtype)
//!
//! A difficulty-to-hit stat. Stored and displayed, never computed upon;
//! fixed for the lifetime of a creature.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A non-negative armor class value (validated newtype)
///
/// # Validation Rules
///
/// - Value must be >= 0
///
/// # Examples
///
/// ```
/// use btltrkr_domain::value_objects::ArmorClass;
///
/// let ac = ArmorClass::new(16).unwrap();
/// assert_eq!(ac.value(), 16);
///
/// assert!(ArmorClass::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct ArmorClass(i32);

impl ArmorClass {
    /// Minimum valid value
    pub const MIN: i32 = 0;

    /// Create a new `ArmorClass` value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the value is negative.
    pub fn new(value: i32) -> Result<Self, DomainError> {
        if value < Self::MIN {
            return Err(DomainError::validation(format!(
                "Armor class cannot be negative, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Create a new `ArmorClass`, clamping negative input to 0.
    ///
    /// Convenience for callers that want validity without explicit error
    /// handling.
    pub fn clamped(value: i32) -> Self {
        Self(value.max(Self::MIN))
    }

    /// Returns the underlying `i32` value.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ArmorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AC {}", self.0)
    }
}

impl From<ArmorClass> for i32 {
    fn from(ac: ArmorClass) -> Self {
        ac.0
    }
}

impl TryFrom<i32> for ArmorClass {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
