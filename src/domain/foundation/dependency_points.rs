//! Dependency points value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A dependency total between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyPoints(u8);

impl DependencyPoints {
    /// No measurable dependency.
    pub const ZERO: Self = Self(0);

    /// Upper bound of the scale.
    pub const MAX: Self = Self(100);

    /// Creates new points, clamping to the valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX.0))
    }

    /// Creates points, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > Self::MAX.0 {
            return Err(ValidationError::out_of_range(
                "dependency_points",
                0,
                i32::from(Self::MAX.0),
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for DependencyPoints {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for DependencyPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_one_hundred() {
        assert_eq!(DependencyPoints::new(93).value(), 93);
        assert_eq!(DependencyPoints::new(101).value(), 100);
        assert_eq!(DependencyPoints::new(255).value(), 100);
    }

    #[test]
    fn try_new_rejects_over_one_hundred() {
        assert!(DependencyPoints::try_new(100).is_ok());
        match DependencyPoints::try_new(101) {
            Err(ValidationError::OutOfRange { field, max, actual, .. }) => {
                assert_eq!(field, "dependency_points");
                assert_eq!(max, 100);
                assert_eq!(actual, 101);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn displays_against_scale() {
        assert_eq!(format!("{}", DependencyPoints::new(42)), "42/100");
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&DependencyPoints::new(75)).unwrap();
        assert_eq!(json, "75");
    }
}
