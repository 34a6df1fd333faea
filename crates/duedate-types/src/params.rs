//! Request parameters: unit count and confidence level.

use serde::{Deserialize, Serialize};

use crate::DueDateError;

/// Number of units in an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct UnitCount(u32);

impl UnitCount {
    /// Creates a unit count.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero.
    pub const fn new(count: u32) -> Result<Self, DueDateError> {
        if count == 0 {
            return Err(DueDateError::InvalidUnitCount(count));
        }
        Ok(Self(count))
    }

    /// Returns the count.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns the count as a float for arithmetic.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<u32> for UnitCount {
    type Error = DueDateError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<UnitCount> for u32 {
    fn from(count: UnitCount) -> Self {
        count.0
    }
}

impl std::fmt::Display for UnitCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Probability of meeting the due date, strictly inside `(0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// The 50% level, at which the due date equals the expected completion time.
    pub const MEDIAN: Self = Self(0.5);

    /// Creates a confidence level from a probability.
    ///
    /// # Errors
    ///
    /// Returns an error if `level` is not finite or lies outside `(0, 1)`;
    /// the normal quantile is infinite at both endpoints.
    pub fn new(level: f64) -> Result<Self, DueDateError> {
        if !level.is_finite() || level <= 0.0 || level >= 1.0 {
            return Err(DueDateError::InvalidConfidence(level));
        }
        Ok(Self(level))
    }

    /// Creates a confidence level from a percentage, e.g. `90.0` for 90%.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting probability is invalid.
    pub fn from_percent(percent: f64) -> Result<Self, DueDateError> {
        Self::new(percent / 100.0)
    }

    /// Returns the probability.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns the level as a percentage.
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        self.0 * 100.0
    }
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self(0.9)
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = DueDateError;

    fn try_from(level: f64) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<ConfidenceLevel> for f64 {
    fn from(level: ConfidenceLevel) -> Self {
        level.0
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let percent = self.as_percent();
        if (percent - percent.round()).abs() < 1e-9 {
            write!(f, "{percent:.0}%")
        } else {
            write!(f, "{percent:.1}%")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_count() {
        assert_eq!(UnitCount::new(25).unwrap().get(), 25);
        assert_eq!(UnitCount::new(0), Err(DueDateError::InvalidUnitCount(0)));
    }

    #[test]
    fn test_confidence_bounds() {
        assert!(ConfidenceLevel::new(0.9).is_ok());
        assert!(ConfidenceLevel::new(0.0).is_err());
        assert!(ConfidenceLevel::new(1.0).is_err());
        assert!(ConfidenceLevel::new(-0.1).is_err());
        assert!(ConfidenceLevel::new(f64::NAN).is_err());
        assert!(ConfidenceLevel::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_confidence_from_percent() {
        let level = ConfidenceLevel::from_percent(95.0).unwrap();
        assert!((level.value() - 0.95).abs() < 1e-12);
        assert!(ConfidenceLevel::from_percent(100.0).is_err());
    }

    #[test]
    fn test_confidence_display() {
        assert_eq!(ConfidenceLevel::MEDIAN.to_string(), "50%");
        assert_eq!(ConfidenceLevel::default().to_string(), "90%");
        assert_eq!(ConfidenceLevel::new(0.975).unwrap().to_string(), "97.5%");
    }
}
