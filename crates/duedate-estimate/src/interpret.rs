//! Plain-language interpretation of an estimate.

use serde::{Deserialize, Serialize};

use crate::DueDateEstimate;

/// Autocorrelation above this is reported as moderate.
pub const MODERATE_AUTOCORRELATION: f64 = 0.3;

/// Autocorrelation above this (and at most moderate) is reported as weak.
pub const WEAK_AUTOCORRELATION: f64 = 0.1;

/// How strongly consecutive inter-completion times depend on each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutocorrelationStrength {
    /// Times are fairly independent (rho at most 0.1, including negative values).
    Negligible,
    /// Weak positive dependence (0.1 < rho <= 0.3).
    Weak,
    /// Moderate or stronger positive dependence (rho > 0.3).
    Moderate,
}

impl AutocorrelationStrength {
    /// Classifies a lag-1 autocorrelation.
    #[must_use]
    pub fn from_rho(rho: f64) -> Self {
        if rho > MODERATE_AUTOCORRELATION {
            Self::Moderate
        } else if rho > WEAK_AUTOCORRELATION {
            Self::Weak
        } else {
            Self::Negligible
        }
    }

    /// Returns the strength as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Negligible => "negligible",
            Self::Weak => "weak",
            Self::Moderate => "moderate",
        }
    }

    /// One-sentence explanation for students.
    #[must_use]
    pub const fn explanation(&self) -> &'static str {
        match self {
            Self::Moderate => {
                "Moderate positive autocorrelation detected! When one unit takes longer, the next tends to take longer too."
            }
            Self::Weak => "Weak positive autocorrelation detected.",
            Self::Negligible => "Negligible autocorrelation - times are fairly independent.",
        }
    }
}

impl std::fmt::Display for AutocorrelationStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Renders the interpretation paragraph for an estimate.
#[must_use]
pub fn interpretation(estimate: &DueDateEstimate) -> String {
    format!(
        "With {:.0}% confidence, the order of {} units will be completed within {:.1} days.\n\
         This includes {:.1} days of safety time beyond the average of {:.1} days.\n\
         {}",
        estimate.confidence * 100.0,
        estimate.unit_count,
        estimate.due_date_days,
        estimate.safety_days,
        estimate.average_days,
        estimate.autocorrelation_strength().explanation(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_due_date;

    #[test]
    fn test_thresholds() {
        assert_eq!(AutocorrelationStrength::from_rho(0.5), AutocorrelationStrength::Moderate);
        assert_eq!(AutocorrelationStrength::from_rho(0.3), AutocorrelationStrength::Weak);
        assert_eq!(AutocorrelationStrength::from_rho(0.2), AutocorrelationStrength::Weak);
        assert_eq!(AutocorrelationStrength::from_rho(0.1), AutocorrelationStrength::Negligible);
        assert_eq!(AutocorrelationStrength::from_rho(-0.8), AutocorrelationStrength::Negligible);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(AutocorrelationStrength::Moderate.as_str(), "moderate");
        assert_eq!(AutocorrelationStrength::Weak.to_string(), "weak");
    }

    #[test]
    fn test_interpretation() {
        let estimate = compute_due_date(&[30.0, 40.0, 35.0, 45.0, 38.0], 10, 0.9).unwrap();
        let text = interpretation(&estimate);
        assert!(text.starts_with("With 90% confidence, the order of 10 units"));
        assert!(text.contains(&format!("{:.1} days of safety time", estimate.safety_days)));
        assert!(text.ends_with(estimate.autocorrelation_strength().explanation()));
    }
}
