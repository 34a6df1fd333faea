//! Validated sample of inter-completion times.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::SampleError;

/// An ordered sequence of observed inter-completion times, in hours.
///
/// A sample always holds at least [`Sample::MIN_LEN`] values, each finite and
/// strictly positive. Order is significant: autocorrelation is computed
/// between consecutive observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Minimum number of observations for variance and lag-1 autocorrelation.
    pub const MIN_LEN: usize = 2;

    /// Creates a sample, validating length and every observation.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than [`Self::MIN_LEN`] values are given or
    /// any value is non-finite or not strictly positive.
    pub fn new(values: Vec<f64>) -> Result<Self, SampleError> {
        if values.len() < Self::MIN_LEN {
            return Err(SampleError::TooFewValues {
                len: values.len(),
                min: Self::MIN_LEN,
            });
        }
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v <= 0.0)
        {
            return Err(SampleError::InvalidObservation { index, value });
        }
        Ok(Self { values })
    }

    /// Parses comma-separated text such as `"32.5, 35.5, 40"`.
    ///
    /// Whitespace around each token is ignored. Empty tokens (including a
    /// trailing comma) are rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if a token is not a number or the parsed values fail
    /// [`Self::new`] validation.
    pub fn parse(text: &str) -> Result<Self, SampleError> {
        let values = text
            .split(',')
            .enumerate()
            .map(|(index, token)| {
                let token = token.trim();
                token.parse::<f64>().map_err(|_| SampleError::InvalidNumber {
                    index,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(values)
    }

    /// Returns the observations as a slice.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; a valid sample is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an iterator over the observations.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Consumes the sample, returning the underlying values.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }
}

impl TryFrom<Vec<f64>> for Sample {
    type Error = SampleError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for Sample {
    type Error = SampleError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::new(values.to_vec())
    }
}

impl From<Sample> for Vec<f64> {
    fn from(sample: Sample) -> Self {
        sample.values
    }
}

impl AsRef<[f64]> for Sample {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl FromStr for Sample {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a Sample {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_new() {
        let sample = Sample::new(vec![32.5, 35.5, 40.0]).unwrap();
        assert_eq!(sample.len(), 3);
        assert_eq!(sample.values(), &[32.5, 35.5, 40.0]);
    }

    #[test]
    fn test_sample_too_short() {
        assert_eq!(
            Sample::new(vec![1.0]),
            Err(SampleError::TooFewValues { len: 1, min: 2 })
        );
        assert!(Sample::new(vec![]).is_err());
    }

    #[test]
    fn test_sample_rejects_non_positive() {
        let err = Sample::new(vec![1.0, 0.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            SampleError::InvalidObservation {
                index: 1,
                value: 0.0
            }
        );
        assert!(Sample::new(vec![1.0, -2.0]).is_err());
    }

    #[test]
    fn test_sample_rejects_non_finite() {
        assert!(Sample::new(vec![1.0, f64::NAN]).is_err());
        assert!(Sample::new(vec![f64::INFINITY, 1.0]).is_err());
    }

    #[test]
    fn test_parse() {
        let sample: Sample = " 32.5,35.5 , 40 ".parse().unwrap();
        assert_eq!(sample.values(), &[32.5, 35.5, 40.0]);
    }

    #[test]
    fn test_parse_invalid_token() {
        let err = Sample::parse("1, two, 3").unwrap_err();
        assert_eq!(
            err,
            SampleError::InvalidNumber {
                index: 1,
                token: "two".to_string()
            }
        );
    }

    #[test]
    fn test_parse_trailing_comma() {
        assert!(matches!(
            Sample::parse("1, 2,"),
            Err(SampleError::InvalidNumber { index: 2, .. })
        ));
    }

    #[test]
    fn test_parse_single_value() {
        assert!(matches!(
            Sample::parse("42"),
            Err(SampleError::TooFewValues { len: 1, .. })
        ));
    }

    #[test]
    fn test_display() {
        let sample = Sample::new(vec![1.5, 2.0]).unwrap();
        assert_eq!(sample.to_string(), "1.5, 2");
    }

    #[test]
    fn test_serde() {
        let sample = Sample::new(vec![1.0, 2.0]).unwrap();
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(json, "[1.0,2.0]");
        assert!(serde_json::from_str::<Sample>("[1.0]").is_err());
    }
}
