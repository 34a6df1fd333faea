//! Where a request's sample comes from.

use duedate_types::{DueDateError, Result, Sample};
use tracing::{debug, warn};

use crate::DatasetRegistry;

/// Source of the sample for one estimate request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SampleSource {
    /// The default LuxBoat dataset.
    #[default]
    Default,
    /// A named dataset from the registry.
    Dataset(String),
    /// Comma-separated observations typed by the user.
    Custom(String),
}

impl SampleSource {
    /// Resolves the sample, falling back to the default dataset on failure.
    ///
    /// Custom text that does not parse, has fewer than two values, or holds
    /// non-positive values resolves to the default sample, as does an unknown
    /// dataset ID. The fallback is logged at warn level; use
    /// [`Self::resolve_strict`] to surface the error instead.
    #[must_use]
    pub fn resolve(&self) -> Sample {
        match self.resolve_strict() {
            Ok(sample) => sample,
            Err(err) => {
                warn!(error = %err, "falling back to the default sample");
                DatasetRegistry::global().default_sample().clone()
            }
        }
    }

    /// Resolves the sample, returning an error instead of falling back.
    ///
    /// # Errors
    ///
    /// Returns an error if custom text is not a valid sample or the dataset
    /// ID is unknown.
    pub fn resolve_strict(&self) -> Result<Sample> {
        let registry = DatasetRegistry::global();
        match self {
            Self::Default => Ok(registry.default_sample().clone()),
            Self::Dataset(id) => registry
                .get(id)
                .map(|dataset| dataset.sample().clone())
                .ok_or_else(|| DueDateError::UnknownDataset(id.clone())),
            Self::Custom(text) => {
                let sample = Sample::parse(text)?;
                debug!(len = sample.len(), "parsed custom sample");
                Ok(sample)
            }
        }
    }

    /// Returns true if this source is user-supplied text.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl std::fmt::Display for SampleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "default ({})", crate::DEFAULT_DATASET_ID),
            Self::Dataset(id) => write!(f, "dataset {id}"),
            Self::Custom(_) => write!(f, "custom"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duedate_types::SampleError;

    fn default_sample() -> Sample {
        DatasetRegistry::global().default_sample().clone()
    }

    #[test]
    fn test_default_source() {
        assert_eq!(SampleSource::Default.resolve(), default_sample());
    }

    #[test]
    fn test_custom_source() {
        let source = SampleSource::Custom("10, 12.5, 11".to_string());
        assert_eq!(source.resolve().values(), &[10.0, 12.5, 11.0]);
    }

    #[test]
    fn test_malformed_custom_falls_back() {
        for text in ["", "abc", "1, x, 3", "42", "1,,2", "5, -1, 3", "1, 2,"] {
            let source = SampleSource::Custom(text.to_string());
            assert_eq!(source.resolve(), default_sample(), "input {text:?}");
        }
    }

    #[test]
    fn test_strict_surfaces_error() {
        let source = SampleSource::Custom("1, x".to_string());
        assert!(matches!(
            source.resolve_strict(),
            Err(DueDateError::Sample(SampleError::InvalidNumber { index: 1, .. }))
        ));
    }

    #[test]
    fn test_dataset_source() {
        let source = SampleSource::Dataset("luxboat-first10".to_string());
        assert_eq!(source.resolve().len(), 10);

        let unknown = SampleSource::Dataset("nope".to_string());
        assert_eq!(
            unknown.resolve_strict(),
            Err(DueDateError::UnknownDataset("nope".to_string()))
        );
        assert_eq!(unknown.resolve(), default_sample());
    }

    #[test]
    fn test_display() {
        assert_eq!(SampleSource::Default.to_string(), "default (luxboat)");
        assert!(SampleSource::Custom("1,2".into()).is_custom());
    }
}
