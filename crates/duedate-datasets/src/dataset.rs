//! Named sample datasets.

use duedate_types::Sample;
use serde::{Deserialize, Serialize};

/// A named sample of inter-completion times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    id: String,
    name: String,
    description: String,
    unit: String,
    values: Sample,
}

impl Dataset {
    /// Creates a new dataset.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        values: Sample,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            unit: "hours".to_string(),
            values,
        }
    }

    /// Returns the registry identifier (e.g., "luxboat").
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a one-line description of where the data came from.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the unit of the observations.
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Returns the sample.
    #[must_use]
    pub const fn sample(&self) -> &Sample {
        &self.values
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the dataset has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
