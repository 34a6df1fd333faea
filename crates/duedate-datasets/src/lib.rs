//! Embedded sample datasets for the duedate due-date estimator.
//!
//! This crate provides the default LuxBoat sample and resolution of
//! user-supplied samples with fallback to it.
//!
//! # Example
//!
//! ```
//! use duedate_datasets::DatasetRegistry;
//!
//! let registry = DatasetRegistry::global();
//! let sample = registry.default_sample();
//! assert_eq!(sample.len(), 29);
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/duedate/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dataset;
mod source;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use duedate_types::Sample;

pub use dataset::Dataset;
pub use source::SampleSource;

/// The dataset JSON embedded at compile time.
const DATASETS_JSON: &str = include_str!("../data/datasets.json");

/// Identifier of the dataset used when no other sample is available.
pub const DEFAULT_DATASET_ID: &str = "luxboat";

/// Global dataset registry instance.
static REGISTRY: OnceLock<DatasetRegistry> = OnceLock::new();

/// Registry of embedded sample datasets.
#[derive(Debug)]
pub struct DatasetRegistry {
    datasets: BTreeMap<String, Dataset>,
}

impl DatasetRegistry {
    /// Returns the global dataset registry.
    ///
    /// The registry is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(|| Self::from_json(DATASETS_JSON).expect("Invalid datasets.json"))
    }

    /// Creates a registry from a JSON object keyed by dataset ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a sample fails validation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let datasets: BTreeMap<String, Dataset> = serde_json::from_str(json)?;
        Ok(Self { datasets })
    }

    /// Looks up a dataset by ID (case-insensitive).
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Dataset> {
        self.datasets.get(&id.to_lowercase())
    }

    /// Returns the default (LuxBoat) dataset.
    #[must_use]
    pub fn default_dataset(&self) -> &Dataset {
        self.get(DEFAULT_DATASET_ID)
            .expect("datasets.json must contain the default dataset")
    }

    /// Returns the default sample.
    #[must_use]
    pub fn default_sample(&self) -> &Sample {
        self.default_dataset().sample()
    }

    /// Returns all datasets ordered by ID.
    pub fn all(&self) -> impl Iterator<Item = &Dataset> {
        self.datasets.values()
    }

    /// Returns the total number of datasets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Returns all dataset IDs sorted alphabetically.
    pub fn ids(&self) -> Vec<&str> {
        self.datasets.keys().map(String::as_str).collect()
    }
}
