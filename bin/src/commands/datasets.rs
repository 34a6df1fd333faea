//! Datasets command implementation.

use anyhow::Result;
use duedate_lib::{DEFAULT_DATASET_ID, DatasetRegistry};

/// List the embedded datasets.
pub(crate) fn list_datasets() -> Result<()> {
    let registry = DatasetRegistry::global();

    println!("{:<18} {:<32} {:>7} {:<6}", "ID", "NAME", "VALUES", "UNIT");
    println!("{}", "-".repeat(66));

    for dataset in registry.all() {
        let marker = if dataset.id() == DEFAULT_DATASET_ID { " (default)" } else { "" };
        println!(
            "{:<18} {:<32} {:>7} {:<6}{marker}",
            dataset.id(),
            dataset.name(),
            dataset.len(),
            dataset.unit(),
        );
    }

    println!("\nTotal: {} datasets", registry.len());
    Ok(())
}
