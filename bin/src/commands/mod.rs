//! CLI command implementations.

pub(crate) mod datasets;
pub(crate) mod estimate;
pub(crate) mod interactive;
pub(crate) mod sample;
pub(crate) mod sweep;
