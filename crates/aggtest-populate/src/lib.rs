//! Common types and utilities for aggtest-gen populators.
//!
//! This crate provides shared argument types, populate metrics, and the
//! scoped task timer used by the CSV and XML populators.

pub mod args;
pub mod metrics;
pub mod timing;

pub use args::CommonPopulateArgs;
pub use metrics::PopulateMetrics;
pub use timing::TaskTimer;

/// Default buffer size for file writers.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Number of data rows written for a requested row count.
///
/// Requesting `n` rows writes `n - 1` records: the header (or root element)
/// takes the first slot. Zero and one both yield no records.
pub fn data_row_count(requested: u64) -> u64 {
    requested.saturating_sub(1)
}
