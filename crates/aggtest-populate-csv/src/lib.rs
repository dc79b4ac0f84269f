//! CSV fixture populator.
//!
//! This crate writes CSV files of random page visit records generated by
//! the aggtest-generator crate.
//!
//! # Example
//!
//! ```ignore
//! use aggtest_populate_csv::CSVPopulator;
//!
//! let mut populator = CSVPopulator::new(42);
//!
//! // Header plus 999 data rows
//! let metrics = populator.populate("/path/to/output.csv", 1000)?;
//! ```

pub mod args;
mod error;
mod populator;

pub use args::CSVPopulateArgs;
pub use error::CSVPopulatorError;
pub use populator::CSVPopulator;
