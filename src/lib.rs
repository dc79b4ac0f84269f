//! aggtest-gen library
//!
//! Generates random page visit fixtures for aggregation test suites, as a
//! flat CSV file and a nested XML file.
//!
//! # Crates
//!
//! - `aggtest_generator` - seeded random values and the seven-field record
//! - `aggtest_populate_csv` - CSV writer
//! - `aggtest_populate_xml` - XML writer
//! - `aggtest_populate` - shared arguments, metrics and task timing
//!
//! # CLI Usage
//!
//! ```bash
//! # Defaults: 200000-row CSV and 50000-row XML, written concurrently
//! aggtest-gen
//!
//! # Deterministic output with custom sizes
//! aggtest-gen --seed 42 --csv-rows 1000 --xml-rows 500 --pretty-xml
//! ```

pub mod driver;

pub use driver::{
    dispatch, dispatch_sequential, run_work_item, DispatchReport, DriverError, OutputFormat,
    TaskOutcome, TaskSummary, WorkItem,
};
