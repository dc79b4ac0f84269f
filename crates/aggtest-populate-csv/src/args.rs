//! CLI argument definitions for the CSV populator.

use clap::Args;
use std::path::PathBuf;

/// CSV-specific populate arguments.
#[derive(Args, Clone, Debug)]
pub struct CSVPopulateArgs {
    /// Output path for the CSV file
    #[arg(long, env = "AGGTEST_CSV_OUTPUT", default_value = "example_data_log.csv")]
    pub csv_output: PathBuf,

    /// Requested CSV row count (the header counts as the first row)
    #[arg(long, default_value = "200000")]
    pub csv_rows: u64,
}
