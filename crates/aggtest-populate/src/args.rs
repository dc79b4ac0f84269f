//! Common CLI argument definitions shared by all populators.

use clap::Args;
use std::path::PathBuf;

/// Common arguments shared by the CSV and XML populate commands.
#[derive(Args, Clone, Debug)]
pub struct CommonPopulateArgs {
    /// Random seed for deterministic generation (random when omitted)
    #[arg(long, env = "AGGTEST_SEED")]
    pub seed: Option<u64>,

    /// Run the generation tasks one after another instead of concurrently
    #[arg(long)]
    pub sequential: bool,

    /// Write a JSON summary of every generation task to this file
    #[arg(long, value_name = "PATH")]
    pub emit_metrics: Option<PathBuf>,
}
