//! CLI argument definitions for the XML populator.

use clap::Args;
use std::path::PathBuf;

/// XML-specific populate arguments.
#[derive(Args, Clone, Debug)]
pub struct XMLPopulateArgs {
    /// Output path for the XML file
    #[arg(long, env = "AGGTEST_XML_OUTPUT", default_value = "example_data_log.xml")]
    pub xml_output: PathBuf,

    /// Requested XML row count (the first row is never emitted)
    #[arg(long, default_value = "50000")]
    pub xml_rows: u64,

    /// Indent the XML output
    #[arg(long)]
    pub pretty_xml: bool,
}
