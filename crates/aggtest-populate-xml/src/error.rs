//! Error types for the XML populator.

use thiserror::Error;

/// Errors that can occur during XML population.
#[derive(Error, Debug)]
pub enum XMLPopulatorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML writer error.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] aggtest_generator::GeneratorError),
}
