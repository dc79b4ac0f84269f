//! Seeded record generator.

use crate::record::Record;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Integer bounds that admit no value
    #[error("Invalid range: min {min} is not below max {max}")]
    InvalidRange { min: String, max: String },

    /// Timestamp bounds where the end precedes the start
    #[error("Invalid timestamp range: end '{end}' is before start '{start}'")]
    ReversedTimestampRange { start: String, end: String },

    /// Timestamp bound that does not parse
    #[error("Invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Generator that produces deterministic records.
///
/// Each generator owns its RNG, so generators running on different threads
/// never contend and never share a random stream.
pub struct RecordGenerator {
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Number of records produced so far
    index: u64,
}

impl RecordGenerator {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            index: 0,
        }
    }

    /// Get the number of records generated so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next record.
    pub fn next_record(&mut self) -> Result<Record, GeneratorError> {
        let record = Record::generate(&mut self.rng)?;
        self.index += 1;
        Ok(record)
    }

    /// Generate `count` records lazily.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a mut RecordGenerator,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = Result<Record, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

/// Derive the seed for an independent random stream from a base seed.
pub fn derive_seed(base: u64, stream: u64) -> u64 {
    base.wrapping_add(stream.wrapping_mul(0x9E3779B97F4A7C15))
}
