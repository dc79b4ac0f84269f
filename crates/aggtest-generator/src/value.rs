//! Single randomized values and their bounds.

use crate::generator::GeneratorError;
use crate::generators::{numeric, timestamp};
use chrono::NaiveDateTime;
use rand::Rng;
use std::fmt;

/// Kind of value a field produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    Timestamp,
}

/// Bounds constraining a single draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRange {
    /// Integers in `[min, max)`.
    Int { min: i64, max: i64 },
    /// Timestamps in `[start, end]`, both given as `YYYY-MM-DD HH:MM:SS`.
    Timestamp {
        start: &'static str,
        end: &'static str,
    },
}

impl ValueRange {
    pub fn kind(&self) -> ValueKind {
        match self {
            ValueRange::Int { .. } => ValueKind::Integer,
            ValueRange::Timestamp { .. } => ValueKind::Timestamp,
        }
    }

    /// Draw one value within these bounds.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<GeneratedValue, GeneratorError> {
        match *self {
            ValueRange::Int { min, max } => numeric::generate_int_range(rng, min, max),
            ValueRange::Timestamp { start, end } => {
                timestamp::generate_timestamp_range(rng, start, end)
            }
        }
    }
}

/// A realized random draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GeneratedValue {
    Int(i64),
    Timestamp(NaiveDateTime),
}

impl GeneratedValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            GeneratedValue::Int(_) => ValueKind::Integer,
            GeneratedValue::Timestamp(_) => ValueKind::Timestamp,
        }
    }
}

impl fmt::Display for GeneratedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratedValue::Int(v) => write!(f, "{v}"),
            GeneratedValue::Timestamp(dt) => write!(f, "{}", dt.format(timestamp::OUTPUT_FORMAT)),
        }
    }
}

/// A named value drawn once at construction.
///
/// The value never changes afterwards. Its `Display` output is the formatted
/// value used by both file formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomValue {
    name: &'static str,
    range: ValueRange,
    value: GeneratedValue,
}

impl RandomValue {
    /// Draw a value for `name` within `range`.
    pub fn generate<R: Rng>(
        name: &'static str,
        range: ValueRange,
        rng: &mut R,
    ) -> Result<Self, GeneratorError> {
        let value = range.generate(rng)?;
        Ok(Self { name, range, value })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> ValueKind {
        self.range.kind()
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    pub fn value(&self) -> GeneratedValue {
        self.value
    }
}

impl fmt::Display for RandomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
