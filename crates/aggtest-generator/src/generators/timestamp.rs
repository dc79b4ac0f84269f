//! Timestamp value generators.

use crate::generator::GeneratorError;
use crate::value::GeneratedValue;
use chrono::{NaiveDateTime, TimeDelta};
use rand::Rng;

/// Format accepted for timestamp bounds (second resolution).
pub const BOUND_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format used when rendering generated timestamps (millisecond resolution).
pub const OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// Generate a random timestamp in the inclusive range `[start, end]`.
///
/// The offset from `start` is a uniformly drawn real number of seconds, so the
/// result carries sub-second precision even though the bounds do not.
pub fn generate_timestamp_range<R: Rng>(
    rng: &mut R,
    start: &str,
    end: &str,
) -> Result<GeneratedValue, GeneratorError> {
    let start_dt = parse_timestamp(start)?;
    let end_dt = parse_timestamp(end)?;

    let span = end_dt - start_dt;
    if span < TimeDelta::zero() {
        return Err(GeneratorError::ReversedTimestampRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let offset_secs = rng.gen_range(0.0..=span.num_seconds() as f64);
    let span_micros = span.num_microseconds().unwrap_or(i64::MAX);
    let offset_micros = ((offset_secs * MICROS_PER_SECOND).floor() as i64).min(span_micros);

    let dt = start_dt
        .checked_add_signed(TimeDelta::microseconds(offset_micros))
        .map_or(end_dt, |dt| dt.min(end_dt));
    Ok(GeneratedValue::Timestamp(dt))
}

/// Parse a timestamp bound in [`BOUND_FORMAT`].
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, GeneratorError> {
    NaiveDateTime::parse_from_str(s, BOUND_FORMAT).map_err(|source| {
        GeneratorError::InvalidTimestamp {
            value: s.to_string(),
            source,
        }
    })
}

/// Render a timestamp in [`OUTPUT_FORMAT`].
pub fn format_timestamp(dt: &NaiveDateTime) -> String {
    dt.format(OUTPUT_FORMAT).to_string()
}
