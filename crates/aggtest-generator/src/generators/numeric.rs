//! Integer value generators.

use crate::generator::GeneratorError;
use crate::value::GeneratedValue;
use rand::Rng;

/// Generate a random integer in the half-open range `[min, max)`.
pub fn generate_int_range<R: Rng>(
    rng: &mut R,
    min: i64,
    max: i64,
) -> Result<GeneratedValue, GeneratorError> {
    if min >= max {
        return Err(GeneratorError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(GeneratedValue::Int(rng.gen_range(min..max)))
}
