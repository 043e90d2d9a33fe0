//! Numeric value rules.

use crate::error::GenerateError;
use crate::value::Value;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Generate a random integer in the given range (inclusive).
pub(crate) fn int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> Result<Value, GenerateError> {
    if min > max {
        return Err(GenerateError::InvalidIntegerBounds { min, max });
    }
    Ok(Value::Int(rng.gen_range(min..=max)))
}

/// Generate a random double in the given range (inclusive).
pub(crate) fn double_range<R: Rng>(
    rng: &mut R,
    min: f64,
    max: f64,
) -> Result<Value, GenerateError> {
    if min > max {
        return Err(GenerateError::InvalidDoubleBounds { min, max });
    }
    Ok(Value::Double(rng.gen_range(min..=max)))
}

/// Draw one integer uniformly from a fixed choice list.
pub(crate) fn choose_int<R: Rng>(rng: &mut R, choices: &[i64]) -> Result<Value, GenerateError> {
    choices
        .choose(rng)
        .copied()
        .map(Value::Int)
        .ok_or(GenerateError::EmptyChoices)
}

/// Draw one double uniformly from a fixed choice list.
pub(crate) fn choose_double<R: Rng>(rng: &mut R, choices: &[f64]) -> Result<Value, GenerateError> {
    choices
        .choose(rng)
        .copied()
        .map(Value::Double)
        .ok_or(GenerateError::EmptyChoices)
}
