//! String value rules.

use crate::error::GenerateError;
use crate::value::Value;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Generate a random string over `charset` with a uniform random length in
/// `[min_length, max_length]`.
///
/// The length is drawn before the charset is consulted, so a zero-length
/// draw succeeds even with an empty charset.
pub(crate) fn string_from_charset<R: Rng>(
    rng: &mut R,
    min_length: usize,
    max_length: usize,
    charset: &str,
) -> Result<Value, GenerateError> {
    if min_length > max_length {
        return Err(GenerateError::InvalidLengthBounds {
            min: min_length,
            max: max_length,
        });
    }

    let length = rng.gen_range(min_length..=max_length);
    if length == 0 {
        return Ok(Value::String(String::new()));
    }

    let pool: Vec<char> = charset.chars().collect();
    if pool.is_empty() {
        return Err(GenerateError::EmptyCharset);
    }

    let s: String = (0..length).map(|_| pool[rng.gen_range(0..pool.len())]).collect();
    Ok(Value::String(s))
}

/// Draw one string uniformly from a fixed choice list.
pub(crate) fn choose_string<R: Rng>(
    rng: &mut R,
    choices: &[String],
) -> Result<Value, GenerateError> {
    choices
        .choose(rng)
        .cloned()
        .map(Value::String)
        .ok_or(GenerateError::EmptyChoices)
}
