//! Array value rules.

use super::Field;
use crate::error::GenerateError;
use crate::value::Value;
use rand::Rng;

/// Generate an array whose length is uniform in `[min_length, max_length]`
/// and whose items each come from a uniformly-chosen element field.
///
/// Element fields must stay required: an element opting out of presence
/// has no representation inside an array, so it is an error.
pub(crate) fn array_of_fields<R: Rng>(
    rng: &mut R,
    elements: &[Field],
    min_length: usize,
    max_length: usize,
) -> Result<Value, GenerateError> {
    if min_length > max_length {
        return Err(GenerateError::InvalidLengthBounds {
            min: min_length,
            max: max_length,
        });
    }

    let length = rng.gen_range(min_length..=max_length);
    if length == 0 {
        return Ok(Value::Array(Vec::new()));
    }

    if elements.is_empty() {
        return Err(GenerateError::NoElementFields);
    }

    let mut items = Vec::with_capacity(length);
    for _ in 0..length {
        let field = &elements[rng.gen_range(0..elements.len())];
        match field.generate(rng)? {
            Some(value) => items.push(value),
            None => return Err(GenerateError::ElementNotPresent),
        }
    }
    Ok(Value::Array(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_array_length_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let elements = vec![Field::integer()];

        for _ in 0..100 {
            let value = array_of_fields(&mut rng, &elements, 5, 10).unwrap();
            let items = value.as_array().unwrap();
            assert!((5..=10).contains(&items.len()));
            assert!(items.iter().all(|v| v.as_i64().is_some()));
        }
    }

    #[test]
    fn test_array_mixes_element_fields() {
        let mut rng = StdRng::seed_from_u64(42);
        let elements = vec![Field::integer_in(1, 1), Field::string_charset("z")];

        let mut saw_int = false;
        let mut saw_string = false;
        for _ in 0..50 {
            let value = array_of_fields(&mut rng, &elements, 5, 10).unwrap();
            for item in value.as_array().unwrap() {
                match item {
                    Value::Int(_) => saw_int = true,
                    Value::String(_) => saw_string = true,
                    other => panic!("Unexpected item {other:?}"),
                }
            }
        }
        assert!(saw_int && saw_string);
    }

    #[test]
    fn test_array_inverted_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = array_of_fields(&mut rng, &[Field::integer()], 10, 5).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::InvalidLengthBounds { min: 10, max: 5 }
        ));
    }

    #[test]
    fn test_zero_length_allows_missing_elements() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = array_of_fields(&mut rng, &[], 0, 0).unwrap();
        assert_eq!(value, Value::Array(Vec::new()));
    }

    #[test]
    fn test_nonzero_length_rejects_missing_elements() {
        let mut rng = StdRng::seed_from_u64(42);
        let err = array_of_fields(&mut rng, &[], 1, 10).unwrap_err();
        assert!(matches!(err, GenerateError::NoElementFields));
    }

    #[test]
    fn test_optional_element_is_an_error() {
        // Presence draw of ~0.0 makes the optional element opt out
        // immediately.
        let mut rng = StepRng::new(0, 0);
        let elements = vec![Field::integer().optional(0.5)];
        let err = array_of_fields(&mut rng, &elements, 1, 10).unwrap_err();
        assert!(matches!(err, GenerateError::ElementNotPresent));
    }

    #[test]
    fn test_nested_arrays() {
        let mut rng = StdRng::seed_from_u64(42);
        let inner = Field::array_len(Field::integer_in(0, 9), 2, 2);
        let value = array_of_fields(&mut rng, &[inner], 3, 3).unwrap();

        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);
        for item in items {
            assert_eq!(item.as_array().unwrap().len(), 2);
        }
    }
}
