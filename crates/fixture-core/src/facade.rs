//! One-shot facades: generate a document, optionally persisting it.
//!
//! These are the entry points for tests that want a document in one call
//! instead of driving [`Schema`], [`Overrides`] and a sink separately.

use crate::error::{GenerateError, SeedError};
use crate::overrides::Overrides;
use crate::schema::Schema;
use crate::sink::{DocumentSink, Fixture};
use crate::value::Document;
use rand::Rng;

/// Generate one document.
///
/// With a schema, the declared shape is generated and `overrides` merged
/// on top. Without one, the result is simply the flat merged override
/// mapping: keys stay literal (no `__` splitting) and no field semantics
/// apply.
pub fn generate<R: Rng>(
    schema: Option<&Schema>,
    overrides: &Overrides,
    rng: &mut R,
) -> Result<Document, GenerateError> {
    match schema {
        Some(schema) => schema.generate_with(rng, overrides),
        None => Ok(overrides.merged()),
    }
}

/// Generate one document, hand it to `sink` and return it unchanged.
///
/// Nothing the sink produces flows back into the returned document; callers
/// that need sink-side identifiers must supply them as overrides.
pub async fn generate_and_persist<S, R>(
    sink: &S,
    schema: Option<&Schema>,
    overrides: &Overrides,
    rng: &mut R,
) -> Result<Document, SeedError>
where
    S: DocumentSink,
    R: Rng,
{
    let document = generate(schema, overrides, rng)?;
    let fixture = Fixture::new(sink, document);
    fixture.insert().await?;
    Ok(fixture.into_document())
}
