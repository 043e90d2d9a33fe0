//! Object value rules: walking a schema mapping.

use crate::error::GenerateError;
use crate::schema::{SchemaMap, SchemaNode};
use crate::value::{Document, Value};
use rand::Rng;

/// Generate a document from a schema mapping, in declaration order.
///
/// Field entries that opt out of presence are omitted from the result.
/// Group entries are structural: they are always present and recurse into
/// this same walk.
pub(crate) fn generate_map<R: Rng>(
    rng: &mut R,
    map: &SchemaMap,
) -> Result<Document, GenerateError> {
    let mut document = Document::new();
    for entry in map.entries() {
        match &entry.node {
            SchemaNode::Field(field) => {
                if let Some(value) = field.generate(rng)? {
                    document.insert(entry.name.clone(), value);
                }
            }
            SchemaNode::Group(group) => {
                document.insert(entry.name.clone(), Value::Object(generate_map(rng, group)?));
            }
        }
    }
    Ok(document)
}
