//! Conversion between generated values and BSON.

use bson::Bson;
use fixture_core::{Document, Value};

/// Wrapper for BSON values that can be inserted into MongoDB.
#[derive(Debug, Clone)]
pub struct BsonValue(pub Bson);

impl BsonValue {
    /// Get the inner BSON value.
    pub fn into_inner(self) -> Bson {
        self.0
    }

    /// Get a reference to the inner BSON value.
    pub fn as_inner(&self) -> &Bson {
        &self.0
    }
}

impl From<&Value> for BsonValue {
    fn from(value: &Value) -> Self {
        let bson = match value {
            Value::Null => Bson::Null,
            Value::Bool(b) => Bson::Boolean(*b),
            Value::Int(i) => Bson::Int64(*i),
            Value::Double(d) => Bson::Double(*d),
            Value::String(s) => Bson::String(s.clone()),
            Value::Array(items) => {
                Bson::Array(items.iter().map(|v| BsonValue::from(v).into_inner()).collect())
            }
            Value::Object(map) => Bson::Document(to_bson_document(map)),
        };
        BsonValue(bson)
    }
}

/// Convert a generated document into a BSON document, preserving key order.
pub fn to_bson_document(document: &Document) -> bson::Document {
    let mut doc = bson::Document::new();
    for (key, value) in document {
        doc.insert(key, BsonValue::from(value).into_inner());
    }
    doc
}

/// Convert a BSON document back into the generated-document shape.
///
/// Used when reading inserted documents back for verification. BSON types
/// outside the generated value set (ObjectId, DateTime, ...) come back as
/// their string representation.
pub fn from_bson_document(doc: &bson::Document) -> Document {
    doc.iter()
        .map(|(key, value)| (key.clone(), from_bson(value)))
        .collect()
}

fn from_bson(bson: &Bson) -> Value {
    match bson {
        Bson::Null => Value::Null,
        Bson::Boolean(b) => Value::Bool(*b),
        Bson::Int32(i) => Value::Int(*i as i64),
        Bson::Int64(i) => Value::Int(*i),
        Bson::Double(d) => Value::Double(*d),
        Bson::String(s) => Value::String(s.clone()),
        Bson::Array(items) => Value::Array(items.iter().map(from_bson).collect()),
        Bson::Document(doc) => Value::Object(from_bson_document(doc)),
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        other => Value::String(other.to_string()),
    }
}
