//! Schema definitions: named, reusable document shapes.
//!
//! A [`Schema`] is declared once, through the [`SchemaMap`] builder or a
//! YAML file, and reused across generation calls. Schemas are immutable
//! and hold no generation state; all randomness comes from the RNG handed
//! to [`Schema::generate`].
//!
//! A schema entry is either a leaf [`Field`] or a nested group of further
//! entries. Groups are structural: they always appear in generated output,
//! while fields decide their own presence per draw.

use crate::error::{GenerateError, SchemaError};
use crate::fields::{object, Field};
use crate::overrides::Overrides;
use crate::value::Document;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A node in a schema mapping: a leaf field or a nested group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaNode {
    /// Leaf value generator
    Field(Field),

    /// Nested mapping, always included in generated output
    Group(SchemaMap),
}

/// One named entry in a schema mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaEntry {
    /// Key in the generated document
    pub name: String,

    /// What the key maps to
    #[serde(flatten)]
    pub node: SchemaNode,
}

/// An ordered mapping of names to schema nodes.
///
/// Entries keep declaration order so that generation walks them the same
/// way every time; with a seeded RNG this makes whole documents
/// reproducible.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaMap {
    entries: Vec<SchemaEntry>,
}

impl SchemaMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a leaf field entry.
    pub fn field(mut self, name: impl Into<String>, field: impl Into<Field>) -> Self {
        self.entries.push(SchemaEntry {
            name: name.into(),
            node: SchemaNode::Field(field.into()),
        });
        self
    }

    /// Add a nested group entry.
    pub fn group(mut self, name: impl Into<String>, group: SchemaMap) -> Self {
        self.entries.push(SchemaEntry {
            name: name.into(),
            node: SchemaNode::Group(group),
        });
        self
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }

    /// Look up a node by entry name.
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.node)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A named, reusable document shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    /// Schema name; doubles as the default collection name when seeding
    name: String,

    /// The declared shape
    fields: SchemaMap,
}

impl Schema {
    /// Declare a schema over the given mapping.
    pub fn new(name: impl Into<String>, fields: SchemaMap) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Load a schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Schema name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared shape.
    pub fn fields(&self) -> &SchemaMap {
        &self.fields
    }

    /// Generate one document from the declared shape.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Document, GenerateError> {
        object::generate_map(rng, &self.fields)
    }

    /// Generate one document and merge the given overrides into it.
    pub fn generate_with<R: Rng>(
        &self,
        rng: &mut R,
        overrides: &Overrides,
    ) -> Result<Document, GenerateError> {
        let mut document = object::generate_map(rng, &self.fields)?;
        overrides.apply_to(&mut document);
        Ok(document)
    }
}
