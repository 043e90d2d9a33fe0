//! Error types for document generation and persistence.

use thiserror::Error;

/// Errors that can occur while generating a value from a field.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Integer range is inverted.
    #[error("Invalid integer bounds: min {min} > max {max}")]
    InvalidIntegerBounds {
        /// Configured lower bound
        min: i64,
        /// Configured upper bound
        max: i64,
    },

    /// Double range is inverted.
    #[error("Invalid double bounds: min {min} > max {max}")]
    InvalidDoubleBounds {
        /// Configured lower bound
        min: f64,
        /// Configured upper bound
        max: f64,
    },

    /// String or array length range is inverted.
    #[error("Invalid length bounds: min {min} > max {max}")]
    InvalidLengthBounds {
        /// Configured lower bound
        min: usize,
        /// Configured upper bound
        max: usize,
    },

    /// A string field needs characters but its charset is empty.
    #[error("String field has an empty charset")]
    EmptyCharset,

    /// A field was configured with an empty choice list.
    #[error("Choice list is empty")]
    EmptyChoices,

    /// An array field needs elements but has no element fields.
    #[error("Array field has no element fields")]
    NoElementFields,

    /// An array element field opted out of presence mid-array.
    #[error("Array element field opted out of presence; element fields must be required")]
    ElementNotPresent,
}

/// Errors that can occur while loading a schema definition.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Error surfaced unmodified from a persistence collaborator.
///
/// Sinks wrap whatever their driver raised; nothing on the generation side
/// retries or reinterprets it.
#[derive(Error, Debug)]
#[error("Sink error: {source}")]
pub struct SinkError {
    #[from]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl SinkError {
    /// Wrap a collaborator error.
    pub fn new<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            source: Box::new(source),
        }
    }
}

/// Errors that can occur during a generate-and-persist run.
#[derive(Error, Debug)]
pub enum SeedError {
    /// Document generation failed.
    #[error("Generate error: {0}")]
    Generate(#[from] GenerateError),

    /// The persistence collaborator failed.
    #[error("{0}")]
    Sink(#[from] SinkError),
}
