//! Field generators and their shared presence semantics.
//!
//! A [`Field`] pairs a value-producing [`FieldKind`] with the probabilistic
//! modifiers shared by every kind: whether the key appears at all, and
//! whether the value is replaced by null or by the kind's blank shape.
//! The type-specific production rules live in the submodules.

pub(crate) mod array;
pub(crate) mod numeric;
pub(crate) mod object;
pub(crate) mod text;

use crate::error::GenerateError;
use crate::schema::SchemaMap;
use crate::value::{Document, Value};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default charset for string fields: ASCII letters and digits.
pub const DEFAULT_CHARSET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn default_true() -> bool {
    true
}

fn default_int_max() -> i64 {
    100
}

fn default_double_max() -> f64 {
    1.0
}

fn default_min_length() -> usize {
    1
}

fn default_max_length() -> usize {
    10
}

fn default_charset() -> String {
    DEFAULT_CHARSET.to_string()
}

/// The value-producing rule of a field.
///
/// Every variant draws uniformly: numbers from an inclusive range (or a
/// fixed choice list), strings from a charset with a random length, arrays
/// from a pool of element fields, objects from a nested schema mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Uniform random integer in `[min_value, max_value]`.
    Integer {
        /// Lower bound (inclusive)
        #[serde(default)]
        min_value: i64,
        /// Upper bound (inclusive)
        #[serde(default = "default_int_max")]
        max_value: i64,
        /// Fixed values drawn uniformly instead of the range
        #[serde(default, skip_serializing_if = "Option::is_none")]
        choices: Option<Vec<i64>>,
    },

    /// Uniform random double in `[min_value, max_value]`.
    Double {
        /// Lower bound (inclusive)
        #[serde(default)]
        min_value: f64,
        /// Upper bound (inclusive)
        #[serde(default = "default_double_max")]
        max_value: f64,
        /// Fixed values drawn uniformly instead of the range
        #[serde(default, skip_serializing_if = "Option::is_none")]
        choices: Option<Vec<f64>>,
    },

    /// Uniform true/false.
    Boolean,

    /// Random string over a charset, with a uniform random length.
    String {
        /// Shortest length (inclusive)
        #[serde(default = "default_min_length")]
        min_length: usize,
        /// Longest length (inclusive)
        #[serde(default = "default_max_length")]
        max_length: usize,
        /// Characters to draw from
        #[serde(default = "default_charset")]
        charset: String,
        /// Fixed values drawn uniformly instead of charset strings
        #[serde(default, skip_serializing_if = "Option::is_none")]
        choices: Option<Vec<String>>,
    },

    /// Array whose items each come from a uniformly-chosen element field.
    Array {
        /// Candidate fields for each item
        elements: Vec<Field>,
        /// Shortest length (inclusive)
        #[serde(default = "default_min_length")]
        min_length: usize,
        /// Longest length (inclusive)
        #[serde(default = "default_max_length")]
        max_length: usize,
    },

    /// Nested object generated from a schema mapping.
    Object {
        /// Shape of the nested document
        fields: SchemaMap,
    },
}

impl FieldKind {
    /// The type-specific "empty" value substituted on the blank branch.
    pub fn blank_value(&self) -> Value {
        match self {
            FieldKind::Integer { .. } => Value::Int(0),
            FieldKind::Double { .. } => Value::Double(0.0),
            FieldKind::Boolean => Value::Bool(false),
            FieldKind::String { .. } => Value::String(String::new()),
            FieldKind::Array { .. } => Value::Array(Vec::new()),
            FieldKind::Object { .. } => Value::Object(Document::new()),
        }
    }

    /// Produce one value according to this kind's rule.
    fn generate_value<R: Rng>(&self, rng: &mut R) -> Result<Value, GenerateError> {
        match self {
            FieldKind::Integer {
                min_value,
                max_value,
                choices,
            } => match choices {
                Some(choices) => numeric::choose_int(rng, choices),
                None => numeric::int_range(rng, *min_value, *max_value),
            },

            FieldKind::Double {
                min_value,
                max_value,
                choices,
            } => match choices {
                Some(choices) => numeric::choose_double(rng, choices),
                None => numeric::double_range(rng, *min_value, *max_value),
            },

            FieldKind::Boolean => Ok(Value::Bool(rng.gen_bool(0.5))),

            FieldKind::String {
                min_length,
                max_length,
                charset,
                choices,
            } => match choices {
                Some(choices) => text::choose_string(rng, choices),
                None => text::string_from_charset(rng, *min_length, *max_length, charset),
            },

            FieldKind::Array {
                elements,
                min_length,
                max_length,
            } => array::array_of_fields(rng, elements, *min_length, *max_length),

            FieldKind::Object { fields } => {
                Ok(Value::Object(object::generate_map(rng, fields)?))
            }
        }
    }
}

/// A configured value generator with shared probabilistic modifiers.
///
/// Fields hold no generation state: every draw comes from the
/// caller-supplied RNG, so one declared field can back any number of
/// [`generate`](Field::generate) calls, and a seeded RNG replays the same
/// outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    #[serde(flatten)]
    kind: FieldKind,

    /// Whether the key must always be present in generated output.
    #[serde(default = "default_true")]
    required: bool,

    /// Probability that a non-required field is omitted entirely.
    #[serde(default)]
    not_present_prob: f64,

    /// Whether the field may produce null.
    #[serde(default)]
    nullable: bool,

    /// Probability of the null branch when nullable.
    #[serde(default)]
    null_prob: f64,

    /// Whether the field may produce its blank shape.
    #[serde(default)]
    blankable: bool,

    /// Probability of the blank branch when blankable.
    #[serde(default)]
    blank_prob: f64,
}

impl From<FieldKind> for Field {
    fn from(kind: FieldKind) -> Self {
        Self {
            kind,
            required: true,
            not_present_prob: 0.0,
            nullable: false,
            null_prob: 0.0,
            blankable: false,
            blank_prob: 0.0,
        }
    }
}

impl Field {
    /// Integer field over the default `[0, 100]` range.
    pub fn integer() -> Self {
        Self::integer_in(0, 100)
    }

    /// Integer field over `[min_value, max_value]`.
    pub fn integer_in(min_value: i64, max_value: i64) -> Self {
        FieldKind::Integer {
            min_value,
            max_value,
            choices: None,
        }
        .into()
    }

    /// Integer field drawing uniformly from fixed choices.
    pub fn integer_choices(choices: Vec<i64>) -> Self {
        FieldKind::Integer {
            min_value: 0,
            max_value: default_int_max(),
            choices: Some(choices),
        }
        .into()
    }

    /// Double field over the default `[0.0, 1.0]` range.
    pub fn double() -> Self {
        Self::double_in(0.0, 1.0)
    }

    /// Double field over `[min_value, max_value]`.
    pub fn double_in(min_value: f64, max_value: f64) -> Self {
        FieldKind::Double {
            min_value,
            max_value,
            choices: None,
        }
        .into()
    }

    /// Double field drawing uniformly from fixed choices.
    pub fn double_choices(choices: Vec<f64>) -> Self {
        FieldKind::Double {
            min_value: 0.0,
            max_value: default_double_max(),
            choices: Some(choices),
        }
        .into()
    }

    /// Boolean field, uniform true/false.
    pub fn boolean() -> Self {
        FieldKind::Boolean.into()
    }

    /// String field over the default charset, length in `[1, 10]`.
    pub fn string() -> Self {
        Self::string_len(default_min_length(), default_max_length())
    }

    /// String field over the default charset, length in `[min_length, max_length]`.
    pub fn string_len(min_length: usize, max_length: usize) -> Self {
        FieldKind::String {
            min_length,
            max_length,
            charset: default_charset(),
            choices: None,
        }
        .into()
    }

    /// String field over a custom charset, length in `[1, 10]`.
    pub fn string_charset(charset: impl Into<String>) -> Self {
        FieldKind::String {
            min_length: default_min_length(),
            max_length: default_max_length(),
            charset: charset.into(),
            choices: None,
        }
        .into()
    }

    /// String field drawing uniformly from fixed choices.
    pub fn string_choices<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldKind::String {
            min_length: default_min_length(),
            max_length: default_max_length(),
            charset: default_charset(),
            choices: Some(choices.into_iter().map(Into::into).collect()),
        }
        .into()
    }

    /// Array field with one element field, length in `[1, 10]`.
    pub fn array(element: Field) -> Self {
        Self::array_of(vec![element])
    }

    /// Array field with several candidate element fields, length in `[1, 10]`.
    pub fn array_of(elements: Vec<Field>) -> Self {
        FieldKind::Array {
            elements,
            min_length: default_min_length(),
            max_length: default_max_length(),
        }
        .into()
    }

    /// Array field with one element field and a custom length range.
    pub fn array_len(element: Field, min_length: usize, max_length: usize) -> Self {
        FieldKind::Array {
            elements: vec![element],
            min_length,
            max_length,
        }
        .into()
    }

    /// Object field generated from a nested schema mapping.
    pub fn object(fields: SchemaMap) -> Self {
        FieldKind::Object { fields }.into()
    }

    /// Allow the field to be omitted with the given probability.
    pub fn optional(mut self, not_present_prob: f64) -> Self {
        self.required = false;
        self.not_present_prob = not_present_prob;
        self
    }

    /// Allow the field to produce null with the given probability.
    pub fn nullable(mut self, null_prob: f64) -> Self {
        self.nullable = true;
        self.null_prob = null_prob;
        self
    }

    /// Allow the field to produce its blank shape with the given probability.
    pub fn blankable(mut self, blank_prob: f64) -> Self {
        self.blankable = true;
        self.blank_prob = blank_prob;
        self
    }

    /// The value-producing rule.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Whether the key always appears in generated output.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Generate one value.
    ///
    /// Returns `Ok(None)` when a non-required field opts out of presence
    /// for this draw; callers omit the key entirely in that case. Both
    /// random draws below happen on every call so that a field's RNG
    /// consumption does not depend on its configuration.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Option<Value>, GenerateError> {
        let presence = rng.gen::<f64>();
        if !self.required && presence < self.not_present_prob {
            return Ok(None);
        }

        // One draw decides between null, blank and a real value: null owns
        // [0, null_prob), blank owns [null_prob, null_prob + blank_prob).
        let branch = rng.gen::<f64>();
        if self.nullable && branch < self.null_prob {
            return Ok(Some(Value::Null));
        }
        if self.blankable && branch < self.null_prob + self.blank_prob {
            return Ok(Some(self.kind.blank_value()));
        }

        self.kind.generate_value(rng).map(Some)
    }
}
