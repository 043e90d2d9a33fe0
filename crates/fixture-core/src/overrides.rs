//! Dotted-path overrides: pinning literal values inside generated documents.
//!
//! Override keys are flat strings whose path segments are joined by
//! [`PATH_SEPARATOR`] (`parent__child__leaf`). There is no escaping: keys
//! are split on every occurrence of the separator, so a field name that
//! itself contains `__` cannot be addressed literally.
//!
//! Overrides never consult the schema. A path that names nothing the
//! schema declares simply adds that key, creating intermediate objects as
//! needed, and the overridden value's type is taken as-is.

use crate::value::{Document, Value};
use std::collections::BTreeMap;

/// Separator between path segments in override keys.
pub const PATH_SEPARATOR: &str = "__";

/// A set of literal overrides applied on top of a generated document.
///
/// Two channels feed the set: [`set`](Overrides::set) entries and the bulk
/// [`extra`](Overrides::extra) mapping. On key conflicts `set` wins.
/// Object-valued overrides merge key-wise into whatever was generated;
/// every other value replaces its slot wholesale.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    entries: BTreeMap<String, Value>,
    extra: BTreeMap<String, Value>,
}

impl Overrides {
    /// Create an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the value at a `__`-separated path.
    pub fn set(mut self, path: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(path.into(), value.into());
        self
    }

    /// Supply a bulk mapping of overrides at lower priority than
    /// [`set`](Overrides::set).
    pub fn extra<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in entries {
            self.extra.insert(key.into(), value.into());
        }
        self
    }

    /// Whether no overrides were supplied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.extra.is_empty()
    }

    /// The flat merged mapping: `extra` first, `set` entries on top.
    ///
    /// Keys stay literal here; path splitting only happens in
    /// [`apply_to`](Overrides::apply_to).
    pub fn merged(&self) -> Document {
        let mut merged = self.extra.clone();
        merged.extend(self.entries.clone());
        merged
    }

    /// Split keys into paths, build the nested overrider tree and deep-merge
    /// it into `document`.
    ///
    /// Applying the same overrides twice leaves the document unchanged
    /// after the first application.
    pub fn apply_to(&self, document: &mut Document) {
        deep_merge(document, self.overrider_tree());
    }

    /// Nested mirror of the target document, built by splitting every
    /// merged key on the separator.
    fn overrider_tree(&self) -> Document {
        let mut tree = Document::new();
        for (key, value) in self.merged() {
            let segments: Vec<&str> = key.split(PATH_SEPARATOR).collect();
            set_at_path(&mut tree, &segments, value);
        }
        tree
    }
}

/// Walk `segments` through `tree`, creating intermediate objects, and place
/// `value` at the final segment. A non-object in the way is discarded.
fn set_at_path(tree: &mut Document, segments: &[&str], value: Value) {
    match segments {
        [] => {}
        [leaf] => {
            tree.insert((*leaf).to_string(), value);
        }
        [head, rest @ ..] => {
            let slot = tree
                .entry((*head).to_string())
                .or_insert_with(|| Value::Object(Document::new()));
            if !matches!(slot, Value::Object(_)) {
                *slot = Value::Object(Document::new());
            }
            if let Value::Object(inner) = slot {
                set_at_path(inner, rest, value);
            }
        }
    }
}

/// Merge the overrider tree into the generated document.
///
/// Object nodes recurse into the sub-object at the same key, replacing any
/// non-object value already there; every other node overwrites its slot.
fn deep_merge(document: &mut Document, tree: Document) {
    for (key, value) in tree {
        match value {
            Value::Object(subtree) => {
                let slot = document
                    .entry(key)
                    .or_insert_with(|| Value::Object(Document::new()));
                if !matches!(slot, Value::Object(_)) {
                    *slot = Value::Object(Document::new());
                }
                if let Value::Object(sub_document) = slot {
                    deep_merge(sub_document, subtree);
                }
            }
            value => {
                document.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(pairs: &[(&str, Value)]) -> Document {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_top_level_override() {
        let mut document = doc(&[("age", Value::Int(30))]);
        Overrides::new().set("age", 99i64).apply_to(&mut document);
        assert_eq!(document["age"], Value::Int(99));
    }

    #[test]
    fn test_nested_path_override() {
        let mut document = doc(&[(
            "profile",
            Value::Object(doc(&[
                ("bio", Value::String("generated".to_string())),
                ("plan", Value::String("free".to_string())),
            ])),
        )]);

        Overrides::new()
            .set("profile__bio", "pinned")
            .apply_to(&mut document);

        let profile = document["profile"].as_object().unwrap();
        // Sibling keys inside the object survive the merge.
        assert_eq!(profile["bio"], Value::String("pinned".to_string()));
        assert_eq!(profile["plan"], Value::String("free".to_string()));
    }

    #[test]
    fn test_override_creates_missing_path() {
        let mut document = Document::new();
        Overrides::new()
            .set("a__b__c", 1i64)
            .apply_to(&mut document);

        let a = document["a"].as_object().unwrap();
        let b = a["b"].as_object().unwrap();
        assert_eq!(b["c"], Value::Int(1));
    }

    #[test]
    fn test_override_replaces_scalar_with_object() {
        let mut document = doc(&[("slot", Value::Int(5))]);
        Overrides::new()
            .set("slot__inner", true)
            .apply_to(&mut document);

        let slot = document["slot"].as_object().unwrap();
        assert_eq!(slot["inner"], Value::Bool(true));
    }

    #[test]
    fn test_non_object_override_replaces_wholesale() {
        let mut document = doc(&[(
            "profile",
            Value::Object(doc(&[("bio", Value::String("x".to_string()))])),
        )]);

        Overrides::new().set("profile", 42i64).apply_to(&mut document);
        assert_eq!(document["profile"], Value::Int(42));
    }

    #[test]
    fn test_type_is_never_checked() {
        let mut document = doc(&[("age", Value::Int(30))]);
        Overrides::new()
            .set("age", "not a number")
            .apply_to(&mut document);
        assert_eq!(document["age"], Value::String("not a number".to_string()));
    }

    #[test]
    fn test_set_beats_extra() {
        let overrides = Overrides::new()
            .set("age", 99i64)
            .extra([("age", Value::Int(1)), ("city", Value::from("paris"))]);

        let merged = overrides.merged();
        assert_eq!(merged["age"], Value::Int(99));
        assert_eq!(merged["city"], Value::String("paris".to_string()));
    }

    #[test]
    fn test_merged_keys_stay_literal() {
        let merged = Overrides::new().set("a__b", 1i64).merged();
        assert!(merged.contains_key("a__b"));
        assert!(!merged.contains_key("a"));
    }

    #[test]
    fn test_apply_twice_is_idempotent() {
        let mut document = doc(&[
            ("age", Value::Int(30)),
            ("profile", Value::Object(doc(&[("bio", Value::from("x"))]))),
        ]);
        let overrides = Overrides::new()
            .set("age", 99i64)
            .set("profile__bio", "pinned");

        overrides.apply_to(&mut document);
        let once = document.clone();
        overrides.apply_to(&mut document);

        assert_eq!(document, once);
    }

    #[test]
    fn test_sibling_paths_share_intermediates() {
        let mut document = Document::new();
        Overrides::new()
            .set("n__a", 1i64)
            .set("n__b", 2i64)
            .apply_to(&mut document);

        let n = document["n"].as_object().unwrap();
        assert_eq!(n.len(), 2);
        assert_eq!(n["a"], Value::Int(1));
        assert_eq!(n["b"], Value::Int(2));
    }

    #[test]
    fn test_empty_overrides_leave_document_alone() {
        let mut document = doc(&[("age", Value::Int(30))]);
        let before = document.clone();
        let overrides = Overrides::new();

        assert!(overrides.is_empty());
        overrides.apply_to(&mut document);
        assert_eq!(document, before);
    }
}
