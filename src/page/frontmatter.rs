//! Page frontmatter with presence and truthiness queries.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::JsonMap;

/// Frontmatter parsed from a document's metadata block.
///
/// Keys keep their source order. No schema is enforced here: any key may hold
/// any value, and callers decide whether they care about presence
/// ([`contains`](Self::contains)) or truthiness ([`is_truthy`](Self::is_truthy)).
///
/// # Known Fields
///
/// | Field        | Type                 | Used by                       |
/// |--------------|----------------------|-------------------------------|
/// | `home`       | `bool`               | page type                     |
/// | `layout`     | `String`             | page type (`"Slide"`)         |
/// | `article`    | `bool`               | page type                     |
/// | `icon`       | `String`             | route meta                    |
/// | `dir`        | `{ order, index }`   | catalog (takes precedence)    |
/// | `order`      | `Number`             | catalog                       |
/// | `index`      | `bool`               | catalog (`false` hides page)  |
/// | `shortTitle` | `String`             | route meta                    |
/// | `date`       | `String`             | localized date                |
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frontmatter(JsonMap);

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` is present, regardless of its value (`"key" in fm`).
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    /// Whether `key` holds a truthy value. Absent keys are falsy.
    #[inline]
    pub fn is_truthy(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(is_truthy)
    }

    /// Whether `key` holds exactly `false` (not merely a falsy value).
    #[inline]
    pub fn is_false(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(JsonValue::Bool(false)))
    }

    /// String value of `key`, if it is a string.
    #[inline]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(JsonValue::as_str)
    }

    /// The `dir` field, only when it is a plain mapping.
    pub fn dir(&self) -> Option<&JsonMap> {
        self.0.get("dir").and_then(JsonValue::as_object)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Option<JsonValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
        self.0.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn as_map(&self) -> &JsonMap {
        &self.0
    }
}

impl From<JsonMap> for Frontmatter {
    fn from(map: JsonMap) -> Self {
        Self(map)
    }
}

/// JavaScript truthiness for a JSON value.
///
/// `false`, `null`, `0` and `""` are falsy. Empty arrays and objects are truthy.
pub fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}
