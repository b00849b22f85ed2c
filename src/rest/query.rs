//! Parameter normalization.
//!
//! Endpoint parameters are plain structs deriving `Serialize`. Unset fields
//! are `None` and skipped; wire names come from `#[serde(rename = ...)]`.
//! [`serialize_to_query`] turns such a struct into [`QueryParams`], the
//! ordered list of `(key, value)` pairs that is appended to the request URL.
//!
//! Encoding rules:
//!
//! - `null` values produce no entry
//! - strings pass through, numbers use their decimal form, booleans become
//!   `true` / `false`
//! - arrays become repeated keys (`issue=A&issue=B`); an empty array produces
//!   no entry
//! - nested objects are sent as compact JSON text
//!
//! # Example
//!
//! ```rust
//! use gbif::rest::serialize_to_query;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Params {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     q: Option<String>,
//!     issue: Vec<&'static str>,
//!     strict: bool,
//! }
//!
//! let query = serialize_to_query(&Params {
//!     q: None,
//!     issue: vec!["A", "B"],
//!     strict: false,
//! })
//! .unwrap();
//!
//! assert_eq!(query.get_all("issue"), vec!["A", "B"]);
//! assert_eq!(query.get("strict"), Some("false"));
//! assert!(query.get("q").is_none());
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::rest::GbifError;

/// Ordered query-string pairs. Keys may repeat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Creates an empty set of query pairs.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a pair.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Returns the first value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value for `key`, in order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns `true` if at least one pair has the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Consumes the parameters and returns the raw pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<QueryParams> for Vec<(String, String)> {
    fn from(params: QueryParams) -> Self {
        params.into_pairs()
    }
}

/// Serializes a params struct into query pairs.
///
/// A top-level object is encoded field by field. A top-level list of
/// `[key, value]` pairs (such as a serialized [`QueryParams`]) is re-encoded
/// pair by pair, which makes normalization idempotent. Any other top level,
/// including `()`, yields no pairs.
///
/// # Errors
///
/// Returns [`GbifError::InvalidParams`] if `params` cannot be serialized.
pub fn serialize_to_query<T: Serialize + ?Sized>(params: &T) -> Result<QueryParams, GbifError> {
    let value = serde_json::to_value(params).map_err(|e| GbifError::InvalidParams {
        message: format!("Failed to serialize params: {e}"),
    })?;

    let mut query = QueryParams::new();

    match value {
        Value::Object(map) => {
            for (key, val) in map {
                push_value(&mut query, &key, val);
            }
        }
        Value::Array(items) => {
            for item in items {
                if let Value::Array(pair) = item {
                    if let [Value::String(key), val] = pair.as_slice() {
                        push_value(&mut query, key, val.clone());
                    }
                }
            }
        }
        _ => {}
    }

    Ok(query)
}

fn push_value(query: &mut QueryParams, key: &str, value: Value) {
    match value {
        Value::Null => {}
        Value::String(s) => query.push(key, s),
        Value::Number(n) => query.push(key, n.to_string()),
        Value::Bool(b) => query.push(key, b.to_string()),
        Value::Array(items) => {
            for item in items {
                if !matches!(item, Value::Array(_)) {
                    push_value(query, key, item);
                }
            }
        }
        Value::Object(_) => query.push(key, value.to_string()),
    }
}
