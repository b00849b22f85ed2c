//! Paging metadata for list responses.
//!
//! GBIF list endpoints return an object with `offset`, `limit`,
//! `endOfRecords`, `count` and a `results` array. Operations return the raw
//! JSON; [`PageMeta`] is an optional read-only view for callers who page
//! manually.
//!
//! # Example
//!
//! ```rust
//! use gbif::rest::PageMeta;
//! use serde_json::json;
//!
//! let body = json!({
//!     "offset": 0,
//!     "limit": 20,
//!     "endOfRecords": false,
//!     "count": 93,
//!     "results": []
//! });
//!
//! let meta = PageMeta::from_value(&body).unwrap();
//! assert_eq!(meta.next_offset(), Some(20));
//! ```

use serde::Deserialize;
use serde_json::Value;

/// Paging fields of a list response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Offset of the first returned record.
    pub offset: Option<u64>,
    /// Page size used by the server.
    pub limit: Option<u64>,
    /// Whether this page is the last one.
    pub end_of_records: Option<bool>,
    /// Total number of matching records, when the endpoint reports it.
    pub count: Option<u64>,
}

impl PageMeta {
    /// Extracts paging metadata from a response body.
    ///
    /// Returns `None` if the body is not an object or carries none of the
    /// paging fields.
    #[must_use]
    pub fn from_value(body: &Value) -> Option<Self> {
        let object = body.as_object()?;
        let meta = Self {
            offset: object.get("offset").and_then(Value::as_u64),
            limit: object.get("limit").and_then(Value::as_u64),
            end_of_records: object.get("endOfRecords").and_then(Value::as_bool),
            count: object.get("count").and_then(Value::as_u64),
        };
        (meta != Self::default()).then_some(meta)
    }

    /// Returns `true` only if the server reported `endOfRecords: false`.
    ///
    /// A response without `endOfRecords` is treated as the last page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.end_of_records == Some(false)
    }

    /// Returns the offset of the next page, if there is one.
    ///
    /// `None` if this is the last page, `limit` is missing, or the sum does
    /// not fit in a `u64`.
    #[must_use]
    pub fn next_offset(&self) -> Option<u64> {
        if !self.has_more() {
            return None;
        }
        self.offset.unwrap_or(0).checked_add(self.limit?)
    }
}

/// Returns the `results` array of a list response, or an empty slice.
#[must_use]
pub fn results(body: &Value) -> &[Value] {
    body.get("results")
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}
