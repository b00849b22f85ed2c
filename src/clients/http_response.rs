//! HTTP response type for the GBIF client.

use std::collections::HashMap;

/// A successful HTTP response from the GBIF API.
///
/// Header names are stored lowercased; a header may carry several values.
///
/// # Example
///
/// ```rust
/// use gbif::clients::HttpResponse;
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-request-id".to_string(), vec!["abc".to_string()]);
///
/// let response = HttpResponse::new(200, headers, json!({"usageKey": 3119134}));
/// assert!(response.is_ok());
/// assert_eq!(response.request_id(), Some("abc"));
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body. `Null` when the body was empty.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Consumes the response and returns its body.
    #[must_use]
    pub fn into_body(self) -> serde_json::Value {
        self.body
    }
}
