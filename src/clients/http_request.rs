//! HTTP request types for the GBIF client.
//!
//! The GBIF read API is GET-only, so [`HttpRequest`] carries a path, an
//! ordered list of query pairs and per-request settings, but no body.

use std::collections::HashMap;

use crate::clients::errors::InvalidHttpRequestError;
use crate::config::TransportOptions;

/// An HTTP GET request to be sent to the GBIF API.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use gbif::clients::HttpRequest;
///
/// let request = HttpRequest::builder("occurrence/search")
///     .query_param("issue", "ZERO_COORDINATE")
///     .query_param("issue", "COUNTRY_MISMATCH")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.query.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The path relative to the base URL.
    pub path: String,
    /// Query pairs in wire order. Repeated keys are allowed.
    pub query: Vec<(String, String)>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Whether to log this exchange at `info` level.
    pub verbose: bool,
    /// Transport overrides for this request only.
    pub transport: Option<TransportOptions>,
}

impl HttpRequest {
    /// Creates a new builder for the given path.
    #[must_use]
    pub fn builder(path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::EmptyPath`] if the path is empty.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }
        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    path: String,
    query: Vec<(String, String)>,
    extra_headers: Option<HashMap<String, String>>,
    verbose: bool,
    transport: Option<TransportOptions>,
}

impl HttpRequestBuilder {
    fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            extra_headers: None,
            verbose: false,
            transport: None,
        }
    }

    /// Sets all query pairs at once, replacing any added so far.
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Appends a single query pair.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Enables or disables request logging.
    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets transport overrides for this request.
    #[must_use]
    pub fn transport(mut self, transport: TransportOptions) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            path: self.path,
            query: self.query,
            extra_headers: self.extra_headers,
            verbose: self.verbose,
            transport: self.transport,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_builder_creates_plain_request() {
        let request = HttpRequest::builder("species/match").build().unwrap();

        assert_eq!(request.path, "species/match");
        assert!(request.query.is_empty());
        assert!(request.extra_headers.is_none());
        assert!(!request.verbose);
        assert!(request.transport.is_none());
    }

    #[test]
    fn test_builder_rejects_empty_path() {
        let result = HttpRequest::builder("").build();
        assert_eq!(result.unwrap_err(), InvalidHttpRequestError::EmptyPath);
    }

    #[test]
    fn test_query_params_keep_order_and_duplicates() {
        let request = HttpRequest::builder("occurrence/search")
            .query_param("issue", "A")
            .query_param("limit", "10")
            .query_param("issue", "B")
            .build()
            .unwrap();

        assert_eq!(
            request.query,
            vec![
                ("issue".to_string(), "A".to_string()),
                ("limit".to_string(), "10".to_string()),
                ("issue".to_string(), "B".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_replaces_previous_pairs() {
        let request = HttpRequest::builder("dataset")
            .query_param("q", "old")
            .query(vec![("q".to_string(), "new".to_string())])
            .build()
            .unwrap();

        assert_eq!(request.query, vec![("q".to_string(), "new".to_string())]);
    }

    #[test]
    fn test_builder_with_headers_verbose_and_transport() {
        let request = HttpRequest::builder("node")
            .header("X-Trace", "1")
            .verbose(true)
            .transport(TransportOptions::new().timeout(Duration::from_secs(3)))
            .build()
            .unwrap();

        assert_eq!(
            request.extra_headers.unwrap().get("X-Trace"),
            Some(&"1".to_string())
        );
        assert!(request.verbose);
        assert_eq!(
            request.transport.and_then(|t| t.timeout),
            Some(Duration::from_secs(3))
        );
    }
}
