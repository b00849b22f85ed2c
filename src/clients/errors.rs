//! HTTP-specific error types for the GBIF client.
//!
//! - [`HttpResponseError`]: the details of a non-2xx response
//! - [`InvalidHttpRequestError`]: a request that failed validation before sending
//! - [`HttpError`]: unified error type for everything that can go wrong on the wire
//!
//! Non-2xx statuses the GBIF API is known to return are mapped to dedicated
//! variants so callers can match on them directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use gbif::clients::HttpError;
//!
//! match client.get("species/0", None, None).await {
//!     Ok(body) => println!("{body}"),
//!     Err(HttpError::NotFound(e)) => println!("no such record: {}", e.message),
//!     Err(e) if e.is_server_error() => println!("GBIF is having trouble: {e}"),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Details of a non-successful HTTP response.
///
/// `message` holds the raw response body, which the GBIF API usually fills
/// with a short plain-text or JSON explanation.
///
/// # Example
///
/// ```rust
/// use gbif::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "Not found".to_string(),
///     error_reference: None,
/// };
///
/// assert_eq!(error.to_string(), "404: Not found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body as text.
    pub message: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty after normalization.
    #[error("Request path cannot be empty.")]
    EmptyPath,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// 400 Bad Request.
    #[error("Bad request ({0})")]
    BadRequest(HttpResponseError),

    /// 404 Not Found.
    #[error("Not found ({0})")]
    NotFound(HttpResponseError),

    /// 500 Internal Server Error.
    #[error("Internal server error ({0})")]
    InternalServerError(HttpResponseError),

    /// 502 Bad Gateway.
    #[error("Bad gateway ({0})")]
    BadGateway(HttpResponseError),

    /// 503 Service Unavailable.
    #[error("Service unavailable ({0})")]
    ServiceUnavailable(HttpResponseError),

    /// 504 Gateway Timeout.
    #[error("Gateway timeout ({0})")]
    GatewayTimeout(HttpResponseError),

    /// Any other non-2xx response.
    #[error("Unexpected response ({0})")]
    Response(HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A 2xx response whose body is not valid JSON.
    #[error("Invalid JSON in response from '{path}': {source}")]
    Decode {
        /// The request path.
        path: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The HTTP transport could not be built.
    #[error("Failed to build HTTP client: {message}")]
    Client {
        /// Description of the failure.
        message: String,
    },
}

impl HttpError {
    /// Maps a non-2xx response to the matching variant.
    #[must_use]
    pub fn from_response(error: HttpResponseError) -> Self {
        match error.code {
            400 => Self::BadRequest(error),
            404 => Self::NotFound(error),
            500 => Self::InternalServerError(error),
            502 => Self::BadGateway(error),
            503 => Self::ServiceUnavailable(error),
            504 => Self::GatewayTimeout(error),
            _ => Self::Response(error),
        }
    }

    /// Returns the response details if this error came from a non-2xx response.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponseError> {
        match self {
            Self::BadRequest(e)
            | Self::NotFound(e)
            | Self::InternalServerError(e)
            | Self::BadGateway(e)
            | Self::ServiceUnavailable(e)
            | Self::GatewayTimeout(e)
            | Self::Response(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.response().map(|e| e.code)
    }

    /// Returns `true` for 5xx responses.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|code| (500..600).contains(&code))
    }
}
