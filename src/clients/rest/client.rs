//! REST client implementation for the GBIF API.
//!
//! This module provides the [`RestClient`] type, which normalizes paths,
//! applies per-call options and returns the decoded JSON body.

use crate::clients::{HttpClient, HttpRequest};
use crate::config::{GbifConfig, TransportOptions};
use crate::rest::{GbifError, QueryParams};

/// Per-call overrides.
///
/// # Example
///
/// ```rust
/// use gbif::{CallOptions, TransportOptions};
/// use std::time::Duration;
///
/// let options = CallOptions::new()
///     .verbose(true)
///     .transport(TransportOptions::new().timeout(Duration::from_secs(5)));
///
/// assert_eq!(options.verbose, Some(true));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Overrides the configured `verbose` flag for this call.
    pub verbose: Option<bool>,
    /// Transport overrides for this call.
    pub transport: Option<TransportOptions>,
}

impl CallOptions {
    /// Creates empty call options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables request logging for this call.
    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Sets transport overrides for this call.
    #[must_use]
    pub fn transport(mut self, transport: TransportOptions) -> Self {
        self.transport = Some(transport);
        self
    }
}

/// REST client for the GBIF API.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use gbif::{GbifConfig, RestClient};
///
/// let client = RestClient::new(&GbifConfig::default())?;
///
/// let body = client.get("species/3119134", None, None).await?;
/// println!("{}", body["scientificName"]);
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// Default for [`CallOptions::verbose`].
    verbose: bool,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the given configuration.
    ///
    /// The configuration is copied; later changes to it do not affect the
    /// client.
    ///
    /// # Errors
    ///
    /// Returns [`GbifError::Http`] if the HTTP transport cannot be built.
    pub fn new(config: &GbifConfig) -> Result<Self, GbifError> {
        let http_client = HttpClient::new(config)?;

        tracing::debug!(
            "Created GBIF REST client for {} (verbose: {})",
            config.base_url(),
            config.verbose()
        );

        Ok(Self {
            http_client,
            verbose: config.verbose(),
        })
    }

    /// Creates a new REST client from the process-wide default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GbifError::Http`] if the HTTP transport cannot be built.
    pub fn from_global() -> Result<Self, GbifError> {
        Self::new(&GbifConfig::global())
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns whether requests are logged when no per-call flag is given.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Sends a GET request and returns the decoded JSON body.
    ///
    /// # Arguments
    ///
    /// * `path` - The path relative to the base URL (e.g., "species/match")
    /// * `query` - Optional query pairs
    /// * `options` - Optional per-call overrides
    ///
    /// # Errors
    ///
    /// Returns [`GbifError::Http`] with `InvalidRequest` if the path is empty,
    /// or any other [`HttpError`](crate::clients::HttpError) from the exchange.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use gbif::rest::QueryParams;
    ///
    /// let query: QueryParams = [("name", "Puma concolor")].into_iter().collect();
    /// let body = client.get("species/match", Some(query), None).await?;
    /// ```
    pub async fn get(
        &self,
        path: &str,
        query: Option<QueryParams>,
        options: Option<CallOptions>,
    ) -> Result<serde_json::Value, GbifError> {
        let options = options.unwrap_or_default();

        let mut builder = HttpRequest::builder(normalize_path(path))
            .verbose(options.verbose.unwrap_or(self.verbose));

        if let Some(query) = query {
            builder = builder.query(query.into_pairs());
        }
        if let Some(transport) = options.transport {
            builder = builder.transport(transport);
        }

        let request = builder.build()?;
        let response = self.http_client.request(request).await?;
        Ok(response.into_body())
    }
}

/// Strips leading `/` characters. A trailing `/` is significant and kept.
fn normalize_path(path: &str) -> String {
    path.trim().trim_start_matches('/').to_string()
}
