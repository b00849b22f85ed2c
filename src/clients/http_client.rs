//! HTTP client for GBIF API communication.
//!
//! This module provides the [`HttpClient`] type, which performs exactly one
//! GET exchange per call and maps the outcome onto [`HttpResponse`] or
//! [`HttpError`].

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, GbifConfig, Password, TransportOptions};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name from Cargo.toml.
pub const SDK_NAME: &str = env!("CARGO_PKG_NAME");

/// Name and major version of the HTTP library, as reported in the user agent.
pub const HTTP_LIBRARY: &str = "reqwest/v0.11";

/// HTTP client for making requests to the GBIF API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers (`User-Agent`, `X-User-Agent`, `Accept`)
/// - Basic authentication when credentials are configured
/// - Transport options (timeouts, proxy, local address)
/// - Mapping of non-2xx statuses to typed errors
///
/// There is no retry logic: every call is a single round trip.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use gbif::GbifConfig;
/// use gbif::clients::{HttpClient, HttpRequest};
///
/// let client = HttpClient::new(&GbifConfig::default())?;
///
/// let request = HttpRequest::builder("species/match")
///     .query_param("name", "Helianthus")
///     .build()?;
///
/// let response = client.request(request).await?;
/// println!("{}", response.body["usageKey"]);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.gbif.org/v1`).
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Basic-auth credentials.
    credentials: Option<(String, Password)>,
    /// Transport defaults from the configuration.
    transport: TransportOptions,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Client`] if the underlying `reqwest` client cannot
    /// be built from the transport options (for example an unusable proxy).
    ///
    /// # Example
    ///
    /// ```rust
    /// use gbif::GbifConfig;
    /// use gbif::clients::HttpClient;
    ///
    /// let client = HttpClient::new(&GbifConfig::default()).unwrap();
    /// assert_eq!(client.base_url().as_ref(), "https://api.gbif.org/v1");
    /// ```
    pub fn new(config: &GbifConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}{SDK_NAME}/v{SDK_VERSION} {HTTP_LIBRARY}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent.clone());
        default_headers.insert("X-User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let credentials = config
            .credentials()
            .map(|(user, password)| (user.to_string(), password.clone()));

        let client = Self::build_client(config.transport())?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            default_headers,
            credentials,
            transport: config.transport().clone(),
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the user agent sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.default_headers
            .get("User-Agent")
            .map_or("", String::as_str)
    }

    /// Returns `true` if requests carry basic-auth credentials.
    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Sends a GET request to the GBIF API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A per-request transport cannot be built (`Client`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`BadRequest`, `NotFound`, ... or `Response`)
    /// - A 2xx response body is not JSON (`Decode`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);

        let overrides = request.transport.as_ref().filter(|t| !t.is_empty());
        let dedicated;
        let client = match overrides {
            Some(options) if !options.is_timeout_only() => {
                dedicated = Self::build_client(&self.transport.overlay(options))?;
                &dedicated
            }
            _ => &self.client,
        };

        let mut req_builder = client.get(&url);

        if let Some(timeout) = overrides.and_then(|t| t.timeout) {
            req_builder = req_builder.timeout(timeout);
        }

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                req_builder = req_builder.header(key, value);
            }
        }

        if let Some((user, password)) = &self.credentials {
            req_builder = req_builder.basic_auth(user, Some(password.as_ref()));
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if request.verbose {
            tracing::info!("GET {url} query={:?}", request.query);
        } else {
            tracing::debug!("GET {url}");
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        if request.verbose {
            tracing::info!("{code} from {url} headers={res_headers:?}");
        }
        let body_text = res.text().await?;

        if !(200..=299).contains(&code) {
            let error_reference = res_headers
                .get("x-request-id")
                .and_then(|values| values.first())
                .cloned();
            return Err(HttpError::from_response(HttpResponseError {
                code,
                message: body_text,
                error_reference,
            }));
        }

        let body = if body_text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&body_text).map_err(|source| HttpError::Decode {
                path: request.path.clone(),
                source,
            })?
        };

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Builds a `reqwest` client honouring the given transport options.
    fn build_client(transport: &TransportOptions) -> Result<reqwest::Client, HttpError> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();

        if let Some(timeout) = transport.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = transport.open_timeout {
            builder = builder.connect_timeout(timeout);
        }

        if let Some(options) = &transport.proxy {
            let mut proxy = reqwest::Proxy::all(options.uri()).map_err(|e| HttpError::Client {
                message: format!("invalid proxy '{}': {e}", options.uri()),
            })?;
            if let (Some(user), Some(password)) = (options.user(), options.password()) {
                proxy = proxy.basic_auth(user, password.as_ref());
            }
            builder = builder.proxy(proxy);
        }

        if let Some(bind) = transport.bind {
            if bind.port != 0 {
                tracing::warn!(
                    "Ignoring bind port {} for local address {}: only the address can be bound",
                    bind.port,
                    bind.host
                );
            }
            builder = builder.local_address(bind.host);
        }

        builder.build().map_err(|e| HttpError::Client {
            message: e.to_string(),
        })
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
