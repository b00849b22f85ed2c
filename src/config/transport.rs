//! Transport options forwarded to the underlying HTTP client.
//!
//! These are pass-through settings: the client does not implement timeouts,
//! proxying or local binding itself, it hands them to `reqwest`.

use std::net::IpAddr;
use std::time::Duration;

use super::newtypes::Password;
use crate::error::ConfigError;

/// Proxy server settings.
///
/// # Example
///
/// ```rust
/// use gbif::ProxyOptions;
///
/// let proxy = ProxyOptions::new("http://proxy.example.com:3128")
///     .unwrap()
///     .with_credentials("alice", gbif::Password::new("secret").unwrap());
/// assert_eq!(proxy.user(), Some("alice"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProxyOptions {
    uri: String,
    user: Option<String>,
    password: Option<Password>,
}

impl ProxyOptions {
    /// Creates proxy settings for the given URI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProxyUri`] if the URI has no scheme or host.
    pub fn new(uri: impl Into<String>) -> Result<Self, ConfigError> {
        let uri = uri.into().trim().to_string();

        let host = uri.split_once("://").map(|(scheme, rest)| {
            let host_end = rest.find([':', '/', '?', '#']).unwrap_or(rest.len());
            (scheme, &rest[..host_end])
        });

        match host {
            Some((scheme, host))
                if !scheme.is_empty()
                    && scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '+')
                    && !host.is_empty() =>
            {
                Ok(Self {
                    uri,
                    user: None,
                    password: None,
                })
            }
            _ => Err(ConfigError::InvalidProxyUri { uri }),
        }
    }

    /// Sets the proxy credentials.
    #[must_use]
    pub fn with_credentials(mut self, user: impl Into<String>, password: Password) -> Self {
        self.user = Some(user.into());
        self.password = Some(password);
        self
    }

    /// Returns the proxy URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the proxy user, if configured.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns the proxy password, if configured.
    #[must_use]
    pub const fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }
}

/// Local address to bind outgoing connections to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BindOptions {
    /// Local IP address.
    pub host: IpAddr,
    /// Local port. `reqwest` only binds the address, so a non-zero port is
    /// ignored with a warning.
    pub port: u16,
}

impl BindOptions {
    /// Creates bind options for the given local address and port.
    #[must_use]
    pub const fn new(host: IpAddr, port: u16) -> Self {
        Self { host, port }
    }
}

/// Options handed to the HTTP transport.
///
/// All fields are optional; unset fields fall back to `reqwest` defaults.
///
/// # Example
///
/// ```rust
/// use gbif::TransportOptions;
/// use std::time::Duration;
///
/// let options = TransportOptions::new()
///     .timeout(Duration::from_secs(30))
///     .open_timeout(Duration::from_secs(5));
///
/// assert_eq!(options.timeout, Some(Duration::from_secs(30)));
/// assert!(!options.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransportOptions {
    /// Total request timeout (connect + read).
    pub timeout: Option<Duration>,
    /// Connection establishment timeout.
    pub open_timeout: Option<Duration>,
    /// Proxy server settings.
    pub proxy: Option<ProxyOptions>,
    /// Local bind address.
    pub bind: Option<BindOptions>,
}

impl TransportOptions {
    /// Creates empty transport options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub const fn open_timeout(mut self, timeout: Duration) -> Self {
        self.open_timeout = Some(timeout);
        self
    }

    /// Sets the proxy.
    #[must_use]
    pub fn proxy(mut self, proxy: ProxyOptions) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Sets the local bind address.
    #[must_use]
    pub const fn bind(mut self, bind: BindOptions) -> Self {
        self.bind = Some(bind);
        self
    }

    /// Returns `true` if no option is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.timeout.is_none()
            && self.open_timeout.is_none()
            && self.proxy.is_none()
            && self.bind.is_none()
    }

    /// Returns `true` if only the total timeout is set.
    ///
    /// A timeout alone can be applied to a single request, everything else
    /// needs a dedicated connection pool.
    #[must_use]
    pub const fn is_timeout_only(&self) -> bool {
        self.open_timeout.is_none() && self.proxy.is_none() && self.bind.is_none()
    }

    /// Returns `overrides` with any unset field taken from `self`.
    #[must_use]
    pub fn overlay(&self, overrides: &Self) -> Self {
        Self {
            timeout: overrides.timeout.or(self.timeout),
            open_timeout: overrides.open_timeout.or(self.open_timeout),
            proxy: overrides.proxy.clone().or_else(|| self.proxy.clone()),
            bind: overrides.bind.or(self.bind),
        }
    }
}
