//! Configuration types for the GBIF client.
//!
//! # Overview
//!
//! - [`GbifConfig`]: base URL, credentials and transport defaults
//! - [`GbifConfigBuilder`]: a builder for [`GbifConfig`]
//! - [`BaseUrl`]: a validated API base URL
//! - [`Password`]: a basic-auth password with masked debug output
//! - [`TransportOptions`]: timeouts, proxy and bind settings for `reqwest`
//!
//! # Process-wide default
//!
//! Most programs talk to a single GBIF deployment. [`GbifConfig::global`]
//! returns a copy of a process-wide default that can be replaced with
//! [`GbifConfig::set_global`]. Clients copy the configuration when they are
//! built, so replacing the default never affects clients that already exist.
//!
//! # Example
//!
//! ```rust
//! use gbif::{BaseUrl, GbifConfig};
//!
//! let config = GbifConfig::builder()
//!     .base_url(BaseUrl::new("https://api.gbif-uat.org/v1").unwrap())
//!     .user_agent_prefix("my-app/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.gbif-uat.org/v1");
//! ```

mod newtypes;
mod transport;

pub use newtypes::{BaseUrl, Password};
pub use transport::{BindOptions, ProxyOptions, TransportOptions};

use std::sync::{OnceLock, PoisonError, RwLock};

use crate::error::ConfigError;

static GLOBAL_CONFIG: OnceLock<RwLock<GbifConfig>> = OnceLock::new();

fn global_slot() -> &'static RwLock<GbifConfig> {
    GLOBAL_CONFIG.get_or_init(|| RwLock::new(GbifConfig::default()))
}

/// Configuration for the GBIF client.
///
/// `GbifConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use gbif::{GbifConfig, Password};
///
/// let config = GbifConfig::builder()
///     .user_name("alice")
///     .password(Password::new("secret").unwrap())
///     .verbose(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_name(), Some("alice"));
/// assert!(config.verbose());
/// ```
#[derive(Clone, Debug, Default)]
pub struct GbifConfig {
    base_url: BaseUrl,
    user_name: Option<String>,
    password: Option<Password>,
    user_agent_prefix: Option<String>,
    verbose: bool,
    transport: TransportOptions,
}

impl GbifConfig {
    /// Creates a new builder for constructing a `GbifConfig`.
    #[must_use]
    pub fn builder() -> GbifConfigBuilder {
        GbifConfigBuilder::new()
    }

    /// Returns a copy of the process-wide default configuration.
    #[must_use]
    pub fn global() -> Self {
        global_slot()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the process-wide default configuration.
    ///
    /// Clients already constructed keep the configuration they were built with.
    pub fn set_global(config: Self) {
        let mut slot = global_slot()
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        tracing::debug!("Replacing global GBIF configuration (base URL {})", config.base_url);
        *slot = config;
    }

    /// Restores the process-wide default configuration to the built-in defaults.
    pub fn reset_global() {
        Self::set_global(Self::default());
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the basic-auth user name, if configured.
    #[must_use]
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// Returns the basic-auth password, if configured.
    #[must_use]
    pub const fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }

    /// Returns the user name and password when both are configured.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &Password)> {
        self.user_name().zip(self.password())
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns whether requests are logged by default.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Returns the default transport options.
    #[must_use]
    pub const fn transport(&self) -> &TransportOptions {
        &self.transport
    }
}

// Verify GbifConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GbifConfig>();
};

/// Builder for constructing [`GbifConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: `https://api.gbif.org/v1`
/// - `user_name` / `password`: `None`
/// - `user_agent_prefix`: `None`
/// - `verbose`: `false`
/// - `transport`: empty
#[derive(Debug, Default)]
pub struct GbifConfigBuilder {
    base_url: Option<BaseUrl>,
    user_name: Option<String>,
    password: Option<Password>,
    user_agent_prefix: Option<String>,
    verbose: Option<bool>,
    transport: Option<TransportOptions>,
}

impl GbifConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the basic-auth user name.
    #[must_use]
    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }

    /// Sets the basic-auth password.
    #[must_use]
    pub fn password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets whether requests are logged by default.
    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Sets the default transport options.
    #[must_use]
    pub fn transport(mut self, transport: TransportOptions) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the [`GbifConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUserName`] if an empty user name was set.
    pub fn build(self) -> Result<GbifConfig, ConfigError> {
        if self.user_name.as_deref().is_some_and(str::is_empty) {
            return Err(ConfigError::EmptyUserName);
        }

        Ok(GbifConfig {
            base_url: self.base_url.unwrap_or_default(),
            user_name: self.user_name,
            password: self.password,
            user_agent_prefix: self.user_agent_prefix,
            verbose: self.verbose.unwrap_or(false),
            transport: self.transport.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = GbifConfig::builder().build().unwrap();

        assert_eq!(config.base_url().as_ref(), "https://api.gbif.org/v1");
        assert!(config.user_name().is_none());
        assert!(config.password().is_none());
        assert!(config.credentials().is_none());
        assert!(config.user_agent_prefix().is_none());
        assert!(!config.verbose());
        assert!(config.transport().is_empty());
    }

    #[test]
    fn test_builder_rejects_empty_user_name() {
        let result = GbifConfig::builder().user_name("").build();
        assert!(matches!(result, Err(ConfigError::EmptyUserName)));
    }

    #[test]
    fn test_credentials_require_both_parts() {
        let config = GbifConfig::builder().user_name("alice").build().unwrap();
        assert!(config.credentials().is_none());

        let config = GbifConfig::builder()
            .user_name("alice")
            .password(Password::new("secret").unwrap())
            .build()
            .unwrap();
        let (user, password) = config.credentials().unwrap();
        assert_eq!(user, "alice");
        assert_eq!(password.as_ref(), "secret");
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = GbifConfig::builder()
            .base_url(BaseUrl::new("http://localhost:9000/v1").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .verbose(true)
            .transport(TransportOptions::new().timeout(Duration::from_secs(10)))
            .build()
            .unwrap();

        assert_eq!(config.base_url().host_name(), "localhost");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert!(config.verbose());
        assert_eq!(config.transport().timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_config_debug_masks_password() {
        let config = GbifConfig::builder()
            .user_name("alice")
            .password(Password::new("do-not-print").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("GbifConfig"));
        assert!(!debug_str.contains("do-not-print"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GbifConfig>();
    }
}
