//! Configuration error types for the GBIF client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! bad base URL or an empty credential is caught when the client is set up,
//! not on the first request.
//!
//! # Example
//!
//! ```rust
//! use gbif::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("api.gbif.org/v1");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`GbifConfig`](crate::GbifConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Expected an absolute http(s) URL such as 'https://api.gbif.org/v1'.")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// User name cannot be empty.
    #[error("User name cannot be empty. Leave it unset to make anonymous requests.")]
    EmptyUserName,

    /// Password cannot be empty.
    #[error("Password cannot be empty. Leave it unset to make anonymous requests.")]
    EmptyPassword,

    /// Proxy URI is invalid.
    #[error("Invalid proxy URI '{uri}'. Expected a URL with scheme (e.g., 'http://proxy.example.com:8080').")]
    InvalidProxyUri {
        /// The invalid URI that was provided.
        uri: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("https://api.gbif.org/v1"));
    }

    #[test]
    fn test_empty_credentials_error_messages() {
        assert!(ConfigError::EmptyUserName
            .to_string()
            .contains("User name cannot be empty"));
        assert!(ConfigError::EmptyPassword
            .to_string()
            .contains("Password cannot be empty"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyPassword;
        let _: &dyn std::error::Error = &error;
    }
}
