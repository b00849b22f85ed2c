//! Validated newtype wrappers for configuration values.
//!
//! Invalid values are rejected on construction with a [`ConfigError`].

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated base URL for the GBIF API.
///
/// The URL must be absolute with an `http` or `https` scheme and a non-empty
/// host. Trailing slashes are removed so that request paths can be joined
/// with a single `/`.
///
/// # Example
///
/// ```rust
/// use gbif::BaseUrl;
///
/// let url = BaseUrl::new("https://api.gbif.org/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.gbif.org/v1");
/// assert_eq!(url.host_name(), "api.gbif.org");
/// assert_eq!(url.join("species/match"), "https://api.gbif.org/v1/species/match");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// The public GBIF v1 API.
    pub const DEFAULT: &'static str = "https://api.gbif.org/v1";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let host_start = if url.starts_with("https://") {
            "https://".len()
        } else if url.starts_with("http://") {
            "http://".len()
        } else {
            return Err(ConfigError::InvalidBaseUrl { url });
        };

        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        let host = &url[host_start..host_end];
        if host.is_empty() || host.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        if url[host_end..].contains(['?', '#']) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self {
            url,
            host_start,
            host_end,
        })
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins a relative request path onto the base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            host_start: "https://".len(),
            host_end: "https://api.gbif.org".len(),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A non-empty password for HTTP basic authentication.
///
/// The `Debug` implementation masks the value, displaying only
/// `Password(*****)`.
///
/// # Example
///
/// ```rust
/// use gbif::Password;
///
/// let password = Password::new("hunter2").unwrap();
/// assert_eq!(format!("{:?}", password), "Password(*****)");
/// assert_eq!(password.as_ref(), "hunter2");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a new validated password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_default_is_gbif_v1() {
        let url = BaseUrl::default();
        assert_eq!(url.as_ref(), "https://api.gbif.org/v1");
        assert_eq!(url.host_name(), "api.gbif.org");
        assert_eq!(url, BaseUrl::new(BaseUrl::DEFAULT).unwrap());
    }

    #[test]
    fn test_base_url_strips_trailing_slashes() {
        let url = BaseUrl::new("https://api.gbif-uat.org/v1//").unwrap();
        assert_eq!(url.as_ref(), "https://api.gbif-uat.org/v1");
    }

    #[test]
    fn test_base_url_accepts_local_http_with_port() {
        let url = BaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.host_name(), "127.0.0.1");
        assert_eq!(url.join("/node"), "http://127.0.0.1:8080/node");
    }

    #[test]
    fn test_base_url_join_keeps_trailing_slash_of_path() {
        let url = BaseUrl::default();
        assert_eq!(url.join("species/"), "https://api.gbif.org/v1/species/");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("").is_err());
        assert!(BaseUrl::new("api.gbif.org/v1").is_err());
        assert!(BaseUrl::new("ftp://api.gbif.org").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("https://api.gbif.org/v1?x=1").is_err());
    }

    #[test]
    fn test_base_url_serde_round_trip_validates() {
        let json = serde_json::to_string(&BaseUrl::default()).unwrap();
        assert_eq!(json, r#""https://api.gbif.org/v1""#);

        let restored: BaseUrl = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, BaseUrl::default());

        let invalid: Result<BaseUrl, _> = serde_json::from_str(r#""nope""#);
        assert!(invalid.is_err());
    }

    #[test]
    fn test_password_rejects_empty_and_masks_debug() {
        assert!(matches!(Password::new(""), Err(ConfigError::EmptyPassword)));

        let password = Password::new("super-secret").unwrap();
        let debug_output = format!("{password:?}");
        assert_eq!(debug_output, "Password(*****)");
        assert!(!debug_output.contains("super-secret"));
    }
}
