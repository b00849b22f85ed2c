//! Error type for GBIF endpoint operations.
//!
//! [`GbifError`] is returned by every endpoint operation. Routing and
//! parameter failures are detected before any request is sent; everything
//! that happens on the wire is wrapped as [`GbifError::Http`].
//!
//! # Example
//!
//! ```rust
//! use gbif::rest::{route, Family};
//! use gbif::GbifError;
//!
//! let error = route(Family::Organization, "contact", None, None).unwrap_err();
//! assert!(matches!(error, GbifError::MissingIdentifier { .. }));
//! ```

use thiserror::Error;

use crate::clients::{HttpError, InvalidHttpRequestError};

/// Errors returned by GBIF endpoint operations.
#[derive(Debug, Error)]
pub enum GbifError {
    /// The category is not in the family's allow-list.
    #[error("Invalid {family} resource kind '{value}'. Expected one of: {expected}.")]
    InvalidResourceKind {
        /// The registry family.
        family: &'static str,
        /// The rejected category.
        value: String,
        /// Comma-separated list of accepted categories.
        expected: String,
    },

    /// The category requires an entity identifier but none was given.
    #[error("The {family} category '{category}' requires a UUID.")]
    MissingIdentifier {
        /// The registry family.
        family: &'static str,
        /// The category that needs an identifier.
        category: String,
    },

    /// The ISO country code is not two ASCII letters.
    #[error("Invalid ISO 3166-1 alpha-2 country code '{code}'.")]
    InvalidCountryCode {
        /// The rejected code.
        code: String,
    },

    /// The parameters could not be turned into a query string.
    #[error("Invalid parameters: {message}")]
    InvalidParams {
        /// Description of the failure.
        message: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl From<InvalidHttpRequestError> for GbifError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(error.into())
    }
}

impl GbifError {
    /// Returns `true` if the error was raised before any request was sent.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidResourceKind { .. }
                | Self::MissingIdentifier { .. }
                | Self::InvalidCountryCode { .. }
                | Self::InvalidParams { .. }
                | Self::Http(HttpError::InvalidRequest(_))
        )
    }

    /// Returns the HTTP status code if a non-2xx response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}
