//! REST client for the GBIF API.
//!
//! [`RestClient`] is a thin layer over [`HttpClient`](crate::clients::HttpClient):
//!
//! - Leading slashes are stripped: `/species/match` -> `species/match`
//! - A trailing slash is kept, since `species/` and `species` are different
//!   endpoints
//! - [`CallOptions`] override the configured `verbose` flag and transport
//!   options for a single call
//! - The JSON body is returned as a `serde_json::Value`
//!
//! # Example
//!
//! ```rust,ignore
//! use gbif::{CallOptions, GbifConfig, RestClient};
//!
//! let client = RestClient::new(&GbifConfig::default())?;
//! let body = client
//!     .get("occurrence/search", None, Some(CallOptions::new().verbose(true)))
//!     .await?;
//! ```

mod client;

pub use client::{CallOptions, RestClient};
