//! # GBIF API Rust Client
//!
//! A Rust client for the [GBIF](https://www.gbif.org) biodiversity data API:
//! species taxonomy, occurrence records and registry metadata.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`GbifConfig`] and [`GbifConfigBuilder`]
//! - Typed parameter structs normalized into query strings, with absent
//!   values dropped and list values sent as repeated keys
//! - Registry path routing validated before any request is sent
//! - An async HTTP client that maps GBIF error statuses to typed errors
//!
//! Responses are returned as `serde_json::Value`, unmodified.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gbif::rest::resources::{NameBackboneParams, Species};
//! use gbif::{GbifConfig, RestClient};
//!
//! let client = RestClient::new(&GbifConfig::default())?;
//!
//! let body = Species::name_backbone(&client, &NameBackboneParams::new("Helianthus"), None).await?;
//! println!("{} -> {}", body["scientificName"], body["usageKey"]);
//! ```
//!
//! ## Registry
//!
//! ```rust,ignore
//! use gbif::rest::resources::{Registry, RegistryParams};
//! use gbif::rest::NodeData;
//!
//! // node/country/US
//! let body = Registry::nodes(
//!     &client,
//!     NodeData::Country,
//!     None,
//!     Some("US"),
//!     &RegistryParams::default(),
//!     None,
//! )
//! .await?;
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use gbif::{BaseUrl, GbifConfig, TransportOptions};
//! use std::time::Duration;
//!
//! let config = GbifConfig::builder()
//!     .base_url(BaseUrl::new("https://api.gbif-uat.org/v1").unwrap())
//!     .user_agent_prefix("my-app/0.3")
//!     .transport(TransportOptions::new().timeout(Duration::from_secs(30)))
//!     .build()
//!     .unwrap();
//!
//! // Make it the default for RestClient::from_global()
//! GbifConfig::set_global(config);
//! # GbifConfig::reset_global();
//! ```
//!
//! ## Logging
//!
//! The crate logs through [`tracing`](https://docs.rs/tracing). Verbose
//! requests are logged at `info`, everything else at `debug`. No subscriber
//! is installed.
//!
//! ## Design Principles
//!
//! - **Fail-fast validation**: newtypes validate on construction, routes
//!   before the request
//! - **Thread-safe**: all client types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **One round trip per call**: no retries, caching or pagination loops

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    BaseUrl, BindOptions, GbifConfig, GbifConfigBuilder, Password, ProxyOptions,
    TransportOptions,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    CallOptions, HttpClient, HttpError, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RestClient,
};

// Re-export endpoint types
pub use rest::resources::{Occurrences, Registry, Species};
pub use rest::{GbifError, PageMeta, QueryParams};
