//! HTTP client types for GBIF API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async HTTP client, one GET per call
//! - [`HttpRequest`]: a request to be sent to the API
//! - [`HttpResponse`]: a successful response with its decoded JSON body
//! - [`HttpError`]: every failure that can happen on the wire
//! - [`rest::RestClient`]: the client endpoint operations are called with
//! - [`rest::CallOptions`]: per-call overrides
//!
//! There is no retry logic. A 5xx response is returned to the caller as the
//! matching [`HttpError`] variant.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, HTTP_LIBRARY, SDK_NAME, SDK_VERSION};
pub use http_request::{HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

pub use rest::{CallOptions, RestClient};
