//! GBIF endpoint operations.
//!
//! Operations are grouped on three unit types:
//!
//! - [`Species`]: backbone matching, name suggestions, usages and search
//! - [`Occurrences`]: occurrence search
//! - [`Registry`]: networks, nodes, organizations, installations, datasets
//!
//! Every operation is an async associated function taking a
//! [`RestClient`](crate::RestClient) first and optional
//! [`CallOptions`](crate::CallOptions) last, and returns the response body as
//! a `serde_json::Value`.
//!
//! # Example
//!
//! ```rust,ignore
//! use gbif::rest::resources::{NameBackboneParams, Species};
//! use gbif::{GbifConfig, RestClient};
//!
//! let client = RestClient::new(&GbifConfig::default())?;
//! let body = Species::name_backbone(&client, &NameBackboneParams::new("Helianthus"), None).await?;
//! assert_eq!(body["usageKey"], 3119134);
//! ```

mod occurrences;
mod registry;
mod species;

pub use occurrences::{OccurrenceSearchParams, Occurrences};
pub use registry::{
    DatasetParams, DatasetSearchParams, DatasetSuggestParams, Registry, RegistryParams,
};
pub use species::{
    NameBackboneParams, NameLookupParams, NameSuggestParams, NameUsageParams, Species,
};

use serde::Serialize;
use serde_json::Value;

use crate::clients::{CallOptions, RestClient};
use crate::rest::{serialize_to_query, GbifError};

/// Normalizes `params` and issues the GET.
async fn fetch<P: Serialize + ?Sized>(
    client: &RestClient,
    path: &str,
    params: &P,
    options: Option<CallOptions>,
) -> Result<Value, GbifError> {
    let query = Some(serialize_to_query(params)?).filter(|q| !q.is_empty());
    client.get(path, query, options).await
}
