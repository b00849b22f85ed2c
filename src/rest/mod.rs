//! GBIF REST endpoints.
//!
//! - [`query`](serialize_to_query): typed parameters to query-string pairs
//! - [`route`] / [`route_typed`]: registry path resolution
//! - [`resources`]: the endpoint operations
//! - [`PageMeta`]: paging fields of list responses
//! - [`GbifError`]: the error type every operation returns

mod errors;
mod path;
mod query;
mod response;

pub mod resources;

pub use errors::GbifError;
pub use path::{
    route, route_typed, DatasetData, Family, InstallationData, NetworkData, NodeData,
    OrganizationData, RegistryCategory,
};
pub use query::{serialize_to_query, QueryParams};
pub use response::{results, PageMeta};
