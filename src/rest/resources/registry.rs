//! Registry endpoints: networks, nodes, organizations, installations and
//! datasets.
//!
//! Each family function takes a typed category, an optional entity UUID and
//! list parameters. The request path is resolved with
//! [`route_typed`](crate::rest::route_typed) before anything is sent, so an
//! invalid combination fails without network traffic.
//!
//! # Example
//!
//! ```rust,ignore
//! use gbif::rest::resources::{Registry, RegistryParams};
//! use gbif::rest::{NodeData, OrganizationData};
//!
//! let params = RegistryParams { limit: Some(5), ..Default::default() };
//!
//! // node/country/DK
//! let danish = Registry::nodes(&client, NodeData::Country, None, Some("DK"), &params, None).await?;
//!
//! // organization/deleted
//! let deleted =
//!     Registry::organizations(&client, OrganizationData::Deleted, None, &params, None).await?;
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::clients::{CallOptions, RestClient};
use crate::rest::{
    route_typed, DatasetData, GbifError, InstallationData, NetworkData, NodeData,
    OrganizationData, RegistryCategory,
};

use super::fetch;

/// List parameters shared by network, node, organization and installation
/// calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryParams {
    /// Full-text query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Identifier value to look up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Identifier type, e.g. `DOI`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<String>,
    /// Page size. Defaults to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Record offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl Default for RegistryParams {
    fn default() -> Self {
        Self {
            q: None,
            identifier: None,
            identifier_type: None,
            limit: Some(100),
            offset: None,
        }
    }
}

/// List parameters for dataset calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetParams {
    /// Full-text query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Dataset type (`OCCURRENCE`, `CHECKLIST`, `METADATA`, `SAMPLING_EVENT`).
    /// Dataset type, e.g. `CHECKLIST`. Sent as `type`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    /// Identifier value to look up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Identifier type, e.g. `DOI`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<String>,
    /// Page size. Defaults to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Record offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl Default for DatasetParams {
    fn default() -> Self {
        Self {
            q: None,
            type_: None,
            identifier: None,
            identifier_type: None,
            limit: Some(100),
            offset: None,
        }
    }
}

/// Parameters for [`Registry::dataset_suggest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSuggestParams {
    /// Full-text query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Dataset type, e.g. `CHECKLIST`. Sent as `type`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    /// Keyword or tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// UUID of the owning organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owning_org: Option<String>,
    /// UUID of the publishing organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publishing_org: Option<String>,
    /// UUID of the hosting organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosting_org: Option<String>,
    /// ISO 3166-1 alpha-2 code of the publishing country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publishing_country: Option<String>,
    /// Decade covered by the data, e.g. `1990`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decade: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Record offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Parameters for [`Registry::dataset_search`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSearchParams {
    /// Filters shared with [`Registry::dataset_suggest`].
    #[serde(flatten)]
    pub filters: DatasetSuggestParams,
    /// Fields to facet on; sent as repeated `facet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub facet: Vec<String>,
    /// Minimum count for a facet value to be returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet_mincount: Option<u32>,
    /// Count facet values as if their own filter were not applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet_multiselect: Option<bool>,
    /// Highlight matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hl: Option<bool>,
}

/// Registry operations.
#[derive(Debug, Clone, Copy)]
pub struct Registry;

impl Registry {
    /// Fetches networks, or a sub-resource of one network.
    ///
    /// # Errors
    ///
    /// Returns [`GbifError::MissingIdentifier`] if `data` is not
    /// [`NetworkData::All`] and no `uuid` is given. HTTP failures are
    /// returned as [`GbifError::Http`].
    pub async fn networks(
        client: &RestClient,
        data: NetworkData,
        uuid: Option<&str>,
        params: &RegistryParams,
        options: Option<CallOptions>,
    ) -> Result<Value, GbifError> {
        Self::fetch_routed(client, data, uuid, None, params, options).await
    }

    /// Fetches nodes, a sub-resource of one node, or the node of a country.
    ///
    /// `isocode` is only used with [`NodeData::Country`] and no `uuid`.
    ///
    /// # Errors
    ///
    /// Returns [`GbifError::MissingIdentifier`] if the category needs a `uuid`,
    /// or [`GbifError::InvalidCountryCode`] for a malformed `isocode`.
    pub async fn nodes(
        client: &RestClient,
        data: NodeData,
        uuid: Option<&str>,
        isocode: Option<&str>,
        params: &RegistryParams,
        options: Option<CallOptions>,
    ) -> Result<Value, GbifError> {
        Self::fetch_routed(client, data, uuid, isocode, params, options).await
    }

    /// Fetches organizations or a sub-resource of one organization.
    ///
    /// `All`, `Deleted`, `Pending` and `NonPublishing` work without a `uuid`.
    ///
    /// # Errors
    ///
    /// Returns [`GbifError::MissingIdentifier`] if the category needs a `uuid`.
    pub async fn organizations(
        client: &RestClient,
        data: OrganizationData,
        uuid: Option<&str>,
        params: &RegistryParams,
        options: Option<CallOptions>,
    ) -> Result<Value, GbifError> {
        Self::fetch_routed(client, data, uuid, None, params, options).await
    }

    /// Fetches installations or a sub-resource of one installation.
    ///
    /// `All`, `Deleted` and `NonPublishing` work without a `uuid`.
    ///
    /// # Errors
    ///
    /// Returns [`GbifError::MissingIdentifier`] if the category needs a `uuid`.
    pub async fn installations(
        client: &RestClient,
        data: InstallationData,
        uuid: Option<&str>,
        params: &RegistryParams,
        options: Option<CallOptions>,
    ) -> Result<Value, GbifError> {
        Self::fetch_routed(client, data, uuid, None, params, options).await
    }

    /// Fetches datasets or a sub-resource of one dataset.
    ///
    /// `All`, `Deleted`, `Duplicate`, `SubDataset` and `WithNoEndpoint` work
    /// without a `uuid`. [`DatasetData::Metadata`] with a `document_id` and no
    /// `uuid` fetches `dataset/metadata/<document_id>/document`.
    ///
    /// # Errors
    ///
    /// Returns [`GbifError::MissingIdentifier`] if the category needs a `uuid`.
    pub async fn datasets(
        client: &RestClient,
        data: DatasetData,
        uuid: Option<&str>,
        document_id: Option<&str>,
        params: &DatasetParams,
        options: Option<CallOptions>,
    ) -> Result<Value, GbifError> {
        Self::fetch_routed(client, data, uuid, document_id, params, options).await
    }

    /// Fetches metrics for a checklist dataset (`dataset/<uuid>/metrics`).
    ///
    /// # Errors
    ///
    /// Returns [`GbifError::MissingIdentifier`] if `uuid` is empty.
    pub async fn dataset_metrics(
        client: &RestClient,
        uuid: &str,
        options: Option<CallOptions>,
    ) -> Result<Value, GbifError> {
        if uuid.is_empty() {
            return Err(GbifError::MissingIdentifier {
                family: "dataset",
                category: "metrics".to_string(),
            });
        }
        let path = format!("dataset/{}/metrics", urlencoding::encode(uuid));
        fetch(client, &path, &(), options).await
    }

    /// Suggests datasets for autocompletion (`dataset/suggest`).
    ///
    /// # Errors
    ///
    /// Returns [`GbifError::Http`] if the request fails.
    pub async fn dataset_suggest(
        client: &RestClient,
        params: &DatasetSuggestParams,
        options: Option<CallOptions>,
    ) -> Result<Value, GbifError> {
        fetch(client, "dataset/suggest", params, options).await
    }

    /// Full-text dataset search (`dataset/search`).
    ///
    /// # Errors
    ///
    /// Returns [`GbifError::Http`] if the request fails.
    pub async fn dataset_search(
        client: &RestClient,
        params: &DatasetSearchParams,
        options: Option<CallOptions>,
    ) -> Result<Value, GbifError> {
        fetch(client, "dataset/search", params, options).await
    }

    async fn fetch_routed<C: RegistryCategory, P: Serialize + Sync>(
        client: &RestClient,
        data: C,
        uuid: Option<&str>,
        extra: Option<&str>,
        params: &P,
        options: Option<CallOptions>,
    ) -> Result<Value, GbifError> {
        let path = route_typed(data, uuid, extra)?;
        tracing::debug!("Resolved {} {} to '{}'", C::FAMILY, data, path);
        fetch(client, &path, params, options).await
    }
}
