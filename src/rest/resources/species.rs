//! Taxonomy endpoints.
//!
//! [`Species`] exposes the name-matching, suggestion, usage and search
//! endpoints under `species/`.
//!
//! # Example
//!
//! ```rust,ignore
//! use gbif::rest::resources::{NameBackboneParams, NameLookupParams, Species};
//!
//! let matched = Species::name_backbone(
//!     &client,
//!     &NameBackboneParams::new("Helianthus annuus").kingdom("Plantae"),
//!     None,
//! )
//! .await?;
//! println!("usageKey: {}", matched["usageKey"]);
//!
//! let params = NameLookupParams {
//!     q: Some("Puma".to_string()),
//!     rank: Some("GENUS".to_string()),
//!     ..Default::default()
//! };
//! let found = Species::name_lookup(&client, &params, None).await?;
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::clients::{CallOptions, RestClient};
use crate::rest::GbifError;

use super::fetch;

/// Parameters for [`Species::name_backbone`].
///
/// `name` is required; use [`NameBackboneParams::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameBackboneParams {
    /// Full scientific name, optionally with authorship.
    pub name: String,
    /// Filter by taxonomic rank (e.g. `SPECIES`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    /// Kingdom hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kingdom: Option<String>,
    /// Phylum hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phylum: Option<String>,
    /// Class hint. Sent as `class`.
    #[serde(rename = "class", skip_serializing_if = "Option::is_none")]
    pub clazz: Option<String>,
    /// Order hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// Family hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Genus hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genus: Option<String>,
    /// Disable fuzzy matching.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    /// Record offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl NameBackboneParams {
    /// Creates parameters matching the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the rank filter.
    #[must_use]
    pub fn rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = Some(rank.into());
        self
    }

    /// Sets the kingdom hint.
    #[must_use]
    pub fn kingdom(mut self, kingdom: impl Into<String>) -> Self {
        self.kingdom = Some(kingdom.into());
        self
    }

    /// Sets strict matching.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }
}

/// Parameters for [`Species::name_suggest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameSuggestParams {
    /// Prefix to complete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Checklist dataset to search in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_key: Option<String>,
    /// Filter by taxonomic rank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    /// Page size. Defaults to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Record offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl Default for NameSuggestParams {
    fn default() -> Self {
        Self {
            q: None,
            dataset_key: None,
            rank: None,
            limit: Some(100),
            offset: None,
        }
    }
}

/// Parameters for [`Species::name_usage`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameUsageParams {
    /// Canonical name filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Language for vernacular names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Checklist dataset to list usages from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_key: Option<String>,
    /// Source identifier within the dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    /// Page size. Defaults to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Record offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl Default for NameUsageParams {
    fn default() -> Self {
        Self {
            name: None,
            language: None,
            dataset_key: None,
            source_id: None,
            limit: Some(100),
            offset: None,
        }
    }
}

/// Parameters for [`Species::name_lookup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameLookupParams {
    /// Full-text query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Filter by taxonomic rank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    /// Only descendants of this taxon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub higher_taxon_key: Option<u64>,
    /// Taxonomic status (e.g. `ACCEPTED`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Filter extinct taxa.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_extinct: Option<bool>,
    /// Habitat (`MARINE`, `FRESHWATER`, `TERRESTRIAL`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub habitat: Option<String>,
    /// Name type (e.g. `SCIENTIFIC`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_type: Option<String>,
    /// Checklist dataset to search in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_key: Option<String>,
    /// Nomenclatural status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nomenclatural_status: Option<String>,
    /// Page size. Defaults to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Record offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Facet fields. Sent as one `facet` pair each.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub facet: Vec<String>,
    /// Minimum count for a facet value to be returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet_mincount: Option<u32>,
    /// Keep facet counts of filtered fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet_multiselect: Option<bool>,
    /// Result type. Sent as `type`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    /// Highlight matches. Defaults to `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hl: Option<bool>,
    /// Return full records. Sent as `verbose`; defaults to `false`.
    #[serde(rename = "verbose", skip_serializing_if = "Option::is_none")]
    pub verbosity: Option<bool>,
}

impl Default for NameLookupParams {
    fn default() -> Self {
        Self {
            q: None,
            rank: None,
            higher_taxon_key: None,
            status: None,
            is_extinct: None,
            habitat: None,
            name_type: None,
            dataset_key: None,
            nomenclatural_status: None,
            limit: Some(100),
            offset: None,
            facet: Vec::new(),
            facet_mincount: None,
            facet_multiselect: None,
            type_: None,
            hl: Some(false),
            verbosity: Some(false),
        }
    }
}

/// Taxonomy operations.
#[derive(Debug, Clone, Copy)]
pub struct Species;

impl Species {
    /// Matches a name against the GBIF backbone taxonomy (`species/match`).
    ///
    /// # Errors
    ///
    /// Returns [`GbifError::Http`] if the request fails. The name is sent
    /// as given; GBIF decides how to answer a blank one.
    pub async fn name_backbone(
        client: &RestClient,
        params: &NameBackboneParams,
        options: Option<CallOptions>,
    ) -> Result<Value, GbifError> {
        fetch(client, "species/match", params, options).await
    }

    /// Suggests names for autocompletion (`species/suggest`).
    ///
    /// # Errors
    ///
    /// Returns [`GbifError::Http`] if the request fails.
    pub async fn name_suggest(
        client: &RestClient,
        params: &NameSuggestParams,
        options: Option<CallOptions>,
    ) -> Result<Value, GbifError> {
        fetch(client, "species/suggest", params, options).await
    }

    /// Lists name usages (`species/`).
    ///
    /// # Errors
    ///
    /// Returns [`GbifError::Http`] if the request fails.
    pub async fn name_usage(
        client: &RestClient,
        params: &NameUsageParams,
        options: Option<CallOptions>,
    ) -> Result<Value, GbifError> {
        fetch(client, "species/", params, options).await
    }

    /// Full-text search over name usages (`species/search`).
    ///
    /// # Errors
    ///
    /// Returns [`GbifError::Http`] if the request fails.
    pub async fn name_lookup(
        client: &RestClient,
        params: &NameLookupParams,
        options: Option<CallOptions>,
    ) -> Result<Value, GbifError> {
        fetch(client, "species/search", params, options).await
    }
}
