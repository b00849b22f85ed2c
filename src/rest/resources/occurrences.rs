//! Occurrence search.
//!
//! # Example
//!
//! ```rust,ignore
//! use gbif::rest::resources::{OccurrenceSearchParams, Occurrences};
//!
//! let params = OccurrenceSearchParams {
//!     taxon_key: vec![3329049],
//!     issue: vec!["ZERO_COORDINATE".into(), "COUNTRY_COORDINATE_MISMATCH".into()],
//!     limit: Some(20),
//!     ..Default::default()
//! };
//! let body = Occurrences::search(&client, &params, None).await?;
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::clients::{CallOptions, RestClient};
use crate::rest::GbifError;

use super::fetch;

/// Parameters for [`Occurrences::search`].
///
/// List-valued fields are sent as repeated keys. Range filters such as
/// `year` or `decimal_latitude` take GBIF's `"min,max"` string syntax.
/// Keys without a dedicated field (for example `country_facetLimit`) go into
/// `extra`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceSearchParams {
    /// Backbone taxon keys; sent as repeated `taxonKey`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub taxon_key: Vec<u64>,
    /// Only records published by a country other than where they were collected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repatriated: Option<bool>,
    /// Backbone kingdom key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kingdom_key: Option<u64>,
    /// Backbone phylum key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phylum_key: Option<u64>,
    /// Backbone class key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_key: Option<u64>,
    /// Backbone order key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_key: Option<u64>,
    /// Backbone family key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_key: Option<u64>,
    /// Backbone genus key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genus_key: Option<u64>,
    /// Backbone subgenus key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subgenus_key: Option<u64>,
    /// Scientific name, matched against the backbone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    /// ISO 3166-1 alpha-2 code of the country of occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// ISO 3166-1 alpha-2 code of the publishing organization's country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publishing_country: Option<String>,
    /// Only records with (or without) coordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_coordinate: Option<bool>,
    /// Nomenclatural type status, e.g. `HOLOTYPE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_status: Option<String>,
    /// Collector's record number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_number: Option<String>,
    /// Date of last interpretation, or a `"min,max"` range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_interpreted: Option<String>,
    /// Continent, e.g. `EUROPE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
    /// WKT polygon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<String>,
    /// Collector names; sent as repeated `recordedBy`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recorded_by: Vec<String>,
    /// Basis of record, e.g. `HUMAN_OBSERVATION`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basis_of_record: Option<String>,
    /// Dataset UUIDs; sent as repeated `datasetKey`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dataset_key: Vec<String>,
    /// Event date, or a `"min,max"` range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    /// Catalog numbers; sent as repeated `catalogNumber`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub catalog_number: Vec<String>,
    /// Year, or a `"min,max"` range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Month (1-12), or a `"min,max"` range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    /// Latitude, or a `"min,max"` range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_latitude: Option<String>,
    /// Longitude, or a `"min,max"` range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_longitude: Option<String>,
    /// Elevation in metres, or a `"min,max"` range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<String>,
    /// Depth in metres, or a `"min,max"` range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<String>,
    /// Institution code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_code: Option<String>,
    /// Collection code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_code: Option<String>,
    /// Only records with (or without) geospatial issues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_geospatial_issue: Option<bool>,
    /// Interpretation issues, e.g. `ZERO_COORDINATE`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issue: Vec<String>,
    /// Full-text query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Ask the API to spell-check `q`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spell_check: Option<bool>,
    /// Media type (`StillImage`, `MovingImage`, `Sound`). Sent as `mediatype`.
    #[serde(rename = "mediatype", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// Page size. Defaults to 300.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Record offset. Defaults to 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Establishment means, e.g. `INTRODUCED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub establishment_means: Option<String>,
    /// Fields to facet on; sent as repeated `facet`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub facet: Vec<String>,
    /// Minimum count for a facet value to be returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet_mincount: Option<u32>,
    /// Count facet values as if their own filter were not applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet_multiselect: Option<bool>,
    /// Additional pairs sent verbatim, after the named fields.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Default for OccurrenceSearchParams {
    fn default() -> Self {
        Self {
            taxon_key: Vec::new(),
            repatriated: None,
            kingdom_key: None,
            phylum_key: None,
            class_key: None,
            order_key: None,
            family_key: None,
            genus_key: None,
            subgenus_key: None,
            scientific_name: None,
            country: None,
            publishing_country: None,
            has_coordinate: None,
            type_status: None,
            record_number: None,
            last_interpreted: None,
            continent: None,
            geometry: None,
            recorded_by: Vec::new(),
            basis_of_record: None,
            dataset_key: Vec::new(),
            event_date: None,
            catalog_number: Vec::new(),
            year: None,
            month: None,
            decimal_latitude: None,
            decimal_longitude: None,
            elevation: None,
            depth: None,
            institution_code: None,
            collection_code: None,
            has_geospatial_issue: None,
            issue: Vec::new(),
            q: None,
            spell_check: None,
            media_type: None,
            limit: Some(300),
            offset: Some(0),
            establishment_means: None,
            facet: Vec::new(),
            facet_mincount: None,
            facet_multiselect: None,
            extra: BTreeMap::new(),
        }
    }
}

impl OccurrenceSearchParams {
    /// Adds a pair without a dedicated field, such as `country_facetLimit`.
    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Occurrence operations.
#[derive(Debug, Clone, Copy)]
pub struct Occurrences;

impl Occurrences {
    /// Searches occurrence records (`occurrence/search`).
    ///
    /// # Errors
    ///
    /// Returns [`GbifError::Http`] if the request fails.
    pub async fn search(
        client: &RestClient,
        params: &OccurrenceSearchParams,
        options: Option<CallOptions>,
    ) -> Result<Value, GbifError> {
        fetch(client, "occurrence/search", params, options).await
    }
}
