//! Endpoint routing for the GBIF registry.
//!
//! Registry endpoints are addressed by a [`Family`] (network, node,
//! organization, installation, dataset), a category selecting a
//! sub-resource, and an optional entity identifier. [`route`] validates the
//! combination and produces the request path without touching the network.
//!
//! # Routing rules
//!
//! 1. A category outside the family's allow-list fails with
//!    [`GbifError::InvalidResourceKind`], with or without an identifier.
//! 2. Without an identifier:
//!    - `all` routes to `<family>`
//!    - node `country` with an ISO code routes to `node/country/<CODE>`
//!    - dataset `metadata` with a document id routes to
//!      `dataset/metadata/<id>/document`
//!    - a category listed in [`Family::no_identifier_categories`] routes to
//!      `<family>/<category>`
//!    - anything else fails with [`GbifError::MissingIdentifier`]
//! 3. With an identifier, `all` routes to `<family>/<id>` and any other
//!    category to `<family>/<id>/<category>`.
//!
//! Identifier segments are percent-encoded.
//!
//! # Example
//!
//! ```rust
//! use gbif::rest::{route, route_typed, Family, NodeData};
//!
//! assert_eq!(route(Family::Node, "all", None, None).unwrap(), "node");
//! assert_eq!(
//!     route_typed(NodeData::Country, None, Some("US")).unwrap(),
//!     "node/country/US"
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use crate::rest::GbifError;

/// A registry resource family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// `network`
    Network,
    /// `node`
    Node,
    /// `organization`
    Organization,
    /// `installation`
    Installation,
    /// `dataset`
    Dataset,
}

impl Family {
    /// Every family, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Network,
        Self::Node,
        Self::Organization,
        Self::Installation,
        Self::Dataset,
    ];

    /// Returns the path segment for this family.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Node => "node",
            Self::Organization => "organization",
            Self::Installation => "installation",
            Self::Dataset => "dataset",
        }
    }

    /// Returns the categories accepted for this family.
    #[must_use]
    pub const fn categories(&self) -> &'static [&'static str] {
        match self {
            Self::Network => &[
                "all",
                "contact",
                "endpoint",
                "identifier",
                "tag",
                "machineTag",
                "comment",
                "constituents",
            ],
            Self::Node => &[
                "all",
                "organization",
                "endpoint",
                "identifier",
                "tag",
                "machineTag",
                "comment",
                "pendingEndorsement",
                "country",
                "dataset",
                "installation",
            ],
            Self::Organization => &[
                "all",
                "contact",
                "endpoint",
                "identifier",
                "tag",
                "machineTag",
                "comment",
                "hostedDataset",
                "ownedDataset",
                "deleted",
                "pending",
                "nonPublishing",
            ],
            Self::Installation => &[
                "all",
                "contact",
                "endpoint",
                "dataset",
                "identifier",
                "tag",
                "machineTag",
                "comment",
                "deleted",
                "nonPublishing",
            ],
            Self::Dataset => &[
                "all",
                "organization",
                "contact",
                "endpoint",
                "identifier",
                "tag",
                "machinetag",
                "comment",
                "constituents",
                "document",
                "metadata",
                "deleted",
                "duplicate",
                "subDataset",
                "withNoEndpoint",
            ],
        }
    }

    /// Returns the categories that can be requested without an identifier.
    ///
    /// Node `country` and dataset `metadata` are handled separately: they
    /// need an ISO code or a document id instead.
    #[must_use]
    pub const fn no_identifier_categories(&self) -> &'static [&'static str] {
        match self {
            Self::Network | Self::Node => &["all"],
            Self::Organization => &["all", "deleted", "pending", "nonPublishing"],
            Self::Installation => &["all", "deleted", "nonPublishing"],
            Self::Dataset => &["all", "deleted", "duplicate", "subDataset", "withNoEndpoint"],
        }
    }

    /// Returns `true` if `category` is in this family's allow-list.
    #[must_use]
    pub fn accepts(&self, category: &str) -> bool {
        self.categories().contains(&category)
    }

    fn invalid_kind(self, value: &str) -> GbifError {
        GbifError::InvalidResourceKind {
            family: self.as_str(),
            value: value.to_string(),
            expected: self.categories().join(", "),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = GbifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| GbifError::InvalidParams {
                message: format!("unknown registry family '{s}'"),
            })
    }
}

/// Resolves the request path for a registry call.
///
/// `extra` is the ISO country code for node `country` and the metadata
/// document id for dataset `metadata`; it is ignored otherwise. An empty
/// identifier counts as absent.
///
/// # Errors
///
/// - [`GbifError::InvalidResourceKind`] if `category` is not accepted by `family`
/// - [`GbifError::MissingIdentifier`] if `category` needs an identifier
/// - [`GbifError::InvalidCountryCode`] if the ISO code is not two ASCII letters
///
/// The ISO code becomes a bare path segment, so it is checked here rather
/// than left to the API. A valid code is uppercased.
pub fn route(
    family: Family,
    category: &str,
    identifier: Option<&str>,
    extra: Option<&str>,
) -> Result<String, GbifError> {
    if !family.accepts(category) {
        return Err(family.invalid_kind(category));
    }

    let base = family.as_str();
    let identifier = identifier.filter(|id| !id.is_empty());
    let extra = extra.filter(|e| !e.is_empty());

    if let Some(id) = identifier {
        let id = urlencoding::encode(id);
        return Ok(if category == "all" {
            format!("{base}/{id}")
        } else {
            format!("{base}/{id}/{category}")
        });
    }

    match (family, category, extra) {
        (_, "all", _) => Ok(base.to_string()),
        (Family::Node, "country", Some(code)) => {
            if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(GbifError::InvalidCountryCode {
                    code: code.to_string(),
                });
            }
            Ok(format!("{base}/country/{}", code.to_ascii_uppercase()))
        }
        (Family::Dataset, "metadata", Some(document_id)) => Ok(format!(
            "{base}/metadata/{}/document",
            urlencoding::encode(document_id)
        )),
        _ if family.no_identifier_categories().contains(&category) => {
            Ok(format!("{base}/{category}"))
        }
        _ => Err(GbifError::MissingIdentifier {
            family: base,
            category: category.to_string(),
        }),
    }
}

/// A closed set of categories for one registry family.
pub trait RegistryCategory: Copy + 'static + fmt::Display + FromStr<Err = GbifError> {
    /// The family these categories belong to.
    const FAMILY: Family;
    /// The `all` category.
    const ALL: Self;
    /// Every category, in allow-list order.
    const VARIANTS: &'static [Self];

    /// Returns the wire name of the category.
    fn as_str(&self) -> &'static str;
}

/// Resolves the request path for a typed category.
///
/// # Errors
///
/// See [`route`]. `InvalidResourceKind` cannot occur here.
pub fn route_typed<C: RegistryCategory>(
    category: C,
    identifier: Option<&str>,
    extra: Option<&str>,
) -> Result<String, GbifError> {
    route(C::FAMILY, category.as_str(), identifier, extra)
}

macro_rules! registry_category {
    (
        $(#[$meta:meta])*
        $name:ident, $family:expr, { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl RegistryCategory for $name {
            const FAMILY: Family = $family;
            const ALL: Self = Self::All;
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = GbifError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err(<Self as RegistryCategory>::FAMILY.invalid_kind(s)),
                }
            }
        }
    };
}

registry_category! {
    /// Network categories.
    NetworkData, Family::Network, {
        All => "all",
        Contact => "contact",
        Endpoint => "endpoint",
        Identifier => "identifier",
        Tag => "tag",
        MachineTag => "machineTag",
        Comment => "comment",
        Constituents => "constituents",
    }
}

registry_category! {
    /// Node categories.
    NodeData, Family::Node, {
        All => "all",
        Organization => "organization",
        Endpoint => "endpoint",
        Identifier => "identifier",
        Tag => "tag",
        MachineTag => "machineTag",
        Comment => "comment",
        PendingEndorsement => "pendingEndorsement",
        Country => "country",
        Dataset => "dataset",
        Installation => "installation",
    }
}

registry_category! {
    /// Organization categories.
    OrganizationData, Family::Organization, {
        All => "all",
        Contact => "contact",
        Endpoint => "endpoint",
        Identifier => "identifier",
        Tag => "tag",
        MachineTag => "machineTag",
        Comment => "comment",
        HostedDataset => "hostedDataset",
        OwnedDataset => "ownedDataset",
        Deleted => "deleted",
        Pending => "pending",
        NonPublishing => "nonPublishing",
    }
}

registry_category! {
    /// Installation categories.
    InstallationData, Family::Installation, {
        All => "all",
        Contact => "contact",
        Endpoint => "endpoint",
        Dataset => "dataset",
        Identifier => "identifier",
        Tag => "tag",
        MachineTag => "machineTag",
        Comment => "comment",
        Deleted => "deleted",
        NonPublishing => "nonPublishing",
    }
}

registry_category! {
    /// Dataset categories.
    DatasetData, Family::Dataset, {
        All => "all",
        Organization => "organization",
        Contact => "contact",
        Endpoint => "endpoint",
        Identifier => "identifier",
        Tag => "tag",
        MachineTag => "machinetag",
        Comment => "comment",
        Constituents => "constituents",
        Document => "document",
        Metadata => "metadata",
        Deleted => "deleted",
        Duplicate => "duplicate",
        SubDataset => "subDataset",
        WithNoEndpoint => "withNoEndpoint",
    }
}
