//! Area taxonomy
//!
//! The JMA area master is three flat mappings (centers, offices, class10s),
//! one per drill-down tier. Lookups stay tier-explicit: each tier has its
//! own mapping name in the source document and the drill-down terminates at
//! a fixed depth of three, so no generic tree abstraction is needed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::fallback::UNKNOWN;

/// One node within a tier mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaNode {
    /// Display name of the area
    pub name: String,
    /// Codes of the next tier down, in document order
    #[serde(default)]
    pub children: Vec<String>,
}

/// Immutable projection of one taxonomy entry for listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaSummary {
    /// Area code within its tier's mapping
    pub code: String,
    /// Display name, or the fallback literal when the code is unknown
    pub name: String,
    /// Codes of the next tier down
    pub child_codes: Vec<String>,
}

/// The full three-tier area taxonomy
///
/// Tier mappings are kept as ordered maps, so every listing comes out in
/// ascending code order regardless of the order the source document used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaTaxonomy {
    centers: BTreeMap<String, AreaNode>,
    offices: BTreeMap<String, AreaNode>,
    class10s: BTreeMap<String, AreaNode>,
}

impl AreaTaxonomy {
    /// Create a taxonomy from the three tier mappings
    #[must_use]
    pub fn new(
        centers: BTreeMap<String, AreaNode>,
        offices: BTreeMap<String, AreaNode>,
        class10s: BTreeMap<String, AreaNode>,
    ) -> Self {
        Self {
            centers,
            offices,
            class10s,
        }
    }

    /// Top-tier listing: every center, ordered by code
    #[must_use]
    pub fn regions(&self) -> Vec<AreaSummary> {
        self.centers
            .iter()
            .map(|(code, node)| AreaSummary {
                code: code.clone(),
                name: node.name.clone(),
                child_codes: node.children.clone(),
            })
            .collect()
    }

    /// Resolve office codes to prefecture listings
    ///
    /// Codes absent from the mapping resolve to a placeholder entry rather
    /// than being dropped.
    #[must_use]
    pub fn prefectures(&self, codes: &[String]) -> Vec<AreaSummary> {
        Self::resolve(&self.offices, codes)
    }

    /// Resolve class10 codes to sub-area listings, placeholder on miss
    #[must_use]
    pub fn sub_areas(&self, codes: &[String]) -> Vec<AreaSummary> {
        Self::resolve(&self.class10s, codes)
    }

    /// Child codes of one center, empty when the code is unknown
    #[must_use]
    pub fn region_children(&self, code: &str) -> Vec<String> {
        self.centers
            .get(code)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    /// Child codes of one office, empty when the code is unknown
    #[must_use]
    pub fn prefecture_children(&self, code: &str) -> Vec<String> {
        self.offices
            .get(code)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    fn resolve(mapping: &BTreeMap<String, AreaNode>, codes: &[String]) -> Vec<AreaSummary> {
        codes
            .iter()
            .map(|code| {
                mapping.get(code).map_or_else(
                    || Self::placeholder(code),
                    |node| AreaSummary {
                        code: code.clone(),
                        name: node.name.clone(),
                        child_codes: node.children.clone(),
                    },
                )
            })
            .collect()
    }

    fn placeholder(code: &str) -> AreaSummary {
        AreaSummary {
            code: code.to_string(),
            name: UNKNOWN.to_string(),
            child_codes: Vec::new(),
        }
    }
}
