//! Record types served by the lookup endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A catalog entry: a sellable item or a group of items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Lookup key, unique within the catalog.
    pub code: String,
    pub article: String,
    /// Code of the parent group.
    pub group_code: String,
    pub is_group: bool,
    pub name: String,
    pub price: f64,
}

/// A member of a staff roster (seller or plumber).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub code: String,
    pub name: String,
}

/// Catalog keyed by item code.
pub type Catalog = HashMap<String, CatalogItem>;
