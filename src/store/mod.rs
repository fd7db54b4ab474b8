//! Read-only lookup state shared by every request handler.
//!
//! # Design Decisions
//! - Built once before the listener binds, then shared via `Arc`
//! - No write path exists, so readers need no locking

use crate::config::DataConfig;
use crate::records::{load_catalog, load_roster, Catalog, CatalogItem, LoadError, StaffMember};

/// Catalog and staff rosters loaded at startup.
#[derive(Debug, Default)]
pub struct LookupStore {
    catalog: Catalog,
    sellers: Vec<StaffMember>,
    plumbers: Vec<StaffMember>,
}

impl LookupStore {
    /// Build a store from already-loaded tables.
    ///
    /// Rosters are sorted by name so the ordering holds whatever the source.
    pub fn new(
        catalog: Catalog,
        mut sellers: Vec<StaffMember>,
        mut plumbers: Vec<StaffMember>,
    ) -> Self {
        sellers.sort_by(|a, b| a.name.cmp(&b.name));
        plumbers.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            catalog,
            sellers,
            plumbers,
        }
    }

    /// Load all three tables. Any file failing to load fails the whole store.
    pub fn load(config: &DataConfig) -> Result<Self, LoadError> {
        let catalog = load_catalog(&config.catalog_path)?;
        let sellers = load_roster(&config.sellers_path)?;
        let plumbers = load_roster(&config.plumbers_path)?;

        tracing::info!(
            items = catalog.len(),
            sellers = sellers.len(),
            plumbers = plumbers.len(),
            "Lookup store ready"
        );

        Ok(Self {
            catalog,
            sellers,
            plumbers,
        })
    }

    /// Look up a catalog item by code.
    pub fn product(&self, code: &str) -> Option<&CatalogItem> {
        self.catalog.get(code)
    }

    /// Sellers sorted by name.
    pub fn sellers(&self) -> &[StaffMember] {
        &self.sellers
    }

    /// Plumbers sorted by name.
    pub fn plumbers(&self) -> &[StaffMember] {
        &self.plumbers
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }
}
