use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::license::KnownLicense;
use crate::core::types::LicenseId;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub licenses: Vec<KnownLicense>,
}

/// The reference license catalog
#[derive(Debug)]
pub struct LicenseCatalog {
    /// All known licenses, in catalog order
    pub licenses: Vec<KnownLicense>,

    /// Index: license short name -> index in licenses vec
    id_to_index: HashMap<LicenseId, usize>,
}

impl LicenseCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            licenses: Vec::new(),
            id_to_index: HashMap::new(),
        }
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time, validated by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/licenses.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                "Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION,
                data.version
            );
        }

        let mut catalog = Self::new();
        for mut license in data.licenses {
            license.rebuild_index();
            catalog.add_license(license);
        }

        Ok(catalog)
    }

    /// Add a license to the catalog
    pub fn add_license(&mut self, license: KnownLicense) {
        let index = self.licenses.len();
        self.id_to_index.insert(license.shortname.clone(), index);
        self.licenses.push(license);
    }

    /// Get a license by short name
    pub fn get(&self, id: &LicenseId) -> Option<&KnownLicense> {
        self.id_to_index.get(id).map(|&idx| &self.licenses[idx])
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            licenses: self.licenses.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of licenses in the catalog
    pub fn len(&self) -> usize {
        self.licenses.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty()
    }
}

impl Default for LicenseCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = LicenseCatalog::load_embedded().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_catalog_get_by_id() {
        let catalog = LicenseCatalog::load_embedded().unwrap();

        let mit = catalog.get(&LicenseId::new("MIT"));
        assert!(mit.is_some());
        let mit = mit.unwrap();
        assert_eq!(mit.fullname, "MIT License");
        assert!(!mit.tokens.is_empty(), "token index must be built on load");
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = LicenseCatalog::load_embedded().unwrap();
        assert!(catalog.get(&LicenseId::new("NOT-A-LICENSE")).is_none());
    }

    #[test]
    fn test_catalog_to_json() {
        let catalog = LicenseCatalog::load_embedded().unwrap();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"licenses\""));
        assert!(json.contains("MIT"));
    }

    #[test]
    fn test_add_license() {
        let mut catalog = LicenseCatalog::new();
        assert_eq!(catalog.len(), 0);

        let license = KnownLicense::new("TEST-1.0", "Test License")
            .with_text("you may do as you please with this software");
        catalog.add_license(license);
        assert_eq!(catalog.len(), 1);

        let retrieved = catalog.get(&LicenseId::new("TEST-1.0"));
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().fullname, "Test License");
    }
}
