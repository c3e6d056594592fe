use std::collections::HashMap;
use std::path::Path;

use crate::catalog::store::CatalogError;
use crate::core::types::LicenseId;
use crate::text;

/// Characteristic keyword phrases per license, used by the n-gram agent to
/// pre-filter which licenses are worth scoring against a document.
///
/// Stored as a flat JSON object: short name -> list of phrases. Phrases are
/// normalized through the shared text pipeline on load so that matching
/// against document tokens is exact.
#[derive(Debug)]
pub struct NgramIndex {
    /// License short name -> normalized phrase token sequences
    entries: HashMap<LicenseId, Vec<Vec<String>>>,
}

impl NgramIndex {
    /// Load the embedded default keyword index
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time, validated by build.rs
        const EMBEDDED_INDEX: &str = include_str!("../../catalogs/ngram_keywords.json");
        Self::from_json(EMBEDDED_INDEX)
    }

    /// Load keyword index from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse keyword index from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;

        let entries = raw
            .into_iter()
            .map(|(shortname, phrases)| {
                let tokenized = phrases
                    .iter()
                    .map(|p| text::tokenize(p))
                    .filter(|t| !t.is_empty())
                    .collect();
                (LicenseId::new(shortname), tokenized)
            })
            .collect();

        Ok(Self { entries })
    }

    /// Normalized phrases for a license, if any are known
    pub fn phrases_for(&self, id: &LicenseId) -> Option<&[Vec<String>]> {
        self.entries.get(id).map(Vec::as_slice)
    }

    /// Number of licenses with keyword entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
