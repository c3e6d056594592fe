use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::types::LicenseId;
use crate::text;

/// A known reference license in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnownLicense {
    /// Unique short name (e.g. "MIT", "GPL-2.0-only")
    pub shortname: LicenseId,

    /// Human-readable full name
    pub fullname: String,

    /// Link to the SPDX entry for this license
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spdx_url: Option<String>,

    /// Tags for filtering (e.g. "permissive", "copyleft", "osi_approved")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Full reference text of the license
    pub text: String,

    // === Pre-computed for fast matching (populated on load) ===
    /// Normalized token sequence of the reference text
    #[serde(skip)]
    pub tokens: Vec<String>,

    /// Token -> occurrence count in the reference text
    #[serde(skip)]
    pub token_counts: HashMap<String, usize>,
}

impl KnownLicense {
    pub fn new(shortname: impl Into<String>, fullname: impl Into<String>) -> Self {
        Self {
            shortname: LicenseId::new(shortname),
            fullname: fullname.into(),
            spdx_url: None,
            tags: Vec::new(),
            text: String::new(),
            tokens: Vec::new(),
            token_counts: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self.rebuild_index();
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Rebuild the token index after modifying the reference text
    pub fn rebuild_index(&mut self) {
        self.tokens = text::tokenize(&self.text);
        self.token_counts = text::term_counts(&self.tokens);
    }

    /// Check if this license carries the given tag
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
