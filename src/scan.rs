//! Scan orchestration: one request in, one normalized report out.
//!
//! A [`ScanRequest`] is immutable once built and fully determines agent
//! selection; nothing is read from ambient global state. [`run`] loads the
//! catalog (and n-gram index when needed), selects and configures the agent,
//! invokes it, and wraps its records with the document's canonical absolute
//! path into a [`ScanReport`]. Each request constructs a fresh agent, so
//! nothing is shared across scans.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::agents::{self, AgentError, AgentKind, SelectError};
use crate::catalog::ngram::NgramIndex;
use crate::catalog::store::{CatalogError, LicenseCatalog};
use crate::core::record::MatchRecord;

#[derive(Error, Debug)]
pub enum ScanError {
    // Component failures pass through unwrapped so the original context
    // (which resource, which parameter) stays visible to the caller
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Select(#[from] SelectError),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error("failed to resolve document path {path}: {source}")]
    Resolve {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize scan report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Everything needed to run one scan
#[derive(Debug, Clone)]
pub struct ScanRequest {
    input: PathBuf,
    agent: AgentKind,
    similarity: Option<String>,
    catalog: Option<PathBuf>,
    ngram_index: Option<PathBuf>,
    verbose: bool,
}

impl ScanRequest {
    pub fn new(input: impl Into<PathBuf>, agent: AgentKind) -> Self {
        Self {
            input: input.into(),
            agent,
            similarity: None,
            catalog: None,
            ngram_index: None,
            verbose: false,
        }
    }

    /// Similarity variant for the tfidf/Ngram agents (defaults to CosineSim)
    #[must_use]
    pub fn with_similarity(mut self, similarity: impl Into<String>) -> Self {
        self.similarity = Some(similarity.into());
        self
    }

    /// Use a catalog file instead of the embedded corpus
    #[must_use]
    pub fn with_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog = Some(path.into());
        self
    }

    /// Use an n-gram keyword file instead of the embedded index
    #[must_use]
    pub fn with_ngram_index(mut self, path: impl Into<PathBuf>) -> Self {
        self.ngram_index = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn agent(&self) -> AgentKind {
        self.agent
    }
}

/// The normalized outcome of one scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Canonical absolute path of the scanned document
    pub file: PathBuf,

    /// Match records in descending relevance order
    pub results: Vec<MatchRecord>,
}

impl ScanReport {
    /// Wrap agent output with the document's canonical absolute path.
    /// This is the only place path canonicalization happens.
    pub fn new(input: &Path, results: Vec<MatchRecord>) -> Result<Self, ScanError> {
        let file = input
            .canonicalize()
            .map_err(|source| ScanError::Resolve {
                path: input.to_path_buf(),
                source,
            })?;
        Ok(Self { file, results })
    }

    /// Pretty-printed JSON with sorted keys and unescaped UTF-8.
    ///
    /// Round-tripping through `serde_json::Value` is what sorts the keys:
    /// its object representation is a `BTreeMap`.
    pub fn to_json(&self) -> Result<String, ScanError> {
        let value = serde_json::to_value(self)?;
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

/// Run one scan request start to finish.
///
/// Fails fast on an illegal similarity variant (nothing is constructed), and
/// otherwise propagates catalog and agent failures unmodified.
pub fn run(request: &ScanRequest) -> Result<ScanReport, ScanError> {
    let catalog = match &request.catalog {
        Some(path) => LicenseCatalog::load_from_file(path)?,
        None => LicenseCatalog::load_embedded()?,
    };

    // Only the Ngram agent consumes the keyword index
    let ngram_index = if request.agent == AgentKind::Ngram {
        Some(match &request.ngram_index {
            Some(path) => NgramIndex::load_from_file(path)?,
            None => NgramIndex::load_embedded()?,
        })
    } else {
        None
    };

    let mut agent = agents::select(
        request.agent,
        request.similarity.as_deref(),
        &catalog,
        ngram_index.as_ref(),
    )?;
    agent.set_verbose(request.verbose);

    let results = agent.scan(&request.input)?;
    ScanReport::new(&request.input, results)
}
