//! Scan agents and agent selection.
//!
//! Four interchangeable agents score a document against the license catalog:
//!
//! - [`word_frequency::WordFrequencyAgent`]: frequent-token overlap, single best guess
//! - [`edit_distance::EditDistanceAgent`]: Damerau-Levenshtein distance, single best guess
//! - [`tfidf::TfidfAgent`]: TF-IDF vectors, ranked list (`CosineSim` or `ScoreSim`)
//! - [`ngram::NgramAgent`]: keyword-filtered n-gram similarity, ranked list
//!   (`CosineSim`, `DiceSim`, or `BigramCosineSim`)
//!
//! All agents implement [`ScanAgent`] and return the same ordered
//! `Vec<MatchRecord>` shape, so callers never branch on which agent ran.
//! [`select`] maps an [`AgentKind`] plus an optional similarity variant name
//! to a constructed agent, rejecting illegal variants before anything is
//! built.

use std::path::Path;

use thiserror::Error;

use crate::catalog::ngram::NgramIndex;
use crate::catalog::store::LicenseCatalog;
use crate::core::record::MatchRecord;
use crate::text::{self, DocumentError};

pub mod edit_distance;
pub mod ngram;
pub mod tfidf;
pub mod word_frequency;

/// The stable agent-name vocabulary, as accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum AgentKind {
    #[value(name = "wordFrequencySimilarity")]
    WordFrequency,

    #[value(name = "DLD")]
    EditDistance,

    #[value(name = "tfidf")]
    Tfidf,

    #[value(name = "Ngram")]
    Ngram,
}

impl AgentKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WordFrequency => "wordFrequencySimilarity",
            Self::EditDistance => "DLD",
            Self::Tfidf => "tfidf",
            Self::Ngram => "Ngram",
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Similarity variants for the tfidf agent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TfidfVariant {
    CosineSim,
    ScoreSim,
}

impl TfidfVariant {
    /// The `sim_type` tag carried by records this variant produces
    #[must_use]
    pub fn sim_type(self) -> &'static str {
        match self {
            Self::CosineSim => "CosineSim",
            Self::ScoreSim => "ScoreSim",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        match name {
            "CosineSim" => Some(Self::CosineSim),
            "ScoreSim" => Some(Self::ScoreSim),
            _ => None,
        }
    }
}

/// Similarity variants for the n-gram agent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NgramVariant {
    CosineSim,
    DiceSim,
    BigramCosineSim,
}

impl NgramVariant {
    /// The `sim_type` tag carried by records this variant produces
    #[must_use]
    pub fn sim_type(self) -> &'static str {
        match self {
            Self::CosineSim => "CosineSim",
            Self::DiceSim => "DiceSim",
            Self::BigramCosineSim => "BigramCosineSim",
        }
    }

    fn parse(name: &str) -> Option<Self> {
        match name {
            "CosineSim" => Some(Self::CosineSim),
            "DiceSim" => Some(Self::DiceSim),
            "BigramCosineSim" => Some(Self::BigramCosineSim),
            _ => None,
        }
    }
}

/// Default similarity variant when none is requested
const DEFAULT_SIMILARITY: &str = "CosineSim";

#[derive(Error, Debug)]
pub enum SelectError {
    #[error("invalid similarity '{similarity}' for the {agent} agent: choose from {{{allowed}}}")]
    InvalidParameter {
        agent: AgentKind,
        similarity: String,
        allowed: &'static str,
    },

    #[error("the Ngram agent requires an n-gram keyword index")]
    MissingNgramIndex,
}

#[derive(Error, Debug)]
pub enum AgentError {
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// A similarity agent, constructed fresh per scan request.
///
/// Implementations must be deterministic given a fixed document and catalog,
/// and must return records in descending relevance order. The best-guess
/// agents return exactly one record even when nothing matched.
pub trait ScanAgent {
    /// Enable or disable progress reporting for this agent
    fn set_verbose(&mut self, verbose: bool);

    /// Score the document at `path` against the catalog
    fn scan(&self, path: &Path) -> Result<Vec<MatchRecord>, AgentError>;
}

/// Ranking policy shared by the list-producing agents
#[derive(Debug, Clone)]
pub struct RankingConfig {
    /// Minimum score for a record to be included
    pub min_score: f64,
    /// Maximum number of records to return
    pub max_results: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            min_score: 0.1,
            max_results: 10,
        }
    }
}

/// Construct the requested agent, bound to the given catalog.
///
/// `similarity` is only meaningful for the tfidf and Ngram agents (defaulting
/// to `CosineSim` when omitted) and is ignored for the other two. An illegal
/// variant is rejected here, before any agent is constructed, so the caller
/// gets a correctable error instead of a silently substituted default.
///
/// Selection performs no file I/O: the catalog and keyword index arrive
/// already loaded.
pub fn select<'a>(
    kind: AgentKind,
    similarity: Option<&str>,
    catalog: &'a LicenseCatalog,
    ngram_index: Option<&'a NgramIndex>,
) -> Result<Box<dyn ScanAgent + 'a>, SelectError> {
    let similarity = similarity.unwrap_or(DEFAULT_SIMILARITY);

    match kind {
        AgentKind::WordFrequency => Ok(Box::new(word_frequency::WordFrequencyAgent::new(catalog))),

        AgentKind::EditDistance => Ok(Box::new(edit_distance::EditDistanceAgent::new(catalog))),

        AgentKind::Tfidf => {
            let variant =
                TfidfVariant::parse(similarity).ok_or_else(|| SelectError::InvalidParameter {
                    agent: kind,
                    similarity: similarity.to_string(),
                    allowed: "CosineSim,ScoreSim",
                })?;
            Ok(Box::new(tfidf::TfidfAgent::new(catalog, variant)))
        }

        AgentKind::Ngram => {
            let variant =
                NgramVariant::parse(similarity).ok_or_else(|| SelectError::InvalidParameter {
                    agent: kind,
                    similarity: similarity.to_string(),
                    allowed: "CosineSim,DiceSim,BigramCosineSim",
                })?;
            let index = ngram_index.ok_or(SelectError::MissingNgramIndex)?;
            Ok(Box::new(ngram::NgramAgent::new(catalog, index, variant)))
        }
    }
}

/// Read and tokenize the document a scan was asked about
pub(crate) fn load_document_tokens(path: &Path) -> Result<Vec<String>, AgentError> {
    Ok(text::load_tokens(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> LicenseCatalog {
        LicenseCatalog::load_embedded().unwrap()
    }

    #[test]
    fn test_select_all_agents_with_defaults() {
        let catalog = catalog();
        let index = NgramIndex::load_embedded().unwrap();

        for kind in [
            AgentKind::WordFrequency,
            AgentKind::EditDistance,
            AgentKind::Tfidf,
            AgentKind::Ngram,
        ] {
            let agent = select(kind, None, &catalog, Some(&index));
            assert!(agent.is_ok(), "selection failed for {kind}");
        }
    }

    #[test]
    fn test_select_tfidf_legal_variants() {
        let catalog = catalog();
        assert!(select(AgentKind::Tfidf, Some("CosineSim"), &catalog, None).is_ok());
        assert!(select(AgentKind::Tfidf, Some("ScoreSim"), &catalog, None).is_ok());
    }

    #[test]
    fn test_select_tfidf_rejects_ngram_variant() {
        let catalog = catalog();
        let err = select(AgentKind::Tfidf, Some("DiceSim"), &catalog, None)
            .err()
            .expect("selection should fail");
        assert!(matches!(err, SelectError::InvalidParameter { .. }));
        assert!(err.to_string().contains("CosineSim,ScoreSim"));
    }

    #[test]
    fn test_select_ngram_legal_variants() {
        let catalog = catalog();
        let index = NgramIndex::load_embedded().unwrap();
        for variant in ["CosineSim", "DiceSim", "BigramCosineSim"] {
            assert!(select(AgentKind::Ngram, Some(variant), &catalog, Some(&index)).is_ok());
        }
    }

    #[test]
    fn test_select_ngram_rejects_unknown_variant() {
        let catalog = catalog();
        let index = NgramIndex::load_embedded().unwrap();
        let err = select(AgentKind::Ngram, Some("JaccardSim"), &catalog, Some(&index))
            .err()
            .expect("selection should fail");
        assert!(matches!(err, SelectError::InvalidParameter { .. }));
    }

    #[test]
    fn test_select_scalar_agents_ignore_similarity() {
        let catalog = catalog();
        // Not applicable for these agents, so even a nonsense value is ignored
        assert!(select(AgentKind::WordFrequency, Some("bogus"), &catalog, None).is_ok());
        assert!(select(AgentKind::EditDistance, Some("bogus"), &catalog, None).is_ok());
    }

    #[test]
    fn test_select_ngram_without_index_fails() {
        let catalog = catalog();
        let err = select(AgentKind::Ngram, Some("CosineSim"), &catalog, None)
            .err()
            .expect("selection should fail");
        assert!(matches!(err, SelectError::MissingNgramIndex));
    }
}
