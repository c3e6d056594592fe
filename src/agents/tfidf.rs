use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::agents::{load_document_tokens, AgentError, RankingConfig, ScanAgent, TfidfVariant};
use crate::catalog::store::LicenseCatalog;
use crate::core::record::MatchRecord;
use crate::text;

/// Safely convert usize to f64 for score calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Ranked-list agent based on TF-IDF weighting over the catalog vocabulary.
///
/// Inverse document frequencies are fitted on the catalog (smoothed, so
/// tokens unseen in any license still get a finite weight):
/// `idf(t) = ln((1 + N) / (1 + df(t))) + 1`.
///
/// - `CosineSim`: cosine between the document's and each license's
///   L2-normalized tf-idf vectors.
/// - `ScoreSim`: idf-weighted token overlap, the fraction of a license's
///   idf mass covered by tokens the document shares with it.
///
/// Both scores are in `[0, 1]`; results below the ranking threshold are
/// dropped and the list is capped.
pub struct TfidfAgent<'a> {
    catalog: &'a LicenseCatalog,
    variant: TfidfVariant,
    config: RankingConfig,
    verbose: bool,
}

impl<'a> TfidfAgent<'a> {
    pub fn new(catalog: &'a LicenseCatalog, variant: TfidfVariant) -> Self {
        Self {
            catalog,
            variant,
            config: RankingConfig::default(),
            verbose: false,
        }
    }

    pub fn with_config(catalog: &'a LicenseCatalog, variant: TfidfVariant, config: RankingConfig) -> Self {
        Self {
            catalog,
            variant,
            config,
            verbose: false,
        }
    }

    /// Smoothed inverse document frequency per token, fitted on the catalog
    fn fit_idf(&self) -> HashMap<&'a str, f64> {
        let n = count_to_f64(self.catalog.len());
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();

        for license in &self.catalog.licenses {
            let distinct: HashSet<&str> = license.token_counts.keys().map(String::as_str).collect();
            for token in distinct {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        document_frequency
            .into_iter()
            .map(|(token, df)| (token, ((1.0 + n) / (1.0 + count_to_f64(df))).ln() + 1.0))
            .collect()
    }

    /// idf for a token, falling back to the unseen-token weight
    fn idf_of(idf: &HashMap<&str, f64>, n: f64, token: &str) -> f64 {
        idf.get(token).copied().unwrap_or_else(|| (1.0 + n).ln() + 1.0)
    }

    fn cosine_score(
        &self,
        doc_counts: &HashMap<String, usize>,
        license_counts: &HashMap<String, usize>,
        idf: &HashMap<&str, f64>,
        n: f64,
    ) -> f64 {
        let weigh = |counts: &HashMap<String, usize>| -> HashMap<String, f64> {
            counts
                .iter()
                .map(|(t, &c)| (t.clone(), count_to_f64(c) * Self::idf_of(idf, n, t)))
                .collect()
        };

        let doc_vec = weigh(doc_counts);
        let lic_vec = weigh(license_counts);

        let dot: f64 = doc_vec
            .iter()
            .filter_map(|(t, w)| lic_vec.get(t).map(|lw| w * lw))
            .sum();
        let doc_norm: f64 = doc_vec.values().map(|w| w * w).sum::<f64>().sqrt();
        let lic_norm: f64 = lic_vec.values().map(|w| w * w).sum::<f64>().sqrt();

        if doc_norm == 0.0 || lic_norm == 0.0 {
            0.0
        } else {
            dot / (doc_norm * lic_norm)
        }
    }

    fn overlap_score(
        &self,
        doc_counts: &HashMap<String, usize>,
        license_counts: &HashMap<String, usize>,
        idf: &HashMap<&str, f64>,
        n: f64,
    ) -> f64 {
        let shared: f64 = license_counts
            .keys()
            .filter(|t| doc_counts.contains_key(*t))
            .map(|t| Self::idf_of(idf, n, t))
            .sum();
        let total: f64 = license_counts.keys().map(|t| Self::idf_of(idf, n, t)).sum();

        if total == 0.0 {
            0.0
        } else {
            shared / total
        }
    }
}

impl ScanAgent for TfidfAgent<'_> {
    fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    fn scan(&self, path: &Path) -> Result<Vec<MatchRecord>, AgentError> {
        let tokens = load_document_tokens(path)?;
        let doc_counts = text::term_counts(&tokens);

        let idf = self.fit_idf();
        let n = count_to_f64(self.catalog.len());

        let mut results: Vec<MatchRecord> = self
            .catalog
            .licenses
            .iter()
            .map(|license| {
                let score = match self.variant {
                    TfidfVariant::CosineSim => {
                        self.cosine_score(&doc_counts, &license.token_counts, &idf, n)
                    }
                    TfidfVariant::ScoreSim => {
                        self.overlap_score(&doc_counts, &license.token_counts, &idf, n)
                    }
                };

                if self.verbose {
                    tracing::debug!("{}: {} {score:.4}", license.shortname, self.variant.sim_type());
                }

                MatchRecord::new(license.shortname.as_str(), self.variant.sim_type(), score, "")
            })
            .collect();

        // Sort by score descending, shortname ascending for deterministic ties
        results.sort_by(|a, b| {
            b.sim_score
                .partial_cmp(&a.sim_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.shortname.cmp(&b.shortname))
        });

        Ok(results
            .into_iter()
            .filter(|r| r.sim_score >= self.config.min_score)
            .take(self.config.max_results)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn mit_doc(catalog: &LicenseCatalog) -> tempfile::NamedTempFile {
        let text = catalog
            .get(&crate::core::types::LicenseId::new("MIT"))
            .unwrap()
            .text
            .clone();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_cosine_top_match_is_mit_for_mit_text() {
        let catalog = LicenseCatalog::load_embedded().unwrap();
        let doc = mit_doc(&catalog);

        let agent = TfidfAgent::new(&catalog, TfidfVariant::CosineSim);
        let records = agent.scan(doc.path()).unwrap();

        assert!(!records.is_empty());
        assert_eq!(records[0].shortname, "MIT");
        assert_eq!(records[0].sim_type, "CosineSim");
        // Identical text gives a cosine of 1 up to rounding
        assert!(records[0].sim_score > 0.99);
    }

    #[test]
    fn test_results_are_sorted_descending() {
        let catalog = LicenseCatalog::load_embedded().unwrap();
        let doc = mit_doc(&catalog);

        let agent = TfidfAgent::new(&catalog, TfidfVariant::CosineSim);
        let records = agent.scan(doc.path()).unwrap();

        for pair in records.windows(2) {
            assert!(pair[0].sim_score >= pair[1].sim_score);
        }
    }

    #[test]
    fn test_score_sim_full_overlap_is_one() {
        let catalog = LicenseCatalog::load_embedded().unwrap();
        let doc = mit_doc(&catalog);

        let agent = TfidfAgent::new(&catalog, TfidfVariant::ScoreSim);
        let records = agent.scan(doc.path()).unwrap();

        assert_eq!(records[0].shortname, "MIT");
        assert!((records[0].sim_score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ranking_config_caps_results() {
        let catalog = LicenseCatalog::load_embedded().unwrap();
        let doc = mit_doc(&catalog);

        let config = RankingConfig {
            min_score: 0.0,
            max_results: 2,
        };
        let agent = TfidfAgent::with_config(&catalog, TfidfVariant::CosineSim, config);
        let records = agent.scan(doc.path()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_unrelated_text_scores_below_identical_text() {
        let catalog = LicenseCatalog::load_embedded().unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"fn main() { println!(\"hello world\"); }")
            .unwrap();

        let config = RankingConfig {
            min_score: 0.0,
            max_results: usize::MAX,
        };
        let agent = TfidfAgent::with_config(&catalog, TfidfVariant::CosineSim, config);
        let records = agent.scan(file.path()).unwrap();

        assert!(records.iter().all(|r| r.sim_score < 0.5));
    }
}
