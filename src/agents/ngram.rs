use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::agents::{load_document_tokens, AgentError, NgramVariant, RankingConfig, ScanAgent};
use crate::catalog::ngram::NgramIndex;
use crate::catalog::store::LicenseCatalog;
use crate::core::license::KnownLicense;
use crate::core::record::MatchRecord;
use crate::text;

#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Ranked-list agent based on n-gram similarity.
///
/// Licenses are first filtered to candidates whose characteristic keyword
/// phrases (from the [`NgramIndex`]) appear in the document; only candidates
/// are scored, which keeps the expensive comparisons off clearly unrelated
/// licenses. A license without an index entry is never a candidate.
///
/// Scoring per variant:
/// - `CosineSim`: cosine over unigram count vectors
/// - `DiceSim`: Dice coefficient over bigram sets, `2|A∩B| / (|A| + |B|)`
/// - `BigramCosineSim`: cosine over bigram count vectors
pub struct NgramAgent<'a> {
    catalog: &'a LicenseCatalog,
    index: &'a NgramIndex,
    variant: NgramVariant,
    config: RankingConfig,
    verbose: bool,
}

impl<'a> NgramAgent<'a> {
    pub fn new(catalog: &'a LicenseCatalog, index: &'a NgramIndex, variant: NgramVariant) -> Self {
        Self {
            catalog,
            index,
            variant,
            config: RankingConfig::default(),
            verbose: false,
        }
    }

    pub fn with_config(
        catalog: &'a LicenseCatalog,
        index: &'a NgramIndex,
        variant: NgramVariant,
        config: RankingConfig,
    ) -> Self {
        Self {
            catalog,
            index,
            variant,
            config,
            verbose: false,
        }
    }

    /// Licenses whose keyword phrases occur in the document token stream
    fn candidates(&self, doc_tokens: &[String]) -> Vec<&'a KnownLicense> {
        self.catalog
            .licenses
            .iter()
            .filter(|license| {
                self.index
                    .phrases_for(&license.shortname)
                    .is_some_and(|phrases| {
                        phrases.iter().any(|p| contains_phrase(doc_tokens, p))
                    })
            })
            .collect()
    }

    fn score(&self, doc_tokens: &[String], license: &KnownLicense) -> f64 {
        match self.variant {
            NgramVariant::CosineSim => {
                let doc = text::term_counts(doc_tokens);
                cosine_similarity(&doc, &license.token_counts)
            }
            NgramVariant::DiceSim => {
                let doc: HashSet<String> = text::bigrams(doc_tokens).into_iter().collect();
                let lic: HashSet<String> = text::bigrams(&license.tokens).into_iter().collect();
                dice_coefficient(&doc, &lic)
            }
            NgramVariant::BigramCosineSim => {
                let doc = text::term_counts(&text::bigrams(doc_tokens));
                let lic = text::term_counts(&text::bigrams(&license.tokens));
                cosine_similarity(&doc, &lic)
            }
        }
    }
}

impl ScanAgent for NgramAgent<'_> {
    fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    fn scan(&self, path: &Path) -> Result<Vec<MatchRecord>, AgentError> {
        let tokens = load_document_tokens(path)?;

        let candidates = self.candidates(&tokens);
        if self.verbose {
            tracing::debug!(
                "{} of {} licenses pass the keyword filter",
                candidates.len(),
                self.catalog.len()
            );
        }

        let mut results: Vec<MatchRecord> = candidates
            .into_iter()
            .map(|license| {
                let score = self.score(&tokens, license);
                if self.verbose {
                    tracing::debug!("{}: {} {score:.4}", license.shortname, self.variant.sim_type());
                }
                MatchRecord::new(license.shortname.as_str(), self.variant.sim_type(), score, "")
            })
            .collect();

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

/// Does `phrase` occur as a contiguous token run in `tokens`?
fn contains_phrase(tokens: &[String], phrase: &[String]) -> bool {
    !phrase.is_empty() && tokens.windows(phrase.len()).any(|window| window == phrase)
}

/// Cosine similarity between two sparse count vectors
fn cosine_similarity(a: &HashMap<String, usize>, b: &HashMap<String, usize>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(term, &ca)| b.get(term).map(|&cb| count_to_f64(ca) * count_to_f64(cb)))
        .sum();
    let norm = |v: &HashMap<String, usize>| -> f64 {
        v.values()
            .map(|&c| count_to_f64(c) * count_to_f64(c))
            .sum::<f64>()
            .sqrt()
    };

    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Dice coefficient between two sets: `2|A∩B| / (|A| + |B|)`
fn dice_coefficient(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    2.0 * count_to_f64(intersection) / (count_to_f64(a.len()) + count_to_f64(b.len()))
}
