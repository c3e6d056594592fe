use std::path::Path;

use crate::agents::{load_document_tokens, AgentError, ScanAgent};
use crate::catalog::store::LicenseCatalog;
use crate::core::record::MatchRecord;
use crate::text;

/// The `sim_type` tag for records produced by this agent
pub const SIM_TYPE: &str = "wordFrequencySimilarity";

/// How many of the document's most frequent tokens to compare
const TOP_TOKENS: usize = 10;

/// Best-guess agent based on frequent-token overlap.
///
/// Takes the document's most frequent tokens and scores each license by how
/// much of that frequency mass its own text shares. Always returns exactly
/// one record with `sim_score` 1.0; with an empty catalog the shortname is
/// empty, signaling "no match" without suppressing the record.
pub struct WordFrequencyAgent<'a> {
    catalog: &'a LicenseCatalog,
    verbose: bool,
}

impl<'a> WordFrequencyAgent<'a> {
    pub fn new(catalog: &'a LicenseCatalog) -> Self {
        Self {
            catalog,
            verbose: false,
        }
    }
}

impl ScanAgent for WordFrequencyAgent<'_> {
    fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    fn scan(&self, path: &Path) -> Result<Vec<MatchRecord>, AgentError> {
        let tokens = load_document_tokens(path)?;
        let counts = text::term_counts(&tokens);

        // Most frequent document tokens, ties broken lexically for determinism
        let mut ranked: Vec<(&String, &usize)> = counts.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        let top: Vec<(&String, usize)> = ranked
            .into_iter()
            .take(TOP_TOKENS)
            .map(|(t, &c)| (t, c))
            .collect();

        let mut best: Option<(usize, &str)> = None;
        for license in &self.catalog.licenses {
            let score: usize = top
                .iter()
                .map(|&(token, doc_count)| {
                    let lic_count = license.token_counts.get(token).copied().unwrap_or(0);
                    doc_count.min(lic_count)
                })
                .sum();

            if self.verbose {
                tracing::debug!("{}: frequent-token overlap {score}", license.shortname);
            }

            // Strictly-greater keeps the first (catalog-order) license on ties
            let improved = match best {
                Some((best_score, _)) => score > best_score,
                None => true,
            };
            if improved {
                best = Some((score, license.shortname.as_str()));
            }
        }

        let shortname = best.map_or("", |(_, name)| name);
        Ok(vec![MatchRecord::best_guess(shortname, SIM_TYPE)])
    }
}
