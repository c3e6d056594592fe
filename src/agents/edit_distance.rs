use std::path::Path;

use crate::agents::{load_document_tokens, AgentError, ScanAgent};
use crate::catalog::store::LicenseCatalog;
use crate::core::record::MatchRecord;

/// The `sim_type` tag for records produced by this agent
pub const SIM_TYPE: &str = "dld";

/// Best-guess agent based on Damerau-Levenshtein distance.
///
/// Computes the optimal-string-alignment distance between the document's
/// token sequence and each license's token sequence; the license with the
/// minimum distance wins. Always returns exactly one record.
pub struct EditDistanceAgent<'a> {
    catalog: &'a LicenseCatalog,
    verbose: bool,
}

impl<'a> EditDistanceAgent<'a> {
    pub fn new(catalog: &'a LicenseCatalog) -> Self {
        Self {
            catalog,
            verbose: false,
        }
    }
}

impl ScanAgent for EditDistanceAgent<'_> {
    fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    fn scan(&self, path: &Path) -> Result<Vec<MatchRecord>, AgentError> {
        let tokens = load_document_tokens(path)?;

        let mut best: Option<(usize, &str)> = None;
        for license in &self.catalog.licenses {
            let distance = osa_distance(&tokens, &license.tokens);

            if self.verbose {
                tracing::debug!("{}: edit distance {distance}", license.shortname);
            }

            // Strictly-smaller keeps the first (catalog-order) license on ties
            let improved = match best {
                Some((best_distance, _)) => distance < best_distance,
                None => true,
            };
            if improved {
                best = Some((distance, license.shortname.as_str()));
            }
        }

        let shortname = best.map_or("", |(_, name)| name);
        Ok(vec![MatchRecord::best_guess(shortname, SIM_TYPE)])
    }
}

/// Optimal string alignment distance over token sequences.
///
/// Like Levenshtein but counting an adjacent transposition as a single edit.
/// Two rolling rows plus the transposition row keep memory at O(m).
fn osa_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let m = b.len();
    let mut prev_prev: Vec<usize> = vec![0; m + 1];
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut current: Vec<usize> = vec![0; m + 1];

    for (i, item_a) in a.iter().enumerate() {
        current[0] = i + 1;

        for (j, item_b) in b.iter().enumerate() {
            let cost = usize::from(item_a != item_b);
            let mut distance = (prev[j + 1] + 1) // deletion
                .min(current[j] + 1) // insertion
                .min(prev[j] + cost); // substitution

            if i > 0 && j > 0 && a[i] == b[j - 1] && a[i - 1] == b[j] {
                distance = distance.min(prev_prev[j - 1] + cost); // transposition
            }

            current[j + 1] = distance;
        }

        std::mem::swap(&mut prev_prev, &mut prev);
        std::mem::swap(&mut prev, &mut current);
    }

    prev[m]
}
