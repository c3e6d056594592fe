use serde::{Deserialize, Serialize};

/// One candidate license match produced by a scan agent.
///
/// This is the canonical result shape shared by all four agents. The two
/// best-guess agents (word frequency, edit distance) produce exactly one
/// record per scan with `sim_score` pinned at 1.0; the ranked agents
/// (tfidf, n-gram) produce an ordered sequence with algorithm-specific
/// scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Short name of the matched license (empty when nothing matched)
    pub shortname: String,

    /// Which similarity measure produced this record
    pub sim_type: String,

    /// Similarity score; higher is more similar
    pub sim_score: f64,

    /// Free-form comments for the similarity measure, may be empty
    pub description: String,
}

impl MatchRecord {
    pub fn new(
        shortname: impl Into<String>,
        sim_type: impl Into<String>,
        sim_score: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            shortname: shortname.into(),
            sim_type: sim_type.into(),
            sim_score,
            description: description.into(),
        }
    }

    /// The single-record shape used by the best-guess agents: score is
    /// fixed at the maximum to signal "best/only match".
    pub fn best_guess(shortname: impl Into<String>, sim_type: &str) -> Self {
        Self::new(shortname, sim_type, 1.0, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_guess_shape() {
        let record = MatchRecord::best_guess("MIT", "wordFrequencySimilarity");
        assert_eq!(record.shortname, "MIT");
        assert_eq!(record.sim_type, "wordFrequencySimilarity");
        assert!((record.sim_score - 1.0).abs() < f64::EPSILON);
        assert!(record.description.is_empty());
    }

    #[test]
    fn test_serialized_keys_are_sorted() {
        let record = MatchRecord::best_guess("GPL-2.0-only", "dld");
        let value = serde_json::to_value(&record).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        // serde_json::Value objects iterate in sorted key order
        assert_eq!(keys, ["description", "shortname", "sim_score", "sim_type"]);
    }
}
