//! Document loading and text normalization shared by all scan agents.
//!
//! License texts differ wildly in formatting (comment markers, wrapping,
//! capitalization), so every agent works on the same normalized token
//! stream: lowercase, alphanumeric runs only, whitespace collapsed.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read document {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Normalize text for comparison: lowercase, strip everything that is not
/// alphanumeric, collapse runs of whitespace to single spaces.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = true;

    for c in text.chars() {
        if c.is_alphanumeric() {
            for lower in c.to_lowercase() {
                out.push(lower);
            }
            last_was_space = false;
        } else if !last_was_space {
            out.push(' ');
            last_was_space = true;
        }
    }

    if out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Split text into normalized tokens
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Count occurrences of each token
#[must_use]
pub fn term_counts(tokens: &[String]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}

/// Adjacent token pairs, joined with a single space
#[must_use]
pub fn bigrams(tokens: &[String]) -> Vec<String> {
    tokens.windows(2).map(|w| w.join(" ")).collect()
}

/// Read a document from disk and tokenize it
pub fn load_tokens(path: &Path) -> Result<Vec<String>, DocumentError> {
    let contents = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(tokenize(&contents))
}
