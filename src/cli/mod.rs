//! Command-line interface for license-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **scan**: Identify the license of a text document
//! - **catalog**: List, show, or export licenses from the catalog
//!
//! ## Usage
//!
//! ```text
//! # Scan a file with the default tfidf agent
//! license-solver scan LICENSE.txt -a tfidf
//!
//! # Pick a similarity variant for the Ngram agent
//! license-solver scan LICENSE.txt -a Ngram -s DiceSim
//!
//! # JSON output for scripting
//! license-solver scan LICENSE.txt -a wordFrequencySimilarity --format json
//!
//! # Inspect the embedded catalog
//! license-solver catalog list
//! license-solver catalog show MIT
//! ```

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod scan;

#[derive(Parser)]
#[command(name = "license-solver")]
#[command(version)]
#[command(about = "Identify software licenses by matching document text against known license texts")]
#[command(
    long_about = "license-solver compares a text document against a catalog of known reference license texts using one of four interchangeable similarity agents:\n\n- wordFrequencySimilarity: frequent-token overlap (single best guess)\n- DLD: Damerau-Levenshtein edit distance (single best guess)\n- tfidf: TF-IDF vectors (ranked list; CosineSim or ScoreSim)\n- Ngram: keyword-filtered n-gram similarity (ranked list; CosineSim, DiceSim, or BigramCosineSim)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a document and report matching licenses
    Scan(scan::ScanArgs),

    /// Manage the license catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
