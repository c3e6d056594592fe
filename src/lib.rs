//! # license-solver
//!
//! A library for identifying software licenses from document text.
//!
//! Given a file that might contain a license (a LICENSE file, a source
//! header, a README excerpt), it's often unclear exactly which license it
//! is: texts get re-wrapped, prefixed with copyright lines, or lightly
//! edited. `license-solver` answers this by scoring the document against a
//! catalog of known reference license texts with one of four
//! interchangeable similarity agents.
//!
//! ## Agents
//!
//! - **wordFrequencySimilarity**: frequent-token overlap, single best guess
//! - **DLD**: Damerau-Levenshtein edit distance, single best guess
//! - **tfidf**: TF-IDF vector similarity (CosineSim or ScoreSim), ranked list
//! - **Ngram**: keyword-filtered n-gram similarity (CosineSim, DiceSim, or
//!   BigramCosineSim), ranked list
//!
//! Every agent produces the same result shape: an ordered sequence of
//! [`MatchRecord`]s, most similar first.
//!
//! ## Example
//!
//! ```rust,no_run
//! use license_solver::{AgentKind, ScanRequest};
//!
//! let request = ScanRequest::new("LICENSE.txt", AgentKind::Tfidf)
//!     .with_similarity("CosineSim");
//! let report = license_solver::scan::run(&request).unwrap();
//!
//! for record in &report.results {
//!     println!("{}: {:.3}", record.shortname, record.sim_score);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: License catalog storage and the n-gram keyword index
//! - [`core`]: Core data types for licenses and match records
//! - [`agents`]: The four similarity agents and agent selection
//! - [`scan`]: Scan request orchestration and report normalization
//! - [`text`]: Shared document normalization and tokenization
//! - [`cli`]: Command-line interface implementation

pub mod agents;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod scan;
pub mod text;

// Re-export commonly used types for convenience
pub use agents::{AgentKind, ScanAgent, SelectError};
pub use catalog::ngram::NgramIndex;
pub use catalog::store::LicenseCatalog;
pub use crate::core::license::KnownLicense;
pub use crate::core::record::MatchRecord;
pub use crate::core::types::LicenseId;
pub use scan::{ScanReport, ScanRequest};
