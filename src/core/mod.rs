//! Core data types for license identification.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`MatchRecord`]: One candidate license match with score and provenance
//! - [`KnownLicense`]: A reference license definition from the catalog
//! - [`LicenseId`]: Unique short-name identifier for a license
//!
//! ## Result shape
//!
//! Every agent produces an ordered sequence of [`MatchRecord`]s, so callers
//! never have to branch on which agent ran. The `sim_type` field records the
//! similarity measure that produced each record:
//!
//! | Agent | `sim_type` values |
//! |-------|-------------------|
//! | word frequency | `wordFrequencySimilarity` |
//! | edit distance  | `dld` |
//! | tfidf          | `CosineSim`, `ScoreSim` |
//! | n-gram         | `CosineSim`, `DiceSim`, `BigramCosineSim` |

pub mod license;
pub mod record;
pub mod types;

pub use license::KnownLicense;
pub use record::MatchRecord;
pub use types::LicenseId;
