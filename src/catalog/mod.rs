//! License catalog storage.
//!
//! The catalog is a versioned JSON document embedded into the binary at
//! compile time (and validated by `build.rs`); a custom catalog file can be
//! substituted at runtime for testing or for private license sets.
//!
//! - [`store::LicenseCatalog`]: the reference license texts and their
//!   precomputed token indexes
//! - [`ngram::NgramIndex`]: characteristic keyword phrases per license,
//!   consumed by the n-gram agent

pub mod ngram;
pub mod store;

pub use ngram::NgramIndex;
pub use store::{CatalogError, LicenseCatalog};
