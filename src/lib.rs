//! # hinglish-corpus
//!
//! Corpus construction utilities for Hinglish text (Hindi rendered in Latin
//! script with informal, non-standardized spelling).
//!
//! Three pieces live here:
//!
//! - [`variation`] - the variation engine: a rule-driven exploration of the
//!   space of plausible respellings of a word, with deduplication and
//!   contract-violation checks. This is the algorithmic core.
//! - [`corpus`] - thin collaborators around a sorted key-value store:
//!   bulk-loading JSON key/value records and counting word frequencies.
//! - [`cli`] - the command surface wiring both into a binary.
//!
//! ## Example
//!
//! ```rust,ignore
//! use hinglish_corpus::prelude::*;
//!
//! let catalog = hinglish_rules();
//! let variants = variations(&catalog, "kaam")?;
//! assert!(variants.contains(&"kam".to_string()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod corpus;
pub mod variation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::corpus::store::{CorpusStore, MemoryStore};
    pub use crate::variation::engine::variations;
    pub use crate::variation::error::VariationError;
    pub use crate::variation::rules::hinglish_rules;
    pub use crate::variation::types::{Pattern, Rewrite, Rule, RuleSet};
}
