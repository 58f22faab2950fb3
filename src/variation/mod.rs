//! Rule-driven respelling variation engine.
//!
//! Hinglish words have no canonical spelling: the same Hindi word shows up in
//! Latin script as `kaam`, `kam`, or `km` depending on the writer. This module
//! generates the closure of plausible respellings of a word under an ordered
//! catalog of rewrite rules, so a corpus can treat those spellings as one
//! entry.
//!
//! # Design
//!
//! - A [`types::Rule`] pairs a [`types::Pattern`] (the applicability test)
//!   with a [`types::Rewrite`] (the deterministic transform). Catalogs are
//!   plain data ([`types::RuleSet`]), so they can be swapped or extended
//!   without touching the exploration algorithm.
//! - [`matching`] implements the applicability predicates and the occurrence
//!   scanning they share with the transforms.
//! - [`application`] implements the two rewrite conventions: *last-occurrence
//!   rewrite* (only the right-most occurrence of a literal pattern changes)
//!   and *rightmost-contextual rewrite* (scan candidate positions from the
//!   end of the word, apply at the first one whose surrounding context also
//!   qualifies).
//! - [`engine`] performs the recursive, depth-first exploration with
//!   first-seen-wins deduplication. The input word is never a member of its
//!   own variant set.
//!
//! # Contract violations
//!
//! A transform must only run on words its matcher accepted. If a transform
//! finds no qualifying rewrite position anyway, the matcher and transform
//! have drifted apart; the whole computation aborts with
//! [`error::VariationError::RuleContractViolation`] and no partial result is
//! returned.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hinglish_corpus::variation::{engine::variations, rules::hinglish_rules};
//!
//! let variants = variations(&hinglish_rules(), "dhoom")?;
//! assert_eq!(variants, vec!["dhum".to_string()]);
//! ```

pub mod application;
pub mod engine;
pub mod error;
pub mod matching;
pub mod rules;
pub mod types;

pub use application::apply_rewrite;
pub use engine::variations;
pub use error::{Result, VariationError};
pub use matching::pattern_matches;
pub use rules::hinglish_rules;
pub use types::{Pattern, Rewrite, Rule, RuleSet};
