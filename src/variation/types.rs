//! Type definitions for respelling rules.
//!
//! A rule catalog is plain data: an ordered list of [`Rule`] values, each
//! pairing an applicability test ([`Pattern`]) with a deterministic rewrite
//! ([`Rewrite`]). Nothing here is hard-coded into the exploration algorithm;
//! the built-in Hinglish catalog in [`crate::variation::rules`] is just one
//! possible [`RuleSet`].

use std::fmt;

use super::application::apply_rewrite;
use super::error::Result;
use super::matching::pattern_matches;

/// Applicability test for a rewrite rule.
///
/// A pattern answers "does this rule apply to this word at all". It says
/// nothing about *where* the rewrite happens; that tie-break belongs to the
/// paired [`Rewrite`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// The word contains the literal substring anywhere.
    Contains(String),
    /// The word ends with the literal suffix.
    EndsWith(String),
    /// The word contains a consonant-`a`-consonant cluster somewhere.
    TrappedA,
}

/// Deterministic rewrite producing exactly one new word from an applicable
/// word.
///
/// A rewrite changes a single, deterministically chosen occurrence of its
/// pattern - never all occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Rewrite {
    /// Replace only the right-most occurrence of `pattern` with
    /// `replacement`, leaving the rest of the word unchanged.
    ReplaceLast {
        /// Literal pattern whose right-most occurrence is rewritten.
        pattern: String,
        /// Replacement text for that occurrence.
        replacement: String,
    },
    /// Drop the `a` at the right-most consonant-`a`-consonant position,
    /// scanning consonant-`a` candidates from the end of the word backward.
    DropTrappedA,
}

/// A respelling rule: an applicability test paired with its rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Human-readable name, used in diagnostics.
    pub name: String,
    /// Applicability test.
    pub pattern: Pattern,
    /// Rewrite applied when the pattern accepts the word.
    pub rewrite: Rewrite,
}

impl Rule {
    /// Create a rule from its parts.
    pub fn new(name: impl Into<String>, pattern: Pattern, rewrite: Rewrite) -> Self {
        Self {
            name: name.into(),
            pattern,
            rewrite,
        }
    }

    /// Does this rule apply to `word`?
    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        pattern_matches(&self.pattern, word)
    }

    /// Apply this rule's rewrite to `word`.
    ///
    /// Must only be called when [`Rule::matches`] returned `true`; a rewrite
    /// that finds no qualifying position fails with
    /// [`super::error::VariationError::RuleContractViolation`].
    pub fn apply(&self, word: &str) -> Result<String> {
        apply_rewrite(&self.rewrite, word, &self.name)
    }
}

/// An ordered rule catalog.
///
/// Order fixes the left-to-right order in which sibling variants are
/// discovered at each exploration level; it has no effect on final set
/// membership, only on output ordering (deduplication is first-seen-wins).
pub type RuleSet = Vec<Rule>;

impl Pattern {
    /// Containment pattern over a literal substring.
    pub fn contains(pattern: impl Into<String>) -> Self {
        Pattern::Contains(pattern.into())
    }

    /// Suffix pattern over a literal.
    pub fn ends_with(suffix: impl Into<String>) -> Self {
        Pattern::EndsWith(suffix.into())
    }
}

impl Rewrite {
    /// Last-occurrence rewrite of `pattern` to `replacement`.
    pub fn replace_last(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Rewrite::ReplaceLast {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Contains(p) => write!(f, "contains `{p}`"),
            Pattern::EndsWith(s) => write!(f, "ends with `{s}`"),
            Pattern::TrappedA => write!(f, "consonant-a-consonant cluster"),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.pattern)
    }
}
