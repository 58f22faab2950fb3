//! Applicability predicates and occurrence scanning for respelling rules.
//!
//! Words are assumed to be non-empty ASCII lowercase letters (validated at
//! the engine boundary), so byte-level scanning is exact: every byte is one
//! letter and `[^aeiou]` means "consonant".
//!
//! # Functions
//!
//! - [`pattern_matches`] - does a [`Pattern`] accept a word
//! - [`rightmost_occurrence`] - right-most occurrence of a literal pattern
//! - [`trapped_a_candidates`] - consonant-`a` candidate positions for the
//!   contextual rewrite
//! - [`is_vowel`] / [`is_consonant`] - letter classification

use smallvec::SmallVec;

use super::types::Pattern;

/// Check if a letter is one of the five vowels.
#[inline]
pub fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Check if a letter is a consonant (lowercase ASCII letter, not a vowel).
#[inline]
pub fn is_consonant(c: u8) -> bool {
    c.is_ascii_lowercase() && !is_vowel(c)
}

/// Check if a pattern accepts a word.
///
/// This is the matcher half of a rule: a pure predicate with no opinion on
/// where the paired rewrite will apply.
pub fn pattern_matches(pattern: &Pattern, word: &str) -> bool {
    match pattern {
        Pattern::Contains(p) => word.contains(p.as_str()),
        Pattern::EndsWith(s) => word.ends_with(s.as_str()),
        Pattern::TrappedA => has_trapped_a(word),
    }
}

/// Check if the word contains a consonant-`a`-consonant cluster.
///
/// This is the broad context test for the redundant-`a` rule: an `a` between
/// two consonants is usually an implicit schwa a writer may drop (`kam` →
/// `km`).
pub fn has_trapped_a(word: &str) -> bool {
    word.as_bytes()
        .windows(3)
        .any(|w| is_consonant(w[0]) && w[1] == b'a' && is_consonant(w[2]))
}

/// Byte offset of the right-most occurrence of `pattern` in `word`.
#[inline]
pub fn rightmost_occurrence(word: &str, pattern: &str) -> Option<usize> {
    word.rfind(pattern)
}

/// Candidate positions for the redundant-`a` rewrite: every position where a
/// consonant is immediately followed by `a`, left to right.
///
/// The rewrite scans these from the end of the word backward and applies at
/// the first one whose following letter is also a consonant; candidates that
/// fail that narrower context test are skipped.
pub fn trapped_a_candidates(word: &str) -> SmallVec<[usize; 4]> {
    let bytes = word.as_bytes();
    let mut candidates = SmallVec::new();
    for i in 0..bytes.len().saturating_sub(1) {
        if is_consonant(bytes[i]) && bytes[i + 1] == b'a' {
            candidates.push(i);
        }
    }
    candidates
}
