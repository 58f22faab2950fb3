//! Rewrite application for respelling rules.
//!
//! Two tie-break conventions decide which occurrence of a pattern is
//! rewritten when several occur:
//!
//! - **Last-occurrence rewrite** ([`replace_last`]): only the right-most
//!   occurrence of a literal pattern changes; all earlier occurrences and the
//!   rest of the word stay untouched.
//! - **Rightmost-contextual rewrite** ([`drop_trapped_a`]): consonant-`a`
//!   candidate positions are scanned from the end of the word backward, and
//!   the rewrite applies at the first candidate whose following letter is
//!   also a consonant. Candidates failing that narrower test are skipped.
//!
//! Both return `None` when no qualifying position exists. [`apply_rewrite`]
//! turns that into [`VariationError::RuleContractViolation`]: a rewrite only
//! runs on words its matcher accepted, so "no position" means the matcher and
//! rewrite are out of sync, and the whole computation must abort rather than
//! silently skip.

use super::error::{Result, VariationError};
use super::matching::{is_consonant, rightmost_occurrence, trapped_a_candidates};
use super::types::Rewrite;

/// Apply a rewrite to a word, producing exactly one new word.
///
/// # Arguments
///
/// - `rewrite` - the rewrite to apply
/// - `word` - a word the paired matcher accepted
/// - `rule` - rule name for the contract-violation diagnostic
///
/// # Errors
///
/// [`VariationError::RuleContractViolation`] if no qualifying rewrite
/// position exists in `word`.
pub fn apply_rewrite(rewrite: &Rewrite, word: &str, rule: &str) -> Result<String> {
    let rewritten = match rewrite {
        Rewrite::ReplaceLast {
            pattern,
            replacement,
        } => replace_last(word, pattern, replacement),
        Rewrite::DropTrappedA => drop_trapped_a(word),
    };

    rewritten.ok_or_else(|| VariationError::RuleContractViolation {
        word: word.to_string(),
        rule: rule.to_string(),
    })
}

/// Rewrite only the right-most occurrence of `pattern` to `replacement`.
///
/// Returns `None` if the pattern does not occur.
///
/// # Examples
///
/// ```rust,ignore
/// use hinglish_corpus::variation::application::replace_last;
///
/// assert_eq!(replace_last("kaam", "aa", "a"), Some("kam".to_string()));
/// assert_eq!(replace_last("baithaai", "ai", "e"), Some("baithae".to_string()));
/// ```
pub fn replace_last(word: &str, pattern: &str, replacement: &str) -> Option<String> {
    let pos = rightmost_occurrence(word, pattern)?;
    let mut result = String::with_capacity(word.len() + replacement.len());
    result.push_str(&word[..pos]);
    result.push_str(replacement);
    result.push_str(&word[pos + pattern.len()..]);
    Some(result)
}

/// Drop the `a` at the right-most consonant-`a`-consonant position.
///
/// Scans consonant-`a` candidates from the end of the word backward and
/// removes the `a` at the first candidate whose following letter is also a
/// consonant. Returns `None` if no candidate qualifies.
///
/// # Examples
///
/// ```rust,ignore
/// use hinglish_corpus::variation::application::drop_trapped_a;
///
/// assert_eq!(drop_trapped_a("kam"), Some("km".to_string()));
/// assert_eq!(drop_trapped_a("bahi"), Some("bhi".to_string()));
/// assert_eq!(drop_trapped_a("baa"), None);
/// ```
pub fn drop_trapped_a(word: &str) -> Option<String> {
    let bytes = word.as_bytes();
    for &pos in trapped_a_candidates(word).iter().rev() {
        match bytes.get(pos + 2) {
            Some(&next) if is_consonant(next) => {
                let mut result = String::with_capacity(word.len() - 1);
                result.push_str(&word[..pos + 1]);
                result.push_str(&word[pos + 2..]);
                return Some(result);
            }
            _ => continue,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_last_single_occurrence() {
        assert_eq!(replace_last("kaam", "aa", "a"), Some("kam".to_string()));
        assert_eq!(replace_last("dhoom", "oo", "u"), Some("dhum".to_string()));
        assert_eq!(replace_last("baith", "ai", "e"), Some("beth".to_string()));
    }

    #[test]
    fn test_replace_last_prefers_rightmost() {
        // Only the right-most `ee` changes.
        assert_eq!(replace_last("dheere", "ee", "i"), Some("dhire".to_string()));
        assert_eq!(
            replace_last("seedhee", "ee", "i"),
            Some("seedhi".to_string())
        );
        // Overlapping occurrences: right-most still wins.
        assert_eq!(replace_last("aaa", "aa", "a"), Some("aa".to_string()));
    }

    #[test]
    fn test_replace_last_absent_pattern() {
        assert_eq!(replace_last("kam", "aa", "a"), None);
    }

    #[test]
    fn test_drop_trapped_a_simple() {
        assert_eq!(drop_trapped_a("kam"), Some("km".to_string()));
        assert_eq!(drop_trapped_a("bahi"), Some("bhi".to_string()));
    }

    #[test]
    fn test_drop_trapped_a_prefers_rightmost_qualifying() {
        // Candidates at 0, 2, 4, 6; position 6 (`na` at the end) has no
        // following consonant, so position 4 wins.
        assert_eq!(drop_trapped_a("katakana"), Some("katakna".to_string()));
        // The right-most candidate fails the context test, earlier one taken.
        assert_eq!(drop_trapped_a("banka"), Some("bnka".to_string()));
    }

    #[test]
    fn test_drop_trapped_a_no_qualifying_position() {
        assert_eq!(drop_trapped_a("baa"), None);
        assert_eq!(drop_trapped_a("ab"), None);
        assert_eq!(drop_trapped_a("xyz"), None);
    }

    #[test]
    fn test_apply_rewrite_contract_violation() {
        // `DropTrappedA` on a word with no qualifying position must fail
        // loudly, not fall through.
        let err = apply_rewrite(&Rewrite::DropTrappedA, "baa", "drop redundant a").unwrap_err();
        assert_eq!(
            err,
            VariationError::RuleContractViolation {
                word: "baa".to_string(),
                rule: "drop redundant a".to_string(),
            }
        );
    }
}
