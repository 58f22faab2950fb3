//! Recursive exploration of the respelling space.
//!
//! Given an ordered rule catalog and a starting word, [`variations`] produces
//! every word reachable by one-or-more rule applications, depth-first,
//! deduplicated first-seen-wins, and excluding the starting word itself.
//!
//! # Algorithm
//!
//! For a word `w`:
//!
//! 1. Every rule whose matcher accepts `w` contributes exactly one direct
//!    variant, in catalog order. A word accepted by several rules yields
//!    several siblings.
//! 2. If there are no direct variants, `w` is a leaf.
//! 3. Direct variants are emitted first, then each is expanded recursively in
//!    order.
//! 4. A word is only ever emitted once (first discovery wins) and only ever
//!    expanded once.
//!
//! # Termination
//!
//! Nothing structurally stops a catalog from rewriting a pattern back into
//! existence, so the recursion carries an explicit visited set: a word
//! already expanded is not expanded again. Output membership and order are
//! unchanged by the guard (a re-expansion could only produce words already
//! emitted), and the exploration terminates whenever the set of reachable
//! words is finite - which holds for any catalog, like the built-in one,
//! whose rewrites all shorten the word.

use rustc_hash::FxHashSet;

use super::error::{Result, VariationError};
use super::types::RuleSet;

/// Generate all respelling variants of `word` under `rules`.
///
/// # Arguments
///
/// - `rules` - ordered rule catalog
/// - `word` - non-empty ASCII lowercase word
///
/// # Returns
///
/// The ordered variant set: every word reachable from `word` by one-or-more
/// rule applications, without duplicates, never including `word` itself.
/// Words no rule accepts produce an empty set. Output is deterministic for a
/// given word and catalog.
///
/// # Errors
///
/// - [`VariationError::InvalidWord`] if `word` is empty or not ASCII
///   lowercase letters.
/// - [`VariationError::RuleContractViolation`] if a rewrite finds no
///   qualifying position on a word its matcher accepted. The whole
///   computation aborts; no partial set is returned.
///
/// # Examples
///
/// ```rust,ignore
/// use hinglish_corpus::variation::{engine::variations, rules::hinglish_rules};
///
/// let variants = variations(&hinglish_rules(), "kaam")?;
/// assert_eq!(variants, vec!["kam".to_string(), "km".to_string()]);
/// ```
pub fn variations(rules: &RuleSet, word: &str) -> Result<Vec<String>> {
    if word.is_empty() || !word.bytes().all(|c| c.is_ascii_lowercase()) {
        return Err(VariationError::InvalidWord(word.to_string()));
    }

    let mut emitted = FxHashSet::default();
    let mut expanded = FxHashSet::default();
    let mut out = Vec::new();

    // The input is pre-seeded so it can neither be emitted as a variant of
    // itself nor re-expanded if a rewrite cycles back to it.
    emitted.insert(word.to_string());
    expanded.insert(word.to_string());

    expand(rules, word, &mut emitted, &mut expanded, &mut out)?;
    Ok(out)
}

/// One level of exploration: emit the direct variants of `word`, then expand
/// each not-yet-expanded variant depth-first.
fn expand(
    rules: &RuleSet,
    word: &str,
    emitted: &mut FxHashSet<String>,
    expanded: &mut FxHashSet<String>,
    out: &mut Vec<String>,
) -> Result<()> {
    let direct = direct_variations(rules, word)?;
    if direct.is_empty() {
        return Ok(()); // leaf: no rule applies
    }

    for variant in &direct {
        if emitted.insert(variant.clone()) {
            out.push(variant.clone());
        }
    }

    for variant in &direct {
        if expanded.insert(variant.clone()) {
            expand(rules, variant, emitted, expanded, out)?;
        }
    }

    Ok(())
}

/// The direct variation list of `word`: one variant per accepting rule, in
/// catalog order. May contain duplicates if distinct rules produce the same
/// word; deduplication happens at emission.
fn direct_variations(rules: &RuleSet, word: &str) -> Result<Vec<String>> {
    let mut variants = Vec::new();
    for rule in rules {
        if rule.matches(word) {
            variants.push(rule.apply(word)?);
        }
    }
    Ok(variants)
}
