//! Built-in rule catalogs.
//!
//! The default catalog encodes six Hinglish respelling heuristics. They are
//! hand-picked observations about informal Hindi-in-Latin-script writing, not
//! a complete phonological model; the engine takes any [`RuleSet`], so the
//! catalog can be swapped or extended freely.
//!
//! Catalog order fixes the order in which sibling variants are first
//! discovered (and therefore the output order); it does not change which
//! words end up in the variant set.

use super::types::{Pattern, Rewrite, Rule, RuleSet};

/// The default Hinglish respelling catalog, in fixed order:
///
/// 1. drop the redundant `a` at the right-most consonant-`a`-consonant
///    position (`kam` → `km`)
/// 2. collapse the last `aa` to `a` (`kaam` → `kam`)
/// 3. rewrite the last `ai` to `e` (`baith` → `beth`)
/// 4. rewrite a trailing `hi` to `i` (`bahi` → `bai`)
/// 5. rewrite the last `ee` to `i` (`dheere` → `dhire`)
/// 6. rewrite the last `oo` to `u` (`dhoom` → `dhum`)
pub fn hinglish_rules() -> RuleSet {
    vec![
        Rule::new("drop redundant a", Pattern::TrappedA, Rewrite::DropTrappedA),
        Rule::new(
            "collapse aa",
            Pattern::contains("aa"),
            Rewrite::replace_last("aa", "a"),
        ),
        Rule::new(
            "ai to e",
            Pattern::contains("ai"),
            Rewrite::replace_last("ai", "e"),
        ),
        Rule::new(
            "trailing hi to i",
            Pattern::ends_with("hi"),
            Rewrite::replace_last("hi", "i"),
        ),
        Rule::new(
            "ee to i",
            Pattern::contains("ee"),
            Rewrite::replace_last("ee", "i"),
        ),
        Rule::new(
            "oo to u",
            Pattern::contains("oo"),
            Rewrite::replace_last("oo", "u"),
        ),
    ]
}
