//! Integration tests for the variation engine against the built-in catalog.

use hinglish_corpus::prelude::*;

fn vary(word: &str) -> Vec<String> {
    variations(&hinglish_rules(), word).unwrap()
}

#[test]
fn test_kaam_includes_kam() {
    let variants = vary("kaam");
    assert!(variants.contains(&"kam".to_string()));
    // And the collapse chains down to the schwa-dropped form.
    assert_eq!(variants, vec!["kam".to_string(), "km".to_string()]);
}

#[test]
fn test_dhoom_includes_dhum() {
    assert_eq!(vary("dhoom"), vec!["dhum".to_string()]);
}

#[test]
fn test_baith_includes_beth() {
    assert!(vary("baith").contains(&"beth".to_string()));
}

#[test]
fn test_bahi_includes_bai() {
    let variants = vary("bahi");
    assert!(variants.contains(&"bai".to_string()));
    // Full closure: bhi via the redundant-a rule, then bi and be downstream.
    assert_eq!(
        variants,
        vec![
            "bhi".to_string(),
            "bai".to_string(),
            "bi".to_string(),
            "be".to_string(),
        ]
    );
}

#[test]
fn test_unmatched_word_yields_empty_set() {
    assert!(vary("xyz").is_empty());
}

#[test]
fn test_original_word_excluded() {
    for word in ["kaam", "dhoom", "baith", "bahi", "seedhee", "paanchvi"] {
        assert!(!vary(word).contains(&word.to_string()), "{word} in own set");
    }
}

#[test]
fn test_no_duplicate_variants() {
    for word in ["kaam", "bahi", "baithaai", "seedhee", "aaaa"] {
        let variants = vary(word);
        let mut sorted = variants.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), variants.len(), "duplicates for {word}");
    }
}

#[test]
fn test_byte_identical_reruns() {
    let rules = hinglish_rules();
    for word in ["kaam", "bahi", "dheere", "baithaai"] {
        assert_eq!(
            variations(&rules, word).unwrap(),
            variations(&rules, word).unwrap()
        );
    }
}

#[test]
fn test_multi_rule_word_fans_out_in_rule_order() {
    // `bahi` satisfies rule 1 (redundant a) and rule 4 (trailing hi); the
    // first two variants come out in catalog order.
    let variants = vary("bahi");
    assert_eq!(&variants[..2], &["bhi".to_string(), "bai".to_string()]);
}

#[test]
fn test_drifted_rule_aborts_whole_computation() {
    // Matcher accepts any word containing `a`; the rewrite requires a
    // consonant-a-consonant position. `aab` matches the matcher, has no
    // qualifying position, and must abort - not return a partial set.
    let drifted = vec![Rule::new(
        "broad a",
        Pattern::contains("a"),
        Rewrite::DropTrappedA,
    )];
    let err = variations(&drifted, "aab").unwrap_err();
    assert!(matches!(
        err,
        VariationError::RuleContractViolation { ref word, ref rule }
            if word == "aab" && rule == "broad a"
    ));
}

#[test]
fn test_violation_deep_in_exploration_discards_everything() {
    // First rule produces a word that the second (drifted) rule then chokes
    // on: the error from inside the recursion surfaces, no partial output.
    let catalog = vec![
        Rule::new("x to a", Pattern::contains("x"), Rewrite::replace_last("x", "a")),
        Rule::new("drifted", Pattern::contains("aa"), Rewrite::DropTrappedA),
    ];
    // "xa" -> "aa" (rule 1); expanding "aa" trips rule 2.
    let err = variations(&catalog, "xa").unwrap_err();
    assert!(matches!(err, VariationError::RuleContractViolation { .. }));
}

#[test]
fn test_custom_catalog_swaps_cleanly() {
    // The engine has no knowledge of the built-in catalog.
    let catalog = vec![Rule::new(
        "double o to u",
        Pattern::contains("oo"),
        Rewrite::replace_last("oo", "u"),
    )];
    assert_eq!(
        variations(&catalog, "choooo").unwrap(),
        vec!["choou".to_string(), "chuu".to_string()]
    );
}
