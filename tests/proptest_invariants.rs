
use onprop::{Declaration, Properties, ValidationError};
use proptest::prelude::*;
use strategies::{arb_condition, arb_condition_and_properties, arb_key, arb_value, GenCondition};

// ---------------------------------------------------------------------------
// Invariant 1: Determinism
//
// The same rule evaluated against the same store always produces the same
// result, and the short-circuiting path agrees with the detailed one.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn determinism((cond, props) in arb_condition_and_properties()) {
        let rule = cond.rule();
        let first = rule.evaluate(&props);
        for _ in 0..5 {
            prop_assert_eq!(&first, &rule.evaluate(&props), "determinism violated");
        }
    }

    #[test]
    fn matches_agrees_with_evaluate((cond, props) in arb_condition_and_properties()) {
        let rule = cond.rule();
        prop_assert_eq!(rule.matches(&props), rule.evaluate(&props).matched());
    }
}

// ---------------------------------------------------------------------------
// Invariant 2: Conjunction
//
// A rule matches iff every one of its keys, checked as a single-key rule with
// the same policies, matches.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn conjunction_over_keys((cond, props) in arb_condition_and_properties()) {
        let whole = cond.rule().matches(&props);
        let each = cond.keys.iter().all(|key| {
            cond.declaration_for(std::slice::from_ref(key))
                .validate()
                .unwrap()
                .matches(&props)
        });
        prop_assert_eq!(whole, each);
    }

    #[test]
    fn detail_per_key((cond, props) in arb_condition_and_properties()) {
        let result = cond.rule().evaluate(&props);
        prop_assert_eq!(result.details().len(), cond.keys.len());
        prop_assert_eq!(
            result.matched(),
            result.missing().is_empty() && result.non_matching().is_empty()
        );
    }
}

// ---------------------------------------------------------------------------
// Invariant 3: Missing-value policy
//
// Against an empty store every key is missing, so the outcome is exactly the
// match-if-missing flag.
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn empty_store_follows_match_if_missing(cond in arb_condition()) {
        let result = cond.rule().evaluate(&Properties::new());
        prop_assert_eq!(result.matched(), cond.match_if_missing);
        prop_assert!(result.details().iter().all(|d| d.is_missing()));
    }
}

// ---------------------------------------------------------------------------
// Invariant 4: Relaxed names
//
// With relaxed names, storing a value under the camelCase or the kebab-case
// spelling gives the same outcome. With strict names, a value stored under
// a different spelling is treated as absent.
// ---------------------------------------------------------------------------

fn single_key(cond: &GenCondition) -> GenCondition {
    GenCondition {
        keys: vec![cond.keys[0].clone()],
        ..cond.clone()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn relaxed_spellings_are_equivalent(cond in arb_condition(), value in arb_value()) {
        let cond = GenCondition { relaxed_names: true, ..single_key(&cond) };
        let key = &cond.keys[0];
        let rule = cond.rule();

        let kebab = Properties::new().set(&cond.stored_key(key, false), value.as_str());
        let camel = Properties::new().set(&cond.stored_key(key, true), value.as_str());
        prop_assert_eq!(rule.matches(&kebab), rule.matches(&camel));
    }

    #[test]
    fn relaxed_matching_from_camel_declaration(key in arb_key(), value in arb_value()) {
        let rule = Declaration::new().prefix("app").name(&key.camel()).validate().unwrap();
        let kebab = Properties::new().set(&format!("app.{}", key.kebab()), value.as_str());
        let camel = Properties::new().set(&format!("app.{}", key.camel()), value.as_str());
        prop_assert_eq!(rule.matches(&kebab), rule.matches(&camel));
    }

    #[test]
    fn strict_names_ignore_other_spelling(cond in arb_condition(), value in arb_value()) {
        let cond = GenCondition { relaxed_names: false, ..single_key(&cond) };
        let key = &cond.keys[0];
        prop_assume!(key.has_boundary());

        let camel = Properties::new().set(&cond.stored_key(key, true), value);
        let result = cond.rule().evaluate(&camel);
        prop_assert!(result.details()[0].is_missing());
        prop_assert_eq!(result.matched(), cond.match_if_missing);
    }
}

// ---------------------------------------------------------------------------
// Invariant 5: Case-insensitive values
//
// Changing the letter case of a stored value never changes the outcome.
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn value_case_is_ignored(cond in arb_condition(), value in arb_value()) {
        let cond = single_key(&cond);
        let key_text = cond.stored_key(&cond.keys[0], false);
        let rule = cond.rule();

        let as_is = Properties::new().set(&key_text, value.as_str());
        let upper = Properties::new().set(&key_text, value.to_uppercase());
        let lower = Properties::new().set(&key_text, value.to_lowercase());
        prop_assert_eq!(rule.matches(&as_is), rule.matches(&upper));
        prop_assert_eq!(rule.matches(&as_is), rule.matches(&lower));
    }

    #[test]
    fn default_policy_is_not_false(value in arb_value()) {
        let rule = Declaration::new().name("flag").validate().unwrap();
        let props = Properties::new().set("flag", value.as_str());
        prop_assert_eq!(rule.matches(&props), !value.eq_ignore_ascii_case("false"));
    }
}

// ---------------------------------------------------------------------------
// Invariant 6: Prefix normalization
//
// A prefix with or without its trailing separator yields the same keys.
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn trailing_separator_is_irrelevant(
        prefix in "[a-z]{1,6}(\\.[a-z]{1,6}){0,2}",
        key in arb_key(),
    ) {
        let bare = Declaration::new().prefix(&prefix).name(&key.kebab()).validate().unwrap();
        let dotted = Declaration::new()
            .prefix(&format!("{prefix}."))
            .name(&key.kebab())
            .validate()
            .unwrap();
        prop_assert_eq!(bare.prefix(), dotted.prefix());
        prop_assert_eq!(
            bare.candidate_keys().collect::<Vec<_>>(),
            dotted.candidate_keys().collect::<Vec<_>>()
        );
    }
}

// ---------------------------------------------------------------------------
// Invariant 7: Validation
//
// Declarations with both key channels set always fail as conflicting, and
// never produce a rule.
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn both_channels_always_conflict(
        names in prop::collection::vec("[a-z.]{0,8}", 1..4),
        values in prop::collection::vec("[a-z.]{0,8}", 1..4),
    ) {
        let err = Declaration::new().names(names).values(values).validate().unwrap_err();
        prop_assert!(matches!(err, ValidationError::ConflictingAttributes { .. }), "got {err:?}");
    }
}
