use tracing::{debug, trace};

use crate::relaxed::RelaxedNames;
use crate::{EvaluationResult, KeyOutcome, PropertySource, Rule};

/// Stored value that disables a condition when no expected value is declared.
const DISABLED: &str = "false";

pub(crate) fn evaluate<S: PropertySource + ?Sized>(rule: &Rule, source: &S) -> EvaluationResult {
    let details: Vec<KeyOutcome> = rule
        .names()
        .iter()
        .map(|name| evaluate_key(rule, name, source))
        .collect();
    let result = EvaluationResult::new(
        rule.label().map(str::to_owned),
        rule.having_value().map(str::to_owned),
        details,
    );
    debug!(rule = %rule, matched = result.matched(), "evaluated property condition");
    result
}

pub(crate) fn matches<S: PropertySource + ?Sized>(rule: &Rule, source: &S) -> bool {
    let matched = rule
        .names()
        .iter()
        .all(|name| evaluate_key(rule, name, source).matched());
    debug!(rule = %rule, matched, "evaluated property condition");
    matched
}

fn evaluate_key<S: PropertySource + ?Sized>(rule: &Rule, name: &str, source: &S) -> KeyOutcome {
    let key = rule.candidate_key(name);
    match resolve(&key, rule.relaxed_names(), source) {
        None => {
            debug!(key = %key, matched = rule.match_if_missing(), "property missing");
            KeyOutcome::missing(key, rule.match_if_missing())
        }
        Some((resolved_key, value)) => {
            let matched = value_matches(&value, rule.having_value());
            debug!(key = %key, resolved = %resolved_key, matched, "property found");
            KeyOutcome::present(key, resolved_key, value, matched)
        }
    }
}

/// Find the first spelling of `key` the source holds a value for.
fn resolve<S: PropertySource + ?Sized>(
    key: &str,
    relaxed: bool,
    source: &S,
) -> Option<(String, String)> {
    if !relaxed {
        return source
            .lookup(key)
            .map(|value| (key.to_owned(), value.into_owned()));
    }
    RelaxedNames::new(key).into_iter().find_map(|candidate| {
        trace!(candidate = %candidate, "trying relaxed spelling");
        let value = source.lookup(&candidate)?.into_owned();
        Some((candidate, value))
    })
}

fn value_matches(value: &str, expected: Option<&str>) -> bool {
    match expected {
        Some(expected) => eq_ignore_case(value, expected),
        None => !eq_ignore_case(value, DISABLED),
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
