use std::fmt;

use super::evaluation_result::EvaluationResult;
use super::source::PropertySource;

/// Separator placed between a rule's prefix and each of its names.
pub const SEPARATOR: char = '.';

/// A validated, immutable property condition.
///
/// Obtained from [`Declaration::validate()`](super::Declaration::validate) or
/// [`validate()`](crate::validate). A `Rule` always has at least one name and
/// a prefix that is either empty or ends with exactly one `.`. It holds no
/// interior state and can be shared across threads and evaluated any number
/// of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    label: Option<String>,
    prefix: String,
    names: Vec<String>,
    having_value: Option<String>,
    match_if_missing: bool,
    relaxed_names: bool,
}

impl Rule {
    pub(crate) fn new(
        label: Option<String>,
        prefix: &str,
        names: Vec<String>,
        having_value: Option<String>,
        match_if_missing: bool,
        relaxed_names: bool,
    ) -> Self {
        Self {
            label,
            prefix: normalize_prefix(prefix),
            names,
            having_value,
            match_if_missing,
            relaxed_names,
        }
    }

    /// Label of the configuration unit this rule guards, if declared.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The normalized prefix: empty, or ending in a single `.`.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn having_value(&self) -> Option<&str> {
        self.having_value.as_deref()
    }

    #[must_use]
    pub fn match_if_missing(&self) -> bool {
        self.match_if_missing
    }

    #[must_use]
    pub fn relaxed_names(&self) -> bool {
        self.relaxed_names
    }

    /// The key checked for `name` before relaxed spellings are applied.
    #[must_use]
    pub fn candidate_key(&self, name: &str) -> String {
        let mut key = String::with_capacity(self.prefix.len() + name.len());
        key.push_str(&self.prefix);
        key.push_str(name);
        key
    }

    /// Candidate keys for every name, in declaration order.
    pub fn candidate_keys(&self) -> impl Iterator<Item = String> + '_ {
        self.names.iter().map(|name| self.candidate_key(name))
    }

    /// Evaluate this rule, recording the outcome of every key.
    pub fn evaluate<S: PropertySource + ?Sized>(&self, source: &S) -> EvaluationResult {
        crate::evaluate::evaluate(self, source)
    }

    /// Evaluate this rule, stopping at the first key that does not match.
    #[must_use]
    pub fn matches<S: PropertySource + ?Sized>(&self, source: &S) -> bool {
        crate::evaluate::matches(self, source)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "{label}: ")?;
        }
        let keys: Vec<String> = self.candidate_keys().collect();
        write!(f, "({})", keys.join(", "))?;
        if let Some(expected) = &self.having_value {
            write!(f, " == '{expected}'")?;
        }
        if self.match_if_missing {
            write!(f, " or missing")?;
        }
        if !self.relaxed_names {
            write!(f, " [strict names]")?;
        }
        Ok(())
    }
}

/// Trim surrounding whitespace and collapse trailing separators to exactly one.
/// A prefix made only of separators is treated as no prefix.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}{SEPARATOR}")
    }
}
