use std::fmt;

/// Outcome of a single key of a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOutcome {
    key: String,
    resolved_key: Option<String>,
    value: Option<String>,
    matched: bool,
}

impl KeyOutcome {
    pub(crate) fn missing(key: String, matched: bool) -> Self {
        Self {
            key,
            resolved_key: None,
            value: None,
            matched,
        }
    }

    pub(crate) fn present(key: String, resolved_key: String, value: String, matched: bool) -> Self {
        Self {
            key,
            resolved_key: Some(resolved_key),
            value: Some(value),
            matched,
        }
    }

    /// The prefixed key as declared.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The spelling the value was found under, if it was found.
    #[must_use]
    pub fn resolved_key(&self) -> Option<&str> {
        self.resolved_key.as_deref()
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }

    #[must_use]
    pub fn matched(&self) -> bool {
        self.matched
    }
}

/// Detailed result of [`Rule::evaluate()`](super::Rule::evaluate).
///
/// `matched()` is the activation decision. The per-key details explain it and
/// feed the condition report produced by the `Display` impl.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct EvaluationResult {
    label: Option<String>,
    expected: Option<String>,
    details: Vec<KeyOutcome>,
}

impl EvaluationResult {
    pub(crate) fn new(
        label: Option<String>,
        expected: Option<String>,
        details: Vec<KeyOutcome>,
    ) -> Self {
        Self {
            label,
            expected,
            details,
        }
    }

    /// `true` if every key matched.
    #[must_use]
    pub fn matched(&self) -> bool {
        self.details.iter().all(KeyOutcome::matched)
    }

    /// Per-key outcomes, in declaration order.
    #[must_use]
    pub fn details(&self) -> &[KeyOutcome] {
        &self.details
    }

    /// Keys that were absent and therefore failed the rule.
    #[must_use]
    pub fn missing(&self) -> Vec<&str> {
        self.details
            .iter()
            .filter(|d| !d.matched() && d.is_missing())
            .map(KeyOutcome::key)
            .collect()
    }

    /// Keys that were present but held a non-matching value.
    #[must_use]
    pub fn non_matching(&self) -> Vec<&str> {
        self.details
            .iter()
            .filter(|d| !d.matched() && !d.is_missing())
            .map(KeyOutcome::key)
            .collect()
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "{label}: ")?;
        }
        if self.matched() {
            let keys: Vec<&str> = self.details.iter().map(KeyOutcome::key).collect();
            return write!(f, "matched ({})", keys.join(", "));
        }

        let mut reasons = Vec::new();
        let missing = self.missing();
        if !missing.is_empty() {
            reasons.push(format!("missing required properties {}", missing.join(", ")));
        }
        let non_matching = self.non_matching();
        if !non_matching.is_empty() {
            reasons.push(match &self.expected {
                Some(expected) => format!(
                    "expected '{expected}' for properties {}",
                    non_matching.join(", ")
                ),
                None => format!("properties set to false: {}", non_matching.join(", ")),
            });
        }
        write!(f, "did not match: {}", reasons.join("; "))
    }
}
