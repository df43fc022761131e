use super::error::ValidationError;
use super::rule::Rule;

/// The raw attributes of a property condition, as written by its author.
///
/// Keys may be given through either the `name` or the `value` attribute, but
/// not both. [`validate()`](Self::validate) enforces that and produces a
/// [`Rule`].
///
/// # Example
///
/// ```
/// use onprop::{Declaration, Properties};
///
/// let rule = Declaration::new()
///     .prefix("simple")
///     .name("my-property")
///     .having_value("bar")
///     .validate()
///     .unwrap();
///
/// let props = Properties::new().set("simple.myProperty", "BaR");
/// assert!(rule.matches(&props));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Declaration {
    pub(crate) label: Option<String>,
    pub(crate) prefix: String,
    pub(crate) name: Vec<String>,
    pub(crate) value: Vec<String>,
    pub(crate) having_value: Option<String>,
    pub(crate) match_if_missing: bool,
    pub(crate) relaxed_names: bool,
}

impl Default for Declaration {
    fn default() -> Self {
        Self {
            label: None,
            prefix: String::new(),
            name: Vec::new(),
            value: Vec::new(),
            having_value: None,
            match_if_missing: false,
            relaxed_names: true,
        }
    }
}

impl Declaration {
    /// An empty declaration with the default policies: no prefix, no
    /// expected value, `match_if_missing = false`, `relaxed_names = true`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the configuration unit guarded by this condition. Used in error
    /// messages and condition reports only.
    #[must_use]
    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_owned());
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: &str) -> Self {
        prefix.clone_into(&mut self.prefix);
        self
    }

    /// Add a key through the `name` attribute.
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.name.push(name.to_owned());
        self
    }

    /// Add several keys through the `name` attribute.
    #[must_use]
    pub fn names<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.name.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add a key through the `value` attribute, the shorthand alias of `name`.
    #[must_use]
    pub fn value(mut self, value: &str) -> Self {
        self.value.push(value.to_owned());
        self
    }

    /// Add several keys through the `value` attribute.
    #[must_use]
    pub fn values<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.value.extend(values.into_iter().map(Into::into));
        self
    }

    /// Require every key to hold this value, compared ignoring case.
    #[must_use]
    pub fn having_value(mut self, expected: &str) -> Self {
        self.having_value = Some(expected.to_owned());
        self
    }

    #[must_use]
    pub fn match_if_missing(mut self, match_if_missing: bool) -> Self {
        self.match_if_missing = match_if_missing;
        self
    }

    #[must_use]
    pub fn relaxed_names(mut self, relaxed_names: bool) -> Self {
        self.relaxed_names = relaxed_names;
        self
    }

    /// Check the attributes and build the immutable [`Rule`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingAttribute`] if neither `name` nor
    /// `value` lists a key, and [`ValidationError::ConflictingAttributes`] if
    /// both do.
    pub fn validate(self) -> Result<Rule, ValidationError> {
        crate::validate::validate_declaration(self)
    }
}
