use std::borrow::Cow;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::str::FromStr;

use super::source::PropertySource;
use crate::parse::{self, ParseError};

/// An in-memory property store keyed by the exact key text.
///
/// Entries are kept sorted by key. Setting a key twice keeps the last value.
///
/// ```
/// use onprop::Properties;
///
/// let props = Properties::from_pairs(["spring.theRelaxedProperty=value1", "debug"]).unwrap();
/// assert_eq!(props.get("spring.theRelaxedProperty"), Some("value1"));
/// assert_eq!(props.get("debug"), Some(""));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Create an empty property store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, consuming and returning the store.
    #[must_use]
    pub fn set(mut self, key: &str, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a property in place, returning the previous value.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.to_owned(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Build a store from `key=value` or `key:value` strings.
    ///
    /// The first `=` or `:` separates key from value and both sides are
    /// trimmed. A string with no separator sets the key to an empty value.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if a string has an empty key or spans several lines.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ParseError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut props = Self::new();
        for pair in pairs {
            let (key, value) = parse::parse_pair(pair.as_ref())?;
            props.entries.insert(key, value);
        }
        Ok(props)
    }

    /// Parse a multi-line properties document.
    ///
    /// Each non-blank line is a pair as accepted by [`from_pairs`](Self::from_pairs).
    /// Lines starting with `#` or `!` are comments.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if any line is not a valid pair.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Ok(parse::parse(input)?.into_iter().collect())
    }

    /// Read and parse a properties file.
    ///
    /// # Errors
    ///
    /// Returns [`OnPropError`](crate::OnPropError) on I/O or parse failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::OnPropError> {
        let input = std::fs::read_to_string(path)?;
        Ok(Self::parse(&input)?)
    }
}

impl PropertySource for Properties {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(Cow::Borrowed)
    }
}

impl FromStr for Properties {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut props = Self::new();
        props.extend(iter);
        props
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Properties {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl IntoIterator for Properties {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.entries {
            writeln!(f, "{key}={value}")?;
        }
        Ok(())
    }
}
