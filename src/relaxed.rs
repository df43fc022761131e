use std::slice;
use std::vec;

/// The spellings a property key may be stored under when relaxed matching is
/// enabled, in the order they are tried.
///
/// 1. the key exactly as declared
/// 2. camelCase word boundaries rewritten to kebab-case (`theRelaxedProperty` -> `the-relaxed-property`)
/// 3. `-`/`_` separated words joined into camelCase (`my-property` -> `myProperty`)
///
/// Duplicate spellings are dropped, so a key that is already in canonical
/// form yields fewer entries. `.` is never rewritten, and letter case of whole
/// segments is left to the property source.
///
/// ```
/// use onprop::RelaxedNames;
///
/// let names = RelaxedNames::new("spring.the-relaxed-property");
/// let spellings: Vec<&str> = names.iter().collect();
/// assert_eq!(spellings, ["spring.the-relaxed-property", "spring.theRelaxedProperty"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaxedNames {
    variants: Vec<String>,
}

impl RelaxedNames {
    #[must_use]
    pub fn new(key: &str) -> Self {
        let mut variants = Vec::with_capacity(3);
        for candidate in [key.to_owned(), camel_to_kebab(key), separated_to_camel(key)] {
            if !variants.contains(&candidate) {
                variants.push(candidate);
            }
        }
        Self { variants }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl IntoIterator for RelaxedNames {
    type Item = String;
    type IntoIter = vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.into_iter()
    }
}

impl<'a> IntoIterator for &'a RelaxedNames {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.iter()
    }
}

/// Insert `-` where a lowercase letter or digit is followed by an uppercase
/// letter, lowercasing that letter.
fn camel_to_kebab(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;
    for c in key.chars() {
        let boundary = c.is_uppercase()
            && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
        if boundary {
            out.push('-');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

/// Drop each `-` or `_` that sits between two word characters and uppercase
/// the character that follows it.
fn separated_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    let mut prev: Option<char> = None;
    while let Some(c) = chars.next() {
        let joins_words = matches!(c, '-' | '_')
            && prev.is_some_and(char::is_alphanumeric)
            && chars.peek().is_some_and(|n| n.is_alphanumeric());
        if joins_words {
            if let Some(next) = chars.next() {
                out.extend(next.to_uppercase());
                prev = Some(next);
            }
            continue;
        }
        out.push(c);
        prev = Some(c);
    }
    out
}
