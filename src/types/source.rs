use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

/// Read access to a flat key/value property store.
///
/// Keys are matched exactly as given. Relaxed spellings are generated by the
/// evaluator, which calls `lookup` once per spelling it tries.
pub trait PropertySource {
    /// Look up the value stored under `key`, or `None` if the key is absent.
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>>;
}

impl<S: PropertySource + ?Sized> PropertySource for &S {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(key)
    }
}

impl<S: PropertySource + ?Sized> PropertySource for Box<S> {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(key)
    }
}

impl<S: PropertySource + ?Sized> PropertySource for Arc<S> {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(key)
    }
}

impl<S: PropertySource + ?Sized> PropertySource for Rc<S> {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(key)
    }
}

impl<V: AsRef<str>, H: BuildHasher> PropertySource for HashMap<String, V, H> {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|v| Cow::Borrowed(v.as_ref()))
    }
}

impl<V: AsRef<str>> PropertySource for BTreeMap<String, V> {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|v| Cow::Borrowed(v.as_ref()))
    }
}

/// A [`PropertySource`] backed by a closure. Created with [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnSource<F> {
    f: F,
}

/// Wrap a closure as a [`PropertySource`].
///
/// ```
/// use onprop::{Declaration, from_fn};
///
/// let source = from_fn(|key| (key == "feature.enabled").then(|| "true".to_owned()));
/// let rule = Declaration::new().name("feature.enabled").validate().unwrap();
/// assert!(rule.matches(&source));
/// ```
pub fn from_fn<F>(f: F) -> FnSource<F>
where
    F: Fn(&str) -> Option<String>,
{
    FnSource { f }
}

impl<F> PropertySource for FnSource<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        (self.f)(key).map(Cow::Owned)
    }
}

impl<F> std::fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSource").finish_non_exhaustive()
    }
}

/// Adapter that also finds keys stored in all-lowercase or all-uppercase form.
///
/// The evaluator only varies word separators. Stores that normalize letter
/// case (environment-style keys, case-insensitive config files) are modelled
/// by wrapping them in `CaseFolding`: a lookup tries the key as given, then
/// its lowercase form, then its uppercase form.
#[derive(Debug, Clone, Default)]
pub struct CaseFolding<S> {
    inner: S,
}

impl<S> CaseFolding<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: PropertySource> PropertySource for CaseFolding<S> {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        if let Some(value) = self.inner.lookup(key) {
            return Some(value);
        }
        [key.to_lowercase(), key.to_uppercase()]
            .into_iter()
            .filter(|folded| folded != key)
            .find_map(|folded| self.inner.lookup(&folded))
    }
}
