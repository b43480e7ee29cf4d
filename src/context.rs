use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Visitor attributes used by the Decision API for targeting.
///
/// Keys are unique: adding an existing key overwrites its value and keeps its position. Entries
/// are kept in insertion order and serialized as a JSON object.
///
/// ```
/// # use flagship::Context;
/// let mut context = Context::new();
/// context.add("plan", "premium").add("country", "FR");
///
/// assert_eq!(context.get("plan"), Some("premium"));
/// assert_eq!(context.len(), 2);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    entries: IndexMap<String, String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key-value pair, overriding the value if `key` is already present.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Replace all existing pairs with `entries`. An empty iterator clears the context.
    pub fn replace_all<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.entries = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
    }

    pub fn get_list(&self) -> &IndexMap<String, String> {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Context {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Context {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut context = Context::new();
        context.extend(iter);
        context
    }
}
