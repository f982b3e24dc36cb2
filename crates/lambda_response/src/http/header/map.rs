use serde::ser::{Serialize, SerializeMap, Serializer};
use smallvec::SmallVec;
use unicase::UniCase;

/// An ordered header mapping which preserves the casing of its keys.
///
/// Keys are compared exactly on [`insert`](Self::insert) and
/// case-insensitively on lookup, matching how a shaped response treats
/// caller-supplied headers: stored verbatim, read semantically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: SmallVec<[(String, String); 4]>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Inserts under an exact key: a same-cased key is overwritten in place,
    /// anything else is appended. Returns the replaced value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => Some(std::mem::replace(v, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Inserts under a case-insensitive key: if any casing of `name` is
    /// already present, that entry's value is overwritten, keeping the key's
    /// original casing and position. Returns the replaced value.
    pub fn insert_ignore_case(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        let needle = UniCase::new(name);
        match self
            .entries
            .iter_mut()
            .find(|(k, _)| UniCase::new(k.as_str()) == needle)
        {
            Some((_, v)) => Some(std::mem::replace(v, value)),
            None => {
                self.entries.push((name.to_owned(), value));
                None
            }
        }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        let needle = UniCase::new(name);
        self.entries
            .iter()
            .find(|(k, _)| UniCase::new(k.as_str()) == needle)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for HeaderMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl Serialize for HeaderMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
