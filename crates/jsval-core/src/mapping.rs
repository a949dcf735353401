//! Associative container from canonical text keys to variants.
//!
//! Two access forms are kept apart on purpose:
//!
//! - **get-checked** ([`Mapping::get`], `map[key]`): reads never insert. A
//!   missing key reads as `undefined`.
//! - **get-or-insert** ([`Mapping::get_or_insert`], `&mut map[key]`): a
//!   missing key is inserted as `undefined` and the new slot is returned.
//!
//! Numeric keys are canonicalized to their decimal text before lookup, so
//! `map[0]` and `map["0"]` refer to the same entry.

use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::fixed::{Lookup, LookupMut};
use crate::key::Key;
use crate::variant::Variant;

static UNDEFINED: Variant = Variant::Absence;

/// Unordered key → [`Variant`] associations with unique keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    values: HashMap<String, Variant>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.values.contains_key(&key.into().into_name())
    }

    pub fn get(&self, key: impl Into<Key>) -> Option<&Variant> {
        self.values.get(&key.into().into_name())
    }

    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Variant> {
        self.values.get_mut(&key.into().into_name())
    }

    /// Return the slot for `key`, inserting `undefined` first when missing.
    pub fn get_or_insert(&mut self, key: impl Into<Key>) -> &mut Variant {
        let name = key.into().into_name();
        self.values.entry(name).or_insert_with_key(|name| {
            tracing::trace!(key = %name, "inserting undefined entry");
            Variant::Absence
        })
    }

    /// Insert `value` under `key`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Variant>) -> Option<Variant> {
        self.values.insert(key.into().into_name(), value.into())
    }

    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Variant> {
        self.values.remove(&key.into().into_name())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Variant)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries ordered by key, for deterministic output.
    pub fn sorted_entries(&self) -> Vec<(&str, &Variant)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<K: Into<Key>> Index<K> for Mapping {
    type Output = Variant;

    fn index(&self, key: K) -> &Variant {
        self.get(key).unwrap_or(&UNDEFINED)
    }
}

impl<K: Into<Key>> IndexMut<K> for Mapping {
    fn index_mut(&mut self, key: K) -> &mut Variant {
        self.get_or_insert(key)
    }
}

impl<K: Into<Key>> Lookup<K> for Mapping {
    type Item = Variant;

    fn lookup(&self, key: K) -> Option<&Variant> {
        self.get(key)
    }
}

impl<K: Into<Key>> LookupMut<K> for Mapping {
    fn lookup_mut(&mut self, key: K) -> Option<&mut Variant> {
        self.get_mut(key)
    }
}

impl<K: Into<Key>, V: Into<Variant>> FromIterator<(K, V)> for Mapping {
    /// Later pairs overwrite earlier ones with the same canonical key.
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut mapping = Mapping::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

impl<K: Into<Key>, V: Into<Variant>, const N: usize> From<[(K, V); N]> for Mapping {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Variant);
    type IntoIter = std::collections::hash_map::IntoIter<String, Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl fmt::Display for Mapping {
    /// Mappings render as an opaque placeholder.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[object]")
    }
}
