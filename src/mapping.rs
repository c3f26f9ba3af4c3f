//! Total functions with finite support.
//!
//! A [`Mapping`] assigns a value to *every* key: keys with an explicit entry
//! map to that entry, all other keys map to the declared default.
//! Mappings are values: every update produces a new mapping, so two solver
//! states can be compared with `==` to detect convergence.

use std::collections::HashMap;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::ops::{Add, Index};

/// Total function `K → E` with finite support.
///
/// # Invariants
///
/// - No explicit entry is equal to the default, hence structural equality
///   coincides with equality of the represented functions.
#[derive(Clone)]
pub struct Mapping<K, E> {
    default: E,
    storage: HashMap<K, E>,
}

impl<K, E> Mapping<K, E>
where
    K: Clone + Eq + Hash,
    E: Clone + PartialEq,
{
    /// Constant mapping: every key maps to `default`.
    pub fn new(default: E) -> Self {
        Self {
            default,
            storage: HashMap::new(),
        }
    }

    /// Build a mapping from explicit entries on top of `default`.
    pub fn from_entries<I>(default: E, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, E)>,
    {
        entries
            .into_iter()
            .fold(Self::new(default), |m, entry| m + entry)
    }

    /// The value every key without an explicit entry maps to.
    pub fn default_value(&self) -> &E {
        &self.default
    }

    /// Value of the mapping at `key`.
    pub fn get(&self, key: &K) -> &E {
        self.storage.get(key).unwrap_or(&self.default)
    }

    /// Number of explicit entries.
    pub fn support_len(&self) -> usize {
        self.storage.len()
    }

    /// Explicit entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &E)> {
        self.storage.iter()
    }

    /// Copy of this mapping with `key` remapped to `value`.
    pub fn updated(&self, key: K, value: E) -> Self {
        let mut result = self.clone();
        result.set(key, value);
        result
    }

    fn set(&mut self, key: K, value: E) {
        if value == self.default {
            self.storage.remove(&key);
        } else {
            self.storage.insert(key, value);
        }
    }

    /// Pointwise combination: `result[k] = f(self[k], that[k])` for every key `k`.
    ///
    /// The default of the result is `f(self.default, that.default)`.
    pub fn zip<F>(&self, that: &Self, f: F) -> Self
    where
        F: Fn(&E, &E) -> E,
    {
        let mut result = Self::new(f(&self.default, &that.default));
        for (k, v) in self.storage.iter() {
            result.set(k.clone(), f(v, that.get(k)));
        }
        for (k, v) in that.storage.iter() {
            if !self.storage.contains_key(k) {
                result.set(k.clone(), f(self.get(k), v));
            }
        }
        result
    }

    /// Pointwise transformation of every value, including the default.
    pub fn map_values<F>(&self, f: F) -> Self
    where
        F: Fn(&E) -> E,
    {
        let mut result = Self::new(f(&self.default));
        for (k, v) in self.storage.iter() {
            result.set(k.clone(), f(v));
        }
        result
    }
}

impl<K: Eq + Hash, E: PartialEq> PartialEq for Mapping<K, E> {
    fn eq(&self, other: &Self) -> bool {
        self.default == other.default && self.storage == other.storage
    }
}

impl<K: Eq + Hash, E: Eq> Eq for Mapping<K, E> {}

impl<K, E> Add<(K, E)> for Mapping<K, E>
where
    K: Clone + Eq + Hash,
    E: Clone + PartialEq,
{
    type Output = Self;

    fn add(mut self, (key, value): (K, E)) -> Self::Output {
        self.set(key, value);
        self
    }
}

impl<K, E> Index<&K> for Mapping<K, E>
where
    K: Clone + Eq + Hash,
    E: Clone + PartialEq,
{
    type Output = E;

    fn index(&self, key: &K) -> &Self::Output {
        self.get(key)
    }
}

impl<K: Debug, E: Debug> Debug for Mapping<K, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping")
            .field("default", &self.default)
            .field("storage", &self.storage)
            .finish()
    }
}

impl<K: Display, E: Display> Display for Mapping<K, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (k, v) in self.storage.iter() {
            write!(f, "{} -> {}, ", k, v)?;
        }
        write!(f, "* -> {}}}", self.default)
    }
}
