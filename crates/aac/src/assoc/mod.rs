//! Insertion-ordered associative array with linear-scan lookup

mod key;
mod pair;

pub use key::{ArrayKey, RenderValue, NULL_TOKEN};
pub use pair::KeyValuePair;

use std::borrow::Borrow;
use std::fmt;

use crate::error::ArrayError;

/// Capacity of a freshly created array.
pub const DEFAULT_CAPACITY: usize = 16;

/// A small associative array storing key/value pairs in insertion order.
///
/// Every lookup is a linear scan from the first entry, so this is meant for
/// the handful of entries a board page holds, not as a general map. Keys are
/// unique and never null; removal shifts later entries left so the
/// surviving order is stable.
///
/// # Example
///
/// ```
/// use aac::{ArrayError, AssociativeArray};
///
/// let mut items = AssociativeArray::new();
/// items.set("img/fries.png".to_string(), "fries".to_string()).unwrap();
/// items.set("img/plate.png".to_string(), "plate".to_string()).unwrap();
///
/// assert_eq!(items.get("img/fries.png"), Ok(&"fries".to_string()));
/// assert_eq!(items.keys_as_strings(), vec!["img/fries.png", "img/plate.png"]);
///
/// // The empty string is the null key for string-keyed arrays
/// assert_eq!(items.set(String::new(), "x".to_string()), Err(ArrayError::NullKey));
///
/// items.remove("img/fries.png");
/// assert_eq!(items.to_string(), "{img/plate.png:plate}");
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct AssociativeArray<K, V> {
    /// Live entries; `pairs.len()` is the entry count
    pairs: Vec<KeyValuePair<K, V>>,
}

impl<K, V> Default for AssociativeArray<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> AssociativeArray<K, V> {
    /// Create a new, empty array with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty array with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
        }
    }

    /// Number of key/value pairs.
    pub fn size(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the array holds no entries.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of entries the array can hold before it grows.
    pub fn capacity(&self) -> usize {
        self.pairs.capacity()
    }

    /// Iterate over entries in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.pairs.iter().map(KeyValuePair::as_refs)
    }

    /// Iterate over keys in storage order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.pairs.iter().map(|pair| &pair.key)
    }

    /// Get the string form of every key, in storage order.
    pub fn keys_as_strings(&self) -> Vec<String>
    where
        K: fmt::Display,
    {
        self.pairs.iter().map(|pair| pair.key.to_string()).collect()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Index of the first entry whose key equals `key`.
    fn find<Q>(&self, key: &Q) -> Result<usize, ArrayError>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.pairs
            .iter()
            .position(|pair| pair.key.borrow() == key)
            .ok_or(ArrayError::KeyNotFound)
    }

    /// Get the value stored under `key`.
    ///
    /// # Errors
    ///
    /// `KeyNotFound` if no entry has this key.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, ArrayError>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let i = self.find(key)?;
        Ok(&self.pairs[i].value)
    }

    /// Get a mutable reference to the value stored under `key`.
    ///
    /// # Errors
    ///
    /// `KeyNotFound` if no entry has this key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, ArrayError>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let i = self.find(key)?;
        Ok(&mut self.pairs[i].value)
    }

    /// Check if `key` is present. Never fails; a null key is never present.
    pub fn has_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.pairs.iter().any(|pair| pair.key.borrow() == key)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Mutation
    // ═══════════════════════════════════════════════════════════════════

    /// Remove the entry for `key`, returning its value.
    ///
    /// Later entries shift left by one, so relative order is preserved.
    /// Removing an absent key does nothing.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let i = self.find(key).ok()?;
        Some(self.pairs.remove(i).value)
    }

    /// Double the backing storage.
    fn expand(&mut self) {
        let additional = self.pairs.capacity().max(1);
        self.pairs.reserve_exact(additional);
    }
}

impl<K: ArrayKey, V> AssociativeArray<K, V> {
    /// Associate `value` with `key`.
    ///
    /// An existing entry is overwritten in place; a new key is appended,
    /// doubling the storage first when it is full.
    ///
    /// # Errors
    ///
    /// `NullKey` if the key is null. The array is left unchanged.
    pub fn set(&mut self, key: K, value: V) -> Result<(), ArrayError> {
        if key.is_null() {
            return Err(ArrayError::NullKey);
        }

        match self.find(&key) {
            Ok(i) => self.pairs[i].value = value,
            Err(_) => {
                if self.pairs.len() == self.pairs.capacity() {
                    self.expand();
                }
                self.pairs.push(KeyValuePair::new(key, value));
            }
        }
        Ok(())
    }
}

impl<K: ArrayKey + Clone, V: Clone> Clone for AssociativeArray<K, V> {
    /// Copy every entry into a fresh array through `set`, so the copy
    /// re-checks the no-null-key rule.
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for pair in &self.pairs {
            if let Err(err) = copy.set(pair.key.clone(), pair.value.clone()) {
                tracing::warn!(error = %err, "dropped entry while cloning associative array");
            }
        }
        copy
    }
}

impl<K: fmt::Display, V: RenderValue> fmt::Display for AssociativeArray<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", pair)?;
        }
        write!(f, "}}")
    }
}

impl<K: ArrayKey, V> FromIterator<(K, V)> for AssociativeArray<K, V> {
    /// Collect pairs through `set`; null keys are skipped and later
    /// duplicates overwrite earlier ones.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut array = Self::new();
        for (key, value) in iter {
            if let Err(err) = array.set(key, value) {
                tracing::warn!(error = %err, "skipped entry while collecting associative array");
            }
        }
        array
    }
}
