//! A single key/value cell

use std::fmt;

use super::RenderValue;

/// One entry of an [`AssociativeArray`](super::AssociativeArray).
///
/// The pair itself does not validate its key; the owning array refuses
/// null keys before a pair is ever built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValuePair<K, V> {
    /// The entry's key
    pub key: K,

    /// The entry's value, overwritten in place by `set`
    pub value: V,
}

impl<K, V> KeyValuePair<K, V> {
    /// Create a new pair.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Borrow the key and value together.
    pub fn as_refs(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    /// Split the pair into its parts.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: fmt::Display, V: RenderValue> fmt::Display for KeyValuePair<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.key)?;
        self.value.render(f)
    }
}
