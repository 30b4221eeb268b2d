//! An ordered map that can be frozen to prevent further modification.

use im::OrdMap;

use crate::errors::FrozenError;

/// An ordered key/value map with a one-way freeze switch.
///
/// The map starts out mutable. Once [`freeze`](Self::freeze) has been
/// called, every mutating operation fails with [`FrozenError`] and the
/// contents stay exactly as they were; reads are unaffected. Freezing is
/// irreversible. Iteration visits entries in key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreezableMap<K: Ord, V> {
    entries: OrdMap<K, V>,
    frozen: bool,
}

impl<K, V> FreezableMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    /// An empty, unfrozen map.
    pub fn new() -> Self {
        Self {
            entries: OrdMap::new(),
            frozen: false,
        }
    }

    /// Freezes the map. Every later mutation fails with [`FrozenError`].
    /// Freezing an already-frozen map is a no-op.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// `true` if and only if the map has been frozen.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }

    /// Inserts a key/value pair, returning the previous value for the key.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, FrozenError> {
        self.ensure_mutable()?;
        Ok(self.entries.insert(key, value))
    }

    /// Removes a key, returning the value that was stored under it.
    pub fn remove(&mut self, key: &K) -> Result<Option<V>, FrozenError> {
        self.ensure_mutable()?;
        Ok(self.entries.remove(key))
    }

    /// Removes every entry.
    pub fn clear(&mut self) -> Result<(), FrozenError> {
        self.ensure_mutable()?;
        self.entries.clear();
        Ok(())
    }

    fn ensure_mutable(&self) -> Result<(), FrozenError> {
        if self.frozen {
            return Err(FrozenError);
        }
        Ok(())
    }
}

impl<K, V> Default for FreezableMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for FreezableMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            frozen: false,
        }
    }
}
