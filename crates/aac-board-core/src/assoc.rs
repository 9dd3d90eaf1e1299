//! Ordered associative container
//!
//! The storage primitive for the whole board: a growable array of key/value
//! pairs with linear lookup. Insertion order is the iteration order, which is
//! what keeps board files stable across save/load round-trips. Category and
//! entry counts are small (tens, not millions), so no hashing is used.

use std::fmt;

use crate::error::{AacBoardError, Result};

/// Initial capacity of the backing array.
const DEFAULT_CAPACITY: usize = 16;

/// Key requirements for [`AssocMap`].
///
/// A key type designates one "sentinel" value that can never be stored; for
/// `String` keys this is the empty string. The sentinel stands in for the
/// absence of a key, so there is no nullable key anywhere in the container.
pub trait MapKey: Clone + PartialEq + fmt::Display {
    /// Whether this value is the reserved no-key sentinel.
    fn is_sentinel(&self) -> bool;
}

impl MapKey for String {
    fn is_sentinel(&self) -> bool {
        self.is_empty()
    }
}

#[derive(Debug, Clone)]
struct Pair<K, V> {
    key: K,
    value: V,
}

/// Ordered key/value map with linear scan and append-at-end insertion.
///
/// `put` on an existing key overwrites the value in place without moving it;
/// new keys always land at the end. `Clone` yields an independent map with
/// the same pairs in the same order.
#[derive(Debug, Clone)]
pub struct AssocMap<K, V> {
    pairs: Vec<Pair<K, V>>,
}

impl<K: MapKey, V> AssocMap<K, V> {
    /// Create a new, empty map.
    pub fn new() -> Self {
        Self {
            pairs: Vec::with_capacity(DEFAULT_CAPACITY),
        }
    }

    /// Add or update a key/value pair.
    ///
    /// Updating keeps the key's position; adding appends at the end, growing
    /// the backing storage as needed without disturbing iteration order.
    pub fn put(&mut self, key: K, value: V) -> Result<()> {
        if key.is_sentinel() {
            return Err(AacBoardError::InvalidKey);
        }

        if let Some(pair) = self.pairs.iter_mut().find(|p| p.key == key) {
            pair.value = value;
            return Ok(());
        }

        self.pairs.push(Pair { key, value });
        Ok(())
    }

    /// Get the value associated with a key.
    pub fn get(&self, key: &K) -> Result<&V> {
        self.pairs
            .iter()
            .find(|p| &p.key == key)
            .map(|p| &p.value)
            .ok_or_else(|| AacBoardError::KeyNotFound {
                key: key.to_string(),
            })
    }

    /// Get mutable access to the value associated with a key.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        self.pairs
            .iter_mut()
            .find(|p| &p.key == key)
            .map(|p| &mut p.value)
            .ok_or_else(|| AacBoardError::KeyNotFound {
                key: key.to_string(),
            })
    }

    /// Whether the key is present. The sentinel is never present.
    pub fn contains_key(&self, key: &K) -> bool {
        if key.is_sentinel() {
            return false;
        }
        self.pairs.iter().any(|p| &p.key == key)
    }

    /// Get the key at the given insertion-order position.
    pub fn key_at(&self, index: usize) -> Result<&K> {
        self.pairs
            .get(index)
            .map(|p| &p.key)
            .ok_or(AacBoardError::IndexOutOfRange {
                index,
                len: self.pairs.len(),
            })
    }

    /// Remove the pair for a key, closing the gap. No-op if absent.
    pub fn remove(&mut self, key: &K) {
        if let Some(idx) = self.pairs.iter().position(|p| &p.key == key) {
            self.pairs.remove(idx);
        }
    }

    /// Number of live pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the map holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.pairs.iter().map(|p| &p.key)
    }

    /// Key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.pairs.iter().map(|p| (&p.key, &p.value))
    }
}

impl<K: MapKey, V> Default for AssocMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
