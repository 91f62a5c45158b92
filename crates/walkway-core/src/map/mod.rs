//! Separate-chaining hash table used as the graph's node index
//!
//! `KeyedMap` stores each key/value pair in one of `capacity` chains. The
//! chain for a key is `hash(key) % capacity`; hashes are unsigned so the
//! reduction is never negative. When an insertion brings the load factor
//! (len / capacity) to [`RESIZE_THRESHOLD`] or above, the table doubles and
//! every pair is rehashed into the new chains.
//!
//! Unlike `std::collections::HashMap`, `put` refuses to overwrite: inserting
//! a key that is already present is an error, as is inserting an unset key.

use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::error::{Result, WalkwayError};

/// Capacity used by [`KeyedMap::new`].
pub const DEFAULT_CAPACITY: usize = 64;

/// Load factor at which an insertion triggers a resize.
pub const RESIZE_THRESHOLD: f64 = 0.8;

const GROWTH_FACTOR: usize = 2;

/// A hash table with separate chaining and automatic doubling.
pub struct KeyedMap<K, V, S = RandomState> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
    hasher: S,
}

impl<K, V> KeyedMap<K, V, RandomState>
where
    K: Hash + Eq,
{
    /// Create an empty map with [`DEFAULT_CAPACITY`] chains.
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_CAPACITY, RandomState::new())
    }

    /// Create an empty map with `capacity` chains.
    ///
    /// Fails with `InvalidCapacity` when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V, S> KeyedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Create an empty map with `capacity` chains and a custom hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Result<Self> {
        if capacity == 0 {
            return Err(WalkwayError::InvalidCapacity);
        }
        Ok(Self::with_buckets(capacity, hasher))
    }

    fn with_buckets(capacity: usize, hasher: S) -> Self {
        Self {
            buckets: empty_buckets(capacity),
            len: 0,
            hasher,
        }
    }

    #[inline]
    fn bucket_index(&self, key: &K) -> usize {
        bucket_for(&self.hasher, key, self.buckets.len())
    }

    /// Insert a new key/value pair.
    ///
    /// `key` accepts either `K` or `Option<K>`; `None` is rejected with
    /// `NullKey`. A key that is already present is rejected with
    /// `DuplicateKey` and the map is left untouched.
    pub fn put(&mut self, key: impl Into<Option<K>>, value: V) -> Result<()>
    where
        K: fmt::Debug,
    {
        let key = key.into().ok_or(WalkwayError::NullKey)?;
        if self.contains_key(&key) {
            return Err(WalkwayError::duplicate_key(&key));
        }

        let index = self.bucket_index(&key);
        self.buckets[index].push((key, value));
        self.len += 1;

        if self.load_factor() >= RESIZE_THRESHOLD {
            self.resize(self.buckets.len() * GROWTH_FACTOR);
        }
        Ok(())
    }

    fn resize(&mut self, new_capacity: usize) {
        let old_buckets = std::mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        let old_capacity = old_buckets.len();

        for (key, value) in old_buckets.into_iter().flatten() {
            let index = bucket_for(&self.hasher, &key, new_capacity);
            self.buckets[index].push((key, value));
        }

        tracing::debug!(
            old_capacity,
            new_capacity,
            len = self.len,
            "keyed_map_resize"
        );
    }

    /// Returns true if `key` is stored in the map.
    pub fn contains_key(&self, key: &K) -> bool {
        self.buckets[self.bucket_index(key)]
            .iter()
            .any(|(k, _)| k == key)
    }

    /// Returns the value stored for `key`, or `KeyNotFound`.
    pub fn get(&self, key: &K) -> Result<&V>
    where
        K: fmt::Debug,
    {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| WalkwayError::key_not_found(key))
    }

    /// Returns a mutable reference to the value stored for `key`, or `KeyNotFound`.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V>
    where
        K: fmt::Debug,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| WalkwayError::key_not_found(key))
    }

    /// Removes `key` and returns the value it mapped to, or `KeyNotFound`.
    pub fn remove(&mut self, key: &K) -> Result<V>
    where
        K: fmt::Debug,
    {
        let index = self.bucket_index(key);
        let chain = &mut self.buckets[index];
        let position = chain
            .iter()
            .position(|(k, _)| k == key)
            .ok_or_else(|| WalkwayError::key_not_found(key))?;

        // Order within a chain carries no meaning.
        let (_, value) = chain.swap_remove(position);
        self.len -= 1;
        Ok(value)
    }

    /// Removes every pair. The current capacity is retained.
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.len = 0;
    }

    /// Number of stored pairs.
    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of chains in the table.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Snapshot of every key. Order is unspecified and changes across resizes.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Iterate over all pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|(k, v)| (k, v)))
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.buckets
            .iter_mut()
            .flat_map(|chain| chain.iter_mut().map(|(_, v)| v))
    }
}

impl<K, V> Default for KeyedMap<K, V, RandomState>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> fmt::Debug for KeyedMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.buckets.iter().flatten().map(|(k, v)| (k, v)))
            .finish()
    }
}

fn empty_buckets<K, V>(capacity: usize) -> Vec<Vec<(K, V)>> {
    (0..capacity).map(|_| Vec::new()).collect()
}

#[inline]
fn bucket_for<K: Hash, S: BuildHasher>(hasher: &S, key: &K, capacity: usize) -> usize {
    (hasher.hash_one(key) % capacity as u64) as usize
}

#[cfg(test)]
mod tests;
