//! Sharded hash-consing tables.
//!
//! A `HashCons` maps every node to one canonical, value-equal handle so
//! that equal subtrees can be shared and later compared with `ptr_eq`.
//! Thread-safe concurrent access via per-shard locking.

use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::{FxHashSet, FxHasher};

use crate::{Expr, Type};

/// Number of independently locked shards.
const NUM_SHARDS: usize = 16;

/// Canonical expression handles.
pub type ExprTable = HashCons<Expr>;

/// Canonical type handles.
pub type TypeTable = HashCons<Type>;

/// Sharded hash-consing table.
///
/// # Thread Safety
/// Uses `RwLock` per shard for concurrent read/write access.
/// Wrap in `SharedHashCons` for sharing across threads.
pub struct HashCons<T> {
    shards: [RwLock<FxHashSet<T>>; NUM_SHARDS],
    /// Total count of canonical nodes across all shards (O(1) `len()`).
    total_count: AtomicUsize,
}

impl<T: Eq + Hash + Clone> HashCons<T> {
    pub fn new() -> Self {
        HashCons {
            shards: std::array::from_fn(|_| RwLock::new(FxHashSet::default())),
            total_count: AtomicUsize::new(0),
        }
    }

    #[inline]
    fn shard_for(value: &T) -> usize {
        let mut hasher = FxHasher::default();
        value.hash(&mut hasher);
        let bucket = hasher.finish() % NUM_SHARDS as u64;
        usize::try_from(bucket).unwrap_or_default()
    }

    /// Return the canonical handle for `value`, registering `value` itself
    /// if no equal node is known yet.
    pub fn canonicalize(&self, value: T) -> T {
        let shard_idx = Self::shard_for(&value);
        let shard = &self.shards[shard_idx];

        // Fast path: already canonical
        if let Some(existing) = shard.read().get(&value) {
            return existing.clone();
        }

        // Slow path: need to insert
        let mut guard = shard.write();

        // Double-check after acquiring write lock
        if let Some(existing) = guard.get(&value) {
            return existing.clone();
        }

        guard.insert(value.clone());
        let total = self.total_count.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::trace!(shard = shard_idx, total, "inserted canonical node");
        value
    }

    /// Check if a node equal to `value` is registered.
    pub fn contains(&self, value: &T) -> bool {
        self.shards[Self::shard_for(value)].read().contains(value)
    }

    /// Number of distinct canonical nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Eq + Hash + Clone> Default for HashCons<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe shared table.
pub struct SharedHashCons<T>(Arc<HashCons<T>>);

impl<T: Eq + Hash + Clone> SharedHashCons<T> {
    pub fn new() -> Self {
        SharedHashCons(Arc::new(HashCons::new()))
    }
}

impl<T: Eq + Hash + Clone> Default for SharedHashCons<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SharedHashCons<T> {
    fn clone(&self) -> Self {
        SharedHashCons(Arc::clone(&self.0))
    }
}

impl<T> Deref for SharedHashCons<T> {
    type Target = HashCons<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests;
