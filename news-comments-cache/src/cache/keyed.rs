//! The capability consumed by cache-aside callers

use crate::cache::types::CacheStats;

/// A bounded key/value mapping seen only through three operations.
///
/// Implementations must never block on I/O. An entry written with `put` may
/// be dropped at any later point by the implementation's own eviction policy.
pub trait KeyedCache<K, V>: Send + Sync {
    /// Look up `key` without touching any backing store
    fn get(&self, key: &K) -> Option<V>;

    /// Insert or overwrite the entry for `key`
    fn put(&self, key: K, value: V);

    /// Drop the entry for `key`; no-op if absent
    fn remove_by_key(&self, key: &K);

    /// Snapshot of the cache counters
    fn stats(&self) -> CacheStats {
        CacheStats::default()
    }
}
