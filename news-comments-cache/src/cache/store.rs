//! Bounded cache implementation with LRU/LFU eviction and optional TTL

use crate::cache::{
    config::CacheConfig,
    entry::CacheEntry,
    keyed::KeyedCache,
    types::{CacheStats, EvictionPolicy},
};
use lru::LruCache;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::num::NonZeroUsize;
use tracing::{debug, info};

/// Capacity-bounded cache
///
/// This implementation provides:
/// - Thread-safe access via a single internal mutex (never held across I/O)
/// - LRU eviction in O(1) through a recency list, or LFU eviction by access count
/// - Optional TTL-based expiration, checked lazily on `get`
/// - Hit/miss/eviction counters
pub struct BoundedCache<K: Hash + Eq, V> {
    /// Cache configuration
    config: CacheConfig,

    /// Internal storage
    store: Mutex<CacheStore<K, V>>,
}

/// Internal cache storage
struct CacheStore<K: Hash + Eq, V> {
    /// Main storage: key -> entry, organized for the configured policy
    entries: Entries<K, V>,

    /// Logical clock, advanced on every read or write
    tick: u64,

    /// Current cache statistics
    stats: CacheStats,
}

impl<K: Hash + Eq, V> CacheStore<K, V> {
    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }
}

/// Entry storage per eviction policy
enum Entries<K: Hash + Eq, V> {
    /// Recency-ordered; the list tail is the victim
    Recency(LruCache<K, CacheEntry<V>>),

    /// Unordered; the victim is the entry with the fewest reads
    Frequency {
        map: HashMap<K, CacheEntry<V>>,
        capacity: usize,
    },
}

impl<K, V> Entries<K, V>
where
    K: Eq + Hash + Clone,
{
    fn new(policy: EvictionPolicy, capacity: usize) -> Self {
        match policy {
            EvictionPolicy::Lru => {
                let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
                Entries::Recency(LruCache::new(capacity))
            }
            EvictionPolicy::Lfu => Entries::Frequency {
                map: HashMap::with_capacity(capacity.min(1024)),
                capacity: capacity.max(1),
            },
        }
    }

    fn len(&self) -> usize {
        match self {
            Entries::Recency(lru) => lru.len(),
            Entries::Frequency { map, .. } => map.len(),
        }
    }

    /// Look up `key`, promoting it in recency order
    fn get_mut(&mut self, key: &K) -> Option<&mut CacheEntry<V>> {
        match self {
            Entries::Recency(lru) => lru.get_mut(key),
            Entries::Frequency { map, .. } => map.get_mut(key),
        }
    }

    fn remove(&mut self, key: &K) -> Option<CacheEntry<V>> {
        match self {
            Entries::Recency(lru) => lru.pop(key),
            Entries::Frequency { map, .. } => map.remove(key),
        }
    }

    /// Insert a key that is not present; returns the key evicted to make room
    fn insert_new(&mut self, key: K, entry: CacheEntry<V>) -> Option<K> {
        match self {
            Entries::Recency(lru) => lru.push(key, entry).map(|(evicted, _)| evicted),
            Entries::Frequency { map, capacity } => {
                let victim = if map.len() >= *capacity {
                    map.iter()
                        .min_by_key(|(_, entry)| {
                            (entry.metadata.access_count, entry.metadata.last_access_tick)
                        })
                        .map(|(key, _)| key.clone())
                } else {
                    None
                };
                if let Some(victim) = &victim {
                    map.remove(victim);
                }
                map.insert(key, entry);
                victim
            }
        }
    }
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    /// Create a new cache with the given configuration
    pub fn new(config: CacheConfig) -> Self {
        info!("Initializing bounded cache with config: {:?}", config);

        let store = CacheStore {
            entries: Entries::new(config.policy, config.capacity),
            tick: 0,
            stats: CacheStats::default(),
        };

        Self {
            config,
            store: Mutex::new(store),
        }
    }

    /// The policy used to pick eviction victims
    pub fn policy(&self) -> EvictionPolicy {
        self.config.policy
    }

    /// Get number of entries in cache (expired entries included until read)
    pub fn len(&self) -> usize {
        self.store.lock().entries.len()
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> KeyedCache<K, V> for BoundedCache<K, V>
where
    K: Eq + Hash + Clone + Debug + Send + Sync,
    V: Clone + Send + Sync,
{
    fn get(&self, key: &K) -> Option<V> {
        let mut store = self.store.lock();
        let tick = store.next_tick();

        let lookup = store.entries.get_mut(key).map(|entry| {
            if entry.is_expired() {
                None
            } else {
                entry.mark_accessed(tick);
                Some(entry.value.clone())
            }
        });

        match lookup {
            Some(Some(value)) => {
                debug!("Cache hit: {:?}", key);
                store.stats.hits += 1;
                Some(value)
            }
            Some(None) => {
                debug!("Cache entry expired: {:?}", key);
                store.entries.remove(key);
                store.stats.misses += 1;
                store.stats.evictions_ttl += 1;
                store.stats.entries = store.entries.len();
                None
            }
            None => {
                debug!("Cache miss: {:?}", key);
                store.stats.misses += 1;
                None
            }
        }
    }

    fn put(&self, key: K, value: V) {
        let ttl = self.config.ttl_with_jitter();
        let mut store = self.store.lock();
        let tick = store.next_tick();

        if let Some(existing) = store.entries.get_mut(&key) {
            debug!("Updating existing cache entry: {:?}", key);
            existing.update_value(value, ttl, tick);
        } else {
            debug!("Inserting new cache entry: {:?}", key);
            if let Some(evicted) = store.entries.insert_new(key, CacheEntry::new(value, ttl, tick)) {
                debug!("Evicted cache entry ({}): {:?}", self.config.policy, evicted);
                store.stats.evictions_capacity += 1;
            }
        }

        store.stats.entries = store.entries.len();
    }

    fn remove_by_key(&self, key: &K) {
        let mut store = self.store.lock();

        if store.entries.remove(key).is_some() {
            store.stats.invalidations += 1;
            store.stats.entries = store.entries.len();
            debug!("Removed cache entry: {:?}", key);
        }
    }

    fn stats(&self) -> CacheStats {
        self.store.lock().stats.clone()
    }
}
