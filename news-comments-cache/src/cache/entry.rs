//! Cache entry management with TTL support

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A cache entry with optional TTL and access metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<V> {
    /// The cached value
    pub value: V,

    /// Entry metadata
    pub metadata: CacheMetadata,
}

impl<V> CacheEntry<V> {
    /// Create a new cache entry; `tick` is the owning cache's logical clock
    pub fn new(value: V, ttl: Option<Duration>, tick: u64) -> Self {
        Self {
            value,
            metadata: CacheMetadata {
                expires_at: ttl.map(|ttl| expiry_from(Utc::now(), ttl)),
                access_count: 0,
                last_access_tick: tick,
            },
        }
    }

    /// Check if the entry has expired
    pub fn is_expired(&self) -> bool {
        self.metadata
            .expires_at
            .is_some_and(|expires_at| Utc::now() > expires_at)
    }

    /// Mark the entry as accessed (updates access tick and count)
    pub fn mark_accessed(&mut self, tick: u64) {
        self.metadata.last_access_tick = tick;
        self.metadata.access_count += 1;
    }

    /// Update the value and reset expiration
    pub fn update_value(&mut self, new_value: V, ttl: Option<Duration>, tick: u64) {
        self.value = new_value;
        self.metadata.expires_at = ttl.map(|ttl| expiry_from(Utc::now(), ttl));
        self.metadata.last_access_tick = tick;
    }
}

fn expiry_from(now: DateTime<Utc>, ttl: Duration) -> DateTime<Utc> {
    now + chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::seconds(3600))
}

/// Metadata associated with a cache entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheMetadata {
    /// When the entry expires, if it does
    pub expires_at: Option<DateTime<Utc>>,

    /// Number of times this entry has been read
    pub access_count: u64,

    /// Logical time of the last read or write (for LRU ordering)
    pub last_access_tick: u64,
}
