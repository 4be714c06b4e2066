//! # News Comments Cache (news-comments-cache)
//!
//! A small, synchronous keyed cache used by the news comment service to keep
//! comment projections close to the request path.
//!
//! ## Features
//!
//! - `KeyedCache` capability trait (`get` / `put` / `remove_by_key`)
//! - Capacity-bounded storage with pluggable eviction (LRU or LFU)
//! - Optional per-entry TTL with jitter
//! - Hit/miss/eviction statistics
//! - `CacheFactory` for creating one cache instance per resource type
//!
//! ## Example
//!
//! ```rust
//! use news_comments_cache::{CacheConfig, CacheFactory, ConfiguredCacheFactory, EvictionPolicy};
//!
//! # fn main() -> news_comments_cache::Result<()> {
//! let config = CacheConfig::builder()
//!     .capacity(1_000)
//!     .policy(EvictionPolicy::Lfu)
//!     .build();
//!
//! let factory = ConfiguredCacheFactory::new(config)?;
//! let cache = factory.create_cache::<u64, String>();
//!
//! cache.put(1, "first".to_string());
//! assert_eq!(cache.get(&1), Some("first".to_string()));
//!
//! cache.remove_by_key(&1);
//! assert_eq!(cache.get(&1), None);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod error;

// Re-export main types for convenience
pub use cache::{
    BoundedCache, CacheConfig, CacheConfigBuilder, CacheEntry, CacheFactory, CacheMetadata,
    CacheStats, ConfiguredCacheFactory, EvictionPolicy, KeyedCache,
};
pub use error::{CacheError, Result};
