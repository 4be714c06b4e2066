//! # Keyed Caching Layer
//!
//! Capability-style cache used for cache-aside reads of comment projections.
//!
//! ## Features
//!
//! - **Capability trait**: consumers only see `get`, `put` and `remove_by_key`
//! - **Bounded storage**: a fixed entry capacity, never exceeded
//! - **Pluggable eviction**: least recently used or least frequently used
//! - **TTL**: optional expiration with jitter to avoid synchronized expiry
//! - **Factory**: one configured instance per protected resource type
//!
//! Entries may disappear at any time (eviction, expiry), so callers must treat
//! the cache as an optimization and keep the backing store authoritative.

pub mod config;
pub mod entry;
pub mod factory;
pub mod keyed;
pub mod store;
pub mod types;

pub use config::{CacheConfig, CacheConfigBuilder};
pub use entry::{CacheEntry, CacheMetadata};
pub use factory::{CacheFactory, ConfiguredCacheFactory};
pub use keyed::KeyedCache;
pub use store::BoundedCache;
pub use types::{CacheStats, EvictionPolicy};
