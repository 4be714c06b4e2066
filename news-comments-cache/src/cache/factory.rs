//! Cache construction

use crate::cache::{config::CacheConfig, keyed::KeyedCache, store::BoundedCache};
use crate::error::Result;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use tracing::info;

/// Produces cache instances for a protected resource type.
///
/// Callers create one instance at startup and keep it for the lifetime of the
/// process; there is no teardown contract.
pub trait CacheFactory {
    /// Create a new, empty cache
    fn create_cache<K, V>(&self) -> Arc<dyn KeyedCache<K, V>>
    where
        K: Eq + Hash + Clone + Debug + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static;
}

/// Factory backed by a validated `CacheConfig`
#[derive(Debug, Clone)]
pub struct ConfiguredCacheFactory {
    config: CacheConfig,
}

impl ConfiguredCacheFactory {
    /// Validate `config` and wrap it in a factory
    pub fn new(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration every created cache receives
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }
}

impl CacheFactory for ConfiguredCacheFactory {
    fn create_cache<K, V>(&self) -> Arc<dyn KeyedCache<K, V>>
    where
        K: Eq + Hash + Clone + Debug + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        info!(
            "Creating {} cache (capacity: {}, ttl: {:?})",
            self.config.policy, self.config.capacity, self.config.default_ttl
        );
        Arc::new(BoundedCache::new(self.config.clone()))
    }
}
