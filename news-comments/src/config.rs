//! Service configuration: YAML file, then environment overrides, then CLI flags

use anyhow::{Context, Result};
use news_comments_cache::{CacheConfig, EvictionPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub cache: CacheSettings,
    pub search: SearchSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Comment cache sizing; converted to a [`CacheConfig`] for the factory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub capacity: usize,
    pub policy: EvictionPolicy,
    /// Entry lifetime in seconds; absent means entries live until evicted
    pub ttl_secs: Option<u64>,
    pub ttl_jitter: f64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        let defaults = CacheConfig::default();
        Self {
            capacity: defaults.capacity,
            policy: defaults.policy,
            ttl_secs: None,
            ttl_jitter: defaults.ttl_jitter,
        }
    }
}

impl CacheSettings {
    pub fn cache_config(&self) -> CacheConfig {
        let builder = CacheConfig::builder()
            .capacity(self.capacity)
            .policy(self.policy)
            .ttl_jitter(self.ttl_jitter);

        match self.ttl_secs {
            Some(secs) => builder.default_ttl(Duration::from_secs(secs)).build(),
            None => builder.build(),
        }
    }
}

/// Relative weight of each searchable field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub text_boost: f32,
    pub user_name_boost: f32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            text_boost: 1.2,
            user_name_boost: 1.1,
        }
    }
}

impl AppConfig {
    /// Load from a YAML file. Missing keys take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        serde_yaml::from_str(&raw).with_context(|| format!("Failed to parse config: {:?}", path))
    }

    /// Apply `COMMENTS_*` overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(host) = lookup("COMMENTS_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("COMMENTS_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("Invalid COMMENTS_PORT: {}", port))?;
        }
        if let Some(capacity) = lookup("COMMENTS_CACHE_CAPACITY") {
            self.cache.capacity = capacity
                .parse()
                .with_context(|| format!("Invalid COMMENTS_CACHE_CAPACITY: {}", capacity))?;
        }
        if let Some(policy) = lookup("COMMENTS_CACHE_POLICY") {
            self.cache.policy = policy.parse()?;
        }
        if let Some(ttl) = lookup("COMMENTS_CACHE_TTL_SECS") {
            self.cache.ttl_secs = Some(
                ttl.parse()
                    .with_context(|| format!("Invalid COMMENTS_CACHE_TTL_SECS: {}", ttl))?,
            );
        }
        Ok(())
    }

    /// Reject settings the cache factory or search index cannot use
    pub fn validate(&self) -> Result<()> {
        self.cache
            .cache_config()
            .validate()
            .context("Invalid cache settings")?;

        if self.search.text_boost <= 0.0 || self.search.user_name_boost <= 0.0 {
            anyhow::bail!("Search boosts must be positive");
        }
        Ok(())
    }
}
