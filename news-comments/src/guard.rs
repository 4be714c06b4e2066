//! Cache-aside protocol around point reads and mutations
//!
//! Every entry point holds one mutex across its cache access and the service
//! call it wraps, so no reader can observe a cache state that disagrees with
//! a mutation in flight. Failed service calls leave the cache untouched.

use crate::error::Result;
use crate::model::{CommentId, CommentRequest, CommentResponse, NewsId};
use crate::service::CommentService;
use news_comments_cache::{CacheFactory, CacheStats, KeyedCache};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

pub struct ConsistencyGuard {
    service: Arc<CommentService>,
    cache: Arc<dyn KeyedCache<CommentId, CommentResponse>>,
    lock: Mutex<()>,
}

impl ConsistencyGuard {
    /// Build the guard with a fresh cache from `factory`
    pub fn new<F: CacheFactory>(service: Arc<CommentService>, factory: &F) -> Self {
        Self::with_cache(service, factory.create_cache())
    }

    pub fn with_cache(
        service: Arc<CommentService>,
        cache: Arc<dyn KeyedCache<CommentId, CommentResponse>>,
    ) -> Self {
        Self {
            service,
            cache,
            lock: Mutex::new(()),
        }
    }

    /// Active-view read. A cache hit is returned as-is.
    pub async fn get(&self, id: CommentId) -> Result<CommentResponse> {
        let _guard = self.lock.lock().await;

        if let Some(cached) = self.cache.get(&id) {
            debug!("Comment cache hit: {}", id);
            return Ok(cached);
        }

        debug!("Comment cache miss: {}", id);
        let response = self.service.get(id).await?;
        self.cache.put(id, response.clone());
        Ok(response)
    }

    pub async fn create(&self, request: &CommentRequest) -> Result<CommentResponse> {
        let _guard = self.lock.lock().await;

        let response = self.service.create(request).await?;
        self.cache.put(response.id, response.clone());
        debug!("Cached new comment: {}", response.id);
        Ok(response)
    }

    pub async fn update(&self, id: CommentId, request: &CommentRequest) -> Result<CommentResponse> {
        let _guard = self.lock.lock().await;

        let response = self.service.update(id, request).await?;
        self.cache.remove_by_key(&id);
        self.cache.put(id, response.clone());
        debug!("Refreshed cached comment: {}", id);
        Ok(response)
    }

    pub async fn archive(&self, id: CommentId) -> Result<()> {
        let _guard = self.lock.lock().await;

        self.service.archive(id).await?;
        self.cache.remove_by_key(&id);
        debug!("Evicted archived comment: {}", id);
        Ok(())
    }

    /// Bulk archive, evicting every comment that changed state
    pub async fn archive_by_news(&self, news_id: NewsId) -> Result<()> {
        let _guard = self.lock.lock().await;

        let archived = self.service.archive_by_news(news_id).await?;
        for id in &archived {
            self.cache.remove_by_key(id);
        }
        debug!(
            "Evicted {} archived comment(s) of news {}",
            archived.len(),
            news_id
        );
        Ok(())
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
