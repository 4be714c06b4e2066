//! Public entry point routing each call to the cached or uncached path

use crate::config::AppConfig;
use crate::error::Result;
use crate::guard::ConsistencyGuard;
use crate::model::{CommentId, CommentRequest, CommentResponse, NewsId};
use crate::pagination::PaginationResponse;
use crate::service::CommentService;
use crate::store::{CommentStore, InMemoryCommentStore};
use crate::users::{InMemoryUserDirectory, UserDirectory};
use news_comments_cache::{CacheFactory, CacheStats, ConfiguredCacheFactory};
use std::sync::Arc;
use tracing::info;

/// Comment operations as exposed to callers
///
/// Active point reads and all mutations go through the [`ConsistencyGuard`].
/// Archive-view reads, by-news reads, listings, and search go straight to the
/// service and never touch the cache.
pub struct Comments {
    guard: ConsistencyGuard,
    service: Arc<CommentService>,
}

impl Comments {
    pub fn new<F: CacheFactory>(
        store: Arc<dyn CommentStore>,
        users: Arc<dyn UserDirectory>,
        factory: &F,
    ) -> Self {
        let service = Arc::new(CommentService::new(store, users));
        Self {
            guard: ConsistencyGuard::new(service.clone(), factory),
            service,
        }
    }

    /// Fully in-process instance sized from `config`
    pub fn in_memory(config: &AppConfig) -> anyhow::Result<Self> {
        let factory = ConfiguredCacheFactory::new(config.cache.cache_config())?;
        let store = Arc::new(InMemoryCommentStore::new(&config.search)?);
        let users = Arc::new(InMemoryUserDirectory::new());

        info!("Comment service ready (cache capacity: {})", config.cache.capacity);
        Ok(Self::new(store, users, &factory))
    }

    pub async fn get(&self, id: CommentId) -> Result<CommentResponse> {
        self.guard.get(id).await
    }

    pub async fn get_by_news(&self, id: CommentId, news_id: NewsId) -> Result<CommentResponse> {
        self.service.get_by_news(id, news_id).await
    }

    pub async fn get_from_archive(&self, id: CommentId) -> Result<CommentResponse> {
        self.service.get_from_archive(id).await
    }

    pub async fn list(
        &self,
        page_size: usize,
        number_page: usize,
    ) -> Result<PaginationResponse<CommentResponse>> {
        self.service.list(page_size, number_page).await
    }

    pub async fn list_archived(
        &self,
        page_size: usize,
        number_page: usize,
    ) -> Result<PaginationResponse<CommentResponse>> {
        self.service.list_archived(page_size, number_page).await
    }

    pub async fn list_by_news(
        &self,
        news_id: NewsId,
        page_size: usize,
        number_page: usize,
    ) -> Result<PaginationResponse<CommentResponse>> {
        self.service
            .list_by_news(news_id, page_size, number_page)
            .await
    }

    pub async fn list_archived_by_news(
        &self,
        news_id: NewsId,
        page_size: usize,
        number_page: usize,
    ) -> Result<PaginationResponse<CommentResponse>> {
        self.service
            .list_archived_by_news(news_id, page_size, number_page)
            .await
    }

    pub async fn create(&self, request: &CommentRequest) -> Result<CommentResponse> {
        self.guard.create(request).await
    }

    pub async fn update(&self, id: CommentId, request: &CommentRequest) -> Result<CommentResponse> {
        self.guard.update(id, request).await
    }

    pub async fn archive(&self, id: CommentId) -> Result<()> {
        self.guard.archive(id).await
    }

    pub async fn archive_by_news(&self, news_id: NewsId) -> Result<()> {
        self.guard.archive_by_news(news_id).await
    }

    pub async fn search(
        &self,
        query: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<CommentResponse>> {
        self.service.search(query, offset, limit).await
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.guard.cache_stats()
    }
}
