//! Uncached comment operations over a backing store
//!
//! Every method here talks to the store directly. Callers that want the
//! cache-aside read path go through [`ConsistencyGuard`](crate::guard::ConsistencyGuard).

use crate::archive::View;
use crate::error::{CommentError, Result};
use crate::model::{CommentId, CommentRequest, CommentResponse, NewComment, NewsId, User};
use crate::pagination::{PaginationAssembler, PaginationResponse};
use crate::search::SearchRanker;
use crate::store::CommentStore;
use crate::users::UserDirectory;
use crate::validate;
use std::sync::Arc;
use tracing::{info, warn};

pub struct CommentService {
    store: Arc<dyn CommentStore>,
    users: Arc<dyn UserDirectory>,
    pagination: PaginationAssembler,
    ranker: SearchRanker,
}

impl CommentService {
    pub fn new(store: Arc<dyn CommentStore>, users: Arc<dyn UserDirectory>) -> Self {
        Self {
            ranker: SearchRanker::new(store.clone()),
            pagination: PaginationAssembler::new(),
            store,
            users,
        }
    }

    /// Active comment by id
    pub async fn get(&self, id: CommentId) -> Result<CommentResponse> {
        self.get_in(View::Active, id).await
    }

    /// Archived comment by id
    pub async fn get_from_archive(&self, id: CommentId) -> Result<CommentResponse> {
        self.get_in(View::Archived, id).await
    }

    /// Active comment by id, which must also belong to `news_id`
    pub async fn get_by_news(&self, id: CommentId, news_id: NewsId) -> Result<CommentResponse> {
        self.store
            .find_by_id_and_news(id, news_id, View::Active)
            .await?
            .map(CommentResponse::from)
            .ok_or_else(|| CommentError::not_found(id))
    }

    async fn get_in(&self, view: View, id: CommentId) -> Result<CommentResponse> {
        let found = self.store.find_by_id(id).await?;
        view.require(id, found).map(CommentResponse::from)
    }

    pub async fn list(
        &self,
        page_size: usize,
        number_page: usize,
    ) -> Result<PaginationResponse<CommentResponse>> {
        self.list_view(View::Active, None, page_size, number_page)
            .await
    }

    pub async fn list_archived(
        &self,
        page_size: usize,
        number_page: usize,
    ) -> Result<PaginationResponse<CommentResponse>> {
        self.list_view(View::Archived, None, page_size, number_page)
            .await
    }

    pub async fn list_by_news(
        &self,
        news_id: NewsId,
        page_size: usize,
        number_page: usize,
    ) -> Result<PaginationResponse<CommentResponse>> {
        self.list_view(View::Active, Some(news_id), page_size, number_page)
            .await
    }

    pub async fn list_archived_by_news(
        &self,
        news_id: NewsId,
        page_size: usize,
        number_page: usize,
    ) -> Result<PaginationResponse<CommentResponse>> {
        self.list_view(View::Archived, Some(news_id), page_size, number_page)
            .await
    }

    /// One page of `view`, optionally narrowed to a news item
    pub async fn list_view(
        &self,
        view: View,
        news_id: Option<NewsId>,
        page_size: usize,
        number_page: usize,
    ) -> Result<PaginationResponse<CommentResponse>> {
        let request = self.pagination.request(page_size, number_page)?;
        let page = self.store.find_page(view, news_id, request).await?;
        Ok(self
            .pagination
            .assemble(number_page, page, CommentResponse::from))
    }

    pub async fn create(&self, request: &CommentRequest) -> Result<CommentResponse> {
        if let Err(e) = validate::comment_request(request) {
            warn!("Rejected new comment for news {}: {}", request.news_id, e);
            return Err(e);
        }

        let user = self.resolve_user(request).await?;
        let stored = self
            .store
            .insert(NewComment {
                text: request.text.clone(),
                user,
                news_id: request.news_id,
            })
            .await?;

        info!("Created comment {} for news {}", stored.id, stored.news_id);
        Ok(CommentResponse::from(stored))
    }

    /// Replace the text of an active comment. Owner and news item are left untouched.
    pub async fn update(&self, id: CommentId, request: &CommentRequest) -> Result<CommentResponse> {
        if let Err(e) = validate::comment_request(request) {
            warn!("Rejected update of comment {}: {}", id, e);
            return Err(e);
        }

        let mut comment = View::Active.require(id, self.store.find_by_id(id).await?)?;
        comment.text = request.text.clone();
        let saved = self.store.save(comment).await?;

        info!("Updated comment {}", id);
        Ok(CommentResponse::from(saved))
    }

    /// Move a comment to the archive. Archiving an archived comment is a no-op.
    pub async fn archive(&self, id: CommentId) -> Result<()> {
        let mut comment = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CommentError::not_found(id))?;

        if comment.archive() {
            self.store.save(comment).await?;
            info!("Archived comment {}", id);
        }
        Ok(())
    }

    /// Archive every active comment of a news item; returns the ids that changed
    pub async fn archive_by_news(&self, news_id: NewsId) -> Result<Vec<CommentId>> {
        let archived = self.store.archive_by_news(news_id).await?;
        info!("Archived {} comment(s) of news {}", archived.len(), news_id);
        Ok(archived)
    }

    pub async fn search(
        &self,
        query: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<CommentResponse>> {
        if let Err(e) = validate::search_window(offset, limit) {
            warn!("Rejected search {:?}: {}", query, e);
            return Err(e);
        }
        self.ranker.search(query, offset, limit).await
    }

    /// Existing users keep their stored name
    async fn resolve_user(&self, request: &CommentRequest) -> Result<User> {
        match self.users.find_by_uuid(request.user.uuid).await? {
            Some(user) => Ok(user),
            None => self.users.create(&request.user).await,
        }
    }
}
