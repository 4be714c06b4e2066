//! Backing store abstraction for comments
//!
//! The store is the source of truth. Every read path above it (cache, views,
//! search) resolves back to records held here.

pub mod memory;

pub use memory::InMemoryCommentStore;

use crate::archive::View;
use crate::error::Result;
use crate::model::{Comment, CommentId, NewComment, NewsId};
use async_trait::async_trait;

/// Zero-based page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub index: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(index: usize, size: usize) -> Self {
        Self { index, size }
    }

    pub fn offset(&self) -> usize {
        self.index.saturating_mul(self.size)
    }
}

/// One slice of a filtered listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total_rows: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Cut `request`'s window out of the full filtered set
    pub fn slice(all: Vec<T>, request: PageRequest) -> Self {
        let total_rows = all.len();
        let total_pages = if request.size == 0 {
            0
        } else {
            total_rows.div_ceil(request.size)
        };
        let rows = all
            .into_iter()
            .skip(request.offset())
            .take(request.size)
            .collect();

        Self {
            rows,
            total_rows,
            total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            rows: self.rows.into_iter().map(f).collect(),
            total_rows: self.total_rows,
            total_pages: self.total_pages,
        }
    }
}

#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Look up a comment regardless of its archive state
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>>;

    /// Look up a comment that belongs to `news_id` and is visible in `view`
    async fn find_by_id_and_news(
        &self,
        id: CommentId,
        news_id: NewsId,
        view: View,
    ) -> Result<Option<Comment>>;

    /// List comments in `view`, optionally narrowed to one news item, ordered by id
    async fn find_page(
        &self,
        view: View,
        news_id: Option<NewsId>,
        request: PageRequest,
    ) -> Result<Page<Comment>>;

    /// Persist a new comment; the store assigns id and time
    async fn insert(&self, comment: NewComment) -> Result<Comment>;

    /// Overwrite an existing comment
    async fn save(&self, comment: Comment) -> Result<Comment>;

    /// Archive every active comment of `news_id`; returns the ids that changed state
    async fn archive_by_news(&self, news_id: NewsId) -> Result<Vec<CommentId>>;

    /// Relevance-ranked records for `query`, in either archive state
    async fn search(&self, query: &str, offset: usize, limit: usize) -> Result<Vec<Comment>>;
}
