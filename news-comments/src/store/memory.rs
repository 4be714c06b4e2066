//! In-process comment store with a full-text index kept in step

use super::{CommentStore, Page, PageRequest};
use crate::archive::View;
use crate::config::SearchSettings;
use crate::error::{CommentError, Result};
use crate::model::{Comment, CommentId, NewComment, NewsId};
use crate::search::CommentIndex;
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Comment store backed by an ordered map and an in-RAM Tantivy index
pub struct InMemoryCommentStore {
    inner: RwLock<Inner>,
}

struct Inner {
    comments: BTreeMap<CommentId, Comment>,
    next_id: CommentId,
    last_time: Option<NaiveDateTime>,
    index: CommentIndex,
}

impl Inner {
    /// Creation timestamps never go backwards, even if the wall clock does
    fn stamp(&mut self) -> NaiveDateTime {
        let now = Utc::now().naive_utc();
        let time = match self.last_time {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_time = Some(time);
        time
    }
}

impl InMemoryCommentStore {
    pub fn new(settings: &SearchSettings) -> Result<Self> {
        info!("Initializing in-memory comment store");
        Ok(Self {
            inner: RwLock::new(Inner {
                comments: BTreeMap::new(),
                next_id: 1,
                last_time: None,
                index: CommentIndex::in_ram(settings)?,
            }),
        })
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.comments.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.comments.is_empty()
    }
}

#[async_trait]
impl CommentStore for InMemoryCommentStore {
    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>> {
        Ok(self.inner.read().await.comments.get(&id).cloned())
    }

    async fn find_by_id_and_news(
        &self,
        id: CommentId,
        news_id: NewsId,
        view: View,
    ) -> Result<Option<Comment>> {
        let inner = self.inner.read().await;
        Ok(inner
            .comments
            .get(&id)
            .filter(|comment| comment.news_id == news_id && view.admits(comment))
            .cloned())
    }

    async fn find_page(
        &self,
        view: View,
        news_id: Option<NewsId>,
        request: PageRequest,
    ) -> Result<Page<Comment>> {
        let inner = self.inner.read().await;
        let matching: Vec<Comment> = inner
            .comments
            .values()
            .filter(|comment| view.admits(comment))
            .filter(|comment| news_id.map_or(true, |news_id| comment.news_id == news_id))
            .cloned()
            .collect();

        Ok(Page::slice(matching, request))
    }

    async fn insert(&self, comment: NewComment) -> Result<Comment> {
        let mut inner = self.inner.write().await;

        let id = inner.next_id;
        let time = inner.stamp();
        let stored = Comment {
            id,
            time,
            text: comment.text,
            user: comment.user,
            archived: false,
            news_id: comment.news_id,
        };

        inner.index.index_comment(&stored)?;
        inner.index.commit()?;
        inner.next_id += 1;
        inner.comments.insert(id, stored.clone());

        debug!("Inserted comment {} for news {}", id, stored.news_id);
        Ok(stored)
    }

    async fn save(&self, comment: Comment) -> Result<Comment> {
        let mut inner = self.inner.write().await;
        if !inner.comments.contains_key(&comment.id) {
            return Err(CommentError::not_found(comment.id));
        }

        inner.index.index_comment(&comment)?;
        inner.index.commit()?;
        inner.comments.insert(comment.id, comment.clone());

        debug!("Saved comment {}", comment.id);
        Ok(comment)
    }

    async fn archive_by_news(&self, news_id: NewsId) -> Result<Vec<CommentId>> {
        let mut inner = self.inner.write().await;

        let archived: Vec<CommentId> = inner
            .comments
            .values_mut()
            .filter(|comment| comment.news_id == news_id)
            .filter_map(|comment| comment.archive().then_some(comment.id))
            .collect();

        debug!("Archived {} comment(s) of news {}", archived.len(), news_id);
        Ok(archived)
    }

    async fn search(&self, query: &str, offset: usize, limit: usize) -> Result<Vec<Comment>> {
        let inner = self.inner.read().await;
        let hits = inner.index.search(query, offset, limit)?;

        Ok(hits
            .into_iter()
            .filter_map(|(id, _score)| inner.comments.get(&id).cloned())
            .collect())
    }
}
