use crate::archive::View;
use crate::error::Result;
use crate::model::CommentResponse;
use crate::store::CommentStore;
use std::sync::Arc;
use tracing::debug;

/// Ranked free-text search restricted to active comments
///
/// The `offset`/`limit` window is applied to the ranked hits before archived
/// records are filtered out, so a page may hold fewer than `limit` results.
pub struct SearchRanker {
    store: Arc<dyn CommentStore>,
}

impl SearchRanker {
    pub fn new(store: Arc<dyn CommentStore>) -> Self {
        Self { store }
    }

    pub async fn search(
        &self,
        query: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<CommentResponse>> {
        let ranked = self.store.search(query, offset, limit).await?;
        let fetched = ranked.len();

        let results: Vec<CommentResponse> = ranked
            .into_iter()
            .filter(|comment| View::Active.admits(comment))
            .map(CommentResponse::from)
            .collect();

        debug!(
            "Search {:?} (offset {}, limit {}): {} ranked, {} active",
            query,
            offset,
            limit,
            fetched,
            results.len()
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchSettings;
    use crate::model::{NewComment, User};
    use crate::store::InMemoryCommentStore;
    use uuid::Uuid;

    async fn seeded() -> Arc<InMemoryCommentStore> {
        let store = Arc::new(InMemoryCommentStore::new(&SearchSettings::default()).unwrap());
        for (text, news_id) in [
            ("budget debate in parliament", 1),
            ("budget cuts announced", 1),
            ("budget surplus expected", 1),
            ("budget leak investigated", 2),
            ("budget vote delayed", 2),
            ("sports roundup", 1),
        ] {
            store
                .insert(NewComment {
                    text: text.to_string(),
                    user: User {
                        id: 1,
                        uuid: Uuid::new_v4(),
                        user_name: "kim".to_string(),
                    },
                    news_id,
                })
                .await
                .unwrap();
        }
        store.archive_by_news(2).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_only_active_results() {
        let ranker = SearchRanker::new(seeded().await);

        let results = ranker.search("budget", 0, 10).await.unwrap();

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.news_id == 1));
    }

    #[tokio::test]
    async fn test_window_applies_before_filtering() {
        let ranker = SearchRanker::new(seeded().await);

        let results = ranker.search("budget", 0, 3).await.unwrap();
        assert!(results.len() <= 3);
        assert!(results.iter().all(|r| r.news_id == 1));
    }

    #[tokio::test]
    async fn test_zero_limit_and_no_match() {
        let ranker = SearchRanker::new(seeded().await);

        assert!(ranker.search("budget", 0, 0).await.unwrap().is_empty());
        assert!(ranker.search("zebra", 0, 10).await.unwrap().is_empty());
    }
}
