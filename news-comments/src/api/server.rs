//! API server for the comment service

use anyhow::Result;
use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::comments::Comments;

use super::routes::{
    archive_comment, archive_news_comments, create_comment, get_archived_comment, get_comment,
    get_comment_by_news, health_check, list_archived_comments, list_archived_news_comments,
    list_comments, list_news_comments, search_comments, update_comment, AppState,
};

/// Configuration for the API server
pub struct ApiServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Build the comment router over `comments`
pub fn router(comments: Arc<Comments>) -> Router {
    let app_state = Arc::new(AppState { comments });

    Router::new()
        .route("/health", get(health_check))
        .route("/comments", get(list_comments).post(create_comment))
        .route("/comments/search", get(search_comments))
        .route("/comments/archive", get(list_archived_comments))
        .route("/comments/archive/:id", get(get_archived_comment))
        .route(
            "/comments/archive/news/:news_id",
            get(list_archived_news_comments),
        )
        .route(
            "/comments/news/:news_id",
            get(list_news_comments).patch(archive_news_comments),
        )
        .route(
            "/comments/:id",
            get(get_comment).put(update_comment).patch(archive_comment),
        )
        .route("/comments/:id/news/:news_id", get(get_comment_by_news))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// API server
pub struct ApiServer {
    config: ApiServerConfig,
    comments: Arc<Comments>,
}

impl ApiServer {
    /// Create a new API server with configuration
    pub fn new(config: ApiServerConfig, comments: Arc<Comments>) -> Self {
        Self { config, comments }
    }

    /// Bind the configured address and serve until shutdown
    pub async fn start(self) -> Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(&addr).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        info!("Starting API server on {}", listener.local_addr()?);

        let app = router(self.comments);
        axum::serve(listener, app).await?;

        Ok(())
    }
}
