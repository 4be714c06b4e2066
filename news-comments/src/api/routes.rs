//! API routes for the comment service

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use super::extract::{ApiJson, ApiPath, ApiQuery};
use crate::comments::Comments;
use crate::error::CommentError;
use crate::model::{CommentId, CommentRequest, NewsId};

/// Application state
pub struct AppState {
    pub comments: Arc<Comments>,
}

type ApiResult<T> = Result<T, CommentError>;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub cache: CacheHealth,
}

/// Comment cache snapshot reported by the health check
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheHealth {
    pub entries: usize,
    pub hit_rate: f64,
}

/// Paging query parameters, 1-based
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_number_page")]
    pub number_page: usize,
}

fn default_page_size() -> usize {
    15
}

fn default_number_page() -> usize {
    1
}

/// Search query parameters; all three are required
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub search: String,
    pub offset: usize,
    pub limit: usize,
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let stats = state.comments.cache_stats();
    debug!("{}", stats);
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        cache: CacheHealth {
            entries: stats.entries,
            hit_rate: stats.hit_rate(),
        },
    })
}

pub async fn get_comment(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<CommentId>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.comments.get(id).await?))
}

pub async fn get_comment_by_news(
    State(state): State<Arc<AppState>>,
    ApiPath((id, news_id)): ApiPath<(CommentId, NewsId)>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.comments.get_by_news(id, news_id).await?))
}

pub async fn get_archived_comment(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<CommentId>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.comments.get_from_archive(id).await?))
}

pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    ApiQuery(page): ApiQuery<PageParams>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(
        state
            .comments
            .list(page.page_size, page.number_page)
            .await?,
    ))
}

pub async fn list_archived_comments(
    State(state): State<Arc<AppState>>,
    ApiQuery(page): ApiQuery<PageParams>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(
        state
            .comments
            .list_archived(page.page_size, page.number_page)
            .await?,
    ))
}

pub async fn list_news_comments(
    State(state): State<Arc<AppState>>,
    ApiPath(news_id): ApiPath<NewsId>,
    ApiQuery(page): ApiQuery<PageParams>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(
        state
            .comments
            .list_by_news(news_id, page.page_size, page.number_page)
            .await?,
    ))
}

pub async fn list_archived_news_comments(
    State(state): State<Arc<AppState>>,
    ApiPath(news_id): ApiPath<NewsId>,
    ApiQuery(page): ApiQuery<PageParams>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(
        state
            .comments
            .list_archived_by_news(news_id, page.page_size, page.number_page)
            .await?,
    ))
}

pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<CommentRequest>,
) -> ApiResult<impl IntoResponse> {
    let created = state.comments.create(&request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_comment(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<CommentId>,
    ApiJson(request): ApiJson<CommentRequest>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.comments.update(id, &request).await?))
}

pub async fn archive_comment(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<CommentId>,
) -> ApiResult<StatusCode> {
    state.comments.archive(id).await?;
    Ok(StatusCode::OK)
}

pub async fn archive_news_comments(
    State(state): State<Arc<AppState>>,
    ApiPath(news_id): ApiPath<NewsId>,
) -> ApiResult<StatusCode> {
    state.comments.archive_by_news(news_id).await?;
    Ok(StatusCode::OK)
}

pub async fn search_comments(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(
        state
            .comments
            .search(&params.search, params.offset, params.limit)
            .await?,
    ))
}
