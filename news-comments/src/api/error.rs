//! Mapping of comment errors onto HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::error::CommentError;

/// Error body returned for every failed request
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_message: String,
    pub error_code: u16,
}

impl CommentError {
    pub fn status(&self) -> StatusCode {
        match self {
            CommentError::NotFound { .. } => StatusCode::NOT_FOUND,
            CommentError::Validation(_) => StatusCode::BAD_REQUEST,
            CommentError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CommentError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            warn!("Request rejected: {}", self);
        }

        let body = ErrorResponse {
            error_message: self.to_string(),
            error_code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}
