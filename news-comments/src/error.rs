//! Error types for comment operations

use crate::model::CommentId;
use thiserror::Error;

/// Main error type for comment operations
#[derive(Error, Debug)]
pub enum CommentError {
    /// No comment with this id exists in the requested view
    #[error("Comment with id {id} is not found")]
    NotFound { id: CommentId },

    /// Malformed request payload or paging arguments
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backing store or search index failure
    #[error("Store error: {0}")]
    Store(String),
}

/// Result type alias for comment operations
pub type Result<T> = std::result::Result<T, CommentError>;

impl CommentError {
    pub fn not_found(id: CommentId) -> Self {
        CommentError::NotFound { id }
    }
}

impl From<tantivy::TantivyError> for CommentError {
    fn from(e: tantivy::TantivyError) -> Self {
        CommentError::Store(e.to_string())
    }
}
