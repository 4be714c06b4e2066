//! Request validation, applied before any cache or store access

use crate::error::{CommentError, Result};
use crate::model::CommentRequest;

/// Longest accepted comment text, in characters
pub const MAX_TEXT_LEN: usize = 500;

/// Largest search window a single request may ask for
pub const MAX_SEARCH_LIMIT: usize = 1_000;

pub fn comment_request(request: &CommentRequest) -> Result<()> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(CommentError::Validation("text must not be blank".to_string()));
    }

    let len = request.text.chars().count();
    if len > MAX_TEXT_LEN {
        return Err(CommentError::Validation(format!(
            "text must be between 1 and {} characters, got {}",
            MAX_TEXT_LEN, len
        )));
    }

    Ok(())
}

pub fn page_request(page_size: usize, number_page: usize) -> Result<()> {
    if page_size < 1 {
        return Err(CommentError::Validation(
            "pageSize must be at least 1".to_string(),
        ));
    }
    if number_page < 1 {
        return Err(CommentError::Validation(
            "numberPage must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Bound a search window before it reaches the index
pub fn search_window(offset: usize, limit: usize) -> Result<()> {
    if limit > MAX_SEARCH_LIMIT {
        return Err(CommentError::Validation(format!(
            "limit must be at most {}, got {}",
            MAX_SEARCH_LIMIT, limit
        )));
    }
    if offset.checked_add(limit).is_none() {
        return Err(CommentError::Validation(format!(
            "offset {} is out of range",
            offset
        )));
    }
    Ok(())
}
