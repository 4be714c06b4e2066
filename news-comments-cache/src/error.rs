//! Error types for cache construction
//!
//! Cache operations themselves are infallible; errors only surface while
//! validating configuration and building caches.

use thiserror::Error;

/// Main error type for the cache crate
#[derive(Error, Debug)]
pub enum CacheError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Unknown eviction policy name
    #[error("Unknown eviction policy: {0}")]
    UnknownPolicy(String),
}

/// Result type alias for cache operations
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CacheError::ConfigError("capacity must be greater than 0".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: capacity must be greater than 0"
        );

        let error = CacheError::UnknownPolicy("mru".to_string());
        assert!(error.to_string().contains("mru"));
    }
}
