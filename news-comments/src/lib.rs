//! Comments on news items
//!
//! Point reads and mutations run through a cache-aside [`ConsistencyGuard`];
//! listings and relevance search read the backing store directly and only
//! ever show active comments unless the archive view is asked for.

pub mod api;
pub mod archive;
pub mod comments;
pub mod config;
pub mod error;
pub mod guard;
pub mod model;
pub mod pagination;
pub mod search;
pub mod service;
pub mod store;
pub mod users;
pub mod validate;

pub use api::ApiServer;
pub use archive::{ArchiveState, View};
pub use comments::Comments;
pub use config::AppConfig;
pub use error::{CommentError, Result};
pub use guard::ConsistencyGuard;
pub use model::{
    Comment, CommentId, CommentRequest, CommentResponse, NewsId, User, UserRequest, UserResponse,
};
pub use pagination::{PaginationAssembler, PaginationResponse};
pub use search::{CommentIndex, SearchRanker};
pub use service::CommentService;
pub use store::{CommentStore, InMemoryCommentStore, Page, PageRequest};
pub use users::{InMemoryUserDirectory, UserDirectory};
