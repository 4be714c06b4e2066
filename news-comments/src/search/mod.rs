//! Relevance search over comments
//!
//! Keyword search uses Tantivy BM25 with per-field boosts; the ranker turns
//! index hits into active-view responses.

pub mod index;
pub mod ranker;

pub use index::CommentIndex;
pub use ranker::SearchRanker;
