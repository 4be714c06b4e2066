//! Comment entities and their wire projections

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Store-assigned comment identity
pub type CommentId = i64;

/// Identity of the news item a comment belongs to
pub type NewsId = i64;

/// Owner of one or more comments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub uuid: Uuid,
    pub user_name: String,
}

/// Authoritative comment record as held by the backing store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    /// Creation time, assigned once by the store
    pub time: NaiveDateTime,
    pub text: String,
    pub user: User,
    pub archived: bool,
    pub news_id: NewsId,
}

/// A comment that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub text: String,
    pub user: User,
    pub news_id: NewsId,
}

/// Inbound user reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub uuid: Uuid,
    pub user_name: String,
}

/// Inbound payload for create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub text: String,
    pub user: UserRequest,
    pub news_id: NewsId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub uuid: Uuid,
    pub user_name: String,
}

/// Read-only projection handed to callers and kept in the cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: CommentId,
    #[serde(with = "time_format")]
    pub time: NaiveDateTime,
    pub text: String,
    pub user: UserResponse,
    pub news_id: NewsId,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            uuid: user.uuid,
            user_name: user.user_name.clone(),
        }
    }
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            time: comment.time,
            text: comment.text.clone(),
            user: UserResponse::from(&comment.user),
            news_id: comment.news_id,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

/// Millisecond-precision local timestamp, e.g. `2024-01-31T10:15:30.123`
mod time_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
