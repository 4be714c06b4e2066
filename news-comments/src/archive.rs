//! Two-state comment lifecycle and the read views derived from it
//!
//! A comment starts `Active` and may move to `Archived` exactly once; there is
//! no way back. Every point read and listing is scoped to one view, and a
//! record outside the requested view is reported exactly like a missing one.

use crate::error::{CommentError, Result};
use crate::model::{Comment, CommentId};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveState {
    Active,
    Archived,
}

/// Read-time partition of comments by their archive flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Active,
    Archived,
}

impl View {
    /// Whether `comment` is visible in this view
    pub fn admits(self, comment: &Comment) -> bool {
        match self {
            View::Active => !comment.archived,
            View::Archived => comment.archived,
        }
    }

    /// View-scoped existence check for a point lookup
    pub fn require(self, id: CommentId, found: Option<Comment>) -> Result<Comment> {
        found
            .filter(|comment| self.admits(comment))
            .ok_or_else(|| CommentError::not_found(id))
    }
}

impl Comment {
    pub fn state(&self) -> ArchiveState {
        if self.archived {
            ArchiveState::Archived
        } else {
            ArchiveState::Active
        }
    }

    /// Apply `Active -> Archived`. Returns `false` if already archived.
    pub fn archive(&mut self) -> bool {
        match self.state() {
            ArchiveState::Active => {
                self.archived = true;
                true
            }
            ArchiveState::Archived => false,
        }
    }
}
