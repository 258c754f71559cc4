//! Post and Comment records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque post identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostId(pub u64);

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque comment identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(pub u64);

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A post in the network.
///
/// The author is fixed at creation. Viewers and comments grow monotonically
/// and are never deduplicated — a user viewing twice is recorded twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    /// Username of the author. Must exist in the same `Network`.
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Usernames that viewed this post, in view order.
    pub viewers: Vec<String>,
    /// Comments on this post, owned exclusively here.
    pub comments: Vec<Comment>,
}

impl Post {
    pub fn new(
        id: PostId,
        author: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            content: content.into(),
            created_at,
            viewers: Vec::new(),
            comments: Vec::new(),
        }
    }

    pub fn view_count(&self) -> usize {
        self.viewers.len()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

/// A comment on a post. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    /// Username of the commenter. Must exist in the same `Network`.
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
