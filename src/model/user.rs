//! User record — identity, display attributes, and owned relation lists.

use serde::{Deserialize, Serialize};
use super::{CommentId, PostId};

/// A member of the network.
///
/// Attributes are immutable after creation; the relation lists grow
/// monotonically through `Network`'s append operations and are never
/// deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub real_name: String,
    pub age: u32,
    pub gender: String,
    pub location: String,
    /// Usernames this user follows (directed, traversed as undirected).
    pub connections: Vec<String>,
    /// Posts authored by this user.
    pub posts: Vec<PostId>,
    /// Comments made by this user (on any post).
    pub comments: Vec<CommentId>,
    /// Posts this user has viewed.
    pub views: Vec<PostId>,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        real_name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            real_name: real_name.into(),
            age,
            gender: gender.into(),
            location: location.into(),
            connections: Vec::new(),
            posts: Vec::new(),
            comments: Vec::new(),
            views: Vec::new(),
        }
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    pub fn view_count(&self) -> usize {
        self.views.len()
    }
}
