//! The `Network` registry — central owner of all entities.
//!
//! Every cross-reference in the model (author of a post, members of a
//! follow edge, viewer of a post) is an identifier resolved through this
//! registry. Mutation goes through explicit append operations that verify
//! the referenced entities exist and then push — appends never deduplicate,
//! so repeated calls create repeated relation entries.
//!
//! Iteration order over users and posts is insertion order, which keeps
//! every downstream projection (graph build, rank adjacency, filter
//! selection) deterministic for a fixed construction sequence.

use chrono::{DateTime, Utc};
use hashbrown::HashMap;
use tracing::debug;

use crate::rank::RankGraph;
use crate::{Error, Result};
use super::{Comment, CommentId, Post, PostId, User};

/// In-memory registry of users and posts.
#[derive(Debug, Default, Clone)]
pub struct Network {
    users: HashMap<String, User>,
    user_order: Vec<String>,
    posts: HashMap<PostId, Post>,
    post_order: Vec<PostId>,
    next_post_id: u64,
    next_comment_id: u64,
}

impl Network {
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
            user_order: Vec::new(),
            posts: HashMap::new(),
            post_order: Vec::new(),
            next_post_id: 1,
            next_comment_id: 1,
        }
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register a new user. Usernames are unique.
    pub fn add_user(
        &mut self,
        username: impl Into<String>,
        real_name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<()> {
        let username = username.into();
        if self.users.contains_key(&username) {
            return Err(Error::DuplicateUser(username));
        }
        let user = User::new(username.clone(), real_name, age, gender, location);
        self.user_order.push(username.clone());
        self.users.insert(username, user);
        Ok(())
    }

    /// Create a post authored by `author`, timestamped now.
    pub fn add_post(&mut self, author: &str, content: impl Into<String>) -> Result<PostId> {
        self.add_post_at(author, content, Utc::now())
    }

    /// Create a post with an explicit creation timestamp.
    pub fn add_post_at(
        &mut self,
        author: &str,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<PostId> {
        let user = self
            .users
            .get_mut(author)
            .ok_or_else(|| Error::UserNotFound(author.to_string()))?;

        let id = PostId(self.next_post_id);
        self.next_post_id += 1;

        user.posts.push(id);
        self.post_order.push(id);
        self.posts.insert(id, Post::new(id, author, content, created_at));
        Ok(id)
    }

    // ========================================================================
    // Relation appends
    // ========================================================================

    /// Record that `username` follows `other`. Directed; the graph
    /// projection traverses it as undirected.
    pub fn add_connection(&mut self, username: &str, other: &str) -> Result<()> {
        if !self.users.contains_key(other) {
            return Err(Error::UserNotFound(other.to_string()));
        }
        let user = self
            .users
            .get_mut(username)
            .ok_or_else(|| Error::UserNotFound(username.to_string()))?;
        user.connections.push(other.to_string());
        Ok(())
    }

    /// Record a comment by `author` on `post`, timestamped now.
    /// Recorded on both the post and the commenting user.
    pub fn add_comment(
        &mut self,
        post: PostId,
        author: &str,
        content: impl Into<String>,
    ) -> Result<CommentId> {
        self.add_comment_at(post, author, content, Utc::now())
    }

    /// Record a comment with an explicit creation timestamp.
    pub fn add_comment_at(
        &mut self,
        post: PostId,
        author: &str,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<CommentId> {
        if !self.posts.contains_key(&post) {
            return Err(Error::PostNotFound(post));
        }
        let user = self
            .users
            .get_mut(author)
            .ok_or_else(|| Error::UserNotFound(author.to_string()))?;

        let id = CommentId(self.next_comment_id);
        self.next_comment_id += 1;

        user.comments.push(id);
        let entry = self.posts.get_mut(&post).ok_or(Error::PostNotFound(post))?;
        entry.comments.push(Comment {
            id,
            author: author.to_string(),
            content: content.into(),
            created_at,
        });
        Ok(id)
    }

    /// Record that `viewer` viewed `post`. Recorded on both sides.
    pub fn add_view(&mut self, post: PostId, viewer: &str) -> Result<()> {
        if !self.posts.contains_key(&post) {
            return Err(Error::PostNotFound(post));
        }
        let user = self
            .users
            .get_mut(viewer)
            .ok_or_else(|| Error::UserNotFound(viewer.to_string()))?;
        user.views.push(post);
        let entry = self.posts.get_mut(&post).ok_or(Error::PostNotFound(post))?;
        entry.viewers.push(viewer.to_string());
        Ok(())
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn user(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.get(&id)
    }

    /// Users in registration order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.user_order.iter().map(|name| &self.users[name])
    }

    /// Posts in creation order.
    pub fn posts(&self) -> impl Iterator<Item = &Post> {
        self.post_order.iter().map(|id| &self.posts[id])
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    /// Project the directed, relation-labeled adjacency view that rank
    /// propagation runs over.
    pub fn rank_graph(&self) -> RankGraph {
        let g = RankGraph::project(self);
        debug!(nodes = g.node_count(), "projected rank adjacency");
        g
    }
}
