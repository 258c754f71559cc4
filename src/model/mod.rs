//! # Entity Model
//!
//! The records that define the social network: `User`, `Post`, `Comment`,
//! and the `Network` registry that owns them all.
//!
//! Design rule: entities hold only identifiers, never references to each
//! other. Every cross-reference resolves through the `Network`, so there
//! are no ownership cycles. This module is pure data — no I/O, no async.

pub mod user;
pub mod post;
pub mod network;

pub use user::User;
pub use post::{Post, PostId, Comment, CommentId};
pub use network::Network;
