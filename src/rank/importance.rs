//! Post importance scoring from raw engagement counters.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::model::{Network, Post, PostId};

/// Which engagement counters define a post's importance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportanceCriterion {
    Views,
    Comments,
    /// Views + comments. The default, and the fallback for any criterion
    /// string this library does not recognize.
    #[default]
    Blended,
}

impl ImportanceCriterion {
    /// Parse a criterion string from a presentation collaborator.
    /// Unrecognized input falls back to [`ImportanceCriterion::Blended`]
    /// rather than erroring.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "views" => Self::Views,
            "comments" => Self::Comments,
            _ => Self::Blended,
        }
    }

    /// Importance score of one post under this criterion.
    pub fn score(&self, post: &Post) -> usize {
        match self {
            Self::Views => post.view_count(),
            Self::Comments => post.comment_count(),
            Self::Blended => post.view_count() + post.comment_count(),
        }
    }

    /// Score every post in the network.
    pub fn score_all(&self, net: &Network) -> HashMap<PostId, usize> {
        net.posts().map(|p| (p.id, self.score(p))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post_with(views: usize, comments: usize) -> Post {
        let mut p = Post::new(PostId(1), "ada", "hello", Utc::now());
        for i in 0..views {
            p.viewers.push(format!("viewer{i}"));
        }
        for i in 0..comments {
            p.comments.push(crate::model::Comment {
                id: crate::model::CommentId(i as u64),
                author: format!("commenter{i}"),
                content: "!".into(),
                created_at: Utc::now(),
            });
        }
        p
    }

    #[test]
    fn blended_is_exact_sum() {
        let p = post_with(3, 2);
        assert_eq!(ImportanceCriterion::Views.score(&p), 3);
        assert_eq!(ImportanceCriterion::Comments.score(&p), 2);
        assert_eq!(ImportanceCriterion::Blended.score(&p), 5);
    }

    #[test]
    fn unrecognized_criterion_falls_back_to_blended() {
        assert_eq!(ImportanceCriterion::parse("views"), ImportanceCriterion::Views);
        assert_eq!(ImportanceCriterion::parse("Comments"), ImportanceCriterion::Comments);
        assert_eq!(ImportanceCriterion::parse("likes"), ImportanceCriterion::Blended);
        assert_eq!(ImportanceCriterion::parse(""), ImportanceCriterion::Blended);
    }
}
