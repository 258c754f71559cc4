//! User selection criteria — a conjunction of optional bounds.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::User;

/// Range and exact-match predicates over a user's attributes. Every field
/// is optional; an unset field imposes no constraint, set fields are ANDed.
/// Bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCriteria {
    pub min_posts: Option<usize>,
    pub max_posts: Option<usize>,
    pub min_comments: Option<usize>,
    pub max_comments: Option<usize>,
    pub gender: Option<String>,
}

impl UserCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_posts(mut self, n: usize) -> Self {
        self.min_posts = Some(n);
        self
    }

    pub fn with_max_posts(mut self, n: usize) -> Self {
        self.max_posts = Some(n);
        self
    }

    pub fn with_min_comments(mut self, n: usize) -> Self {
        self.min_comments = Some(n);
        self
    }

    pub fn with_max_comments(mut self, n: usize) -> Self {
        self.max_comments = Some(n);
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Whether one user satisfies every set bound.
    pub fn matches(&self, user: &User) -> bool {
        if self.min_posts.is_some_and(|n| user.post_count() < n) {
            return false;
        }
        if self.max_posts.is_some_and(|n| user.post_count() > n) {
            return false;
        }
        if self.min_comments.is_some_and(|n| user.comment_count() < n) {
            return false;
        }
        if self.max_comments.is_some_and(|n| user.comment_count() > n) {
            return false;
        }
        if self.gender.as_deref().is_some_and(|g| user.gender != g) {
            return false;
        }
        true
    }

    /// The ordered subset of `users` passing every set bound. Pure; input
    /// order is preserved.
    pub fn select<'a>(&self, users: impl IntoIterator<Item = &'a User>) -> Vec<&'a User> {
        let selected: Vec<&User> = users.into_iter().filter(|u| self.matches(u)).collect();
        debug!(selected = selected.len(), "user selection");
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Network;

    fn net() -> Network {
        let mut net = Network::new();
        net.add_user("ada", "Ada Lovelace", 28, "F", "London").unwrap();
        net.add_user("alan", "Alan Turing", 31, "M", "Manchester").unwrap();
        net.add_user("grace", "Grace Hopper", 37, "F", "New York").unwrap();
        let p = net.add_post("ada", "engines").unwrap();
        net.add_post("ada", "more engines").unwrap();
        net.add_comment(p, "grace", "compile it").unwrap();
        net
    }

    #[test]
    fn empty_criteria_select_everyone_in_order() {
        let net = net();
        let all = UserCriteria::new().select(net.users());
        let names: Vec<&str> = all.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["ada", "alan", "grace"]);
    }

    #[test]
    fn bounds_are_inclusive_and_anded() {
        let net = net();
        let sel = UserCriteria::new()
            .with_min_posts(2)
            .with_max_posts(2)
            .select(net.users());
        assert_eq!(sel.len(), 1);
        assert_eq!(sel[0].username, "ada");

        let none = UserCriteria::new()
            .with_min_posts(2)
            .with_gender("M")
            .select(net.users());
        assert!(none.is_empty());
    }

    #[test]
    fn comment_bound_selects_commenters() {
        let net = net();
        let sel = UserCriteria::new().with_min_comments(1).select(net.users());
        let names: Vec<&str> = sel.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["grace"]);
    }
}
