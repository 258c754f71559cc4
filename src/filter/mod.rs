//! # Filter Engine
//!
//! Pure predicate evaluation over users and posts. Every filter is an
//! explicit configuration struct with enumerated options — unset options
//! impose no constraint, set options are ANDed. Selection preserves the
//! input iteration order and never mutates the entity model.

pub mod criteria;
pub mod keywords;

pub use criteria::UserCriteria;
pub use keywords::{AudienceFilter, KeywordFilter, normalize_tokens};

use tracing::debug;

use crate::model::{Network, Post};

/// Select posts passing both the keyword filter (over post content) and the
/// audience filter (over the author's attributes), in creation order.
///
/// A post whose author is missing from the registry fails any non-empty
/// audience test; the build-time invariant makes that unreachable for
/// networks assembled through `Network`'s own operations.
pub fn select_posts<'a>(
    net: &'a Network,
    keywords: &KeywordFilter,
    audience: &AudienceFilter,
) -> Vec<&'a Post> {
    let selected: Vec<&Post> = net
        .posts()
        .filter(|post| {
            let author_ok = if audience.is_empty() {
                true
            } else {
                net.user(&post.author).is_some_and(|u| audience.passes(u))
            };
            author_ok && keywords.passes(&post.content)
        })
        .collect();
    debug!(total = net.post_count(), selected = selected.len(), "post selection");
    selected
}
