//! # Rank Engine
//!
//! Two independent importance measures:
//!
//! - [`pagerank`]: iterative fixed-point propagation over the directed,
//!   relation-labeled adjacency view ([`RankGraph`]) projected from a
//!   `Network`.
//! - [`ImportanceCriterion`]: direct scoring of posts from their raw
//!   engagement counters (views, comments, or both).
//!
//! Both are pure reads of the entity model; neither mutates anything.

pub mod pagerank;
pub mod importance;

pub use pagerank::{pagerank, RankConfig};
pub use importance::ImportanceCriterion;

use hashbrown::HashMap;

use crate::graph::NodeRef;
use crate::model::Network;

/// Relation label on a directed rank-adjacency entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// user → post the user viewed
    Viewed,
    /// user → post the user commented on
    Commented,
    /// post → its authoring user
    Authored,
}

/// Directed adjacency view for rank propagation: node → ordered list of
/// (relation, neighbor) out-entries.
///
/// Unlike the undirected [`Graph`](crate::Graph), this view keeps relation
/// direction and repetition: a user who viewed a post twice has two `Viewed`
/// out-entries, and out-degree counts both.
#[derive(Debug, Clone, Default)]
pub struct RankGraph {
    nodes: Vec<NodeRef>,
    index: HashMap<NodeRef, usize>,
    out: Vec<Vec<(Relation, usize)>>,
}

impl RankGraph {
    /// Project the rank adjacency from the entity model. Per node:
    /// users point at every post they viewed or commented on; posts point
    /// back at their author. Follow connections carry no rank flow.
    pub fn project(net: &Network) -> Self {
        let mut g = Self::default();

        for user in net.users() {
            g.intern(NodeRef::user(&user.username));
        }
        for post in net.posts() {
            g.intern(NodeRef::post(post.id));
        }

        for user in net.users() {
            let u = g.index[&NodeRef::user(&user.username)];
            for &post in &user.views {
                let p = g.index[&NodeRef::post(post)];
                g.out[u].push((Relation::Viewed, p));
            }
        }
        for post in net.posts() {
            let p = g.index[&NodeRef::post(post.id)];
            for comment in &post.comments {
                let u = g.index[&NodeRef::user(&comment.author)];
                g.out[u].push((Relation::Commented, p));
            }
            let author = g.index[&NodeRef::user(&post.author)];
            g.out[p].push((Relation::Authored, author));
        }

        g
    }

    fn intern(&mut self, id: NodeRef) -> usize {
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.index.insert(id.clone(), idx);
        self.nodes.push(id);
        self.out.push(Vec::new());
        idx
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Out-degree of the node at `idx`, counting repeated entries.
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out[idx].len()
    }

    pub fn nodes(&self) -> &[NodeRef] {
        &self.nodes
    }

    pub(crate) fn out_entries(&self, idx: usize) -> &[(Relation, usize)] {
        &self.out[idx]
    }

    /// Manually add an out-entry; used to build adjacency views that do not
    /// come from a `Network`.
    pub fn add_entry(&mut self, from: NodeRef, relation: Relation, to: NodeRef) {
        let f = self.intern(from);
        let t = self.intern(to);
        self.out[f].push((relation, t));
    }
}
