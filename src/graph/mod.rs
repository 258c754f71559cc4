//! # Graph Builder
//!
//! The undirected graph projected from a `Network`: typed nodes (user or
//! post) carrying display metadata, and deduplicated undirected edges for
//! every relation — follow connections, authorship, views, and comments.
//!
//! The graph is a disposable view. It is rebuilt in full from the entity
//! model on every call to [`Graph::build`]; there is no incremental update.
//! Node and adjacency iteration follow insertion order, so two builds from
//! the same network produce identical structures and deterministic
//! traversals.

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::model::{Network, PostId};

/// Default node color before any styling pass.
pub const COLOR_DEFAULT: &str = "blue";
/// Color for nodes promoted by a styling pass (high rank, highlighted user).
pub const COLOR_HIGHLIGHT: &str = "red";
/// Color for posts whose importance score clears the notability threshold.
pub const COLOR_NOTABLE: &str = "green";

const SIZE_DEFAULT: f64 = 100.0;
const SIZE_NOTABLE: f64 = 150.0;

// ============================================================================
// Node identity
// ============================================================================

/// Node type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    User,
    Post,
}

/// Graph node identity. Usernames and post ids are distinct keyspaces,
/// kept apart by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeRef {
    User(String),
    Post(PostId),
}

impl NodeRef {
    pub fn user(username: impl Into<String>) -> Self {
        NodeRef::User(username.into())
    }

    pub fn post(id: PostId) -> Self {
        NodeRef::Post(id)
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::User(_) => NodeKind::User,
            NodeRef::Post(_) => NodeKind::Post,
        }
    }

    /// Display identity, used as the default node label.
    pub fn label(&self) -> String {
        match self {
            NodeRef::User(name) => name.clone(),
            NodeRef::Post(id) => format!("post:{id}"),
        }
    }
}

impl std::fmt::Display for NodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeRef::User(name) => write!(f, "user:{name}"),
            NodeRef::Post(id) => write!(f, "post:{id}"),
        }
    }
}

// ============================================================================
// Graph
// ============================================================================

/// A node with its display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeRef,
    pub kind: NodeKind,
    pub color: String,
    pub size: f64,
    pub label: String,
}

impl GraphNode {
    fn new(id: NodeRef) -> Self {
        let kind = id.kind();
        let label = id.label();
        Self {
            id,
            kind,
            color: COLOR_DEFAULT.to_string(),
            size: SIZE_DEFAULT,
            label,
        }
    }
}

/// Undirected graph over user and post nodes.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    index: HashMap<NodeRef, usize>,
    /// Per-node neighbor indices, in edge insertion order.
    adjacency: Vec<SmallVec<[usize; 4]>>,
    /// Edge list as (smaller index, larger index) pairs, insertion order.
    edges: Vec<(usize, usize)>,
    edge_set: HashSet<(usize, usize)>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project the full graph from the entity model: one node per user and
    /// per post, one undirected edge per follow connection, authorship,
    /// view, and comment relation.
    pub fn build(net: &Network) -> Self {
        Self::build_highlighted(net, &HashSet::new())
    }

    /// Like [`Graph::build`], but user nodes named in `highlight` are
    /// colored [`COLOR_HIGHLIGHT`] — typically the output of a filter
    /// selection.
    pub fn build_highlighted(net: &Network, highlight: &HashSet<String>) -> Self {
        let mut g = Self::new();

        for user in net.users() {
            let idx = g.add_node(NodeRef::user(&user.username));
            if highlight.contains(&user.username) {
                g.nodes[idx].color = COLOR_HIGHLIGHT.to_string();
            }
        }
        for post in net.posts() {
            g.add_node(NodeRef::post(post.id));
        }

        for user in net.users() {
            for other in &user.connections {
                g.add_edge(&NodeRef::user(&user.username), &NodeRef::user(other));
            }
        }
        for post in net.posts() {
            let post_ref = NodeRef::post(post.id);
            g.add_edge(&NodeRef::user(&post.author), &post_ref);
            for viewer in &post.viewers {
                g.add_edge(&NodeRef::user(viewer), &post_ref);
            }
            for comment in &post.comments {
                g.add_edge(&NodeRef::user(&comment.author), &post_ref);
            }
        }

        debug!(nodes = g.node_count(), edges = g.edge_count(), "built graph");
        g
    }

    /// Add a node if absent; returns its index either way.
    pub fn add_node(&mut self, id: NodeRef) -> usize {
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.index.insert(id.clone(), idx);
        self.nodes.push(GraphNode::new(id));
        self.adjacency.push(SmallVec::new());
        idx
    }

    /// Add an undirected edge, creating endpoints as needed. Re-adding an
    /// existing edge is idempotent.
    pub fn add_edge(&mut self, a: &NodeRef, b: &NodeRef) {
        let ia = self.add_node(a.clone());
        let ib = self.add_node(b.clone());
        let key = (ia.min(ib), ia.max(ib));
        if !self.edge_set.insert(key) {
            return;
        }
        self.edges.push(key);
        self.adjacency[ia].push(ib);
        if ia != ib {
            self.adjacency[ib].push(ia);
        }
    }

    pub fn contains(&self, id: &NodeRef) -> bool {
        self.index.contains_key(id)
    }

    pub fn node(&self, id: &NodeRef) -> Option<&GraphNode> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// Neighbors of `id` in edge insertion order. `None` if absent.
    pub fn neighbors<'a>(&'a self, id: &NodeRef) -> Option<impl Iterator<Item = &'a NodeRef>> {
        let &idx = self.index.get(id)?;
        Some(self.adjacency[idx].iter().map(|&n| &self.nodes[n].id))
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter()
    }

    /// Edges as node-identity pairs, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeRef, &NodeRef)> {
        self.edges
            .iter()
            .map(|&(a, b)| (&self.nodes[a].id, &self.nodes[b].id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ========================================================================
    // Display styling
    // ========================================================================

    /// Recolor and resize nodes from rank-propagation output: rank above
    /// the 1.0 baseline turns a node [`COLOR_HIGHLIGHT`], and size scales
    /// linearly with rank.
    pub fn apply_rank_styles(&mut self, ranks: &HashMap<NodeRef, f64>) {
        for node in &mut self.nodes {
            let Some(&rank) = ranks.get(&node.id) else { continue };
            node.color = if rank > 1.0 {
                COLOR_HIGHLIGHT.to_string()
            } else {
                COLOR_DEFAULT.to_string()
            };
            node.size = SIZE_DEFAULT * rank;
        }
    }

    /// Mark post nodes whose importance score exceeds `threshold` as
    /// notable: [`COLOR_NOTABLE`], fixed larger size. Applied after
    /// [`Graph::apply_rank_styles`] it overrides rank styling for those
    /// posts, matching the presentation convention this library serves.
    pub fn apply_post_styles(&mut self, scores: &HashMap<PostId, usize>, threshold: usize) {
        for node in &mut self.nodes {
            let NodeRef::Post(id) = node.id else { continue };
            if scores.get(&id).copied().unwrap_or(0) > threshold {
                node.color = COLOR_NOTABLE.to_string();
                node.size = SIZE_NOTABLE;
            }
        }
    }
}
