//! Exports for the out-of-scope collaborators: the render-ready node/edge
//! view consumed by a plotting layer, and the token frequency mapping
//! consumed by a word-cloud generator.
//!
//! ```text
//! Network → Graph::build() → RenderGraph::from(&graph) → serde_json → plot
//! Network → select_posts()  → word_frequencies()        → word cloud
//! ```

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::filter::{normalize_tokens, select_posts, AudienceFilter, KeywordFilter};
use crate::graph::{Graph, NodeKind};
use crate::model::Network;

// ============================================================================
// Render view
// ============================================================================

/// One node as the rendering collaborator consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderNode {
    pub id: String,
    pub kind: NodeKind,
    pub color: String,
    pub size: f64,
    pub label: String,
}

/// One undirected edge by node display id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderEdge {
    pub a: String,
    pub b: String,
}

/// The full render-ready view of a built graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderGraph {
    pub nodes: Vec<RenderNode>,
    pub edges: Vec<RenderEdge>,
}

impl From<&Graph> for RenderGraph {
    fn from(graph: &Graph) -> Self {
        let nodes = graph
            .nodes()
            .map(|n| RenderNode {
                id: n.id.to_string(),
                kind: n.kind,
                color: n.color.clone(),
                size: n.size,
                label: n.label.clone(),
            })
            .collect();
        let edges = graph
            .edges()
            .map(|(a, b)| RenderEdge { a: a.to_string(), b: b.to_string() })
            .collect();
        Self { nodes, edges }
    }
}

// ============================================================================
// Word frequencies
// ============================================================================

/// Tally normalized tokens across every post passing both filters.
/// Feed the result to a word-cloud generator as `token → count`.
pub fn word_frequencies(
    net: &Network,
    keywords: &KeywordFilter,
    audience: &AudienceFilter,
) -> HashMap<String, u64> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for post in select_posts(net, keywords, audience) {
        for token in normalize_tokens(&post.content) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeRef;

    fn net() -> Network {
        let mut net = Network::new();
        net.add_user("ada", "Ada Lovelace", 28, "F", "London").unwrap();
        net.add_user("alan", "Alan Turing", 31, "M", "Manchester").unwrap();
        let p = net.add_post("ada", "I love technology and innovation").unwrap();
        net.add_post("alan", "Technology is booming, more technology!").unwrap();
        net.add_view(p, "alan").unwrap();
        net
    }

    #[test]
    fn render_view_mirrors_the_graph() {
        let net = net();
        let graph = Graph::build(&net);
        let view = RenderGraph::from(&graph);
        assert_eq!(view.nodes.len(), graph.node_count());
        assert_eq!(view.edges.len(), graph.edge_count());
        assert!(view.nodes.iter().any(|n| n.id == NodeRef::user("ada").to_string()));

        let json = serde_json::to_string(&view).unwrap();
        let back: RenderGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, view);
    }

    #[test]
    fn frequencies_tally_across_passing_posts() {
        let net = net();
        let freqs =
            word_frequencies(&net, &KeywordFilter::default(), &AudienceFilter::default());
        assert_eq!(freqs["technology"], 3);
        assert_eq!(freqs["innovation"], 1);
    }

    #[test]
    fn filters_restrict_the_tally() {
        let net = net();
        let audience = AudienceFilter::from_csv("28", "", "");
        let freqs = word_frequencies(&net, &KeywordFilter::default(), &audience);
        assert_eq!(freqs["technology"], 1);
        assert!(!freqs.contains_key("booming"));
    }
}
