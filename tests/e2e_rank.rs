//! End-to-end tests for rank propagation over adjacency views projected
//! from a `Network`.

use pretty_assertions::assert_eq;

use sociograph::{pagerank, Graph, ImportanceCriterion, Network, NodeRef, RankConfig};

const TOL: f64 = 1e-9;

// ============================================================================
// 1. A four-node cycle converges to the 1.0 baseline everywhere
// ============================================================================

#[test]
fn pure_cycle_converges_to_baseline() {
    // u1 authors p1 and views p2; u2 authors p2 and views p1.
    // Projection: u1 → p2 → u2 → p1 → u1, every node out-degree 1.
    let mut net = Network::new();
    net.add_user("u1", "Alice", 30, "F", "New York").unwrap();
    net.add_user("u2", "Bob", 25, "M", "Los Angeles").unwrap();
    let p1 = net.add_post("u1", "post one").unwrap();
    let p2 = net.add_post("u2", "post two").unwrap();
    net.add_view(p2, "u1").unwrap();
    net.add_view(p1, "u2").unwrap();

    let ranks = pagerank(&net.rank_graph(), &RankConfig::default());
    assert_eq!(ranks.len(), 4);
    for (node, rank) in &ranks {
        assert!((rank - 1.0).abs() < TOL, "{node}: expected 1.0, got {rank}");
    }
}

// ============================================================================
// 2. Dangling author: hand-computed fixed point
// ============================================================================

#[test]
fn dangling_author_fixed_point() {
    // viewer → post → author, author has no out-entries.
    // Fixed point: rank(author) = rank(post) = 1-α = 0.15,
    // rank(viewer) = (1-α)(1 + α) = 0.2775.
    let mut net = Network::new();
    net.add_user("author", "Ada", 28, "F", "London").unwrap();
    net.add_user("viewer", "Alan", 31, "M", "Manchester").unwrap();
    let p = net.add_post("author", "the post").unwrap();
    net.add_view(p, "viewer").unwrap();

    let ranks = pagerank(&net.rank_graph(), &RankConfig::default());
    assert!((ranks[&NodeRef::user("author")] - 0.15).abs() < TOL);
    assert!((ranks[&NodeRef::post(p)] - 0.15).abs() < TOL);
    assert!((ranks[&NodeRef::user("viewer")] - 0.2775).abs() < TOL);
}

// ============================================================================
// 3. Rank output covers every node and styles the graph
// ============================================================================

#[test]
fn rank_styles_feed_the_graph() {
    let mut net = Network::new();
    net.add_user("hub", "Hub", 30, "F", "NY").unwrap();
    net.add_user("fan1", "Fan", 20, "M", "LA").unwrap();
    net.add_user("fan2", "Fan", 21, "M", "SF").unwrap();
    let p = net.add_post("hub", "popular").unwrap();
    net.add_view(p, "fan1").unwrap();
    net.add_view(p, "fan2").unwrap();
    net.add_view(p, "hub").unwrap();

    let ranks = pagerank(&net.rank_graph(), &RankConfig::default());
    assert_eq!(ranks.len(), 4);
    assert!(ranks.values().all(|r| *r >= 0.0));

    let mut graph = Graph::build(&net);
    graph.apply_rank_styles(&ranks);
    for node in graph.nodes() {
        let rank = ranks[&node.id];
        let expected = if rank > 1.0 { "red" } else { "blue" };
        assert_eq!(node.color, expected, "node {}", node.id);
        assert!((node.size - 100.0 * rank).abs() < TOL);
    }
}

// ============================================================================
// 4. Importance scoring is monotonic in the underlying counters
// ============================================================================

#[test]
fn more_engagement_never_lowers_importance() {
    let mut net = Network::new();
    net.add_user("ada", "Ada", 28, "F", "London").unwrap();
    net.add_user("alan", "Alan", 31, "M", "Manchester").unwrap();
    let p = net.add_post("ada", "watch me grow").unwrap();

    let mut last = [0usize; 3];
    for _ in 0..5 {
        net.add_view(p, "alan").unwrap();
        net.add_comment(p, "alan", "again").unwrap();
        let post = net.post(p).unwrap();
        let now = [
            ImportanceCriterion::Views.score(post),
            ImportanceCriterion::Comments.score(post),
            ImportanceCriterion::Blended.score(post),
        ];
        assert!(now.iter().zip(last.iter()).all(|(a, b)| a >= b));
        assert_eq!(now[2], now[0] + now[1]);
        last = now;
    }
}
