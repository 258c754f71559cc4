//! PageRank-style fixed-point propagation.

use hashbrown::HashMap;
use tracing::trace;

use crate::graph::NodeRef;
use super::RankGraph;

/// Parameters for rank propagation.
#[derive(Debug, Clone, Copy)]
pub struct RankConfig {
    /// Damping factor α.
    pub alpha: f64,
    /// Fixed number of synchronous passes. There is no convergence check;
    /// the count bounds worst-case latency.
    pub iterations: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self { alpha: 0.85, iterations: 100 }
    }
}

/// Compute node ranks over the directed adjacency view.
///
/// Every rank starts at 1.0. Each pass recomputes every node `v` as
///
/// ```text
/// rank'(v) = (1 - α) + α · Σ_{u ∈ out(v)} rank(u) / outdeg(u)
/// ```
///
/// reading only the previous pass's snapshot; the snapshot is swapped after
/// the full pass, never mid-pass. A neighbor with zero out-degree is skipped
/// in the accumulation (it contributes nothing) so dangling nodes never
/// divide by zero.
///
/// Ranks are non-negative and not normalized to sum to 1; values hover
/// around the 1.0 baseline plus propagated structure.
pub fn pagerank(graph: &RankGraph, config: &RankConfig) -> HashMap<NodeRef, f64> {
    let n = graph.node_count();
    let mut ranks = vec![1.0_f64; n];
    let mut next = vec![0.0_f64; n];

    for pass in 0..config.iterations {
        for v in 0..n {
            let flow: f64 = graph
                .out_entries(v)
                .iter()
                .map(|&(_, u)| {
                    let deg = graph.out_degree(u);
                    if deg == 0 { 0.0 } else { ranks[u] / deg as f64 }
                })
                .sum();
            next[v] = (1.0 - config.alpha) + config.alpha * flow;
        }
        std::mem::swap(&mut ranks, &mut next);
        trace!(pass, "rank pass complete");
    }

    graph
        .nodes()
        .iter()
        .cloned()
        .zip(ranks)
        .collect()
}
