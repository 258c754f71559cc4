//! # Traversal Engine
//!
//! Breadth-first search over the undirected [`Graph`], discovering the
//! connected component around a start node.

use std::collections::VecDeque;

use hashbrown::HashSet;

use crate::graph::{Graph, NodeRef};
use crate::{Error, Result};

/// Breadth-first traversal from `start`, returning the nodes of its
/// connected component in discovery order.
///
/// Neighbors are visited in the graph's adjacency order (edge insertion
/// order), so the output is deterministic for a fixed graph. A start node
/// absent from the graph is a lookup error, never a silent empty result.
pub fn bfs(graph: &Graph, start: &NodeRef) -> Result<Vec<NodeRef>> {
    if !graph.contains(start) {
        return Err(Error::NodeNotFound(start.clone()));
    }

    let mut visited: HashSet<NodeRef> = HashSet::new();
    let mut frontier: VecDeque<NodeRef> = VecDeque::new();
    let mut component = Vec::new();

    visited.insert(start.clone());
    frontier.push_back(start.clone());

    while let Some(node) = frontier.pop_front() {
        if let Some(neighbors) = graph.neighbors(&node) {
            for neighbor in neighbors {
                if visited.insert(neighbor.clone()) {
                    frontier.push_back(neighbor.clone());
                }
            }
        }
        component.push(node);
    }

    Ok(component)
}
