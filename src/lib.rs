//! # sociograph — Social Network Graph Analytics
//!
//! An in-memory model of a small social network (users, posts, comments,
//! views, follow edges) together with the analyses typically run over it:
//! PageRank-style importance propagation, engagement-based post scoring,
//! multi-predicate user/post filtering, and BFS connected-component
//! discovery.
//!
//! ## Design Principles
//!
//! 1. **Registry owns everything**: `Network` holds all entities; `User` and
//!    `Post` carry only identifiers, resolved on demand. No ownership cycles.
//! 2. **The graph is disposable**: `Graph` is a pure projection of the
//!    registry, rebuilt from scratch whenever the entities change.
//! 3. **Analyses are pure**: rank, filter, and traversal results never
//!    mutate the entity model.
//! 4. **Synchronous, single-writer**: no locks, no async — mutation goes
//!    through `&mut Network`, everything else borrows.
//!
//! ## Quick Start
//!
//! ```rust
//! use sociograph::{Network, Graph, NodeRef, RankConfig};
//!
//! # fn example() -> sociograph::Result<()> {
//! let mut net = Network::new();
//! net.add_user("ada", "Ada Lovelace", 28, "F", "London")?;
//! net.add_user("alan", "Alan Turing", 31, "M", "Manchester")?;
//! net.add_connection("ada", "alan")?;
//! let p = net.add_post("ada", "notes on the analytical engine")?;
//! net.add_view(p, "alan")?;
//!
//! let graph = Graph::build(&net);
//! let ranks = sociograph::rank::pagerank(&net.rank_graph(), &RankConfig::default());
//! assert!(ranks.values().all(|r| *r >= 0.0));
//!
//! let component = sociograph::traverse::bfs(&graph, &NodeRef::user("ada"))?;
//! assert_eq!(component.len(), 3);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod graph;
pub mod rank;
pub mod filter;
pub mod traverse;
pub mod export;

// ============================================================================
// Re-exports: Model (the entities)
// ============================================================================

pub use model::{Network, User, Post, Comment, PostId, CommentId};

// ============================================================================
// Re-exports: Graph projection and traversal
// ============================================================================

pub use graph::{Graph, GraphNode, NodeRef, NodeKind};
pub use traverse::bfs;

// ============================================================================
// Re-exports: Analyses
// ============================================================================

pub use rank::{pagerank, RankConfig, RankGraph, ImportanceCriterion};
pub use filter::{UserCriteria, KeywordFilter, AudienceFilter};
pub use export::{RenderGraph, RenderNode, RenderEdge};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown user: {0}")]
    UserNotFound(String),

    #[error("Unknown post: {0}")]
    PostNotFound(PostId),

    #[error("Node not in graph: {0}")]
    NodeNotFound(NodeRef),

    #[error("User already registered: {0}")]
    DuplicateUser(String),
}

pub type Result<T> = std::result::Result<T, Error>;
