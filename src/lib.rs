//! Graph-theoretic algorithms for directed graphs, focused on the
//! primitives of network-flow and program-analysis pipelines:
//!
//! - **Dominator trees** via the Lengauer-Tarjan algorithm, in either edge
//!   orientation, with unreachable-vertex reporting.
//! - **Flow-graph transformations**: the Even-Tarjan vertex-splitting
//!   reduction, residual graphs, and reverse residual graphs.
//! - **Exhaustive cut enumeration** after Provan & Shier: every (s,t) edge
//!   cut, or every *minimum* (s,t) edge cut, each listed exactly once with
//!   the source-side vertex partition that generates it.
//! - The supporting cast: a directed multigraph container, DFS/BFS with
//!   vertex restriction, strongly connected components with contraction,
//!   induced subgraphs with index maps, and Dinic's maximum flow.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use cutflow::{all_st_mincuts, DirectedGraph, VertexId};
//!
//! // Two parallel paths from 0 to 3
//! let graph = DirectedGraph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)])?;
//! let result = all_st_mincuts(&graph, VertexId::new(0), VertexId::new(3), None)?;
//!
//! assert_eq!(result.value, 2.0);
//! for (cut, partition) in result.cuts.iter().zip(&result.partitions) {
//!     println!("cut {cut:?} generated by source side {partition:?}");
//! }
//! # Ok::<(), cutflow::Error>(())
//! ```
//!
//! # Architecture
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`graph`] | [`DirectedGraph`], id newtypes, traversal traits |
//! | [`algorithms`] | traversal, dominators, SCC, induced subgraphs |
//! | [`flow`] | maxflow, reductions, residuals, cut enumeration |
//! | [`collections`] | the integer-vector scratch structures behind it all |
//!
//! Everything is single-threaded and synchronous; operations either run to
//! completion or fail up front with an [`Error`]. Enumeration order is
//! deterministic for a given input but is not part of the contract.

#![warn(missing_docs)]

pub mod algorithms;
pub mod collections;
pub mod flow;
pub mod graph;

mod error;

pub use error::{Error, Result};

pub use algorithms::{dominator_tree, Dominator, DominatorTree};
pub use flow::{
    all_st_cuts, all_st_mincuts, even_tarjan_reduction, maxflow, residual_graph,
    reverse_residual_graph, EvenTarjanReduction, Maxflow, PivotStrategy, ResidualGraph, StCuts,
    StMinCuts,
};
pub use graph::{DirectedGraph, Direction, EdgeId, VertexId};
