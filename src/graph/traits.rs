//! Trait definitions for graph abstractions.
//!
//! Algorithms in [`crate::algorithms`] are written against these traits
//! rather than the concrete container, so they can run on any adjacency
//! structure that exposes the required queries.
//!
//! The hierarchy is minimal and composable:
//!
//! - [`GraphBase`] - vertex count and vertex iteration
//! - [`Successors`] - forward edge traversal
//! - [`Predecessors`] - backward edge traversal

use crate::graph::VertexId;

/// Base trait providing core graph properties.
pub trait GraphBase {
    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over all vertex ids, in ascending order.
    fn vertex_ids(&self) -> impl Iterator<Item = VertexId>;
}

/// Trait for graphs that support forward edge traversal.
pub trait Successors: GraphBase {
    /// Returns an iterator over the successors of `vertex`.
    ///
    /// For a directed edge `(u, v)`, `v` is a successor of `u`. Vertices
    /// reachable through parallel edges appear once per edge.
    ///
    /// # Panics
    ///
    /// May panic if `vertex` is not a valid vertex of the graph.
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId>;
}

/// Trait for graphs that support backward edge traversal.
pub trait Predecessors: GraphBase {
    /// Returns an iterator over the predecessors of `vertex`.
    ///
    /// For a directed edge `(u, v)`, `u` is a predecessor of `v`. Vertices
    /// reachable through parallel edges appear once per edge.
    ///
    /// # Panics
    ///
    /// May panic if `vertex` is not a valid vertex of the graph.
    fn predecessors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId>;
}
