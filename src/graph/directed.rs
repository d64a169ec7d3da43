//! Core directed multigraph implementation.
//!
//! [`DirectedGraph`] is the container every algorithm in this crate operates
//! on. Vertices and edges are dense integer ids; adjacency lists are kept
//! for both directions so traversals can follow edges forwards or
//! backwards without materializing a transposed copy.
//!
//! The container is intentionally index-based: vertices carry no payload
//! and edges are identified by their insertion order, so per-edge data such
//! as capacities and flows live in parallel vectors owned by the caller.

use crate::{
    graph::{
        traits::{GraphBase, Predecessors, Successors},
        EdgeId, VertexId,
    },
    Error, Result,
};

/// A directed multigraph over dense integer ids.
///
/// Supports parallel edges and self-loops. Edge ids are assigned in
/// insertion order and are stable, which makes them suitable keys for
/// parallel vectors (capacity, flow, membership stamps).
///
/// # Examples
///
/// ## Building a graph
///
/// ```rust,ignore
/// use cutflow::{DirectedGraph, VertexId};
///
/// let mut graph = DirectedGraph::new();
/// graph.add_vertices(3);
/// graph.add_edge(VertexId::new(0), VertexId::new(1))?;
/// graph.add_edge(VertexId::new(1), VertexId::new(2))?;
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), cutflow::Error>(())
/// ```
///
/// ## From an edge list
///
/// ```rust,ignore
/// use cutflow::DirectedGraph;
///
/// // The 4-vertex diamond
/// let graph = DirectedGraph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)])?;
/// assert_eq!(graph.out_degree(cutflow::VertexId::new(0)), 2);
/// # Ok::<(), cutflow::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    /// Endpoints per edge, indexed by `EdgeId`
    edges: Vec<(VertexId, VertexId)>,
    /// Outgoing edge ids per vertex
    outgoing: Vec<Vec<EdgeId>>,
    /// Incoming edge ids per vertex
    incoming: Vec<Vec<EdgeId>>,
}

impl DirectedGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        DirectedGraph {
            edges: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Creates an empty graph with pre-allocated storage for
    /// `vertex_capacity` vertices and `edge_capacity` edges.
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        DirectedGraph {
            edges: Vec::with_capacity(edge_capacity),
            outgoing: Vec::with_capacity(vertex_capacity),
            incoming: Vec::with_capacity(vertex_capacity),
        }
    }

    /// Builds a graph with `vertex_count` vertices from a list of raw
    /// `(from, to)` index pairs.
    ///
    /// Edge ids follow the order of `edges`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if any endpoint is out of range.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = DirectedGraph::with_capacity(vertex_count, edges.len());
        graph.add_vertices(vertex_count);
        for &(from, to) in edges {
            graph.add_edge(VertexId::new(from), VertexId::new(to))?;
        }
        Ok(graph)
    }

    /// Adds a single vertex and returns its id.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId::new(self.outgoing.len());
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        id
    }

    /// Adds `count` vertices at once.
    pub fn add_vertices(&mut self, count: usize) {
        let new_len = self.outgoing.len() + count;
        self.outgoing.resize_with(new_len, Vec::new);
        self.incoming.resize_with(new_len, Vec::new);
    }

    /// Adds a directed edge from `source` to `target` and returns its id.
    ///
    /// Parallel edges and self-loops are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either endpoint is out of
    /// range.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId) -> Result<EdgeId> {
        let n = self.outgoing.len();
        if source.index() >= n {
            return Err(Error::InvalidArgument(format!(
                "source vertex {source} does not exist in a graph with {n} vertices"
            )));
        }
        if target.index() >= n {
            return Err(Error::InvalidArgument(format!(
                "target vertex {target} does not exist in a graph with {n} vertices"
            )));
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push((source, target));
        self.outgoing[source.index()].push(id);
        self.incoming[target.index()].push(id);
        Ok(id)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outgoing.is_empty()
    }

    /// Returns `true` if `vertex` is a valid id for this graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.outgoing.len()
    }

    /// Returns an iterator over all vertex ids, ascending.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.outgoing.len()).map(VertexId::new)
    }

    /// Returns an iterator over all edge ids, ascending.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId::new)
    }

    /// Returns the `(source, target)` endpoints of `edge`, or `None` if the
    /// id is out of range.
    #[must_use]
    pub fn edge_endpoints(&self, edge: EdgeId) -> Option<(VertexId, VertexId)> {
        self.edges.get(edge.index()).copied()
    }

    /// Returns the source vertex of `edge`.
    ///
    /// # Panics
    ///
    /// Panics if `edge` is not a valid edge of the graph.
    #[must_use]
    pub fn source(&self, edge: EdgeId) -> VertexId {
        self.edges[edge.index()].0
    }

    /// Returns the target vertex of `edge`.
    ///
    /// # Panics
    ///
    /// Panics if `edge` is not a valid edge of the graph.
    #[must_use]
    pub fn target(&self, edge: EdgeId) -> VertexId {
        self.edges[edge.index()].1
    }

    /// Returns an iterator over the successors of `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex of the graph.
    pub fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.outgoing[vertex.index()]
            .iter()
            .map(|&edge| self.edges[edge.index()].1)
    }

    /// Returns an iterator over the predecessors of `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex of the graph.
    pub fn predecessors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.incoming[vertex.index()]
            .iter()
            .map(|&edge| self.edges[edge.index()].0)
    }

    /// Returns an iterator over the ids of edges leaving `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex of the graph.
    pub fn outgoing_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.outgoing[vertex.index()].iter().copied()
    }

    /// Returns an iterator over the ids of edges entering `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex of the graph.
    pub fn incoming_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.incoming[vertex.index()].iter().copied()
    }

    /// Returns the number of edges leaving `vertex` (self-loops counted
    /// once).
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex of the graph.
    #[must_use]
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.outgoing[vertex.index()].len()
    }

    /// Returns the number of edges entering `vertex` (self-loops counted
    /// once).
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a valid vertex of the graph.
    #[must_use]
    pub fn in_degree(&self, vertex: VertexId) -> usize {
        self.incoming[vertex.index()].len()
    }
}

impl GraphBase for DirectedGraph {
    fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.outgoing.len()).map(VertexId::new)
    }
}

impl Successors for DirectedGraph {
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.outgoing[vertex.index()]
            .iter()
            .map(|&edge| self.edges[edge.index()].1)
    }
}

impl Predecessors for DirectedGraph {
    fn predecessors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.incoming[vertex.index()]
            .iter()
            .map(|&edge| self.edges[edge.index()].0)
    }
}
