//! Vertex identifier for directed graphs.

use std::fmt;

/// A strongly-typed identifier for vertices within a directed graph.
///
/// `VertexId` wraps a `usize` index, preventing accidental mixing of vertex
/// indices with edge indices or other integer values. Vertices are dense:
/// a graph with `n` vertices uses ids `0..n`, assigned in creation order.
///
/// # Examples
///
/// ```rust,ignore
/// use cutflow::{DirectedGraph, VertexId};
///
/// let mut graph = DirectedGraph::new();
/// let v: VertexId = graph.add_vertex();
/// assert_eq!(v, VertexId::new(0));
///
/// // Ids index directly into per-vertex arrays
/// let depth = vec![0u32; graph.vertex_count()];
/// let _ = depth[v.index()];
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a `VertexId` from a raw index.
    ///
    /// Callers are responsible for the id being valid for the graph it is
    /// used with; constructing an id does not itself allocate a vertex.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the raw 0-based index, suitable for indexing per-vertex
    /// arrays.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}
