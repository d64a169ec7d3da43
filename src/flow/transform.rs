//! Flow-graph transformations: the Even-Tarjan vertex-splitting reduction
//! and residual graph construction.
//!
//! These are the building blocks that turn vertex-capacity and minimum-cut
//! problems into plain max-flow instances: the reduction splits every
//! vertex into an in/out pair joined by a unit-capacity edge, and the
//! residual constructions expose the leftover capacity of a flow as a
//! graph of their own.

use crate::{
    graph::{DirectedGraph, VertexId},
    Error, Result,
};

/// The result of the Even-Tarjan reduction: the transformed graph and its
/// capacity vector.
#[derive(Debug, Clone)]
pub struct EvenTarjanReduction {
    /// The reduced graph with `2n` vertices and `2m + n` edges
    pub graph: DirectedGraph,
    /// Per-edge capacities: 1 for the `n` inner edges, the infinity
    /// sentinel for the `2m` outer edges
    pub capacity: Vec<f64>,
}

/// Applies the Even-Tarjan reduction to `graph`.
///
/// Every vertex `v` is split into `v' = v` and `v'' = v + n`, joined by an
/// inner edge `v' -> v''` of capacity 1. Every original edge `(u, v)`
/// becomes the pair `u'' -> v'` and `v'' -> u'`, both with the infinity
/// sentinel as capacity. Edge order: the `n` inner edges first, then the
/// pairs in original edge order.
///
/// The sentinel is `n` rather than a true infinity: no saturating flow on
/// the reduced graph can exceed `n`, so downstream max-flow treats such
/// edges as unsaturatable while staying in ordinary arithmetic.
///
/// # Errors
///
/// [`Error::Overflow`] when `2n` or `2m + n` is not representable.
pub fn even_tarjan_reduction(graph: &DirectedGraph) -> Result<EvenTarjanReduction> {
    let vertex_count = graph.vertex_count();
    let edge_count = graph.edge_count();

    let new_vertex_count = vertex_count
        .checked_mul(2)
        .ok_or_else(|| Error::Overflow("vertex count of the reduction".to_string()))?;
    let new_edge_count = edge_count
        .checked_mul(2)
        .and_then(|doubled| doubled.checked_add(vertex_count))
        .ok_or_else(|| Error::Overflow("edge count of the reduction".to_string()))?;

    let mut reduced = DirectedGraph::with_capacity(new_vertex_count, new_edge_count);
    reduced.add_vertices(new_vertex_count);
    let mut capacity = Vec::with_capacity(new_edge_count);

    #[allow(clippy::cast_precision_loss)]
    let infinity = vertex_count as f64;

    for index in 0..vertex_count {
        reduced.add_edge(VertexId::new(index), VertexId::new(index + vertex_count))?;
        capacity.push(1.0);
    }

    for edge in graph.edge_ids() {
        let (from, to) = graph.edge_endpoints(edge).unwrap();
        reduced.add_edge(VertexId::new(from.index() + vertex_count), to)?;
        reduced.add_edge(VertexId::new(to.index() + vertex_count), from)?;
        capacity.push(infinity);
        capacity.push(infinity);
    }

    Ok(EvenTarjanReduction {
        graph: reduced,
        capacity,
    })
}

/// A residual graph and the capacities of its edges.
#[derive(Debug, Clone)]
pub struct ResidualGraph {
    /// One edge `(from, to)` per original edge with positive residual
    pub graph: DirectedGraph,
    /// Residual capacity per residual edge, parallel to `graph`'s edges
    pub capacity: Vec<f64>,
}

/// Builds the residual graph of `flow` on `graph`.
///
/// Every original edge `e` with `capacity[e] - flow[e] > 0` contributes one
/// edge with the same orientation; saturated edges disappear. The residual
/// graph shares the vertex set of the input.
///
/// # Errors
///
/// [`Error::InvalidArgument`] when `capacity` or `flow` does not have one
/// entry per edge.
pub fn residual_graph(
    graph: &DirectedGraph,
    capacity: &[f64],
    flow: &[f64],
) -> Result<ResidualGraph> {
    let edge_count = graph.edge_count();
    if capacity.len() != edge_count {
        return Err(Error::InvalidArgument(format!(
            "capacity vector has length {}, expected {edge_count}",
            capacity.len()
        )));
    }
    if flow.len() != edge_count {
        return Err(Error::InvalidArgument(format!(
            "flow vector has length {}, expected {edge_count}",
            flow.len()
        )));
    }

    let mut residual = DirectedGraph::with_capacity(graph.vertex_count(), edge_count);
    residual.add_vertices(graph.vertex_count());
    let mut residual_capacity = Vec::new();

    for edge in graph.edge_ids() {
        let leftover = capacity[edge.index()] - flow[edge.index()];
        if leftover > 0.0 {
            let (from, to) = graph.edge_endpoints(edge).unwrap();
            residual.add_edge(from, to)?;
            residual_capacity.push(leftover);
        }
    }

    Ok(ResidualGraph {
        graph: residual,
        capacity: residual_capacity,
    })
}

/// Builds the reverse residual graph of `flow` on `graph`.
///
/// Every original edge `e` contributes `(from, to)` if `flow[e] > 0` and
/// `(to, from)` if `flow[e] < capacity[e]`; an edge with `0 < flow <
/// capacity` contributes both. When `capacity` is `None` every edge has
/// capacity 1. This is the reverse of the residual graph, used to certify
/// minimum cuts: after a maximum flow the target cannot reach the source
/// in it.
///
/// # Errors
///
/// [`Error::InvalidArgument`] on a capacity or flow length mismatch.
pub fn reverse_residual_graph(
    graph: &DirectedGraph,
    capacity: Option<&[f64]>,
    flow: &[f64],
) -> Result<DirectedGraph> {
    let edge_count = graph.edge_count();
    if let Some(capacity) = capacity {
        if capacity.len() != edge_count {
            return Err(Error::InvalidArgument(format!(
                "capacity vector has length {}, expected {edge_count}",
                capacity.len()
            )));
        }
    }
    if flow.len() != edge_count {
        return Err(Error::InvalidArgument(format!(
            "flow vector has length {}, expected {edge_count}",
            flow.len()
        )));
    }

    let mut residual = DirectedGraph::with_capacity(graph.vertex_count(), edge_count);
    residual.add_vertices(graph.vertex_count());

    for edge in graph.edge_ids() {
        let (from, to) = graph.edge_endpoints(edge).unwrap();
        let cap = capacity.map_or(1.0, |c| c[edge.index()]);
        if flow[edge.index()] > 0.0 {
            residual.add_edge(from, to)?;
        }
        if flow[edge.index()] < cap {
            residual.add_edge(to, from)?;
        }
    }

    Ok(residual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeId;

    fn v(index: usize) -> VertexId {
        VertexId::new(index)
    }

    fn e(index: usize) -> EdgeId {
        EdgeId::new(index)
    }

    #[test]
    fn test_even_tarjan_triangle() {
        // 3-cycle: 0 -> 1 -> 2 -> 0
        let graph = DirectedGraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let reduction = even_tarjan_reduction(&graph).unwrap();

        assert_eq!(reduction.graph.vertex_count(), 6);
        assert_eq!(reduction.graph.edge_count(), 9);

        // Inner edges first, capacity 1.
        for index in 0..3 {
            assert_eq!(
                reduction.graph.edge_endpoints(e(index)),
                Some((v(index), v(index + 3)))
            );
            assert_eq!(reduction.capacity[index], 1.0);
        }

        // Outer edges: (from'', to'), (to'', from') per original edge.
        let expected = [(3, 1), (4, 0), (4, 2), (5, 1), (5, 0), (3, 2)];
        for (offset, &(from, to)) in expected.iter().enumerate() {
            assert_eq!(
                reduction.graph.edge_endpoints(e(3 + offset)),
                Some((v(from), v(to))),
                "outer edge {offset}"
            );
            assert_eq!(reduction.capacity[3 + offset], 3.0);
        }
    }

    #[test]
    fn test_even_tarjan_empty_graph() {
        let graph = DirectedGraph::new();
        let reduction = even_tarjan_reduction(&graph).unwrap();
        assert_eq!(reduction.graph.vertex_count(), 0);
        assert_eq!(reduction.graph.edge_count(), 0);
        assert!(reduction.capacity.is_empty());
    }

    #[test]
    fn test_residual_graph_drops_saturated_edges() {
        let graph = DirectedGraph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        let residual = residual_graph(&graph, &[2.0, 1.0], &[1.0, 1.0]).unwrap();
        assert_eq!(residual.graph.vertex_count(), 3);
        assert_eq!(residual.graph.edge_count(), 1);
        assert_eq!(residual.graph.edge_endpoints(e(0)), Some((v(0), v(1))));
        assert_eq!(residual.capacity, vec![1.0]);
    }

    #[test]
    fn test_residual_graph_size_validation() {
        let graph = DirectedGraph::from_edges(2, &[(0, 1)]).unwrap();
        assert!(residual_graph(&graph, &[1.0, 1.0], &[0.0]).is_err());
        assert!(residual_graph(&graph, &[1.0], &[0.0, 0.0]).is_err());
    }

    #[test]
    fn test_reverse_residual_partial_flow() {
        // One edge with 0 < flow < capacity yields both orientations and no
        // self-loop.
        let graph = DirectedGraph::from_edges(2, &[(0, 1)]).unwrap();
        let residual = reverse_residual_graph(&graph, Some(&[2.0]), &[1.0]).unwrap();
        assert_eq!(residual.edge_count(), 2);
        assert_eq!(residual.edge_endpoints(e(0)), Some((v(0), v(1))));
        assert_eq!(residual.edge_endpoints(e(1)), Some((v(1), v(0))));
    }

    #[test]
    fn test_reverse_residual_saturated_edge() {
        let graph = DirectedGraph::from_edges(2, &[(0, 1)]).unwrap();
        let residual = reverse_residual_graph(&graph, Some(&[1.0]), &[1.0]).unwrap();
        // Saturated: only the forward orientation remains.
        assert_eq!(residual.edge_count(), 1);
        assert_eq!(residual.edge_endpoints(e(0)), Some((v(0), v(1))));
    }

    #[test]
    fn test_reverse_residual_default_capacity() {
        let graph = DirectedGraph::from_edges(2, &[(0, 1)]).unwrap();
        // Implicit unit capacity, zero flow: only the reversed orientation.
        let residual = reverse_residual_graph(&graph, None, &[0.0]).unwrap();
        assert_eq!(residual.edge_count(), 1);
        assert_eq!(residual.edge_endpoints(e(0)), Some((v(1), v(0))));
    }

    #[test]
    fn test_reverse_residual_size_validation() {
        let graph = DirectedGraph::from_edges(2, &[(0, 1)]).unwrap();
        assert!(reverse_residual_graph(&graph, Some(&[1.0, 1.0]), &[0.0]).is_err());
        assert!(reverse_residual_graph(&graph, None, &[0.0, 0.0]).is_err());
    }
}
