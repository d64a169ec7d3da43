//! Induced subgraphs with index maps.

use crate::graph::{DirectedGraph, VertexId};

/// The subgraph induced by a vertex subset, together with the maps between
/// the two labelings.
///
/// The cut pivots repeatedly restrict the graph to V ∖ S; every result they
/// compute in the restricted labeling has to be translated back, so the
/// forward map (`map`) and backward map (`invmap`) are produced alongside
/// the subgraph.
#[derive(Debug, Clone)]
pub struct InducedSubgraph {
    /// The induced graph; vertex i corresponds to `invmap[i]` in the
    /// original
    pub graph: DirectedGraph,
    /// Original vertex -> induced vertex, `None` for dropped vertices
    pub map: Vec<Option<VertexId>>,
    /// Induced vertex -> original vertex
    pub invmap: Vec<VertexId>,
}

impl InducedSubgraph {
    /// Builds the subgraph of `graph` induced by `keep`.
    ///
    /// Kept vertices are renumbered `0..keep.len()` in the order given.
    /// Edges of the original with both endpoints kept survive, keeping
    /// their relative order; all other edges are dropped.
    ///
    /// # Panics
    ///
    /// Panics if `keep` contains an out-of-range vertex or a duplicate.
    #[must_use]
    pub fn new(graph: &DirectedGraph, keep: &[VertexId]) -> Self {
        let mut map: Vec<Option<VertexId>> = vec![None; graph.vertex_count()];
        for (new_index, &original) in keep.iter().enumerate() {
            assert!(
                map[original.index()].is_none(),
                "duplicate vertex {original} in keep set"
            );
            map[original.index()] = Some(VertexId::new(new_index));
        }

        let mut induced = DirectedGraph::with_capacity(keep.len(), graph.edge_count());
        induced.add_vertices(keep.len());
        for edge in graph.edge_ids() {
            let (from, to) = graph.edge_endpoints(edge).unwrap();
            if let (Some(new_from), Some(new_to)) = (map[from.index()], map[to.index()]) {
                // Endpoints were just validated against the induced graph.
                induced.add_edge(new_from, new_to).unwrap();
            }
        }

        InducedSubgraph {
            graph: induced,
            map,
            invmap: keep.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(index: usize) -> VertexId {
        VertexId::new(index)
    }

    #[test]
    fn test_keep_all_is_identity() {
        let graph = DirectedGraph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        let keep: Vec<VertexId> = graph.vertex_ids().collect();
        let sub = InducedSubgraph::new(&graph, &keep);
        assert_eq!(sub.graph.vertex_count(), 3);
        assert_eq!(sub.graph.edge_count(), 2);
        assert_eq!(sub.map[1], Some(v(1)));
        assert_eq!(sub.invmap[2], v(2));
    }

    #[test]
    fn test_dropped_vertices_remove_incident_edges() {
        let graph = DirectedGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let sub = InducedSubgraph::new(&graph, &[v(0), v(1), v(3)]);
        assert_eq!(sub.graph.vertex_count(), 3);
        // Only 0->1 and 3->0 survive.
        assert_eq!(sub.graph.edge_count(), 2);
        assert_eq!(sub.map[2], None);
        assert_eq!(sub.invmap, vec![v(0), v(1), v(3)]);

        let succ: Vec<VertexId> = sub.graph.successors(v(0)).collect();
        assert_eq!(succ, vec![v(1)]);
        let succ: Vec<VertexId> = sub.graph.successors(v(2)).collect();
        assert_eq!(succ, vec![v(0)]); // 3 -> 0 in the new labeling
    }

    #[test]
    fn test_keep_order_defines_new_labels() {
        let graph = DirectedGraph::from_edges(3, &[(0, 2)]).unwrap();
        let sub = InducedSubgraph::new(&graph, &[v(2), v(0)]);
        assert_eq!(sub.map[2], Some(v(0)));
        assert_eq!(sub.map[0], Some(v(1)));
        let succ: Vec<VertexId> = sub.graph.successors(v(1)).collect();
        assert_eq!(succ, vec![v(0)]);
    }

    #[test]
    fn test_empty_keep() {
        let graph = DirectedGraph::from_edges(2, &[(0, 1)]).unwrap();
        let sub = InducedSubgraph::new(&graph, &[]);
        assert_eq!(sub.graph.vertex_count(), 0);
        assert_eq!(sub.graph.edge_count(), 0);
    }
}
