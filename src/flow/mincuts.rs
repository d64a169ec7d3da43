//! Enumeration of all minimum (s,t) edge cuts.
//!
//! After a maximum flow, every minimum cut is a closed set of the strongly
//! connected components of the reverse residual graph (Picard-Queyranne).
//! The enumeration therefore runs the Provan-Shier search on the
//! SCC-contraction of the reverse residual, with a pivot that picks
//! minimal *active* vertices: components touched by positive flow, the
//! only material any minimum cut can be built from. Closed sets found in
//! the contracted graph fan back out through the component map, and the
//! cut of each partition is the set of positive-flow edges it severs.

use crate::{
    algorithms::{
        bfs_restricted, component_membership, contract_components, strongly_connected_components,
        InducedSubgraph,
    },
    collections::{BatchedMarkedQueue, ElementStack},
    flow::{
        maxflow::maxflow,
        provan_shier::{provan_shier_search, PivotStrategy},
        transform::reverse_residual_graph,
    },
    graph::{DirectedGraph, Direction, EdgeId, VertexId},
    Error, Result,
};

/// All minimum (s,t) edge cuts of a directed graph.
#[derive(Debug, Clone)]
pub struct StMinCuts {
    /// The capacity of a minimum cut (the maximum flow value)
    pub value: f64,
    /// Minimum edge cuts; `cuts[i]` is generated by `partitions[i]`
    pub cuts: Vec<Vec<EdgeId>>,
    /// Source-side vertex sets in the original labeling
    pub partitions: Vec<Vec<VertexId>>,
}

/// Lists all minimum (s,t) edge cuts between `source` and `target`.
///
/// When `capacity` is `None` every edge has capacity 1. Every minimum cut
/// is listed exactly once; all have total capacity equal to the maximum
/// flow value. Integer-valued capacities are recommended: with inexact
/// capacities, roundoff in the flow computation can hide cuts whose
/// capacity is only approximately minimal.
///
/// # Errors
///
/// [`Error::InvalidArgument`] when an endpoint is out of range, the
/// endpoints coincide, the capacity length mismatches, or any capacity is
/// not strictly positive.
///
/// # Examples
///
/// ```rust,ignore
/// use cutflow::{all_st_mincuts, DirectedGraph, VertexId};
///
/// // Two parallel length-2 paths with a shared bottleneck value of 2
/// let diamond = DirectedGraph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)])?;
/// let result = all_st_mincuts(&diamond, VertexId::new(0), VertexId::new(3), None)?;
/// assert_eq!(result.value, 2.0);
/// # Ok::<(), cutflow::Error>(())
/// ```
pub fn all_st_mincuts(
    graph: &DirectedGraph,
    source: VertexId,
    target: VertexId,
    capacity: Option<&[f64]>,
) -> Result<StMinCuts> {
    let vertex_count = graph.vertex_count();
    if source.index() >= vertex_count {
        return Err(Error::InvalidArgument(format!(
            "source vertex {source} is out of range for a graph with {vertex_count} vertices"
        )));
    }
    if target.index() >= vertex_count {
        return Err(Error::InvalidArgument(format!(
            "target vertex {target} is out of range for a graph with {vertex_count} vertices"
        )));
    }
    if source == target {
        return Err(Error::InvalidArgument(
            "source and target are the same vertex".to_string(),
        ));
    }
    if let Some(capacity) = capacity {
        if capacity.iter().any(|&c| c <= 0.0) {
            return Err(Error::InvalidArgument(
                "all capacities must be strictly positive".to_string(),
            ));
        }
    }

    // The maximum flow pins down the minimum-cut value and the positive
    // flow support every minimum cut consists of.
    let flow = maxflow(graph, source, target, capacity)?;

    // Minimum cuts are closed sets of components of the reverse residual.
    let residual = reverse_residual_graph(graph, capacity, &flow.flow)?;
    let components = strongly_connected_components(&residual);
    let membership = component_membership(&components, vertex_count);
    let contracted = contract_components(&residual, &membership, components.len())?;

    let new_source = VertexId::new(membership[source.index()]);
    let new_target = VertexId::new(membership[target.index()]);
    // A maximum flow leaves no augmenting path, which is exactly a
    // target-to-source path in the reverse residual; the two endpoints can
    // therefore never share a component.
    debug_assert_ne!(new_source, new_target);

    // A contracted vertex is active when it touches positive flow.
    let mut active = vec![false; components.len()];
    for edge in graph.edge_ids() {
        if flow.flow[edge.index()] > 0.0 {
            let (from, to) = graph.edge_endpoints(edge).unwrap();
            active[membership[from.index()]] = true;
            active[membership[to.index()]] = true;
        }
    }

    let mut s = BatchedMarkedQueue::new(contracted.vertex_count());
    let mut t = ElementStack::new(contracted.vertex_count());
    let mut closed_sets = Vec::new();
    provan_shier_search(
        &contracted,
        &mut s,
        &mut t,
        new_source,
        new_target,
        &mut MinCutsPivot { active: &active },
        &mut closed_sets,
    )?;

    // Fan the contracted partitions back out to original vertices.
    let mut groups: Vec<Vec<VertexId>> = vec![Vec::new(); components.len()];
    for index in 0..vertex_count {
        groups[membership[index]].push(VertexId::new(index));
    }
    let partitions: Vec<Vec<VertexId>> = closed_sets
        .iter()
        .map(|closed| {
            closed
                .iter()
                .flat_map(|&component| groups[component.index()].iter().copied())
                .collect()
        })
        .collect();

    // The cut of each partition: positive-flow edges crossing it.
    let mut stamp = vec![0usize; vertex_count];
    let mut cuts = Vec::with_capacity(partitions.len());
    for (index, partition) in partitions.iter().enumerate() {
        let marker = index + 1;
        for &vertex in partition {
            stamp[vertex.index()] = marker;
        }
        let cut: Vec<EdgeId> = graph
            .edge_ids()
            .filter(|&edge| {
                if flow.flow[edge.index()] <= 0.0 {
                    return false;
                }
                let (from, to) = graph.edge_endpoints(edge).unwrap();
                stamp[from.index()] == marker && stamp[to.index()] != marker
            })
            .collect();
        cuts.push(cut);
    }

    Ok(StMinCuts {
        value: flow.value,
        cuts,
        partitions,
    })
}

/// The minimal-active-vertex pivot for the mincut enumeration.
///
/// `active` is indexed by the contracted graph's vertices.
pub(crate) struct MinCutsPivot<'a> {
    pub active: &'a [bool],
}

impl PivotStrategy for MinCutsPivot<'_> {
    fn pivot(
        &mut self,
        graph: &DirectedGraph,
        s: &BatchedMarkedQueue,
        t: &ElementStack,
        _source: VertexId,
        target: VertexId,
    ) -> Result<Option<(VertexId, Vec<VertexId>)>> {
        let vertex_count = graph.vertex_count();
        if s.len() == vertex_count {
            return Ok(None);
        }

        let keep: Vec<VertexId> = graph.vertex_ids().filter(|&v| !s.contains(v)).collect();
        let sub = InducedSubgraph::new(graph, &keep);

        // Pick the first minimal active vertex that is still undecided.
        for minimal in minimal_active_vertices(&sub, self.active) {
            let original = sub.invmap[minimal.index()];
            if original != target && !t.contains(original) {
                // I(S,v): everything that can still reach the pivot,
                // excluding vertices committed to the target side.
                let isv: Vec<VertexId> =
                    bfs_restricted(graph, &[original], Direction::In, &keep)
                        .into_iter()
                        .filter(|&vertex| !t.contains(vertex))
                        .collect();
                return Ok(Some((original, isv)));
            }
        }

        Ok(None)
    }
}

/// Finds the minimal active vertices of the induced subgraph: active
/// vertices no other active vertex can reach.
///
/// In-degrees are computed first; every non-active vertex is then
/// conceptually removed by subtracting its out-edges from its successors'
/// in-degrees. What remains with in-degree zero and the active flag set is
/// minimal. Returned in the subgraph's index order.
fn minimal_active_vertices(sub: &InducedSubgraph, active: &[bool]) -> Vec<VertexId> {
    let sub_count = sub.graph.vertex_count();
    let mut indegree: Vec<i64> = (0..sub_count)
        .map(|index| sub.graph.in_degree(VertexId::new(index)) as i64)
        .collect();

    for index in 0..sub_count {
        let vertex = VertexId::new(index);
        if !active[sub.invmap[index].index()] {
            for successor in sub.graph.successors(vertex) {
                indegree[successor.index()] -= 1;
            }
        }
    }

    (0..sub_count)
        .filter(|&index| active[sub.invmap[index].index()] && indegree[index] == 0)
        .map(VertexId::new)
        .collect()
}
