//! Maximum s-t flow via Dinic's algorithm.
//!
//! Level graph construction by BFS, blocking flow by DFS with per-vertex
//! arc pointers. Capacities are `f64`; with integer-valued capacities the
//! arithmetic below is exact, which the mincut enumeration relies on.

use std::collections::VecDeque;

use crate::{
    graph::{DirectedGraph, VertexId},
    Error, Result,
};

/// A maximum flow together with its per-edge decomposition.
#[derive(Debug, Clone)]
pub struct Maxflow {
    /// Total flow value from source to target
    pub value: f64,
    /// Flow per original edge, indexed by `EdgeId`; satisfies
    /// `0 <= flow[e] <= capacity[e]` and conservation at every vertex other
    /// than the endpoints
    pub flow: Vec<f64>,
}

/// One direction of a residual arc pair. The reverse arc of arc `i` is
/// `i ^ 1`.
#[derive(Debug, Clone)]
struct Arc {
    target: usize,
    residual: f64,
}

/// Computes a maximum flow from `source` to `target`.
///
/// When `capacity` is `None` every edge has capacity 1. The returned flow
/// vector is aligned with the input edge ids, so it can be fed directly to
/// [`residual_graph`](crate::flow::residual_graph) and
/// [`reverse_residual_graph`](crate::flow::reverse_residual_graph).
///
/// # Errors
///
/// [`Error::InvalidArgument`] when an endpoint is out of range, the
/// endpoints coincide, the capacity vector length differs from the edge
/// count, or any capacity is negative.
pub fn maxflow(
    graph: &DirectedGraph,
    source: VertexId,
    target: VertexId,
    capacity: Option<&[f64]>,
) -> Result<Maxflow> {
    let vertex_count = graph.vertex_count();
    let edge_count = graph.edge_count();

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
        if capacity.len() != edge_count {
            return Err(Error::InvalidArgument(format!(
                "capacity vector has length {}, expected {edge_count}",
                capacity.len()
            )));
        }
        if capacity.iter().any(|&c| c < 0.0) {
            return Err(Error::InvalidArgument(
                "negative edge capacity".to_string(),
            ));
        }
    }

    let mut network = Network::build(graph, capacity);
    let value = network.run(source.index(), target.index());

    // The pushed amount accumulates on the reverse arc of each edge pair.
    let flow = (0..edge_count)
        .map(|edge| network.arcs[2 * edge + 1].residual)
        .collect();

    Ok(Maxflow { value, flow })
}

struct Network {
    arcs: Vec<Arc>,
    /// Arc indices leaving each vertex
    adjacency: Vec<Vec<usize>>,
    /// BFS level per vertex, usize::MAX = unreached
    level: Vec<usize>,
    /// Next arc to try per vertex during blocking flow
    pointer: Vec<usize>,
}

impl Network {
    fn build(graph: &DirectedGraph, capacity: Option<&[f64]>) -> Self {
        let vertex_count = graph.vertex_count();
        let mut arcs = Vec::with_capacity(graph.edge_count() * 2);
        let mut adjacency = vec![Vec::new(); vertex_count];

        for edge in graph.edge_ids() {
            let (from, to) = graph.edge_endpoints(edge).unwrap();
            let cap = capacity.map_or(1.0, |c| c[edge.index()]);
            adjacency[from.index()].push(arcs.len());
            arcs.push(Arc {
                target: to.index(),
                residual: cap,
            });
            adjacency[to.index()].push(arcs.len());
            arcs.push(Arc {
                target: from.index(),
                residual: 0.0,
            });
        }

        Network {
            arcs,
            adjacency,
            level: vec![usize::MAX; vertex_count],
            pointer: vec![0; vertex_count],
        }
    }

    fn run(&mut self, source: usize, target: usize) -> f64 {
        let mut value = 0.0;
        while self.bfs_levels(source, target) {
            self.pointer.fill(0);
            loop {
                let pushed = self.push(source, target, f64::INFINITY);
                if pushed <= 0.0 {
                    break;
                }
                value += pushed;
            }
        }
        value
    }

    /// Rebuilds the level graph; returns `true` while the target is still
    /// reachable through positive-residual arcs.
    fn bfs_levels(&mut self, source: usize, target: usize) -> bool {
        self.level.fill(usize::MAX);
        self.level[source] = 0;
        let mut queue = VecDeque::new();
        queue.push_back(source);

        while let Some(vertex) = queue.pop_front() {
            for &arc_index in &self.adjacency[vertex] {
                let arc = &self.arcs[arc_index];
                if arc.residual > 0.0 && self.level[arc.target] == usize::MAX {
                    self.level[arc.target] = self.level[vertex] + 1;
                    queue.push_back(arc.target);
                }
            }
        }

        self.level[target] != usize::MAX
    }

    /// Pushes up to `limit` units along level-increasing arcs; returns the
    /// amount pushed.
    fn push(&mut self, vertex: usize, target: usize, limit: f64) -> f64 {
        if vertex == target {
            return limit;
        }

        while self.pointer[vertex] < self.adjacency[vertex].len() {
            let arc_index = self.adjacency[vertex][self.pointer[vertex]];
            let (arc_target, residual) = {
                let arc = &self.arcs[arc_index];
                (arc.target, arc.residual)
            };

            if residual > 0.0 && self.level[arc_target] == self.level[vertex] + 1 {
                let pushed = self.push(arc_target, target, limit.min(residual));
                if pushed > 0.0 {
                    self.arcs[arc_index].residual -= pushed;
                    self.arcs[arc_index ^ 1].residual += pushed;
                    return pushed;
                }
            }
            self.pointer[vertex] += 1;
        }

        0.0
    }
}
