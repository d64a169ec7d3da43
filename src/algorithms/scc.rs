//! Strongly connected components and component contraction.
//!
//! Tarjan's single-pass algorithm computes the components; the contraction
//! collapses each component to one vertex, merging parallel edges and
//! dropping self-loops. The mincut enumeration runs on the contraction of
//! the reverse residual graph, where every minimum cut corresponds to a
//! closed set of components.

use rustc_hash::FxHashSet;

use crate::{
    graph::{DirectedGraph, Successors, VertexId},
    Result,
};

/// Computes the strongly connected components of `graph`.
///
/// Returns the components in **reverse topological order**: if any edge
/// runs from component A to component B, then B appears before A.
///
/// # Complexity
///
/// O(|V| + |E|) time and space. The DFS recurses once per vertex.
pub fn strongly_connected_components<G>(graph: &G) -> Vec<Vec<VertexId>>
where
    G: Successors,
{
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return Vec::new();
    }

    let mut state = TarjanState::new(vertex_count);
    for index in 0..vertex_count {
        if state.index[index].is_none() {
            state.strongconnect(graph, VertexId::new(index));
        }
    }
    state.components
}

/// Flattens a component list into a per-vertex component index.
#[must_use]
pub fn component_membership(components: &[Vec<VertexId>], vertex_count: usize) -> Vec<usize> {
    let mut membership = vec![0; vertex_count];
    for (component_index, component) in components.iter().enumerate() {
        for &vertex in component {
            membership[vertex.index()] = component_index;
        }
    }
    membership
}

/// Contracts every component of `graph` to a single vertex.
///
/// The result has `component_count` vertices. Parallel edges between two
/// components are merged into one and intra-component edges (which would
/// become self-loops) are dropped. Edges keep the relative order of their
/// first appearance in the input edge list.
///
/// # Errors
///
/// Propagates graph-construction failures; with a `membership` produced by
/// [`component_membership`] this cannot occur.
pub fn contract_components(
    graph: &DirectedGraph,
    membership: &[usize],
    component_count: usize,
) -> Result<DirectedGraph> {
    let mut contracted = DirectedGraph::with_capacity(component_count, graph.edge_count());
    contracted.add_vertices(component_count);

    let mut seen = FxHashSet::default();
    for edge in graph.edge_ids() {
        let from = membership[graph.source(edge).index()];
        let to = membership[graph.target(edge).index()];
        if from != to && seen.insert((from, to)) {
            contracted.add_edge(VertexId::new(from), VertexId::new(to))?;
        }
    }
    Ok(contracted)
}

/// Internal state for Tarjan's algorithm.
struct TarjanState {
    /// Discovery index per vertex (`None` = not yet visited)
    index: Vec<Option<usize>>,
    /// Minimum index reachable through the DFS subtree plus one back edge
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<VertexId>,
    next_index: usize,
    components: Vec<Vec<VertexId>>,
}

impl TarjanState {
    fn new(vertex_count: usize) -> Self {
        TarjanState {
            index: vec![None; vertex_count],
            lowlink: vec![0; vertex_count],
            on_stack: vec![false; vertex_count],
            stack: Vec::new(),
            next_index: 0,
            components: Vec::new(),
        }
    }

    fn strongconnect<G: Successors>(&mut self, graph: &G, v: VertexId) {
        let v_index = v.index();
        self.index[v_index] = Some(self.next_index);
        self.lowlink[v_index] = self.next_index;
        self.next_index += 1;
        self.stack.push(v);
        self.on_stack[v_index] = true;

        for w in graph.successors(v) {
            let w_index = w.index();
            if self.index[w_index].is_none() {
                self.strongconnect(graph, w);
                self.lowlink[v_index] = self.lowlink[v_index].min(self.lowlink[w_index]);
            } else if self.on_stack[w_index] {
                self.lowlink[v_index] = self.lowlink[v_index].min(self.index[w_index].unwrap());
            }
        }

        if self.lowlink[v_index] == self.index[v_index].unwrap() {
            let mut component = Vec::new();
            loop {
                let w = self.stack.pop().unwrap();
                self.on_stack[w.index()] = false;
                component.push(w);
                if w == v {
                    break;
                }
            }
            self.components.push(component);
        }
    }
}
