//! Enumeration of all (s,t) edge cuts.
//!
//! The pivot implements the dominator-guided strategy of Provan & Shier:
//! restrict the graph to V ∖ S, build the dominator tree towards the target
//! and look for minimal elements of Γ(S) under dominance. A minimal element
//! v whose dominated region avoids T and the target becomes the pivot, and
//! I(S,v) is the part of that region reachable from Γ(S).

use crate::{
    algorithms::{bfs_restricted, dominator_tree, Dominator, DominatorTree, InducedSubgraph},
    collections::{BatchedMarkedQueue, ElementStack},
    flow::provan_shier::{provan_shier_search, PivotStrategy},
    graph::{DirectedGraph, Direction, EdgeId, VertexId},
    Error, Result,
};

/// All (s,t) edge cuts of a directed graph, with the vertex partitions that
/// generate them.
#[derive(Debug, Clone)]
pub struct StCuts {
    /// Edge cuts; `cuts[i]` is generated by `partitions[i]`
    pub cuts: Vec<Vec<EdgeId>>,
    /// Source-side vertex sets, each containing the source and not the
    /// target
    pub partitions: Vec<Vec<VertexId>>,
}

/// Lists all (s,t) edge cuts between `source` and `target`.
///
/// Every cut is listed exactly once, paired with the source-side partition
/// P that generates it: the cut is {e : from(e) ∈ P, to(e) ∉ P}. The
/// algorithm is Provan & Shier's search tree with the dominator-tree pivot;
/// the runtime is O(#cuts · (|V| + |E|)).
///
/// # Errors
///
/// [`Error::InvalidArgument`] when `source` or `target` is out of range or
/// they coincide.
///
/// # Examples
///
/// ```rust,ignore
/// use cutflow::{all_st_cuts, DirectedGraph, VertexId};
///
/// let diamond = DirectedGraph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)])?;
/// let result = all_st_cuts(&diamond, VertexId::new(0), VertexId::new(3))?;
/// assert_eq!(result.cuts.len(), 4);
/// # Ok::<(), cutflow::Error>(())
/// ```
pub fn all_st_cuts(
    graph: &DirectedGraph,
    source: VertexId,
    target: VertexId,
) -> Result<StCuts> {
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

    let mut s = BatchedMarkedQueue::new(vertex_count);
    let mut t = ElementStack::new(vertex_count);
    let mut partitions = Vec::new();
    provan_shier_search(
        graph,
        &mut s,
        &mut t,
        source,
        target,
        &mut AllCutsPivot,
        &mut partitions,
    )?;

    let cuts = cuts_of_partitions(graph, &partitions);
    Ok(StCuts { cuts, partitions })
}

/// Extracts the edge cut of every partition with a reusable stamp vector.
fn cuts_of_partitions(
    graph: &DirectedGraph,
    partitions: &[Vec<VertexId>],
) -> Vec<Vec<EdgeId>> {
    let mut stamp = vec![0usize; graph.vertex_count()];
    let mut cuts = Vec::with_capacity(partitions.len());

    for (index, partition) in partitions.iter().enumerate() {
        let marker = index + 1;
        for &vertex in partition {
            stamp[vertex.index()] = marker;
        }
        let cut: Vec<EdgeId> = graph
            .edge_ids()
            .filter(|&edge| {
                let (from, to) = graph.edge_endpoints(edge).unwrap();
                stamp[from.index()] == marker && stamp[to.index()] != marker
            })
            .collect();
        cuts.push(cut);
    }

    cuts
}

/// The dominator-tree pivot for enumerating all cuts.
pub(crate) struct AllCutsPivot;

impl PivotStrategy for AllCutsPivot {
    fn pivot(
        &mut self,
        graph: &DirectedGraph,
        s: &BatchedMarkedQueue,
        t: &ElementStack,
        source: VertexId,
        target: VertexId,
    ) -> Result<Option<(VertexId, Vec<VertexId>)>> {
        let vertex_count = graph.vertex_count();

        // The graph induced by V \ S; the target never enters S.
        let keep: Vec<VertexId> = graph.vertex_ids().filter(|&v| !s.contains(v)).collect();
        let sub = InducedSubgraph::new(graph, &keep);
        let sub_root = sub.map[target.index()].unwrap();

        // Dominator structure of the restricted graph towards the target.
        let domtree = dominator_tree(&sub.graph, sub_root, Direction::In)?;

        // Γ(S) in the original labeling: the out-frontier of S, or {source}
        // while S is empty.
        let mut gamma = vec![false; vertex_count];
        if s.is_empty() {
            gamma[source.index()] = true;
        } else {
            for &member in s.as_slice() {
                for next in graph.successors(member) {
                    if !s.contains(next) {
                        gamma[next.index()] = true;
                    }
                }
            }
        }

        // Vertices of the restricted graph that cannot reach the target
        // (set K). They are relabeled to the original ids and excluded from
        // Γ(S) before the minimal-element search.
        let leftout: Vec<VertexId> = domtree
            .unreachable()
            .iter()
            .map(|&sub_vertex| sub.invmap[sub_vertex.index()])
            .collect();
        for &vertex in &leftout {
            gamma[vertex.index()] = false;
        }

        let children = dominator_children(&domtree);
        let minimal = if domtree.reachable_count() > 1 {
            minimal_gamma_vertices(&children, sub_root, &gamma, &sub.invmap)
        } else {
            Vec::new()
        };

        let gamma_vec: Vec<VertexId> = (0..vertex_count)
            .map(VertexId::new)
            .filter(|&vertex| gamma[vertex.index()])
            .collect();

        for &candidate in &minimal {
            // Nu(v): the subtree of the dominator tree rooted at v, in
            // original labels.
            let sub_candidate = sub.map[candidate.index()].unwrap();
            let mut nuv: Vec<VertexId> = subtree_preorder(&children, sub_candidate)
                .into_iter()
                .map(|sub_vertex| sub.invmap[sub_vertex.index()])
                .collect();

            // I(S,v) - K: the part of Nu(v) reachable from Γ(S).
            let reached = bfs_restricted(graph, &gamma_vec, Direction::Out, &nuv);

            // v is usable when nothing committed to the target side (nor
            // the target itself) would be dragged into S.
            if reached
                .iter()
                .all(|&vertex| vertex != target && !t.contains(vertex))
            {
                nuv.extend_from_slice(&leftout);
                let isv = bfs_restricted(graph, &[candidate], Direction::Out, &nuv);
                return Ok(Some((candidate, isv)));
            }
        }

        Ok(None)
    }
}

/// Child adjacency of a dominator tree, in the tree's own labeling.
fn dominator_children(domtree: &DominatorTree) -> Vec<Vec<VertexId>> {
    let mut children = vec![Vec::new(); domtree.vertex_count()];
    for index in 0..domtree.vertex_count() {
        let vertex = VertexId::new(index);
        if let Dominator::Idom(parent) = domtree.dominator(vertex) {
            children[parent.index()].push(vertex);
        }
    }
    children
}

/// Preorder of the dominator subtree rooted at `root`.
fn subtree_preorder(children: &[Vec<VertexId>], root: VertexId) -> Vec<VertexId> {
    let mut order = Vec::new();
    let mut stack = vec![root];
    while let Some(vertex) = stack.pop() {
        order.push(vertex);
        for &child in children[vertex.index()].iter().rev() {
            stack.push(child);
        }
    }
    order
}

/// Finds the minimal elements of Γ(S) under the dominance relation.
///
/// A DFS from the dominator-tree root keeps a stack of the Γ(S) vertices on
/// the current tree path; whenever a Γ(S) vertex is entered below another,
/// the higher one is marked non-minimal. Returns the surviving vertices in
/// ascending original order.
fn minimal_gamma_vertices(
    children: &[Vec<VertexId>],
    root: VertexId,
    gamma: &[bool],
    invmap: &[VertexId],
) -> Vec<VertexId> {
    enum Visit {
        Enter(VertexId),
        Leave(VertexId),
    }

    let mut nomark = vec![false; gamma.len()];
    let mut gamma_stack: Vec<VertexId> = Vec::new();
    let mut stack = vec![Visit::Enter(root)];

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter(vertex) => {
                stack.push(Visit::Leave(vertex));
                for &child in children[vertex.index()].iter().rev() {
                    stack.push(Visit::Enter(child));
                }

                let original = invmap[vertex.index()];
                if gamma[original.index()] {
                    if let Some(&above) = gamma_stack.last() {
                        nomark[above.index()] = true;
                    }
                    gamma_stack.push(original);
                }
            }
            Visit::Leave(vertex) => {
                let original = invmap[vertex.index()];
                if gamma_stack.last() == Some(&original) {
                    gamma_stack.pop();
                }
            }
        }
    }

    (0..gamma.len())
        .filter(|&index| gamma[index] && !nomark[index])
        .map(VertexId::new)
        .collect()
}
