//! Dominator tree computation using the Lengauer-Tarjan algorithm.
//!
//! A flowgraph is a directed graph with a distinguished root r. A vertex v
//! **dominates** w if every path from r to w passes through v; the
//! **immediate dominator** idom(w) is the dominator of w closest to w. The
//! edges (idom(w), w) form a tree rooted at r, and v dominates w exactly
//! when v is an ancestor of w in that tree.
//!
//! This implementation follows Lengauer & Tarjan's semidominator algorithm
//! with the simple LINK variant (no balancing), giving
//! O((|V|+|E|)·α(|E|,|V|)) time:
//!
//! 1. DFS from the root records preorder and the DFS tree.
//! 2. Vertices are processed in reverse preorder; semidominators are
//!    computed with EVAL over a link forest with path compression, and each
//!    vertex is parked in the bucket of its semidominator.
//! 3. Buckets are drained at the DFS parent to assign implicit immediate
//!    dominators.
//! 4. A final preorder pass turns implicit into explicit dominators.
//!
//! Vertices not reachable from the root are reported separately and have no
//! dominator.

use crate::{
    algorithms::traversal::DfsTree,
    collections::BucketForest,
    graph::{DirectedGraph, Direction, Predecessors, Successors, VertexId},
    Error, Result,
};

/// The dominator relation of one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominator {
    /// The vertex is the root of the flowgraph; it has no dominator.
    Root,
    /// The vertex is not reachable from the root.
    Unreachable,
    /// The immediate dominator of the vertex.
    Idom(VertexId),
}

/// Result of a dominator computation.
///
/// # Examples
///
/// ```rust,ignore
/// use cutflow::{algorithms::dominator_tree, DirectedGraph, Direction, VertexId};
///
/// // 0 -> 1 -> 3, 0 -> 2 -> 3
/// let graph = DirectedGraph::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)])?;
/// let dom = dominator_tree(&graph, VertexId::new(0), Direction::Out)?;
///
/// // Neither branch dominates the join point
/// assert_eq!(dom.immediate_dominator(VertexId::new(3)), Some(VertexId::new(0)));
/// assert!(dom.dominates(VertexId::new(0), VertexId::new(3)));
/// # Ok::<(), cutflow::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DominatorTree {
    root: VertexId,
    direction: Direction,
    dom: Vec<Dominator>,
    reachable_count: usize,
}

impl DominatorTree {
    /// Returns the root the tree was computed from.
    #[must_use]
    pub fn root(&self) -> VertexId {
        self.root
    }

    /// Returns the direction the flowgraph was oriented in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the number of vertices of the underlying graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.dom.len()
    }

    /// Returns the number of vertices reachable from the root, the root
    /// included.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.reachable_count
    }

    /// Returns the dominator relation of `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    #[must_use]
    pub fn dominator(&self, vertex: VertexId) -> Dominator {
        self.dom[vertex.index()]
    }

    /// Returns the immediate dominator of `vertex`, or `None` for the root
    /// and for unreachable vertices.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    #[must_use]
    pub fn immediate_dominator(&self, vertex: VertexId) -> Option<VertexId> {
        match self.dom[vertex.index()] {
            Dominator::Idom(idom) => Some(idom),
            Dominator::Root | Dominator::Unreachable => None,
        }
    }

    /// Returns `true` if `vertex` is reachable from the root.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    #[must_use]
    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        !matches!(self.dom[vertex.index()], Dominator::Unreachable)
    }

    /// Returns the vertices not reachable from the root, ascending.
    #[must_use]
    pub fn unreachable(&self) -> Vec<VertexId> {
        self.dom
            .iter()
            .enumerate()
            .filter(|(_, dom)| matches!(**dom, Dominator::Unreachable))
            .map(|(index, _)| VertexId::new(index))
            .collect()
    }

    /// Returns the children of `vertex` in the dominator tree.
    ///
    /// O(|V|); callers that need the full child adjacency build it once
    /// from [`dominator`](Self::dominator).
    #[must_use]
    pub fn children(&self, vertex: VertexId) -> Vec<VertexId> {
        self.dom
            .iter()
            .enumerate()
            .filter(|(_, dom)| **dom == Dominator::Idom(vertex))
            .map(|(index, _)| VertexId::new(index))
            .collect()
    }

    /// Checks whether `a` dominates `b`. A vertex dominates itself; an
    /// unreachable `b` is dominated by nothing.
    ///
    /// O(depth of `b` in the tree).
    ///
    /// # Panics
    ///
    /// Panics if either vertex is out of range.
    #[must_use]
    pub fn dominates(&self, a: VertexId, b: VertexId) -> bool {
        if !self.is_reachable(b) {
            return false;
        }
        let mut current = b;
        loop {
            if current == a {
                return true;
            }
            match self.dom[current.index()] {
                Dominator::Idom(idom) => current = idom,
                Dominator::Root | Dominator::Unreachable => return false,
            }
        }
    }

    /// Materializes the dominator tree as a graph on the same vertex set.
    ///
    /// For every reachable non-root vertex v there is one edge: `(idom(v),
    /// v)` when the tree was computed with [`Direction::Out`], `(v,
    /// idom(v))` with [`Direction::In`]. Unreachable vertices are isolated.
    ///
    /// # Errors
    ///
    /// This construction cannot fail on a well-formed tree; the `Result`
    /// mirrors graph construction.
    pub fn tree_graph(&self) -> Result<DirectedGraph> {
        let mut tree = DirectedGraph::with_capacity(self.dom.len(), self.reachable_count.saturating_sub(1));
        tree.add_vertices(self.dom.len());
        for (index, dom) in self.dom.iter().enumerate() {
            if let Dominator::Idom(idom) = *dom {
                let vertex = VertexId::new(index);
                match self.direction {
                    Direction::Out => tree.add_edge(idom, vertex)?,
                    Direction::In => tree.add_edge(vertex, idom)?,
                };
            }
        }
        Ok(tree)
    }
}

/// Computes the dominator tree of `graph` rooted at `root`.
///
/// With [`Direction::In`] every edge is conceptually reversed for the whole
/// computation, yielding the dominator structure towards `root` instead of
/// away from it.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `root` is out of range.
pub fn dominator_tree<G>(graph: &G, root: VertexId, direction: Direction) -> Result<DominatorTree>
where
    G: Successors + Predecessors,
{
    let vertex_count = graph.vertex_count();
    if root.index() >= vertex_count {
        return Err(Error::InvalidArgument(format!(
            "root vertex {root} is out of range for a graph with {vertex_count} vertices"
        )));
    }

    // Step 1: DFS preorder, parents, reachability.
    let dfs = DfsTree::build(graph, root, direction);
    let component_size = dfs.order.len();

    // semi[v] is the 1-based preorder number of v's semidominator candidate;
    // 0 marks unreachable vertices throughout.
    let mut semi = vec![0usize; vertex_count];
    for (preorder, &vertex) in dfs.order.iter().enumerate() {
        semi[vertex.index()] = preorder + 1;
    }

    // Pruned predecessor lists in the opposite orientation: only edges from
    // reachable vertices can contribute semidominator candidates.
    let mut preds: Vec<Vec<VertexId>> = vec![Vec::new(); vertex_count];
    for &vertex in &dfs.order {
        let list: Vec<VertexId> = match direction {
            Direction::Out => graph
                .predecessors(vertex)
                .filter(|p| dfs.visited[p.index()])
                .collect(),
            Direction::In => graph
                .successors(vertex)
                .filter(|p| dfs.visited[p.index()])
                .collect(),
        };
        preds[vertex.index()] = list;
    }

    let mut bucket = BucketForest::new(vertex_count);
    // Link forest: ancestor is 1-based (0 = forest root), label starts as
    // the identity and carries the minimum-semi representative upwards.
    let mut ancestor = vec![0usize; vertex_count];
    let mut label: Vec<usize> = (0..vertex_count).collect();
    let mut idom = vec![usize::MAX; vertex_count];
    let mut path = Vec::new();

    // Steps 2 and 3: reverse preorder semidominator pass with interleaved
    // bucket draining.
    for preorder in (1..component_size).rev() {
        let w = dfs.order[preorder].index();
        let parent_w = dfs.parent[w].unwrap().index();

        for index in 0..preds[w].len() {
            let v = preds[w][index].index();
            let u = eval(v, &mut ancestor, &mut label, &semi, &mut path);
            if semi[u] < semi[w] {
                semi[w] = semi[u];
            }
        }

        bucket.insert(dfs.order[semi[w] - 1].index(), w);
        // LINK(parent(w), w): the simple, non-balancing variant.
        ancestor[w] = parent_w + 1;

        while !bucket.is_empty(parent_w) {
            let v = bucket.pop(parent_w);
            let u = eval(v, &mut ancestor, &mut label, &semi, &mut path);
            idom[v] = if semi[u] < semi[v] { u } else { parent_w };
        }
    }

    // Step 4: implicit to explicit dominators, in preorder.
    for preorder in 1..component_size {
        let w = dfs.order[preorder].index();
        if idom[w] != dfs.order[semi[w] - 1].index() {
            idom[w] = idom[idom[w]];
        }
    }

    let mut dom = vec![Dominator::Unreachable; vertex_count];
    for &vertex in dfs.order.iter().skip(1) {
        dom[vertex.index()] = Dominator::Idom(VertexId::new(idom[vertex.index()]));
    }
    dom[root.index()] = Dominator::Root;

    Ok(DominatorTree {
        root,
        direction,
        dom,
        reachable_count: component_size,
    })
}

/// EVAL of the link forest: the vertex with minimal semidominator on the
/// forest path from `v` to its forest root.
fn eval(
    v: usize,
    ancestor: &mut [usize],
    label: &mut [usize],
    semi: &[usize],
    path: &mut Vec<usize>,
) -> usize {
    if ancestor[v] == 0 {
        v
    } else {
        compress(v, ancestor, label, semi, path);
        label[v]
    }
}

/// Path compression: splice every vertex on the forest path of `v` directly
/// under the forest root while propagating minimum-semi labels downwards.
/// Uses an explicit stack, so deep forests cannot overflow the call stack.
fn compress(
    v: usize,
    ancestor: &mut [usize],
    label: &mut [usize],
    semi: &[usize],
    path: &mut Vec<usize>,
) {
    path.clear();
    let mut w = v;
    while ancestor[w] != 0 {
        path.push(w);
        w = ancestor[w] - 1;
    }

    // Re-process from the highest non-root element down.
    let mut top = path.pop().unwrap();
    while let Some(pretop) = path.pop() {
        if semi[label[top]] < semi[label[pretop]] {
            label[pretop] = label[top];
        }
        ancestor[pretop] = ancestor[top];
        top = pretop;
    }
}
