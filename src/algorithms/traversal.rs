//! Graph traversal building blocks.
//!
//! Two traversals carry the rest of the crate:
//!
//! - [`DfsTree`] - an iterative depth-first search recording preorder and
//!   the DFS spanning tree, the first phase of Lengauer-Tarjan.
//! - [`bfs_restricted`] - a multi-root breadth-first search confined to an
//!   allowed vertex set, which is how the cut pivots compute the
//!   reachability sets I(S,v).
//!
//! Both take a [`Direction`] so callers can traverse the reverse graph
//! without materializing a transposed copy.

use std::collections::VecDeque;

use crate::graph::{Direction, Predecessors, Successors, VertexId};

/// The spanning tree of a depth-first search from a single root.
///
/// Vertices not reached from the root have `parent = None` and
/// `visited = false`; the root is visited with `parent = None`.
#[derive(Debug, Clone)]
pub struct DfsTree {
    /// Vertices in DFS preorder; `order[0]` is the root
    pub order: Vec<VertexId>,
    /// DFS tree parent per vertex
    pub parent: Vec<Option<VertexId>>,
    /// Reachability bitmap per vertex
    pub visited: Vec<bool>,
}

impl DfsTree {
    /// Runs an iterative preorder DFS from `root`, following edges in the
    /// given `direction`.
    ///
    /// A vertex may sit on the stack several times; it is marked visited
    /// when first popped and its parent is the vertex that pushed it last
    /// while it was still unvisited. This makes the recorded parents a true
    /// DFS spanning tree: any edge towards a later-preorder vertex leads to
    /// a descendant, which the dominator computation depends on.
    ///
    /// # Panics
    ///
    /// Panics if `root` is not a valid vertex of the graph.
    pub fn build<G>(graph: &G, root: VertexId, direction: Direction) -> Self
    where
        G: Successors + Predecessors,
    {
        let vertex_count = graph.vertex_count();
        assert!(root.index() < vertex_count, "root {root} out of range");

        let mut order = Vec::new();
        let mut parent = vec![None; vertex_count];
        let mut visited = vec![false; vertex_count];

        let mut stack = vec![root];
        while let Some(vertex) = stack.pop() {
            if visited[vertex.index()] {
                continue;
            }
            visited[vertex.index()] = true;
            order.push(vertex);

            // Reversed push so neighbors are entered in adjacency order.
            let neighbors: Vec<VertexId> = match direction {
                Direction::Out => graph.successors(vertex).collect(),
                Direction::In => graph.predecessors(vertex).collect(),
            };
            for &next in neighbors.iter().rev() {
                if !visited[next.index()] {
                    parent[next.index()] = Some(vertex);
                    stack.push(next);
                }
            }
        }

        DfsTree {
            order,
            parent,
            visited,
        }
    }
}

/// Multi-root BFS confined to an allowed vertex set.
///
/// Starts from every root that lies inside `allowed` (roots outside it are
/// ignored) and never steps onto a vertex outside `allowed`. Returns the
/// visited vertices in BFS order.
///
/// # Panics
///
/// Panics if any vertex in `roots` or `allowed` is out of range.
pub fn bfs_restricted<G>(
    graph: &G,
    roots: &[VertexId],
    direction: Direction,
    allowed: &[VertexId],
) -> Vec<VertexId>
where
    G: Successors + Predecessors,
{
    let vertex_count = graph.vertex_count();
    let mut permitted = vec![false; vertex_count];
    for &vertex in allowed {
        permitted[vertex.index()] = true;
    }

    let mut visited = vec![false; vertex_count];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    for &root in roots {
        if permitted[root.index()] && !visited[root.index()] {
            visited[root.index()] = true;
            queue.push_back(root);
        }
    }

    while let Some(vertex) = queue.pop_front() {
        order.push(vertex);
        let neighbors: Vec<VertexId> = match direction {
            Direction::Out => graph.successors(vertex).collect(),
            Direction::In => graph.predecessors(vertex).collect(),
        };
        for next in neighbors {
            if permitted[next.index()] && !visited[next.index()] {
                visited[next.index()] = true;
                queue.push_back(next);
            }
        }
    }

    order
}
