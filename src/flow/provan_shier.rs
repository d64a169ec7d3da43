//! The Provan-Shier recursive cut enumerator.
//!
//! Provan & Shier (Algorithmica 15, 1996) enumerate (s,t) cuts by a binary
//! search tree over a pair of disjoint vertex sets: S, committed to the
//! source side, and T, committed to the target side. A pluggable pivot
//! examines (S, T) and either declares the node a leaf (S is emitted as a
//! source-side partition) or produces a pivot vertex v with its frontier
//! I(S,v); the left child excludes v from the source side, the right child
//! adopts the whole frontier into S.
//!
//! The enumerator is generic over the pivot, which is what specializes it
//! to *all* cuts versus *all minimum* cuts.

use crate::{
    collections::{BatchedMarkedQueue, ElementStack},
    graph::{DirectedGraph, VertexId},
    Result,
};

/// The pivot seam of the Provan-Shier search.
///
/// Given the current search state, an implementation returns `Some((v,
/// isv))` with a pivot vertex and its non-empty frontier I(S,v), or `None`
/// when no pivot exists and the current S is a leaf of the search tree.
///
/// # Contract
///
/// For the enumeration to terminate and be duplicate-free, `isv` must
/// contain at least one vertex outside S, must be disjoint from T and must
/// exclude the target. Both built-in pivots guarantee this.
pub trait PivotStrategy {
    /// Examines `(s, t)` and produces the next pivot, if any.
    fn pivot(
        &mut self,
        graph: &DirectedGraph,
        s: &BatchedMarkedQueue,
        t: &ElementStack,
        source: VertexId,
        target: VertexId,
    ) -> Result<Option<(VertexId, Vec<VertexId>)>>;
}

/// Runs the recursive Provan-Shier search and appends every emitted
/// source-side partition to `partitions`.
///
/// Callers initialize `s` and `t` empty; the recursion leaves both exactly
/// as it found them. Recursion depth is bounded by the number of vertices,
/// because every right branch strictly grows S and every left branch
/// strictly grows T.
///
/// # Errors
///
/// Propagates pivot failures.
pub fn provan_shier_search<P: PivotStrategy>(
    graph: &DirectedGraph,
    s: &mut BatchedMarkedQueue,
    t: &mut ElementStack,
    source: VertexId,
    target: VertexId,
    pivot: &mut P,
    partitions: &mut Vec<Vec<VertexId>>,
) -> Result<()> {
    let vertex_count = graph.vertex_count();

    match pivot.pivot(graph, s, t, source, target)? {
        None => {
            if !s.is_empty() && s.len() != vertex_count {
                partitions.push(s.to_vec());
            }
        }
        Some((v, isv)) => {
            // Left: the pivot vertex stays on the target side.
            t.push(v);
            provan_shier_search(graph, s, t, source, target, pivot, partitions)?;
            t.pop();

            // Right: the whole frontier joins the source side.
            s.start_batch();
            for &u in &isv {
                if !s.contains(u) {
                    s.push(u);
                }
            }
            provan_shier_search(graph, s, t, source, target, pivot, partitions)?;
            s.pop_back_batch();
        }
    }

    Ok(())
}
