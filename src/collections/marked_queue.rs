//! Insertion-ordered vertex set with batched removal.

use crate::graph::VertexId;

/// An insertion-ordered set of vertices with O(1) membership tests and
/// batch-wise removal.
///
/// Vertices are pushed in batches: [`start_batch`](Self::start_batch) opens
/// a batch and [`pop_back_batch`](Self::pop_back_batch) removes exactly the
/// vertices pushed since the matching `start_batch`. Batches nest LIFO,
/// which is what the Provan-Shier recursion needs to adopt a pivot frontier
/// into the source side on the way down and retract it on the way back up.
///
/// Each vertex is a member at most once.
#[derive(Debug, Clone)]
pub struct BatchedMarkedQueue {
    queue: Vec<VertexId>,
    marked: Vec<bool>,
    /// Start offset of each open batch, innermost last
    batches: Vec<usize>,
}

impl BatchedMarkedQueue {
    /// Creates an empty set over the vertex universe `0..vertex_count`.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        BatchedMarkedQueue {
            queue: Vec::new(),
            marked: vec![false; vertex_count],
            batches: Vec::new(),
        }
    }

    /// Opens a new batch; subsequent pushes belong to it until the matching
    /// [`pop_back_batch`](Self::pop_back_batch).
    pub fn start_batch(&mut self) {
        self.batches.push(self.queue.len());
    }

    /// Appends `vertex` to the current batch.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is already a member; callers guard with
    /// [`contains`](Self::contains).
    pub fn push(&mut self, vertex: VertexId) {
        assert!(
            !self.marked[vertex.index()],
            "vertex {vertex} is already a member"
        );
        self.marked[vertex.index()] = true;
        self.queue.push(vertex);
    }

    /// Returns `true` if `vertex` is currently a member.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.marked[vertex.index()]
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the members in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[VertexId] {
        &self.queue
    }

    /// Returns a copy of the members in insertion order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<VertexId> {
        self.queue.clone()
    }

    /// Removes every vertex pushed since the innermost
    /// [`start_batch`](Self::start_batch).
    ///
    /// # Panics
    ///
    /// Panics if no batch is open.
    pub fn pop_back_batch(&mut self) {
        let start = self.batches.pop().expect("no open batch");
        for vertex in self.queue.drain(start..) {
            self.marked[vertex.index()] = false;
        }
    }
}
