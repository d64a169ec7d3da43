use thiserror::Error;

/// The error type for all fallible operations in this library.
///
/// The taxonomy is deliberately small: graph algorithms either receive
/// well-formed input and succeed, or they reject the input up front. No
/// operation returns a partial result together with an error.
///
/// # Examples
///
/// ```rust,ignore
/// use cutflow::{DirectedGraph, Error, VertexId};
///
/// let graph = DirectedGraph::from_edges(2, &[(0, 1)]).unwrap();
/// match cutflow::all_st_cuts(&graph, VertexId::new(0), VertexId::new(5)) {
///     Err(Error::InvalidArgument(msg)) => eprintln!("rejected: {msg}"),
///     other => panic!("expected an InvalidArgument error, got {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An argument violated a documented precondition.
    ///
    /// Raised for out-of-range vertex ids, a source equal to the target,
    /// capacity or flow vectors whose length does not match the edge count,
    /// and non-positive capacities where strictly positive ones are
    /// required.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An arithmetic or size computation exceeded the platform limits.
    ///
    /// The Even-Tarjan reduction creates `2|E| + |V|` edges; on inputs where
    /// that count cannot be represented the reduction is refused rather than
    /// silently truncated.
    #[error("overflow: {0}")]
    Overflow(String),
}

/// Convenience alias used by every fallible function in this crate.
pub type Result<T> = std::result::Result<T, Error>;
