//! Error type shared by the graph and the priority queues.
//!
//! Every variant signals a broken caller contract. Checks always run before
//! any mutation, so an `Err` leaves the graph or queue exactly as it was.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The addressed element is not a vertex of the graph.
    #[error("element is not in the graph")]
    NotFound,

    /// A precondition on the arguments was violated.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The element is already a vertex of the graph.
    #[error("element is already in the graph")]
    DuplicateElement,

    /// Nothing to take from: the queue, or the graph being traversed, is empty.
    #[error("nothing to extract: the queue or graph is empty")]
    EmptyQueue,
}

pub type Result<T> = std::result::Result<T, GraphError>;
