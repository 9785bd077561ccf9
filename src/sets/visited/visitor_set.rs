use crate::graph::VertexId;

/// Per-call "visited" marker for a traversal.
///
/// A fresh set is created for every search, so no marker ever leaks from one
/// call into the next.
pub trait VisitorSet {
    fn is_visited(&self, vertex: VertexId) -> bool;

    /// Marks `vertex`, returning `true` if it was not marked before.
    fn mark(&mut self, vertex: VertexId) -> bool;

    /// Number of distinct vertices marked so far.
    fn visited_count(&self) -> usize;
}
