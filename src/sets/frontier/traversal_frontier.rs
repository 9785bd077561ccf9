use crate::graph::VertexId;

/// A container of discovered-but-not-yet-visited vertices.
///
/// The traversal engine only ever pushes one vertex, pops one vertex, and asks
/// whether anything is left. The order in which `pop` hands vertices back is
/// what turns the same procedure into BFS or DFS.
pub trait Frontier {
    /// Adds a freshly discovered vertex.
    fn push(&mut self, vertex: VertexId);

    /// Takes the next vertex to visit, `None` once the frontier is exhausted.
    fn pop(&mut self) -> Option<VertexId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
