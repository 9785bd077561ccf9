use std::fmt::Debug;

use crate::{graph::Graph, sets::neighbors::NeighborSet};

/// Opaque handle to a vertex slot in a [`Graph`].
///
/// Slots freed by [`Graph::remove_vertex`] are handed out again, but every
/// reuse bumps the slot's generation. An id can go stale, and
/// [`Graph::element`] then returns `None`, but it never aliases the vertex
/// that took the slot over.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct VertexId {
    internal: usize,
    generation: u32,
}

impl VertexId {
    #[cfg(test)]
    pub(crate) fn new(internal: usize) -> Self {
        Self::with_generation(internal, 0)
    }

    pub(crate) fn with_generation(internal: usize, generation: u32) -> Self {
        VertexId {
            internal,
            generation,
        }
    }

    /// Arena slot of this vertex; dense in `0..graph.capacity()`.
    pub fn index(self) -> usize {
        self.internal
    }

    pub(crate) fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Clone)]
pub(crate) struct Vertex<T> {
    pub element: T,
    pub neighbors: NeighborSet,
}

impl<T> Vertex<T> {
    pub fn new(element: T) -> Self {
        Vertex {
            element,
            neighbors: NeighborSet::new(),
        }
    }
}

impl<T: Debug> Debug for Vertex<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vertex")
            .field("element", &self.element)
            .field("neighbors", &self.neighbors)
            .finish()
    }
}

/// Read-only view of a vertex, handed to traversal visitors.
pub struct VertexRef<'a, T> {
    graph: &'a Graph<T>,
    id: VertexId,
    vertex: &'a Vertex<T>,
}

impl<'a, T> VertexRef<'a, T> {
    pub(crate) fn new(graph: &'a Graph<T>, id: VertexId, vertex: &'a Vertex<T>) -> Self {
        VertexRef { graph, id, vertex }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn element(&self) -> &'a T {
        &self.vertex.element
    }

    /// Number of edges touching this vertex.
    pub fn degree(&self) -> usize {
        self.vertex.neighbors.len()
    }

    /// Adjacent vertices with the weight of the connecting edge, in the order
    /// the edges were added.
    pub fn neighbors(&self) -> impl Iterator<Item = (VertexRef<'a, T>, f64)> + use<'a, T> {
        let graph = self.graph;
        self.vertex
            .neighbors
            .iter()
            .map(move |n| (VertexRef::new(graph, n.id, graph.slot(n.id)), n.weight))
    }
}

impl<T> Clone for VertexRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VertexRef<'_, T> {}

impl<T: Debug> Debug for VertexRef<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexRef")
            .field("id", &self.id)
            .field("element", &self.vertex.element)
            .field("degree", &self.degree())
            .finish()
    }
}
