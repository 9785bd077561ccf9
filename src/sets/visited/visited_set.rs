use crate::{graph::VertexId, sets::visited::VisitorSet};

/// A visited marker packed one bit per vertex slot.
///
/// Sized to the graph's vertex arena, so any [`VertexId`] handed out by the
/// graph fits.
///
/// # Examples
///
/// ```
/// use waypoint::graph::Graph;
/// use waypoint::sets::visited::{VisitedSet, VisitorSet};
///
/// let mut graph = Graph::new();
/// graph.add_vertex("a").unwrap();
/// let a = graph.vertex(&"a").unwrap().id();
///
/// let mut visited = VisitedSet::new(graph.capacity());
/// assert!(!visited.is_visited(a));
/// assert!(visited.mark(a));
/// assert!(!visited.mark(a));
/// assert_eq!(visited.visited_count(), 1);
/// ```
pub struct VisitedSet {
    /*private*/ buffer: Box<[u8]>,
    /*private*/ capacity: usize,
    /*private*/ marked: usize,
}

impl VisitedSet {
    /// Constructs a set able to hold vertex slots `0..capacity`, all unmarked.
    pub fn new(capacity: usize) -> Self {
        let bytes_needed: usize = capacity.div_ceil(8);
        VisitedSet {
            buffer: vec![0u8; bytes_needed].into_boxed_slice(),
            capacity,
            marked: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn locate(&self, vertex: VertexId) -> (usize, u8) {
        let index = vertex.index();
        assert!(index < self.capacity);
        (index / 8, 1u8 << (index % 8))
    }
}

impl VisitorSet for VisitedSet {
    /// # Panics
    ///
    /// Panics if the vertex slot is outside `0..capacity`.
    fn is_visited(&self, vertex: VertexId) -> bool {
        let (byte_index, mask) = self.locate(vertex);
        self.buffer[byte_index] & mask != 0
    }

    /// # Panics
    ///
    /// Panics if the vertex slot is outside `0..capacity`.
    fn mark(&mut self, vertex: VertexId) -> bool {
        let (byte_index, mask) = self.locate(vertex);
        let fresh = self.buffer[byte_index] & mask == 0;
        if fresh {
            self.buffer[byte_index] |= mask;
            self.marked += 1;
        }
        fresh
    }

    fn visited_count(&self) -> usize {
        self.marked
    }
}
