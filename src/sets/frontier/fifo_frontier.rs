use std::collections::VecDeque;

use crate::{graph::VertexId, sets::frontier::Frontier};

/// First-in first-out frontier: vertices come back in discovery order, which
/// makes a first search breadth-first.
pub struct FifoFrontier {
    queue: VecDeque<VertexId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        FifoFrontier {
            queue: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        FifoFrontier {
            queue: VecDeque::with_capacity(capacity),
        }
    }
}

impl Default for FifoFrontier {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, vertex: VertexId) {
        self.queue.push_back(vertex);
    }

    fn pop(&mut self) -> Option<VertexId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

impl std::fmt::Debug for FifoFrontier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FifoFrontier")
            .field("queue", &self.queue)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_frontier_is_empty() {
        let mut frontier = FifoFrontier::new();
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn pops_in_push_order() {
        let mut frontier = FifoFrontier::with_capacity(3);
        for i in 0..3 {
            frontier.push(VertexId::new(i));
        }
        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.pop(), Some(VertexId::new(0)));
        frontier.push(VertexId::new(7));
        assert_eq!(frontier.pop(), Some(VertexId::new(1)));
        assert_eq!(frontier.pop(), Some(VertexId::new(2)));
        assert_eq!(frontier.pop(), Some(VertexId::new(7)));
        assert!(frontier.is_empty());
    }

    #[test]
    fn debug_lists_contents() {
        let mut frontier = FifoFrontier::new();
        frontier.push(VertexId::new(12));
        let debug_string = format!("{frontier:?}");
        assert!(debug_string.contains("FifoFrontier"));
        assert!(debug_string.contains("12"));
    }
}
