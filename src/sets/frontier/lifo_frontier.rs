use crate::{graph::VertexId, sets::frontier::Frontier};

/// Last-in first-out frontier: the most recently discovered vertex comes back
/// first, which makes a first search depth-first.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<VertexId>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        LifoFrontier { stack: Vec::new() }
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, vertex: VertexId) {
        self.stack.push(vertex);
    }

    fn pop(&mut self) -> Option<VertexId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}
