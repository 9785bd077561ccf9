use std::hash::Hash;

use crate::{
    error::{GraphError, Result},
    graph::{Graph, VertexId, VertexRef},
    sets::{
        frontier::{FifoFrontier, Frontier, LifoFrontier},
        visited::{VisitedSet, VisitorSet},
    },
};

/// Receives every vertex a traversal visits, in visiting order.
///
/// Any `FnMut(VertexRef<'_, T>)` closure is a visitor.
pub trait VertexVisitor<T> {
    fn act_on(&mut self, vertex: VertexRef<'_, T>);
}

impl<T, F> VertexVisitor<T> for F
where
    F: FnMut(VertexRef<'_, T>),
{
    fn act_on(&mut self, vertex: VertexRef<'_, T>) {
        self(vertex)
    }
}

impl<T> Graph<T> {
    /// Runs a first search from `start` over the component containing it.
    ///
    /// Returns how many vertices were visited.
    pub(crate) fn first_search<V, F>(
        &self,
        start: VertexId,
        visitor: &mut V,
        mut frontier: F,
    ) -> usize
    where
        V: VertexVisitor<T>,
        F: Frontier,
    {
        let mut visited = VisitedSet::new(self.capacity());
        visited.mark(start);
        frontier.push(start);

        while let Some(current) = frontier.pop() {
            let vertex = self.slot(current);
            visitor.act_on(VertexRef::new(self, current, vertex));

            for neighbor in &vertex.neighbors {
                if visited.mark(neighbor.id) {
                    frontier.push(neighbor.id);
                }
            }
        }

        visited.visited_count()
    }
}

impl<T: Eq + Hash + Clone> Graph<T> {
    /// Visits every vertex reachable from `start` exactly once, in the order
    /// `frontier` hands them back. Unreachable vertices are never visited.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if `start` is absent.
    pub fn traverse<V, F>(&self, start: &T, mut visitor: V, frontier: F) -> Result<()>
    where
        V: VertexVisitor<T>,
        F: Frontier,
    {
        let start = self.id_of(start)?;
        self.first_search(start, &mut visitor, frontier);
        Ok(())
    }

    /// Breadth-first traversal from `start`.
    ///
    /// ```
    /// use waypoint::graph::{Graph, VertexRef};
    ///
    /// let mut graph = Graph::new();
    /// for c in ['a', 'b', 'c', 'd'] {
    ///     graph.add_vertex(c).unwrap();
    /// }
    /// graph.connect(&'a', &'b').unwrap();
    /// graph.connect(&'b', &'c').unwrap();
    /// graph.connect(&'a', &'d').unwrap();
    ///
    /// let mut order = Vec::new();
    /// graph
    ///     .bfs(&'a', |v: VertexRef<'_, char>| order.push(*v.element()))
    ///     .unwrap();
    /// assert_eq!(order, vec!['a', 'b', 'd', 'c']);
    /// ```
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if `start` is absent.
    pub fn bfs<V: VertexVisitor<T>>(&self, start: &T, visitor: V) -> Result<()> {
        self.traverse(start, visitor, FifoFrontier::with_capacity(self.len()))
    }

    /// Depth-first traversal from `start`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`] if `start` is absent.
    pub fn dfs<V: VertexVisitor<T>>(&self, start: &T, visitor: V) -> Result<()> {
        self.traverse(start, visitor, LifoFrontier::new())
    }

    /// Whether every vertex is reachable from every other.
    ///
    /// # Errors
    /// [`GraphError::EmptyQueue`] if the graph has no vertex to start from.
    pub fn is_connected(&self) -> Result<bool> {
        let (start, _) = self.live().next().ok_or(GraphError::EmptyQueue)?;
        let mut ignore = |_: VertexRef<'_, T>| {};
        let reached = self.first_search(start, &mut ignore, LifoFrontier::new());
        Ok(reached == self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //   0 - 1 - 2
    //   |       |
    //   3       4      5 - 6
    fn setup_two_components() -> Graph<u32> {
        let mut graph = Graph::new();
        for i in 0..7 {
            graph.add_vertex(i).unwrap();
        }
        for (a, b) in [(0, 1), (1, 2), (0, 3), (2, 4), (5, 6)] {
            graph.connect(&a, &b).unwrap();
        }
        graph
    }

    fn collect_order(graph: &Graph<u32>, start: u32, breadth_first: bool) -> Vec<u32> {
        let mut order = Vec::new();
        let visitor = |v: VertexRef<'_, u32>| order.push(*v.element());
        if breadth_first {
            graph.bfs(&start, visitor).unwrap();
        } else {
            graph.dfs(&start, visitor).unwrap();
        }
        order
    }

    #[test]
    fn test_bfs_visits_level_by_level() {
        let graph = setup_two_components();
        assert_eq!(collect_order(&graph, 0, true), vec![0, 1, 3, 2, 4]);
    }

    #[test]
    fn test_dfs_follows_latest_discovery() {
        let graph = setup_two_components();
        // 0 pushes 1, 3; pops 3; pops 1 and pushes 2; pops 2 and pushes 4
        assert_eq!(collect_order(&graph, 0, false), vec![0, 3, 1, 2, 4]);
    }

    #[test]
    fn test_unreachable_vertices_are_never_visited() {
        let graph = setup_two_components();
        assert_eq!(collect_order(&graph, 5, true), vec![5, 6]);
        assert_eq!(collect_order(&graph, 6, false), vec![6, 5]);
    }

    #[test]
    fn test_missing_start_fails() {
        let graph = setup_two_components();
        assert_eq!(
            graph.bfs(&42, |_: VertexRef<'_, u32>| {}),
            Err(GraphError::NotFound)
        );
        assert_eq!(
            graph.dfs(&42, |_: VertexRef<'_, u32>| {}),
            Err(GraphError::NotFound)
        );
    }

    #[test]
    fn test_traverse_with_custom_visitor() {
        struct DegreeSum<'a>(&'a mut usize);
        impl VertexVisitor<u32> for DegreeSum<'_> {
            fn act_on(&mut self, vertex: VertexRef<'_, u32>) {
                *self.0 += vertex.degree();
            }
        }

        let graph = setup_two_components();
        let mut sum = 0;
        graph
            .traverse(&1, DegreeSum(&mut sum), FifoFrontier::new())
            .unwrap();
        // component {0..4} has 4 edges
        assert_eq!(sum, 8);
    }

    #[test]
    fn test_each_vertex_visited_once_on_cycle() {
        let mut graph = Graph::new();
        for i in 0..6 {
            graph.add_vertex(i).unwrap();
        }
        for i in 0..6 {
            graph.connect(&i, &((i + 1) % 6)).unwrap();
        }
        for breadth_first in [true, false] {
            let mut order = collect_order(&graph, 2, breadth_first);
            order.sort();
            assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_is_connected() {
        let mut graph = setup_two_components();
        assert_eq!(graph.is_connected(), Ok(false));
        graph.connect(&4, &5).unwrap();
        assert_eq!(graph.is_connected(), Ok(true));
        graph.remove_vertex(&4).unwrap();
        assert_eq!(graph.is_connected(), Ok(false));
        graph.remove_vertex(&5).unwrap();
        graph.remove_vertex(&6).unwrap();
        assert_eq!(graph.is_connected(), Ok(true));
    }

    #[test]
    fn test_is_connected_matches_bfs_reach() {
        let graph = setup_two_components();
        for start in graph.iter() {
            let mut reached = 0;
            graph.bfs(start, |_: VertexRef<'_, u32>| reached += 1).unwrap();
            assert_eq!(reached == graph.len(), graph.is_connected().unwrap());
        }
    }

    #[test]
    fn test_is_connected_edge_cases() {
        let mut graph: Graph<u32> = Graph::new();
        assert_eq!(graph.is_connected(), Err(GraphError::EmptyQueue));
        graph.add_vertex(1).unwrap();
        assert_eq!(graph.is_connected(), Ok(true));
    }
}
