use std::hash::Hash;

use tracing::debug;

use crate::{
    error::Result,
    graph::{Graph, VertexId},
    sets::frontier::{FifoFrontier, Frontier},
};

impl<T> Graph<T> {
    /// Hop count from `source` to every vertex slot, `None` where unreachable
    /// (or vacant).
    fn hop_distances(&self, source: VertexId) -> Vec<Option<usize>> {
        let mut hops = vec![None; self.capacity()];
        let mut frontier = FifoFrontier::with_capacity(self.len());
        hops[source.index()] = Some(0);
        frontier.push(source);

        while let Some(current) = frontier.pop() {
            let next_hop = hops[current.index()].map(|h| h + 1);
            for neighbor in &self.slot(current).neighbors {
                let slot = &mut hops[neighbor.id.index()];
                if slot.is_none() {
                    *slot = next_hop;
                    frontier.push(neighbor.id);
                }
            }
        }
        hops
    }
}

impl<T: Eq + Hash + Clone> Graph<T> {
    /// A path with the fewest edges from `origin` to `destination`, both
    /// included, weights ignored.
    ///
    /// The hop distances are measured from `destination`, so the path can be
    /// read off by walking from `origin` to any neighbor one hop closer. When
    /// several shortest paths exist, the walk follows the earliest added edge;
    /// any of them would be correct.
    ///
    /// Returns `[origin]` when both are the same element and an empty path
    /// when they lie in different components.
    ///
    /// ```
    /// use waypoint::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// for x in 1..=4 {
    ///     graph.add_vertex(x).unwrap();
    /// }
    /// graph.connect(&1, &2).unwrap();
    /// graph.connect(&2, &3).unwrap();
    /// graph.connect_weighted(&1, &3, 50.0).unwrap();
    ///
    /// assert_eq!(graph.shortest_path(&1, &3).unwrap(), vec![&1, &3]);
    /// assert!(graph.shortest_path(&1, &4).unwrap().is_empty());
    /// ```
    ///
    /// # Errors
    /// [`GraphError::NotFound`](crate::error::GraphError::NotFound) if either
    /// element is absent.
    pub fn shortest_path(&self, origin: &T, destination: &T) -> Result<Vec<&T>> {
        let (from, to) = (self.id_of(origin)?, self.id_of(destination)?);
        if from == to {
            return Ok(vec![&self.slot(from).element]);
        }

        let hops = self.hop_distances(to);
        let Some(mut remaining) = hops[from.index()] else {
            debug!(from = from.index(), to = to.index(), "no path between components");
            return Ok(Vec::new());
        };

        let mut path = Vec::with_capacity(remaining + 1);
        let mut current = from;
        path.push(&self.slot(current).element);
        while remaining > 0 {
            remaining -= 1;
            current = self
                .slot(current)
                .neighbors
                .iter()
                .find(|n| hops[n.id.index()] == Some(remaining))
                .map(|n| n.id)
                .expect("a vertex at hop h > 0 always has a neighbor at hop h - 1");
            path.push(&self.slot(current).element);
        }

        debug!(
            from = from.index(),
            to = to.index(),
            hops = path.len() - 1,
            "unweighted path found"
        );
        Ok(path)
    }
}
