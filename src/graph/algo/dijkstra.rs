use std::{cmp::Ordering, hash::Hash};

use tracing::debug;

use crate::{
    error::Result,
    graph::{Graph, VertexId, algo::QueueChoice},
    sets::queues::{BinaryHeapQueue, IndexTracker, IndexedQueue, LinearQueue, TotalF64},
    statistics::SearchStats,
};

/// Tentative distance of one vertex during a search, ordered by distance.
///
/// `previous` is the vertex whose edge last lowered `distance`, so
/// `distance == previous.distance + w` holds bit for bit.
#[derive(Debug, Clone)]
struct DistanceEntry {
    vertex: VertexId,
    distance: TotalF64,
    previous: Option<VertexId>,
    position: Option<usize>,
}

/// Final distance and shortest-path tree parent of one vertex slot.
#[derive(Debug, Clone, Copy)]
struct Settled {
    distance: TotalF64,
    previous: Option<VertexId>,
}

impl IndexTracker for DistanceEntry {
    fn position(&self) -> Option<usize> {
        self.position
    }

    fn set_position(&mut self, position: Option<usize>) {
        self.position = position;
    }
}

impl PartialEq for DistanceEntry {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl Eq for DistanceEntry {}

impl PartialOrd for DistanceEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DistanceEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance.cmp(&other.distance)
    }
}

impl<T> Graph<T> {
    /// Settles every vertex reachable from `origin` and returns the final
    /// distance and parent of each slot, `+inf` for unreachable or vacant
    /// slots.
    fn settle_distances<Q>(
        &self,
        origin: VertexId,
        mut queue: Q,
        stats: &mut SearchStats,
    ) -> Vec<Settled>
    where
        Q: IndexedQueue<DistanceEntry>,
    {
        let mut handles = vec![None; self.capacity()];
        for (id, _) in self.live() {
            let distance = if id == origin {
                TotalF64::ZERO
            } else {
                TotalF64::INFINITY
            };
            let entry = DistanceEntry {
                vertex: id,
                distance,
                previous: None,
                position: None,
            };
            handles[id.index()] = Some(queue.insert(entry));
        }

        while let Ok(current) = queue.extract_min() {
            let Some(entry) = queue.get(current) else {
                break;
            };
            let (vertex, distance) = (entry.vertex, entry.distance);
            stats.bump_settled();

            for neighbor in &self.slot(vertex).neighbors {
                let Some(handle) = handles[neighbor.id.index()] else {
                    continue;
                };
                let candidate = distance + neighbor.weight;
                // settled neighbors never compare greater, so they are never updated
                if queue.get(handle).is_some_and(|e| e.distance > candidate)
                    && queue
                        .decrease_key(handle, |e| {
                            e.distance = candidate;
                            e.previous = Some(vertex);
                        })
                        .is_ok()
                {
                    stats.bump_relaxed();
                }
            }
        }

        let unreached = Settled {
            distance: TotalF64::INFINITY,
            previous: None,
        };
        let mut table = vec![unreached; self.capacity()];
        for entry in queue.into_elements() {
            table[entry.vertex.index()] = Settled {
                distance: entry.distance,
                previous: entry.previous,
            };
        }
        table
    }

    /// Follows parents back from `destination` to the root of the tree.
    ///
    /// A parent is always settled before its child, so the walk cannot cycle
    /// even when a weight vanishes in rounding and two vertices end up with
    /// the same distance.
    fn trace_back(&self, destination: VertexId, table: &[Settled]) -> Vec<VertexId> {
        let mut path = vec![destination];
        let mut current = destination;
        while let Some(previous) = table[current.index()].previous {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        path
    }
}

impl<T: Eq + Hash + Clone> Graph<T> {
    /// Minimum-weight path from `origin` to `destination`, both included.
    ///
    /// The priority queue is picked from the graph's density, see
    /// [`QueueChoice::from_density`]. Returns `[origin]` when both are the
    /// same element and an empty path when no path exists. A path whose total
    /// weight overflows `f64` counts as no path: its destination stays at
    /// `+inf` and is reported unreachable.
    ///
    /// Each step of the result is an edge whose weight exactly closes the gap
    /// between the two recorded distances; no epsilon is involved.
    ///
    /// ```
    /// use waypoint::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// for c in ["home", "park", "shop"] {
    ///     graph.add_vertex(c).unwrap();
    /// }
    /// graph.connect_weighted(&"home", &"shop", 10.0).unwrap();
    /// graph.connect_weighted(&"home", &"park", 2.0).unwrap();
    /// graph.connect_weighted(&"park", &"shop", 3.0).unwrap();
    ///
    /// let path = graph.dijkstra(&"home", &"shop").unwrap();
    /// assert_eq!(path, vec![&"home", &"park", &"shop"]);
    /// assert_eq!(graph.path_weight(&path).unwrap(), 5.0);
    /// ```
    ///
    /// # Errors
    /// [`GraphError::NotFound`](crate::error::GraphError::NotFound) if either
    /// element is absent.
    pub fn dijkstra(&self, origin: &T, destination: &T) -> Result<Vec<&T>> {
        let choice = QueueChoice::from_density(self.len(), self.edge_count());
        self.dijkstra_with(origin, destination, choice, &mut SearchStats::new())
    }

    /// [`dijkstra`](Graph::dijkstra) with an explicit queue, recording what the
    /// search did into `stats`.
    ///
    /// # Errors
    /// [`GraphError::NotFound`](crate::error::GraphError::NotFound) if either
    /// element is absent.
    pub fn dijkstra_with(
        &self,
        origin: &T,
        destination: &T,
        choice: QueueChoice,
        stats: &mut SearchStats,
    ) -> Result<Vec<&T>> {
        let (from, to) = (self.id_of(origin)?, self.id_of(destination)?);
        stats.bump_searches();
        if from == to {
            return Ok(vec![&self.slot(from).element]);
        }

        let mut local = SearchStats::new();
        let table = match choice {
            QueueChoice::Linear => {
                let queue = LinearQueue::with_capacity(self.len());
                self.settle_distances(from, queue, &mut local)
            }
            QueueChoice::BinaryHeap => {
                let queue = BinaryHeapQueue::with_capacity(self.len());
                self.settle_distances(from, queue, &mut local)
            }
        };
        debug!(
            queue = ?choice,
            settled = local.get_vertices_settled(),
            relaxed = local.get_edges_relaxed(),
            distance = %table[to.index()].distance,
            "dijkstra search done"
        );
        *stats = stats.merge(&local);

        if !table[to.index()].distance.is_finite() {
            return Ok(Vec::new());
        }
        Ok(self
            .trace_back(to, &table)
            .into_iter()
            .map(|id| &self.slot(id).element)
            .collect())
    }
}
