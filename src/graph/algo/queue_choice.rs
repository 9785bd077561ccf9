use serde::Serialize;

/// Which indexed queue backs a Dijkstra search.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueChoice {
    // near-complete graphs decrease keys about once per edge, so a flat scan wins
    Linear = 0,
    BinaryHeap = 1,
}

impl QueueChoice {
    pub fn is_linear(self) -> bool {
        self == QueueChoice::Linear
    }

    /// Picks `Linear` when the graph has more than `n(n-1)/2 - n` edges,
    /// i.e. when it is within `n` edges of being complete.
    ///
    /// ```
    /// use waypoint::graph::algo::QueueChoice;
    ///
    /// // K4 has 6 edges, the threshold is 6 - 4 = 2
    /// assert_eq!(QueueChoice::from_density(4, 3), QueueChoice::Linear);
    /// assert_eq!(QueueChoice::from_density(4, 2), QueueChoice::BinaryHeap);
    /// ```
    pub fn from_density(vertices: usize, edges: usize) -> Self {
        // signed: for n < 3 the threshold is negative
        let n = vertices as i128;
        let m = edges as i128;
        if m > n * (n - 1) / 2 - n {
            QueueChoice::Linear
        } else {
            QueueChoice::BinaryHeap
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_graphs_use_heap() {
        assert_eq!(QueueChoice::from_density(100, 0), QueueChoice::BinaryHeap);
        assert_eq!(QueueChoice::from_density(100, 99), QueueChoice::BinaryHeap);
        // threshold for 100 vertices is 4950 - 100 = 4850
        assert_eq!(QueueChoice::from_density(100, 4850), QueueChoice::BinaryHeap);
        assert_eq!(QueueChoice::from_density(100, 4851), QueueChoice::Linear);
    }

    #[test]
    fn test_complete_graph_uses_linear() {
        for n in 3..20usize {
            let complete = n * (n - 1) / 2;
            assert!(QueueChoice::from_density(n, complete).is_linear());
        }
    }

    #[test]
    fn test_tiny_graphs_do_not_underflow() {
        assert_eq!(QueueChoice::from_density(0, 0), QueueChoice::BinaryHeap);
        // n = 1: threshold -1, so even zero edges counts as dense
        assert_eq!(QueueChoice::from_density(1, 0), QueueChoice::Linear);
        // n = 2: threshold 1 - 2 = -1
        assert_eq!(QueueChoice::from_density(2, 0), QueueChoice::Linear);
        assert_eq!(QueueChoice::from_density(2, 1), QueueChoice::Linear);
    }

    #[test]
    fn test_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&QueueChoice::BinaryHeap).unwrap(),
            "\"binary_heap\""
        );
    }
}
