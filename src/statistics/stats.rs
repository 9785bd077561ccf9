use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    searches: usize,
    vertices_settled: usize,
    edges_relaxed: usize,
}

impl SearchStats {
    pub fn new() -> Self {
        SearchStats {
            searches: 0,
            vertices_settled: 0,
            edges_relaxed: 0,
        }
    }

    /// Record that a new search call has been performed
    pub fn bump_searches(&mut self) {
        self.searches += 1
    }

    /// Record that a vertex left the priority queue with its final distance
    pub fn bump_settled(&mut self) {
        self.vertices_settled += 1
    }

    /// Record that an edge lowered a tentative distance
    pub fn bump_relaxed(&mut self) {
        self.edges_relaxed += 1
    }

    pub fn get_searches(&self) -> usize {
        self.searches
    }

    pub fn get_vertices_settled(&self) -> usize {
        self.vertices_settled
    }

    pub fn get_edges_relaxed(&self) -> usize {
        self.edges_relaxed
    }

    /// Sum of both counter sets, used to combine per-thread statistics.
    pub fn merge(self, other: &SearchStats) -> SearchStats {
        SearchStats {
            searches: self.searches + other.searches,
            vertices_settled: self.vertices_settled + other.vertices_settled,
            edges_relaxed: self.edges_relaxed + other.edges_relaxed,
        }
    }
}

impl Default for SearchStats {
    fn default() -> Self {
        SearchStats::new()
    }
}
