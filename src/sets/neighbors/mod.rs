//! Adjacency storage for graph vertices.
//!
//! This module provides the mutable, insertion-ordered neighbor list each
//! vertex owns. Weights live next to the neighbor id, so walking a vertex's
//! edges never needs a second lookup.

mod neighbor_set;

pub use neighbor_set::*;
