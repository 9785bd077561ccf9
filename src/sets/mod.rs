//! Specialized data structures for graph search operations.
//!
//! This module provides the building blocks the graph and its search
//! algorithms are assembled from.
//!
//! # Submodules
//!
//! - [`frontier`]: FIFO and LIFO containers that turn one first search into BFS or DFS
//! - [`neighbors`]: Insertion-ordered, weighted adjacency lists for vertices
//! - [`queues`]: Indexed priority queues with decrease-key for Dijkstra
//! - [`visited`]: Bitmap-based visited tracking scoped to a single search

pub mod frontier;
pub mod neighbors;
pub mod queues;
pub mod visited;
