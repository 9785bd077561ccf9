//! The undirected weighted graph and the algorithms that run on it.

pub mod algo;
mod adjacency_graph;
mod vertex;

pub use adjacency_graph::*;
pub(crate) use vertex::Vertex;
pub use vertex::{VertexId, VertexRef};
