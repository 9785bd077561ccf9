//! Search algorithms over a [`Graph`](crate::graph::Graph).
//!
//! Traversals (breadth-first, depth-first, connectivity) share one first
//! search driven by a [`Frontier`](crate::sets::frontier::Frontier). Shortest
//! paths come in two flavours: fewest edges (`shortest_path`) and least total
//! weight (`dijkstra`), the latter backed by the indexed queue that
//! [`QueueChoice`] selects.

mod dijkstra;
mod queue_choice;
mod traversal;
mod unweighted;

pub use queue_choice::*;
pub use traversal::*;
