//! Push/pop containers that drive a first search.
//!
//! The container is the single point where breadth-first and depth-first
//! traversal differ: a FIFO frontier expands vertices level by level, a LIFO
//! frontier dives along the most recently discovered vertex.

mod fifo_frontier;
mod lifo_frontier;
mod traversal_frontier;

pub use fifo_frontier::*;
pub use lifo_frontier::*;
pub use traversal_frontier::*;
