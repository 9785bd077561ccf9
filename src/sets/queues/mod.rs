//! Indexed priority queues for shortest-path search.
//!
//! Both queues implement [`IndexedQueue`]: a min-queue that hands out stable
//! handles and supports decrease-key, with elements tracking their own slot
//! through [`IndexTracker`]. Which one is faster depends on edge density, see
//! [`QueueChoice`](crate::graph::algo::QueueChoice).

mod binary_heap;
mod index_tracker;
mod indexed_queue;
mod linear;
mod ordered_float;

pub use binary_heap::*;
pub use index_tracker::*;
pub use indexed_queue::*;
pub use linear::*;
pub use ordered_float::*;
