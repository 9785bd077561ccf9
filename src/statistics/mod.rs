//! Counters collected while running shortest-path searches.
//!
//! A [`SearchStats`] is owned by one thread at a time; threads keep their own
//! and [`merge`](SearchStats::merge) them once their work is done.

mod stats;
pub use stats::*;
