pub mod error;
pub mod graph;
pub mod logging;
pub mod sets;
pub mod statistics;
