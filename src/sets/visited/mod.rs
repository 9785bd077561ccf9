mod visited_set;
mod visitor_set;

pub use visited_set::*;
pub use visitor_set::*;
