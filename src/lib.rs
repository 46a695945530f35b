//! Serial and level-synchronous parallel breadth-first search over directed graphs.

pub mod generate;
pub mod graph;
pub mod traversal;
pub mod util;
