//! Serial and parallel breadth-first traversal over a read-only graph

mod levels;
mod parallel;
mod serial;


pub use levels::*;
pub use parallel::{level_pool, parallel_bfs, pool_bfs};
pub use serial::bfs;

use crate::graph::{AdjacencyGraph, IndexT};

impl AdjacencyGraph {
    /// serial breadth-first search from `start`, see [`bfs`]
    pub fn bfs(&self, start: IndexT) -> Traversal {
        bfs(self, start)
    }

    /// level-synchronous breadth-first search on `num_threads` threads, see [`parallel_bfs`]
    pub fn parallel_bfs(&self, start: IndexT, num_threads: usize) -> Traversal {
        parallel_bfs(self, start, num_threads)
    }
}
