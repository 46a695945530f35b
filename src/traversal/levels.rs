//! the observable outcome of a breadth-first traversal

use crate::graph::IndexT;

/// level value of a vertex the traversal never reached
pub const UNVISITED: u32 = u32::MAX;

/// Per-vertex discovery levels plus the size of every frontier produced.
///
/// `frontier_sizes` is counted from the frontier lists themselves rather than
/// derived from `levels`, so a vertex entering a frontier twice would show up as
/// `frontier_sizes` summing to more than `num_visited()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    levels: Box<[u32]>,
    frontier_sizes: Vec<usize>,
}

impl Traversal {
    /// a traversal over `n` vertices that visited nothing
    pub(crate) fn empty(n: usize) -> Traversal {
        Traversal {
            levels: vec![UNVISITED; n].into_boxed_slice(),
            frontier_sizes: Vec::new(),
        }
    }

    pub(crate) fn new(levels: Vec<u32>, frontier_sizes: Vec<usize>) -> Traversal {
        Traversal {
            levels: levels.into_boxed_slice(),
            frontier_sizes,
        }
    }

    /// number of vertices in the traversed graph
    pub fn n(&self) -> usize {
        self.levels.len()
    }

    pub fn is_visited(&self, v: IndexT) -> bool {
        self.level(v).is_some()
    }

    /// BFS distance at which `v` was first discovered
    pub fn level(&self, v: IndexT) -> Option<u32> {
        self.levels
            .get(v as usize)
            .copied()
            .filter(|&level| level != UNVISITED)
    }

    /// visited vertices in ascending id order
    pub fn visited(&self) -> Vec<IndexT> {
        self.levels
            .iter()
            .enumerate()
            .filter(|(_, level)| **level != UNVISITED)
            .map(|(i, _)| i as IndexT)
            .collect()
    }

    pub fn num_visited(&self) -> usize {
        self.levels.iter().filter(|&&level| level != UNVISITED).count()
    }

    /// number of non-empty frontiers, i.e. one more than the deepest level reached
    pub fn depth(&self) -> usize {
        self.frontier_sizes.len()
    }

    /// length of each frontier list, starting with the one holding only the start vertex
    pub fn frontier_sizes(&self) -> &[usize] {
        &self.frontier_sizes
    }

    /// number of visited vertices at each level, recomputed from `levels`
    pub fn level_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.depth()];
        for &level in self.levels.iter().filter(|&&level| level != UNVISITED) {
            let level = level as usize;
            if level >= sizes.len() {
                sizes.resize(level + 1, 0);
            }
            sizes[level] += 1;
        }
        sizes
    }
}
