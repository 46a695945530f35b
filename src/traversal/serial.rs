//! queue-based breadth-first search

use std::collections::VecDeque;

use crate::graph::{Graph, IndexT};

use super::levels::{Traversal, UNVISITED};

/// Visits every vertex reachable from `start` in breadth-first order.
///
/// An out-of-range `start` is not an error: the result simply has nothing visited.
pub fn bfs<G>(graph: &G, start: IndexT) -> Traversal
where
    G: Graph + ?Sized,
{
    let n = graph.n();
    if start as usize >= n {
        return Traversal::empty(n);
    }

    // doubles as the visited flags
    let mut levels = vec![UNVISITED; n];
    let mut frontier_sizes = vec![1];
    let mut queue = VecDeque::new();

    levels[start as usize] = 0;
    queue.push_back(start);

    while let Some(u) = queue.pop_front() {
        let next = levels[u as usize] + 1;
        for &v in graph.neighbors(u) {
            if levels[v as usize] == UNVISITED {
                levels[v as usize] = next;
                queue.push_back(v);

                if frontier_sizes.len() <= next as usize {
                    frontier_sizes.push(0);
                }
                frontier_sizes[next as usize] += 1;
            }
        }
    }

    Traversal::new(levels, frontier_sizes)
}
