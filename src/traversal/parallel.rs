//! Level-synchronous parallel breadth-first search.
//!
//! Each BFS level is split into contiguous chunks, one per worker. Workers claim
//! newly discovered vertices with a compare-and-swap on a shared array of atomic
//! flags, collect their winners in a private buffer, and append that buffer to the
//! next level under a mutex once. The next level only starts after every worker of
//! the current one has finished.

use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::graph::{Graph, IndexT};

use super::levels::{Traversal, UNVISITED};

/// Parallel BFS that spawns fresh scoped threads for every level.
///
/// At most `num_threads` threads run per level; fewer when the level has fewer
/// vertices than that. A `num_threads` of 0 is treated as 1. An out-of-range
/// `start` visits nothing.
///
/// # Panics
///
/// A panic inside a worker is re-raised in the caller with the worker's own
/// payload, after every other worker of that level has been joined.
pub fn parallel_bfs<G>(graph: &G, start: IndexT, num_threads: usize) -> Traversal
where
    G: Graph + Sync + ?Sized,
{
    let num_threads = num_threads.max(1);

    level_synchronous(graph, start, |level, visited, next_level| {
        let chunk_size = level.len().div_ceil(num_threads);

        // joining every worker is the level barrier
        thread::scope(|scope| {
            let workers: Vec<_> = level
                .chunks(chunk_size)
                .map(|chunk| scope.spawn(move || expand_chunk(graph, visited, chunk, next_level)))
                .collect();

            let mut first_panic = None;
            for worker in workers {
                if let Err(payload) = worker.join() {
                    first_panic.get_or_insert(payload);
                }
            }
            if let Some(payload) = first_panic {
                panic::resume_unwind(payload);
            }
        });
    })
}

/// Builds a rayon pool with `num_threads` workers for [`pool_bfs`].
///
/// A `num_threads` of 0 is treated as 1, as in [`parallel_bfs`], instead of
/// rayon's default of one worker per core.
pub fn level_pool(num_threads: usize) -> Result<ThreadPool, ThreadPoolBuildError> {
    ThreadPoolBuilder::new()
        .num_threads(num_threads.max(1))
        .build()
}

/// Parallel BFS that runs every level on an existing rayon pool.
///
/// Levels are cut into `pool.current_num_threads()` chunks, exactly like
/// [`parallel_bfs`], but the workers are reused across levels instead of being
/// spawned per level. Use [`level_pool`] to get a pool with a given thread count.
///
/// # Panics
///
/// A panic inside a worker is re-raised in the caller with the worker's own payload.
pub fn pool_bfs<G>(graph: &G, start: IndexT, pool: &ThreadPool) -> Traversal
where
    G: Graph + Sync + ?Sized,
{
    let num_threads = pool.current_num_threads().max(1);

    level_synchronous(graph, start, |level, visited, next_level| {
        let chunk_size = level.len().div_ceil(num_threads);

        // install blocks until every chunk of the level is done
        pool.install(|| {
            level
                .par_chunks(chunk_size)
                .for_each(|chunk| expand_chunk(graph, visited, chunk, next_level));
        });
    })
}

/// Drives the level loop shared by the parallel variants.
///
/// `run_level` must expand every vertex of the given level into the next-level
/// list and must not return before all of that work is finished.
fn level_synchronous<G, F>(graph: &G, start: IndexT, mut run_level: F) -> Traversal
where
    G: Graph + ?Sized,
    F: FnMut(&[IndexT], &[AtomicBool], &Mutex<Vec<IndexT>>),
{
    let n = graph.n();
    if start as usize >= n {
        return Traversal::empty(n);
    }

    let visited: Box<[AtomicBool]> = (0..n).map(|_| AtomicBool::new(false)).collect();
    let mut levels = vec![UNVISITED; n];
    let mut frontier_sizes = Vec::new();

    visited[start as usize].store(true, Ordering::Relaxed);
    let mut current_level = vec![start];
    let mut depth = 0;

    while !current_level.is_empty() {
        for &v in &current_level {
            levels[v as usize] = depth;
        }
        frontier_sizes.push(current_level.len());

        let next_level = Mutex::new(Vec::new());
        run_level(&current_level, &visited, &next_level);

        current_level = next_level
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        depth += 1;
    }

    Traversal::new(levels, frontier_sizes)
}

/// Scans one chunk of a level and publishes the vertices this worker claimed.
fn expand_chunk<G>(
    graph: &G,
    visited: &[AtomicBool],
    chunk: &[IndexT],
    next_level: &Mutex<Vec<IndexT>>,
) where
    G: Graph + ?Sized,
{
    let mut local_next_level = Vec::new();

    for &u in chunk {
        for &v in graph.neighbors(u) {
            let flag = &visited[v as usize];
            // joins between levels order these accesses, so relaxed is enough
            if !flag.load(Ordering::Relaxed)
                && flag
                    .compare_exchange(false, true, Ordering::Relaxed, Ordering::Relaxed)
                    .is_ok()
            {
                local_next_level.push(v);
            }
        }
    }

    if !local_next_level.is_empty() {
        next_level
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .append(&mut local_next_level);
    }
}
