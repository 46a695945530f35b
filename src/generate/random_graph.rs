//! uniform random directed graphs

use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use rand::Rng;

use crate::graph::{AdjacencyGraph, IndexT};

/// seed used by the benchmark binaries unless told otherwise
pub const DEFAULT_SEED: u64 = 42;

/// below this many insertion attempts no progress bar is drawn
const PROGRESS_BAR_CUTOFF: usize = 1_000_000;

/// Generates directed graphs by inserting uniformly random edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGraphGenerator {
    show_progress: bool,
}

impl RandomGraphGenerator {
    pub fn new() -> RandomGraphGenerator {
        RandomGraphGenerator::default()
    }

    /// draw a progress bar for large generations
    pub fn with_progress_bar(mut self) -> RandomGraphGenerator {
        self.show_progress = true;
        self
    }

    /// Builds a graph on `vertices` vertices by attempting `connections` random
    /// edge insertions.
    ///
    /// Self-loops are skipped and repeated edges are dropped by
    /// [`AdjacencyGraph::add_edge`], so the graph usually ends up with slightly
    /// fewer than `connections` edges. Graphs with fewer than two vertices have no
    /// edges at all. Endpoints are only drawn from ids `IndexT` can hold, so vertices
    /// past `IndexT::MAX` stay isolated. The result depends only on the state of `rng`.
    pub fn generate<R>(&self, rng: &mut R, vertices: usize, connections: usize) -> AdjacencyGraph
    where
        R: Rng + ?Sized,
    {
        let mut graph = AdjacencyGraph::new(vertices);
        let max_id = match max_vertex_id(vertices) {
            Some(max_id) if max_id > 0 => max_id,
            _ => return graph,
        };

        for _ in (0..connections).progress_with(self.progress_bar(connections)) {
            let from = rng.random_range(0..=max_id);
            let to = rng.random_range(0..=max_id);
            if from != to {
                graph.add_edge(from, to);
            }
        }

        graph
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress || len < PROGRESS_BAR_CUTOFF {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{msg} {wide_bar:.green/gray} {pos}/{len} [{elapsed_precise}]({eta})")
        {
            pb.set_style(style.progress_chars("█▓░"));
        }
        pb.set_message("Generating edges");
        pb
    }
}

/// largest vertex id that is both in the graph and representable as `IndexT`
fn max_vertex_id(vertices: usize) -> Option<IndexT> {
    let last = vertices.checked_sub(1)?;
    Some(IndexT::try_from(last).unwrap_or(IndexT::MAX))
}
