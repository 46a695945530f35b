//! a directed graph using one out-edge list per vertex

use rayon::prelude::*;

use super::{Graph, IndexT, MutableGraph};

/// Directed graph with a fixed vertex count and deduplicated out-edge lists.
///
/// Edges can only be added, never removed. Every stored destination is in
/// `0..n()`, and no out-edge list holds the same destination twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    neighborhoods: Vec<Vec<IndexT>>,
}

impl AdjacencyGraph {
    /// constructs a graph with `n` vertices and no edges
    pub fn new(n: usize) -> AdjacencyGraph {
        AdjacencyGraph {
            neighborhoods: vec![Vec::new(); n],
        }
    }

    /// returns the number of vertices in the graph
    pub fn n(&self) -> usize {
        self.neighborhoods.len()
    }

    pub fn contains_vertex(&self, i: IndexT) -> bool {
        (i as usize) < self.n()
    }

    /// adds the directed edge `from -> to`.
    ///
    /// Out-of-range endpoints and edges that are already present are ignored.
    /// Returns `true` only when the edge was actually inserted.
    pub fn add_edge(&mut self, from: IndexT, to: IndexT) -> bool {
        if !self.contains_vertex(from) || !self.contains_vertex(to) {
            return false;
        }

        let neighborhood = &mut self.neighborhoods[from as usize];
        if neighborhood.contains(&to) {
            return false;
        }
        neighborhood.push(to);
        true
    }

    /// returns the out-neighbors of a vertex, or an empty slice if it does not exist
    pub fn get_neighborhood(&self, i: IndexT) -> &[IndexT] {
        self.neighborhoods
            .get(i as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn degree(&self, i: IndexT) -> usize {
        self.get_neighborhood(i).len()
    }

    /// sum of degrees of all vertices
    pub fn total_edges(&self) -> usize {
        self.neighborhoods.par_iter().map(|n| n.len()).sum()
    }

    /// maximum out-degree of the graph
    pub fn max_degree(&self) -> usize {
        self.neighborhoods
            .par_iter()
            .map(|n| n.len())
            .max()
            .unwrap_or(0)
    }
}

impl Graph for AdjacencyGraph {
    fn n(&self) -> usize {
        self.neighborhoods.len()
    }

    fn neighbors(&self, i: IndexT) -> &[IndexT] {
        self.get_neighborhood(i)
    }
}

impl MutableGraph for AdjacencyGraph {
    fn add_edge(&mut self, from: IndexT, to: IndexT) -> bool {
        AdjacencyGraph::add_edge(self, from, to)
    }
}

/// Builds a graph from raw neighborhoods. Every edge goes through `add_edge`,
/// so out-of-range and repeated destinations are dropped, as are the out-edges of
/// any vertex whose id does not fit in `IndexT`.
impl From<Vec<Vec<IndexT>>> for AdjacencyGraph {
    fn from(neighborhoods: Vec<Vec<IndexT>>) -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::new(neighborhoods.len());
        for (from, neighborhood) in neighborhoods.into_iter().enumerate() {
            // vertices past IndexT::MAX cannot be named as edge sources
            let Ok(from) = IndexT::try_from(from) else {
                break;
            };
            for to in neighborhood {
                graph.add_edge(from, to);
            }
        }
        graph
    }
}
