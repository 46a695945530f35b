//! Traits for graph interfaces

pub type IndexT = u32;

/// Read-only view of a directed graph over the vertices `0..n()`.
///
/// Implementors must only ever return neighbors that are themselves in `0..n()`;
/// the traversals index their per-vertex state with them directly.
pub trait Graph {
    fn n(&self) -> usize;
    fn neighbors(&self, i: IndexT) -> &[IndexT];
}

pub trait MutableGraph {
    /// inserts the edge `from -> to`, returning whether the graph changed
    fn add_edge(&mut self, from: IndexT, to: IndexT) -> bool;
}
