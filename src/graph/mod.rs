//! Graph implementation and associated functionality


mod adjacency_graph;
mod graph_traits;

pub use adjacency_graph::*;
pub use graph_traits::*;
