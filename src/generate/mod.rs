//! Random graph generation for benchmarks and tests

mod random_graph;

pub use random_graph::*;
