//! Directed weighted graph and its algorithms
//!
//! Provides the graph container and the algorithms that run over it:
//! - DFS / BFS traversal and the branching-factor query
//! - Topological sort and cycle detection
//! - Single-source shortest paths (unweighted, Dijkstra, Bellman-Ford)
//! - All-pairs shortest paths (Floyd-Warshall) with path reconstruction
//! - Mutation events for subscribers that mirror the graph

pub mod algos;
pub mod events;
pub mod queue;
pub mod store;
pub mod types;

pub use events::{GraphEvent, GraphObserver, TracingObserver};
pub use queue::IndexedMinHeap;
pub use store::Graph;
pub use types::{
    Algorithm, AllPairs, Content, Edge, PathResult, PathStep, ShortestPaths, Vertex, VertexId,
    UNREACHABLE,
};
