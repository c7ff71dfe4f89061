//! Graph algorithm implementations
//!
//! Each module adds methods to [`Graph`](crate::graph::Graph):
//! - `traversal`: DFS, BFS and the branching-factor query
//! - `ordering`: topological sort and cycle detection
//! - `shortest_path`: unweighted and Bellman-Ford runs plus path queries
//! - `dijkstra`: Dijkstra over the indexed priority queue
//! - `floyd_warshall`: all-pairs distances and next-hop paths
//! - `shared`: per-call scratch tables

pub mod dijkstra;
pub mod floyd_warshall;
pub mod ordering;
pub mod shared;
pub mod shortest_path;
pub mod traversal;
