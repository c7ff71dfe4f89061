//! Graphkit Core Library
//!
//! In-memory directed, weighted graphs with traversal, ordering and
//! shortest-path algorithms.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod load;
pub mod logging;

pub use error::{GraphError, Result};
pub use graph::{Graph, VertexId};
