//! CLI argument parsing for graphkit
//!
//! Global flags select the input files, configuration, output format and
//! logging; each subcommand runs one graph algorithm.

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use graphkit_core::graph::Algorithm;
pub use graphkit_core::format::OutputFormat;
use parse::{parse_algorithm, parse_format, parse_single_source_algorithm};

/// Graphkit - directed weighted graph algorithms over node/edge files
#[derive(Parser, Debug)]
#[command(name = "graphkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Node file (`id;x;y` per line)
    #[arg(long, global = true, env = "GRAPHKIT_NODES")]
    pub nodes: Option<PathBuf>,

    /// Edge file (`id;from;to[;weight]` per line)
    #[arg(long, global = true, env = "GRAPHKIT_EDGES")]
    pub edges: Option<PathBuf>,

    /// Map directory holding nodes.txt and edges.txt
    #[arg(long, global = true, conflicts_with_all = ["nodes", "edges"])]
    pub map: Option<PathBuf>,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Insert every edge in both directions
    #[arg(long, global = true)]
    pub undirected: bool,

    /// Output format: human, json or records
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `graphkit_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize the loaded graph
    Info,

    /// Depth-first order over the whole graph
    Dfs,

    /// Breadth-first order from a vertex
    Bfs {
        /// Start vertex id
        source: u64,
    },

    /// Topological order (empty when the graph has a cycle)
    Topo,

    /// Report whether the graph is acyclic
    Dag,

    /// Vertex that discovers the most new vertices during BFS
    MaxChildren {
        /// Start vertex id
        source: u64,
    },

    /// Distances and predecessors from a source vertex
    Distances {
        /// Source vertex id
        source: u64,

        /// Single-source algorithm
        #[arg(long, short, default_value = "dijkstra", value_parser = parse_single_source_algorithm)]
        algorithm: Algorithm,
    },

    /// Shortest path between two vertices
    Path {
        /// Origin vertex id
        from: u64,

        /// Destination vertex id
        to: u64,

        /// Shortest-path algorithm
        #[arg(long, short, default_value = "dijkstra", value_parser = parse_algorithm)]
        algorithm: Algorithm,
    },
}
