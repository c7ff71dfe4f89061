//! Graph data loader
//!
//! Reads node records `id;x;y` and edge records `id;from;to[;weight]` from
//! text and builds a `Graph<u64>` keyed by node id. The separator comes from
//! [`LoaderConfig`]; blank lines and lines starting with `#` are skipped.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, info};

use crate::bail_not_found;
use crate::config::{LoaderConfig, Weighting};
use crate::error::{GraphError, Result};
use crate::graph::{Graph, TracingObserver};

/// A positioned node
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeRecord {
    pub id: u64,
    pub x: f64,
    pub y: f64,
}

/// A directed edge between two node ids
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeRecord {
    pub id: u64,
    pub from: u64,
    pub to: u64,
    pub weight: Option<f64>,
}

/// Non-empty, non-comment lines with their 1-based line numbers, split into
/// trimmed fields
fn records<'a>(
    text: &'a str,
    separator: char,
) -> impl Iterator<Item = (usize, Vec<&'a str>)> + 'a {
    text.lines().enumerate().filter_map(move |(n, line)| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        Some((n + 1, line.split(separator).map(str::trim).collect()))
    })
}

fn field<V: FromStr>(
    fields: &[&str],
    index: usize,
    name: &str,
    path: Option<&Path>,
    line: usize,
) -> Result<V> {
    let raw = fields[index];
    raw.parse().map_err(|_| {
        GraphError::parse(
            path.map(Path::to_path_buf),
            line,
            format!("invalid {} '{}'", name, raw),
        )
    })
}

fn arity_error(path: Option<&Path>, line: usize, expected: &str, found: usize) -> GraphError {
    GraphError::parse(
        path.map(Path::to_path_buf),
        line,
        format!("expected {} fields, found {}", expected, found),
    )
}

/// Parse node records
pub fn parse_nodes(text: &str, config: &LoaderConfig) -> Result<Vec<NodeRecord>> {
    parse_nodes_at(text, config, None)
}

fn parse_nodes_at(
    text: &str,
    config: &LoaderConfig,
    path: Option<&Path>,
) -> Result<Vec<NodeRecord>> {
    records(text, config.separator)
        .map(|(line, fields)| {
            if fields.len() != 3 {
                return Err(arity_error(path, line, "3", fields.len()));
            }
            Ok(NodeRecord {
                id: field(&fields, 0, "node id", path, line)?,
                x: field(&fields, 1, "x coordinate", path, line)?,
                y: field(&fields, 2, "y coordinate", path, line)?,
            })
        })
        .collect()
}

/// Parse edge records. The weight column is optional.
pub fn parse_edges(text: &str, config: &LoaderConfig) -> Result<Vec<EdgeRecord>> {
    parse_edges_at(text, config, None)
}

fn parse_edges_at(
    text: &str,
    config: &LoaderConfig,
    path: Option<&Path>,
) -> Result<Vec<EdgeRecord>> {
    records(text, config.separator)
        .map(|(line, fields)| {
            if !(3..=4).contains(&fields.len()) {
                return Err(arity_error(path, line, "3 or 4", fields.len()));
            }
            let weight = match fields.get(3) {
                Some(_) => {
                    let w: f64 = field(&fields, 3, "weight", path, line)?;
                    if !w.is_finite() {
                        return Err(GraphError::parse(
                            path.map(Path::to_path_buf),
                            line,
                            format!("weight '{}' is not a finite number", fields[3]),
                        ));
                    }
                    Some(w)
                }
                None => None,
            };
            Ok(EdgeRecord {
                id: field(&fields, 0, "edge id", path, line)?,
                from: field(&fields, 1, "source id", path, line)?,
                to: field(&fields, 2, "destination id", path, line)?,
                weight,
            })
        })
        .collect()
}

/// Build a graph from parsed records.
///
/// Every node is added first, then every edge. An edge without an explicit
/// weight gets one from the configured [`Weighting`]. With `undirected` set
/// the reverse edge is added too (once for self-loops). Mutations are
/// reported through a [`TracingObserver`].
pub fn build_graph(
    nodes: &[NodeRecord],
    edges: &[EdgeRecord],
    config: &LoaderConfig,
) -> Result<Graph<u64>> {
    let mut graph = Graph::new();
    graph.subscribe(Box::new(TracingObserver));
    let mut position = HashMap::with_capacity(nodes.len());
    for node in nodes {
        graph.add_vertex(node.id)?;
        position.insert(node.id, (node.x, node.y));
    }

    for edge in edges {
        let weight = match (edge.weight, config.weighting) {
            (Some(w), _) => w,
            (None, Weighting::Unit) => 1.0,
            (None, Weighting::Euclidean) => {
                let Some(&(x1, y1)) = position.get(&edge.from) else {
                    bail_not_found!(edge.from);
                };
                let Some(&(x2, y2)) = position.get(&edge.to) else {
                    bail_not_found!(edge.to);
                };
                (x2 - x1).hypot(y2 - y1)
            }
        };
        graph.add_edge(&edge.from, &edge.to, weight)?;
        if config.undirected && edge.from != edge.to {
            graph.add_edge(&edge.to, &edge.from, weight)?;
        }
    }

    debug!(
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        "built graph"
    );
    Ok(graph)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| GraphError::io_operation("read", path.display(), e))
}

/// Read, parse and build a graph from a node file and an edge file
#[tracing::instrument(skip(config))]
pub fn load_files(
    nodes_path: &Path,
    edges_path: &Path,
    config: &LoaderConfig,
) -> Result<Graph<u64>> {
    let nodes = parse_nodes_at(&read(nodes_path)?, config, Some(nodes_path))?;
    let edges = parse_edges_at(&read(edges_path)?, config, Some(edges_path))?;
    let graph = build_graph(&nodes, &edges, config)?;
    info!(
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        "loaded graph"
    );
    Ok(graph)
}

/// Paths of the node and edge files of a map directory (`nodes.txt`,
/// `edges.txt`)
pub fn map_files(dir: &Path) -> (PathBuf, PathBuf) {
    (dir.join("nodes.txt"), dir.join("edges.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config() -> LoaderConfig {
        LoaderConfig::default()
    }

    #[test]
    fn test_parse_nodes() {
        let text = "# id;x;y\n0;300;50\n\n 1 ; 318 ; 58 \n";
        let nodes = parse_nodes(text, &config()).unwrap();
        assert_eq!(
            nodes,
            vec![
                NodeRecord { id: 0, x: 300.0, y: 50.0 },
                NodeRecord { id: 1, x: 318.0, y: 58.0 },
            ]
        );
    }

    #[test]
    fn test_parse_nodes_reports_line() {
        let text = "0;1;2\n1;oops;2\n";
        match parse_nodes(text, &config()) {
            Err(GraphError::Parse { line, reason, path }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("x coordinate"));
                assert!(path.is_none());
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_nodes_wrong_arity() {
        assert!(matches!(
            parse_nodes("0;1\n", &config()),
            Err(GraphError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_edges_optional_weight() {
        let text = "0;1;2\n1;2;3;4.5\n";
        let edges = parse_edges(text, &config()).unwrap();
        assert_eq!(edges[0].weight, None);
        assert_eq!(edges[1].weight, Some(4.5));
        assert_eq!((edges[1].from, edges[1].to), (2, 3));
        assert!(parse_edges("0;1;2;3;4\n", &config()).is_err());
    }

    #[test]
    fn test_parse_edges_rejects_non_finite_weight() {
        for weight in ["NaN", "inf", "-inf", "infinity"] {
            let text = format!("0;1;2;1\n1;2;3;{}\n", weight);
            match parse_edges(&text, &config()) {
                Err(GraphError::Parse { line, reason, .. }) => {
                    assert_eq!(line, 2);
                    assert!(reason.contains("finite"), "{}", reason);
                }
                other => panic!("expected parse error for {}, got {:?}", weight, other),
            }
        }
    }

    #[test]
    fn test_custom_separator() {
        let cfg = LoaderConfig {
            separator: ',',
            ..LoaderConfig::default()
        };
        let nodes = parse_nodes("7,1.5,2\n", &cfg).unwrap();
        assert_eq!(nodes[0].id, 7);
        assert_eq!(nodes[0].x, 1.5);
    }

    #[test]
    fn test_build_graph_euclidean_and_explicit() {
        let nodes = [
            NodeRecord { id: 1, x: 0.0, y: 0.0 },
            NodeRecord { id: 2, x: 3.0, y: 4.0 },
        ];
        let edges = [
            EdgeRecord { id: 0, from: 1, to: 2, weight: None },
            EdgeRecord { id: 1, from: 2, to: 1, weight: Some(9.0) },
        ];
        let graph = build_graph(&nodes, &edges, &config()).unwrap();
        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.edges(&1).unwrap()[0].weight, 5.0);
        assert_eq!(graph.edges(&2).unwrap()[0].weight, 9.0);
    }

    #[test]
    fn test_build_graph_unit_undirected() {
        let nodes = [
            NodeRecord { id: 1, x: 0.0, y: 0.0 },
            NodeRecord { id: 2, x: 3.0, y: 4.0 },
        ];
        let edges = [
            EdgeRecord { id: 0, from: 1, to: 2, weight: None },
            EdgeRecord { id: 1, from: 2, to: 2, weight: None },
        ];
        let cfg = LoaderConfig {
            weighting: Weighting::Unit,
            undirected: true,
            ..LoaderConfig::default()
        };
        let graph = build_graph(&nodes, &edges, &cfg).unwrap();
        // 1<->2 twice, self-loop once
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.edges(&2).unwrap()[0].weight, 1.0);
    }

    #[test]
    fn test_build_graph_unknown_node() {
        let nodes = [NodeRecord { id: 1, x: 0.0, y: 0.0 }];
        let edges = [EdgeRecord { id: 0, from: 1, to: 5, weight: Some(1.0) }];
        assert!(matches!(
            build_graph(&nodes, &edges, &config()),
            Err(GraphError::VertexNotFound { .. })
        ));
    }

    #[test]
    fn test_build_graph_duplicate_node() {
        let nodes = [
            NodeRecord { id: 1, x: 0.0, y: 0.0 },
            NodeRecord { id: 1, x: 1.0, y: 1.0 },
        ];
        assert!(matches!(
            build_graph(&nodes, &[], &config()),
            Err(GraphError::AlreadyExists { .. })
        ));
    }

    #[test]
    fn test_load_files() {
        let dir = tempdir().unwrap();
        let (nodes_path, edges_path) = map_files(dir.path());
        fs::write(&nodes_path, "0;0;0\n1;0;2\n2;2;2\n").unwrap();
        fs::write(&edges_path, "0;0;1\n1;1;2\n").unwrap();

        let mut graph = load_files(&nodes_path, &edges_path, &config()).unwrap();
        assert_eq!(graph.num_vertices(), 3);
        graph.dijkstra_shortest_path(&0).unwrap();
        assert_eq!(graph.distance(&2).unwrap(), 4.0);
        assert_eq!(graph.path_to(&2).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_load_files_errors_carry_path() {
        let dir = tempdir().unwrap();
        let (nodes_path, edges_path) = map_files(dir.path());
        fs::write(&nodes_path, "0;0;0\n").unwrap();
        fs::write(&edges_path, "0;0\n").unwrap();

        match load_files(&nodes_path, &edges_path, &config()) {
            Err(GraphError::Parse { path, line, .. }) => {
                assert_eq!(path, Some(edges_path.clone()));
                assert_eq!(line, 1);
            }
            other => panic!("expected parse error, got {:?}", other),
        }

        let missing = dir.path().join("missing.txt");
        assert!(matches!(
            load_files(&missing, &edges_path, &config()),
            Err(GraphError::FailedOperation { .. })
        ));
    }
}
