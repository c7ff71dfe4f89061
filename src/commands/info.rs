//! `graphkit info` command - summarize the loaded graph

use crate::cli::{Cli, OutputFormat};
use crate::commands::{emit, records_header};
use graphkit_core::error::Result;
use graphkit_core::graph::Graph;

/// Execute the info command
pub fn execute(cli: &Cli, graph: &Graph<u64>) -> Result<()> {
    emit(&render(cli.format, graph)?);
    Ok(())
}

fn render(format: OutputFormat, graph: &Graph<u64>) -> Result<String> {
    let acyclic = graph.is_dag();
    let max_outdegree = graph.vertices().map(|v| v.outdegree()).max().unwrap_or(0);

    let output = match format {
        OutputFormat::Human => format!(
            "vertices: {}\nedges: {}\nmax outdegree: {}\nacyclic: {}",
            graph.num_vertices(),
            graph.num_edges(),
            max_outdegree,
            if acyclic { "yes" } else { "no" }
        ),
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "vertices": graph.num_vertices(),
            "edges": graph.num_edges(),
            "max_outdegree": max_outdegree,
            "acyclic": acyclic,
        }))?,
        OutputFormat::Records => records_header(
            "info",
            graph,
            &format!("max_outdegree={} acyclic={}", max_outdegree, acyclic),
        ),
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph<u64> {
        let mut graph = Graph::new();
        for v in 1..=3 {
            graph.add_vertex(v).unwrap();
        }
        graph.add_edge(&1, &2, 1.0).unwrap();
        graph.add_edge(&1, &3, 1.0).unwrap();
        graph.add_edge(&2, &3, 1.0).unwrap();
        graph
    }

    #[test]
    fn test_info_human() {
        let output = render(OutputFormat::Human, &triangle()).unwrap();
        assert!(output.contains("vertices: 3"));
        assert!(output.contains("edges: 3"));
        assert!(output.contains("max outdegree: 2"));
        assert!(output.contains("acyclic: yes"));
    }

    #[test]
    fn test_info_json() {
        let output = render(OutputFormat::Json, &triangle()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["vertices"], 3);
        assert_eq!(value["acyclic"], true);
    }

    #[test]
    fn test_info_records() {
        let mut graph = triangle();
        graph.add_edge(&3, &1, 1.0).unwrap();
        let output = render(OutputFormat::Records, &graph).unwrap();
        assert_eq!(
            output,
            "H graphkit=1 records=1 mode=info vertices=3 edges=4 max_outdegree=2 acyclic=false"
        );
    }
}
