//! `graphkit topo` and `dag` commands

use crate::cli::{Cli, OutputFormat};
use crate::commands::{emit, records_header};
use graphkit_core::error::Result;
use graphkit_core::format::join;
use graphkit_core::graph::Graph;

/// Execute the topo command
pub fn execute_topo(cli: &Cli, graph: &Graph<u64>) -> Result<()> {
    emit(&render_topo(cli.format, cli.quiet, graph)?);
    Ok(())
}

/// Execute the dag command
pub fn execute_dag(cli: &Cli, graph: &Graph<u64>) -> Result<()> {
    let acyclic = graph.is_dag();
    let output = match cli.format {
        OutputFormat::Human => if acyclic { "acyclic" } else { "cyclic" }.to_string(),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&serde_json::json!({ "acyclic": acyclic }))?
        }
        OutputFormat::Records => {
            records_header("dag", graph, &format!("acyclic={}", acyclic))
        }
    };
    emit(&output);
    Ok(())
}

fn render_topo(format: OutputFormat, quiet: bool, graph: &Graph<u64>) -> Result<String> {
    let order = graph.topological_sort();
    // an empty graph has an empty order and is still acyclic
    let acyclic = !order.is_empty() || graph.is_empty();

    let output = match format {
        OutputFormat::Human => {
            if acyclic {
                join(&order, " ")
            } else if quiet {
                String::new()
            } else {
                "graph has a cycle; no topological order".to_string()
            }
        }
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "acyclic": acyclic,
            "order": order,
        }))?,
        OutputFormat::Records => {
            let mut lines = vec![records_header(
                "topo",
                graph,
                &format!("acyclic={}", acyclic),
            )];
            lines.extend(order.iter().map(|v| format!("V {}", v)));
            lines.join("\n")
        }
    };
    Ok(output)
}
