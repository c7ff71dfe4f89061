//! `graphkit dfs`, `bfs` and `max-children` commands

use crate::cli::{Cli, OutputFormat};
use crate::commands::{emit, records_header};
use graphkit_core::error::Result;
use graphkit_core::format::join;
use graphkit_core::graph::Graph;

/// Execute the dfs command
pub fn execute_dfs(cli: &Cli, graph: &Graph<u64>) -> Result<()> {
    let order = graph.dfs();
    emit(&render_order(cli.format, graph, "dfs", None, &order)?);
    Ok(())
}

/// Execute the bfs command
pub fn execute_bfs(cli: &Cli, graph: &Graph<u64>, source: u64) -> Result<()> {
    let order = graph.bfs(&source)?;
    emit(&render_order(cli.format, graph, "bfs", Some(source), &order)?);
    Ok(())
}

/// Execute the max-children command
pub fn execute_max_children(cli: &Cli, graph: &Graph<u64>, source: u64) -> Result<()> {
    let (vertex, children) = graph.max_new_children(&source)?;
    let output = match cli.format {
        OutputFormat::Human => format!(
            "{} discovers {} new vertices (bfs from {})",
            vertex, children, source
        ),
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "source": source,
            "vertex": vertex,
            "children": children,
        }))?,
        OutputFormat::Records => format!(
            "{}\nM {} {}",
            records_header("max-children", graph, &format!("source={}", source)),
            vertex,
            children
        ),
    };
    emit(&output);
    Ok(())
}

/// Render a vertex order for dfs/bfs
fn render_order(
    format: OutputFormat,
    graph: &Graph<u64>,
    mode: &str,
    source: Option<u64>,
    order: &[u64],
) -> Result<String> {
    let output = match format {
        OutputFormat::Human => join(order, " "),
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "mode": mode,
            "source": source,
            "order": order,
        }))?,
        OutputFormat::Records => {
            let extra = source.map(|s| format!("source={}", s)).unwrap_or_default();
            let mut lines = vec![records_header(mode, graph, &extra)];
            lines.extend(order.iter().map(|v| format!("V {}", v)));
            lines.join("\n")
        }
    };
    Ok(output)
}
