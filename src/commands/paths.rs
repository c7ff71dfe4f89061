//! `graphkit distances` and `path` commands

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use crate::commands::{emit, records_header};
use graphkit_core::config::Config;
use graphkit_core::error::Result;
use graphkit_core::format::{format_distance, join};
use graphkit_core::graph::{Algorithm, Graph, PathResult, PathStep};
use graphkit_core::trace_time;

/// Execute the distances command
pub fn execute_distances(
    cli: &Cli,
    config: &Config,
    graph: &mut Graph<u64>,
    source: u64,
    algorithm: Algorithm,
) -> Result<()> {
    let start = Instant::now();
    graph.run_single_source(algorithm, &source)?;
    trace_time!(start, "single_source", vertices = graph.num_vertices());

    let table = graph.distance_table()?;
    let output = render_distances(
        cli.format,
        config.output.precision,
        graph,
        source,
        algorithm,
        &table,
    )?;
    emit(&output);
    Ok(())
}

/// Execute the path command
pub fn execute_path(
    cli: &Cli,
    config: &Config,
    graph: &mut Graph<u64>,
    from: u64,
    to: u64,
    algorithm: Algorithm,
) -> Result<()> {
    let start = Instant::now();
    let result = graph.shortest_path_between(&from, &to, algorithm)?;
    trace_time!(start, "shortest_path", algorithm = algorithm.as_str());

    let output = render_path(cli.format, config.output.precision, graph, &result)?;
    emit(&output);
    Ok(())
}

fn render_distances(
    format: OutputFormat,
    precision: usize,
    graph: &Graph<u64>,
    source: u64,
    algorithm: Algorithm,
    table: &[PathStep<u64>],
) -> Result<String> {
    let output = match format {
        OutputFormat::Human => table
            .iter()
            .map(|step| {
                format!(
                    "{}\t{}\t{}",
                    step.vertex,
                    format_distance(step.distance, precision),
                    step.predecessor
                        .map_or_else(|| "-".to_string(), |p| p.to_string())
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "source": source,
            "algorithm": algorithm,
            "distances": table,
        }))?,
        OutputFormat::Records => {
            let mut lines = vec![records_header(
                "distances",
                graph,
                &format!("source={} algorithm={}", source, algorithm),
            )];
            lines.extend(table.iter().map(|step| {
                format!(
                    "D {} {} {}",
                    step.vertex,
                    format_distance(step.distance, precision),
                    step.predecessor
                        .map_or_else(|| "-".to_string(), |p| p.to_string())
                )
            }));
            lines.join("\n")
        }
    };
    Ok(output)
}

fn render_path(
    format: OutputFormat,
    precision: usize,
    graph: &Graph<u64>,
    result: &PathResult<u64>,
) -> Result<String> {
    let output = match format {
        OutputFormat::Human => {
            if result.found {
                format!(
                    "{} (distance {})",
                    join(&result.path, " -> "),
                    format_distance(result.distance, precision)
                )
            } else {
                format!("no path from {} to {}", result.from, result.to)
            }
        }
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Records => {
            let mut lines = vec![records_header(
                "path",
                graph,
                &format!(
                    "from={} to={} algorithm={} found={} distance={}",
                    result.from,
                    result.to,
                    result.algorithm,
                    result.found,
                    format_distance(result.distance, precision)
                ),
            )];
            lines.extend(result.path.iter().map(|v| format!("P {}", v)));
            lines.join("\n")
        }
    };
    Ok(output)
}
