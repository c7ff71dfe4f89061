//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use graphkit_core::bail_usage;
use graphkit_core::config::Config;
use graphkit_core::error::Result;
use graphkit_core::graph::Graph;
use graphkit_core::load;

/// Node and edge file paths from `--map` or `--nodes`/`--edges`
pub fn resolve_input_paths(cli: &Cli) -> Result<(PathBuf, PathBuf)> {
    if let Some(dir) = &cli.map {
        return Ok(load::map_files(dir));
    }
    match (&cli.nodes, &cli.edges) {
        (Some(nodes), Some(edges)) => Ok((nodes.clone(), edges.clone())),
        (None, _) => bail_usage!("missing --nodes <FILE> (or --map <DIR>)"),
        (_, None) => bail_usage!("missing --edges <FILE> (or --map <DIR>)"),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Configuration with command-line overrides applied
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::resolve(self.cli.config.as_deref())?;
        if self.cli.undirected {
            config.loader.undirected = true;
        }
        Ok(config)
    }

    /// Load the graph named on the command line
    pub fn load_graph(&self, config: &Config) -> Result<Graph<u64>> {
        let (nodes, edges) = resolve_input_paths(self.cli)?;
        let graph = load::load_files(&nodes, &edges, &config.loader)?;
        super::trace_command!(self.cli, self.start, "load_graph");
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphkit {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Directed weighted graph algorithms over node/edge files.");
        println!();
        println!("Run `graphkit --help` for usage information.");
        Ok(())
    }
}
