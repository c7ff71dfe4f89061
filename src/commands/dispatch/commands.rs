//! Command implementations for all graphkit commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use graphkit_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::commands::{info, order, paths, traverse};
    use crate::commands::dispatch::trace_command;

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        let config = ctx.config()?;
        let mut graph = ctx.load_graph(&config)?;
        let cli = ctx.cli;

        let result = match cmd {
            Commands::Info => info::execute(cli, &graph),
            Commands::Dfs => traverse::execute_dfs(cli, &graph),
            Commands::Bfs { source } => traverse::execute_bfs(cli, &graph, *source),
            Commands::MaxChildren { source } => {
                traverse::execute_max_children(cli, &graph, *source)
            }
            Commands::Topo => order::execute_topo(cli, &graph),
            Commands::Dag => order::execute_dag(cli, &graph),
            Commands::Distances { source, algorithm } => {
                paths::execute_distances(cli, &config, &mut graph, *source, *algorithm)
            }
            Commands::Path {
                from,
                to,
                algorithm,
            } => paths::execute_path(cli, &config, &mut graph, *from, *to, *algorithm),
        };

        trace_command!(cli, ctx.start, "execute_command");
        result
    }
}
