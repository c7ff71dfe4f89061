//! Command dispatch logic for graphkit

use std::time::Instant;

use crate::cli::Cli;
use graphkit_core::error::Result;
use tracing::debug;

mod command;
mod commands;
mod macros;

use command::{Command, CommandContext, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    debug!(elapsed = ?start.elapsed(), command = ?cli.command, "dispatch");

    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
