//! Graphkit - directed weighted graph algorithms from the command line
//!
//! Loads a graph from node and edge files and runs traversals, ordering and
//! shortest-path algorithms over it.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use graphkit_core::error::{ExitCode as GraphExitCode, GraphError};
use graphkit_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return bad_arguments(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(GraphExitCode::Success),
        Err(e) => {
            report(&cli, &e);
            exit_with(e.exit_code())
        }
    }
}

/// Handle a command line clap rejected. Scripts asking for `--format json`
/// get the same error envelope as any other failure.
fn bad_arguments(err: clap::Error) -> ExitCode {
    if !json_requested(env::args().skip(1)) {
        err.exit();
    }

    let error = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument => GraphError::UsageError(err.to_string()),
        _ => GraphError::Other(err.to_string()),
    };
    eprintln!("{}", error.to_json());
    exit_with(error.exit_code())
}

/// Print a failed command's error on stderr in the selected format
fn report(cli: &Cli, error: &GraphError) {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        _ if cli.quiet => {}
        _ => eprintln!("error: {}", error),
    }
}

fn exit_with(code: GraphExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Whether raw arguments select JSON output, checked before clap has
/// produced a `Cli`
fn json_requested(mut args: impl Iterator<Item = String>) -> bool {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().is_some_and(|v| v == "json") => return true,
            _ => {}
        }
    }
    false
}
