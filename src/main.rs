//! Graphwalk - breadth-first and depth-first search over small graphs
//!
//! Runs BFS and DFS with alphabetical tie-breaking over hand-authored
//! adjacency lists and reports expansion order, levels and goal paths.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use commands::Context;
use graphwalk_core::config::GlobalConfig;
use graphwalk_core::error::{ExitCode as GraphwalkExitCode, GraphwalkError};
use graphwalk_core::format::OutputFormat;
use graphwalk_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is a global flag, but clap may fail parsing before we can
            // inspect `Cli.format`. If the user requested JSON output, emit a
            // structured error envelope.
            if argv_format_json {
                let error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument => {
                        GraphwalkError::UsageError(err.to_string())
                    }
                    clap::error::ErrorKind::ArgumentConflict => GraphwalkError::DuplicateFormat,
                    _ => GraphwalkError::Other(err.to_string()),
                };

                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let config = match GlobalConfig::load() {
        Ok(config) => {
            tracing::debug!(source = %GlobalConfig::source_display(), "config_loaded");
            config
        }
        Err(e) => return fail(&cli, &e, cli.format.unwrap_or_default()),
    };
    let ctx = Context::new(&cli, config);

    match commands::dispatch::run(&cli, &ctx, start) {
        Ok(()) => ExitCode::from(GraphwalkExitCode::Success as u8),
        Err(e) => fail(&cli, &e, ctx.format),
    }
}

fn fail(cli: &Cli, e: &GraphwalkError, format: OutputFormat) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", e.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", e);
    }

    ExitCode::from(e.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
