//! Command dispatch logic for graphwalk
use std::time::Instant;

use graphwalk_core::error::Result;
use graphwalk_core::graph::Algorithm;

use super::Context;
use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, ctx: &Context, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Bfs(args)) => {
            commands::traverse::execute(ctx, args, Some(Algorithm::Bfs), start)
        }

        Some(Commands::Dfs(args)) => {
            commands::traverse::execute(ctx, args, Some(Algorithm::Dfs), start)
        }

        Some(Commands::Run(args)) => commands::traverse::execute(ctx, args, None, start),

        Some(Commands::Compare { graph, pairs }) => {
            commands::compare::execute(ctx, graph, pairs, start)
        }

        Some(Commands::Show { graph }) => commands::show::execute(ctx, graph),

        Some(Commands::Presets) => commands::presets::execute(ctx),
    }
}

fn handle_no_command() -> Result<()> {
    println!("graphwalk {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Breadth-first and depth-first search over small graphs.");
    println!();
    println!("Run `graphwalk --help` for usage information.");
    Ok(())
}
