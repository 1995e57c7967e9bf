//! CLI argument parsing for graphwalk
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod format;
pub mod parse;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use graphwalk_core::format::OutputFormat;
use parse::{parse_output_format, parse_pair, NodePair};

/// Graphwalk - BFS and DFS over small hand-authored graphs
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or filter directives
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Graph selection shared by every graph command
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Graph file (.toml, .json, .yaml); takes precedence over --preset
    #[arg(long, short = 'g')]
    pub graph: Option<PathBuf>,

    /// Built-in graph (see `graphwalk presets`)
    #[arg(long, short = 'p', env = "GRAPHWALK_PRESET")]
    pub preset: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct TraverseArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Start node
    #[arg(long, short)]
    pub start: String,

    /// Goal node; traversal stops there and reports the path
    #[arg(long)]
    pub goal: Option<String>,

    /// Include the process trace (expansions, discoveries, skips)
    #[arg(long)]
    pub trace: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first search: expansion order, levels, shortest path
    Bfs(TraverseArgs),

    /// Depth-first search: expansion order, depths, discovery path
    Dfs(TraverseArgs),

    /// Run BFS and DFS from the same start node
    Run(TraverseArgs),

    /// Compare BFS and DFS paths over start/goal pairs
    Compare {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start/goal pair as START:GOAL (repeatable; defaults to the preset's pairs)
        #[arg(long = "pair", value_parser = parse_pair, action = clap::ArgAction::Append)]
        pairs: Vec<NodePair>,
    },

    /// Print the adjacency list of the selected graph
    Show {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// List built-in graphs
    Presets,
}
