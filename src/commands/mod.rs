//! CLI commands for graphwalk

pub mod compare;
pub mod dispatch;
pub mod presets;
pub mod show;
pub mod traverse;

use graphwalk_core::config::GlobalConfig;
use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::{find_preset, load_graph, Graph, Preset, DEFAULT_PRESET};

use crate::cli::{Cli, GraphArgs};

/// Settings resolved from CLI flags and the config file
#[derive(Debug, Clone)]
pub struct Context {
    pub format: OutputFormat,
    pub quiet: bool,
    pub separator: String,
    pub default_preset: Option<String>,
}

impl Context {
    pub fn new(cli: &Cli, config: GlobalConfig) -> Self {
        Self {
            format: cli.format.or(config.format).unwrap_or_default(),
            quiet: cli.quiet,
            separator: config.separator().to_string(),
            default_preset: config.default_preset,
        }
    }
}

/// Where the graph for a command came from
#[derive(Debug)]
pub enum GraphSource {
    File(String),
    Preset(&'static Preset),
}

impl GraphSource {
    pub fn label(&self) -> String {
        match self {
            GraphSource::File(path) => path.clone(),
            GraphSource::Preset(preset) => format!("preset:{}", preset.name),
        }
    }
}

/// Resolve the graph: `--graph`, then `--preset`, then the configured
/// default preset, then the built-in default.
pub fn resolve_graph(ctx: &Context, args: &GraphArgs) -> Result<(Graph, GraphSource)> {
    if let Some(path) = &args.graph {
        let graph = load_graph(path)?;
        return Ok((graph, GraphSource::File(path.display().to_string())));
    }

    let name = args
        .preset
        .as_deref()
        .or(ctx.default_preset.as_deref())
        .unwrap_or(DEFAULT_PRESET);
    let preset = find_preset(name)?;
    tracing::debug!(preset = preset.name, "using preset graph");
    Ok((preset.graph(), GraphSource::Preset(preset)))
}
