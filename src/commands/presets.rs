//! Presets command: list built-in graphs
use graphwalk_core::error::Result;
use graphwalk_core::graph::{Preset, PRESETS};
use serde::Serialize;

use super::Context;

/// Execute the presets command
pub fn execute(ctx: &Context) -> Result<()> {
    crate::output_by_format_result!(ctx.format,
        json => output_json(),
        human => { output_human() },
        records => { output_records() }
    )
}

fn output_human() {
    let width = PRESETS.iter().map(|p| p.name.len()).max().unwrap_or(0);
    for preset in PRESETS {
        println!(
            "{:<width$}  {:<10}  {}",
            preset.name,
            if preset.is_directed() { "directed" } else { "undirected" },
            preset.description,
            width = width
        );
    }
}

/// One row of the JSON preset listing
#[derive(Debug, Serialize)]
struct PresetSummary {
    name: &'static str,
    description: &'static str,
    directed: bool,
    nodes: usize,
    edges: usize,
    pairs: Vec<String>,
}

impl PresetSummary {
    fn new(preset: &Preset) -> Self {
        let graph = preset.graph();
        Self {
            name: preset.name,
            description: preset.description,
            directed: preset.is_directed(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            pairs: preset
                .comparison_pairs()
                .iter()
                .map(|(start, goal)| format!("{}:{}", start, goal))
                .collect(),
        }
    }
}

fn output_json() -> Result<()> {
    let presets: Vec<PresetSummary> = PRESETS.iter().map(PresetSummary::new).collect();
    println!("{}", serde_json::to_string_pretty(&presets)?);
    Ok(())
}

fn output_records() {
    for preset in PRESETS {
        println!(
            "P {} directed={} description=\"{}\"",
            preset.name,
            preset.is_directed(),
            graphwalk_core::format::escape_quotes(preset.description)
        );
    }
}
