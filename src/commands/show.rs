//! Show command: print the selected graph's adjacency list
use graphwalk_core::error::Result;
use graphwalk_core::format::escape_quotes;
use graphwalk_core::graph::{Graph, NodeId};
use serde_json::json;

use super::{resolve_graph, Context, GraphSource};
use crate::cli::GraphArgs;

/// Execute the show command
pub fn execute(ctx: &Context, args: &GraphArgs) -> Result<()> {
    let (graph, source) = resolve_graph(ctx, args)?;

    crate::output_by_format_result!(ctx.format,
        json => output_json(&graph, &source),
        human => { output_human(ctx, &graph, &source) },
        records => { output_records(&graph, &source) }
    )
}

fn output_human(ctx: &Context, graph: &Graph, source: &GraphSource) {
    if !ctx.quiet {
        println!(
            "{} ({}, {} nodes, {} edges)",
            source.label(),
            if graph.is_directed() { "directed" } else { "undirected" },
            graph.node_count(),
            graph.edge_count()
        );
    }

    for (node, neighbors) in graph.adjacency() {
        let names: Vec<&str> = neighbors.iter().map(NodeId::as_str).collect();
        println!("{}: {}", node, names.join(", "));
    }

    let dangling = graph.dangling_neighbors();
    if !dangling.is_empty() && !ctx.quiet {
        let names: Vec<&str> = dangling.into_iter().map(NodeId::as_str).collect();
        println!("Sinks without entries: {}", names.join(", "));
    }
}

fn output_json(graph: &Graph, source: &GraphSource) -> Result<()> {
    let output = json!({
        "graph": source.label(),
        "directed": graph.is_directed(),
        "nodes": graph.adjacency(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(graph: &Graph, source: &GraphSource) {
    println!(
        "H graphwalk=1 records=1 mode=show graph=\"{}\" directed={} nodes={} edges={}",
        escape_quotes(&source.label()),
        graph.is_directed(),
        graph.node_count(),
        graph.edge_count()
    );
    for (node, neighbors) in graph.adjacency() {
        if neighbors.is_empty() {
            println!("N {}", node);
        }
        for neighbor in neighbors {
            println!("E {} {}", node, neighbor);
        }
    }
}
