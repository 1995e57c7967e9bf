use graphwalk_core::format::join_nodes;
use graphwalk_core::graph::{TraceEvent, TraversalResult};

use crate::commands::{Context, GraphSource};

/// Output in human-readable format
pub fn output_human(
    ctx: &Context,
    results: &[TraversalResult],
    source: &GraphSource,
    with_trace: bool,
) {
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        output_result(ctx, result, source, with_trace);
    }
}

fn output_result(ctx: &Context, result: &TraversalResult, source: &GraphSource, with_trace: bool) {
    let label = result.algorithm.level_label();

    if !ctx.quiet {
        println!(
            "{} from {} ({})",
            result.algorithm.to_string().to_uppercase(),
            result.start,
            source.label()
        );
    }

    println!("Order: {}", join_nodes(&result.order, &ctx.separator));

    println!("{}:", result.algorithm.level_heading());
    for (node, level) in result.levels_in_order() {
        println!("  {:<4} {}", node, level);
    }

    if let Some(goal) = &result.goal {
        match (&result.path, result.path_cost()) {
            (Some(path), Some(cost)) => println!(
                "Path: {} (cost {})",
                join_nodes(path, &ctx.separator),
                cost
            ),
            _ => println!("No path from {} to {}", result.start, goal),
        }
    }

    if with_trace {
        println!("Trace:");
        for event in &result.trace {
            println!("  {}", describe_event(event, label));
        }
    }
}

fn describe_event(event: &TraceEvent, label: &str) -> String {
    match event {
        TraceEvent::Expand { node, level } => format!("expand {} ({} {})", node, label, level),
        TraceEvent::Discover { node, from, level } => {
            format!("discover {} from {} ({} {})", node, from, label, level)
        }
        TraceEvent::Skip { node, from } => format!("skip {} from {}", node, from),
        TraceEvent::GoalReached { node } => format!("goal reached at {}", node),
    }
}
