use graphwalk_core::format::escape_quotes;
use graphwalk_core::graph::{TraceEvent, TraversalResult};

use crate::commands::GraphSource;

/// Output in records format
pub fn output_records(results: &[TraversalResult], source: &GraphSource, with_trace: bool) {
    for result in results {
        for line in build_lines(result, source, with_trace) {
            println!("{}", line);
        }
    }
}

fn build_lines(result: &TraversalResult, source: &GraphSource, with_trace: bool) -> Vec<String> {
    let label = result.algorithm.level_label();
    let mut header = format!(
        "H graphwalk=1 records=1 mode={} graph=\"{}\" start={} visited={}",
        result.algorithm,
        escape_quotes(&source.label()),
        result.start,
        result.order.len()
    );
    if let Some(goal) = &result.goal {
        header.push_str(&format!(" goal={} found={}", goal, result.found()));
        if let Some(cost) = result.path_cost() {
            header.push_str(&format!(" cost={}", cost));
        }
    }

    let mut lines = vec![header];

    for (node, level) in result.levels_in_order() {
        lines.push(format!("N {} {}={}", node, label, level));
    }

    if let Some(path) = &result.path {
        let nodes: Vec<&str> = path.iter().map(|n| n.as_str()).collect();
        lines.push(format!("P {}", nodes.join(" ")));
    }

    if with_trace {
        lines.extend(result.trace.iter().map(|event| trace_line(event, label)));
    }

    lines
}

fn trace_line(event: &TraceEvent, label: &str) -> String {
    match event {
        TraceEvent::Expand { node, level } => format!("T expand {} {}={}", node, label, level),
        TraceEvent::Discover { node, from, level } => {
            format!("T discover {} from={} {}={}", node, from, label, level)
        }
        TraceEvent::Skip { node, from } => format!("T skip {} from={}", node, from),
        TraceEvent::GoalReached { node } => format!("T goal {}", node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphwalk_core::graph::{find_preset, run_dfs};

    #[test]
    fn test_records_lines_for_dfs_goal() {
        let preset = find_preset("lab1").unwrap();
        let result = run_dfs(&preset.graph(), "A", Some("D")).unwrap();
        let lines = build_lines(&result, &GraphSource::Preset(preset), false);

        assert_eq!(
            lines[0],
            "H graphwalk=1 records=1 mode=dfs graph=\"preset:lab1\" start=A visited=8 goal=D found=true cost=1"
        );
        assert_eq!(lines[1], "N A depth=0");
        assert_eq!(lines.last().unwrap(), "P A D");
    }
}
