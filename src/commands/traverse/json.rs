use graphwalk_core::error::Result;
use graphwalk_core::graph::TraversalResult;
use serde_json::{json, Map, Value};

use crate::commands::GraphSource;

/// Output in JSON format
pub fn output_json(
    results: &[TraversalResult],
    source: &GraphSource,
    with_trace: bool,
) -> Result<()> {
    let output = match results {
        [single] => {
            let mut value = result_to_json(single, with_trace)?;
            value["graph"] = json!(source.label());
            value
        }
        many => {
            let mut obj = Map::new();
            obj.insert("graph".to_string(), json!(source.label()));
            for result in many {
                obj.insert(
                    result.algorithm.to_string(),
                    result_to_json(result, with_trace)?,
                );
            }
            Value::Object(obj)
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// JSON object for one traversal; levels keep expansion order
pub fn result_to_json(result: &TraversalResult, with_trace: bool) -> Result<Value> {
    let label = result.algorithm.level_label();
    let levels: Vec<Value> = result
        .levels_in_order()
        .into_iter()
        .map(|(node, level)| {
            let mut entry = Map::new();
            entry.insert("node".to_string(), json!(node));
            entry.insert(label.to_string(), json!(level));
            Value::Object(entry)
        })
        .collect();

    let mut value = json!({
        "algorithm": result.algorithm,
        "start": result.start,
        "order": result.order,
        "levels": levels,
    });

    if let Some(goal) = &result.goal {
        value["goal"] = json!(goal);
        value["found"] = json!(result.found());
        value["path"] = json!(result.path);
        value["path_cost"] = json!(result.path_cost());
    }

    if with_trace {
        value["trace"] = serde_json::to_value(&result.trace)?;
    }

    Ok(value)
}
