use crate::error::GraphwalkError;
use crate::graph::dfs::*;
use crate::graph::presets::find_preset;
use crate::graph::types::{Graph, NodeId, TraceEvent};

fn lab1() -> Graph {
    find_preset("lab1").unwrap().graph()
}

fn names(nodes: &[NodeId]) -> Vec<&str> {
    nodes.iter().map(NodeId::as_str).collect()
}

/// Recursive reference used to check the explicit-stack ordering
fn recursive_dfs(graph: &Graph, node: &NodeId, depth: usize, out: &mut Vec<(NodeId, usize)>) {
    if out.iter().any(|(seen, _)| seen == node) {
        return;
    }
    out.push((node.clone(), depth));
    for neighbor in graph.neighbors(node.as_str()) {
        recursive_dfs(graph, neighbor, depth + 1, out);
    }
}

#[test]
fn test_dfs_order_on_lab_graph() {
    let result = run_dfs(&lab1(), "A", None).unwrap();
    assert_eq!(
        names(&result.order),
        vec!["A", "B", "C", "E", "H", "F", "G", "D"]
    );
}

#[test]
fn test_dfs_depths_are_first_discovery() {
    let result = run_dfs(&lab1(), "A", None).unwrap();
    let expected = [
        ("A", 0),
        ("B", 1),
        ("C", 2),
        ("E", 2),
        ("H", 3),
        ("F", 4),
        ("G", 4),
        ("D", 1),
    ];
    for (node, depth) in expected {
        assert_eq!(result.level_of(node), Some(depth), "depth of {}", node);
    }
}

#[test]
fn test_dfs_matches_recursive_form() {
    for preset in ["lab1", "lab1-undirected", "question2"] {
        let graph = find_preset(preset).unwrap().graph();
        for start in graph.nodes() {
            let mut expected = Vec::new();
            recursive_dfs(&graph, start, 0, &mut expected);

            let result = run_dfs(&graph, start.as_str(), None).unwrap();
            let actual: Vec<(NodeId, usize)> = result
                .levels_in_order()
                .into_iter()
                .map(|(node, depth)| (node.clone(), depth))
                .collect();
            assert_eq!(actual, expected, "{} from {}", preset, start);
        }
    }
}

#[test]
fn test_dfs_path_follows_discovery_chain() {
    let result = run_dfs(&lab1(), "A", Some("F")).unwrap();
    assert_eq!(
        names(result.path.as_ref().unwrap()),
        vec!["A", "B", "E", "H", "F"]
    );
    assert_eq!(result.path_cost(), Some(4));
    assert_eq!(names(&result.order), vec!["A", "B", "C", "E", "H", "F"]);
}

#[test]
fn test_dfs_start_equals_goal() {
    let result = run_dfs(&lab1(), "D", Some("D")).unwrap();
    assert_eq!(names(result.path.as_ref().unwrap()), vec!["D"]);
    assert_eq!(result.path_cost(), Some(0));
    assert_eq!(
        result.trace,
        vec![TraceEvent::GoalReached {
            node: NodeId::from("D")
        }]
    );
}

#[test]
fn test_dfs_unreachable_goal() {
    let graph = find_preset("question2").unwrap().graph();
    let result = run_dfs(&graph, "H", Some("A")).unwrap();
    assert!(result.path.is_none());
    assert_eq!(names(&result.order), vec!["H"]);
}

#[test]
fn test_dfs_dangling_neighbor_is_leaf() {
    let graph = Graph::from_adjacency([("A", vec!["B", "Z"]), ("B", vec!["Z"])]);
    let result = run_dfs(&graph, "A", None).unwrap();
    assert_eq!(names(&result.order), vec!["A", "B", "Z"]);
    assert_eq!(result.level_of("Z"), Some(2));
}

#[test]
fn test_dfs_goal_may_be_dangling_neighbor() {
    let graph = Graph::from_adjacency([("A", vec!["B"])]);
    let result = run_dfs(&graph, "A", Some("B")).unwrap();
    assert_eq!(names(result.path.as_ref().unwrap()), vec!["A", "B"]);
    assert_eq!(result.path_cost(), Some(1));
}

#[test]
fn test_dfs_unknown_goal_still_fails() {
    let graph = Graph::from_adjacency([("A", vec!["B"])]);
    let err = run_dfs(&graph, "A", Some("C")).unwrap_err();
    assert!(matches!(err, GraphwalkError::NodeNotFound { ref id } if id == "C"));
}

#[test]
fn test_dfs_missing_start() {
    let err = run_dfs(&lab1(), "Z", None).unwrap_err();
    assert!(matches!(err, GraphwalkError::NodeNotFound { ref id } if id == "Z"));
}

#[test]
fn test_dfs_terminates_on_two_cycle() {
    let graph = Graph::from_adjacency([("A", vec!["B"]), ("B", vec!["A"])]);
    let result = run_dfs(&graph, "A", None).unwrap();
    assert_eq!(names(&result.order), vec!["A", "B"]);
    assert!(result.trace.contains(&TraceEvent::Skip {
        node: NodeId::from("A"),
        from: NodeId::from("B"),
    }));
}

#[test]
fn test_dfs_deep_chain_does_not_recurse() {
    let ids: Vec<String> = (0..50_000).map(|i| format!("n{:05}", i)).collect();
    let mut builder = Graph::builder();
    for pair in ids.windows(2) {
        builder = builder.edge(pair[0].as_str(), pair[1].as_str());
    }
    let graph = builder.build();

    let result = run_dfs(&graph, "n00000", None).unwrap();
    assert_eq!(result.order.len(), ids.len());
    assert_eq!(result.level_of("n49999"), Some(49_999));
}
