use crate::error::Result;
use crate::graph::path::reconstruct_path;
use crate::graph::types::{Algorithm, Graph, NodeId, TraceEvent, TraversalResult};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Pending stack entry: node, its depth on this path, and who pushed it
struct StackEntry {
    node: NodeId,
    depth: usize,
    parent: Option<NodeId>,
}

/// State tracked during one DFS run
struct DfsState {
    visited: HashSet<NodeId>,
    depths: BTreeMap<NodeId, usize>,
    parents: HashMap<NodeId, NodeId>,
    order: Vec<NodeId>,
    trace: Vec<TraceEvent>,
}

impl DfsState {
    fn new() -> Self {
        Self {
            visited: HashSet::new(),
            depths: BTreeMap::new(),
            parents: HashMap::new(),
            order: Vec::new(),
            trace: Vec::new(),
        }
    }

    /// Mark `entry` visited; false if an earlier entry already visited it
    fn visit(&mut self, entry: &StackEntry) -> bool {
        if !self.visited.insert(entry.node.clone()) {
            return false;
        }
        self.order.push(entry.node.clone());
        self.depths.entry(entry.node.clone()).or_insert(entry.depth);
        if let Some(parent) = &entry.parent {
            self.parents.insert(entry.node.clone(), parent.clone());
        }
        true
    }

    /// Push unvisited neighbors of `entry` onto `stack`
    fn expand(&mut self, graph: &Graph, entry: &StackEntry, stack: &mut Vec<StackEntry>) {
        self.trace.push(TraceEvent::Expand {
            node: entry.node.clone(),
            level: entry.depth,
        });

        let mut pending = Vec::new();
        for neighbor in graph.neighbors(entry.node.as_str()) {
            if self.visited.contains(neighbor) {
                self.trace.push(TraceEvent::Skip {
                    node: neighbor.clone(),
                    from: entry.node.clone(),
                });
                continue;
            }
            self.trace.push(TraceEvent::Discover {
                node: neighbor.clone(),
                from: entry.node.clone(),
                level: entry.depth + 1,
            });
            pending.push(neighbor);
        }

        // Pushed descending so the smallest neighbor is popped first.
        for neighbor in pending.into_iter().rev() {
            stack.push(StackEntry {
                node: neighbor.clone(),
                depth: entry.depth + 1,
                parent: Some(entry.node.clone()),
            });
        }
    }
}

/// Depth-first traversal from `start`.
///
/// Uses an explicit stack that reproduces recursive, ascending-neighbor
/// visitation order without recursion depth limits. A node pushed more than
/// once is expanded only at its first pop; later entries are discarded by
/// the visited guard. Depths are those of first discovery. With a `goal`,
/// traversal stops when the goal is first visited.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn run_dfs(graph: &Graph, start: &str, goal: Option<&str>) -> Result<TraversalResult> {
    let start = graph.require(start)?.clone();
    let goal = goal
        .map(|g| graph.require_reference(g).cloned())
        .transpose()?;

    let mut state = DfsState::new();
    let mut stack = vec![StackEntry {
        node: start.clone(),
        depth: 0,
        parent: None,
    }];
    let mut reached = false;

    while let Some(entry) = stack.pop() {
        if !state.visit(&entry) {
            continue;
        }

        if goal.as_ref() == Some(&entry.node) {
            state.trace.push(TraceEvent::GoalReached { node: entry.node });
            reached = true;
            break;
        }

        state.expand(graph, &entry, &mut stack);
    }

    let path = match (&goal, reached) {
        (Some(goal), true) => reconstruct_path(&start, goal, &state.parents),
        _ => None,
    };

    tracing::debug!(
        visited = state.order.len(),
        max_depth = state.depths.values().copied().max().unwrap_or(0),
        found = path.is_some(),
        "dfs_complete"
    );

    Ok(TraversalResult {
        algorithm: Algorithm::Dfs,
        start,
        goal,
        order: state.order,
        levels: state.depths,
        path,
        trace: state.trace,
    })
}

#[cfg(test)]
mod tests;
