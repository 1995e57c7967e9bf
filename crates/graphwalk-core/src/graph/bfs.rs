use crate::error::Result;
use crate::graph::path::reconstruct_path;
use crate::graph::types::{Algorithm, Graph, NodeId, TraceEvent, TraversalResult};
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

/// State tracked during one BFS run
struct BfsState {
    enqueued: HashSet<NodeId>,
    levels: BTreeMap<NodeId, usize>,
    predecessors: HashMap<NodeId, NodeId>,
    order: Vec<NodeId>,
    trace: Vec<TraceEvent>,
}

impl BfsState {
    fn new(start: &NodeId) -> Self {
        Self {
            enqueued: HashSet::from([start.clone()]),
            levels: BTreeMap::from([(start.clone(), 0)]),
            predecessors: HashMap::new(),
            order: Vec::new(),
            trace: Vec::new(),
        }
    }

    /// Scan `node`'s neighbors ascending, returning those enqueued for the next level
    fn expand(&mut self, graph: &Graph, node: &NodeId, level: usize) -> Vec<NodeId> {
        self.trace.push(TraceEvent::Expand {
            node: node.clone(),
            level,
        });

        let mut discovered = Vec::new();
        for neighbor in graph.neighbors(node.as_str()) {
            if !self.enqueued.insert(neighbor.clone()) {
                self.trace.push(TraceEvent::Skip {
                    node: neighbor.clone(),
                    from: node.clone(),
                });
                continue;
            }

            self.levels.entry(neighbor.clone()).or_insert(level + 1);
            self.predecessors.insert(neighbor.clone(), node.clone());
            self.trace.push(TraceEvent::Discover {
                node: neighbor.clone(),
                from: node.clone(),
                level: level + 1,
            });
            discovered.push(neighbor.clone());
        }
        discovered
    }
}

/// Breadth-first traversal from `start`.
///
/// The frontier is expanded one level at a time, and each level is processed
/// in ascending node order. With a `goal`, traversal stops when the goal is
/// dequeued and the shortest-hop path is rebuilt from the discovery chain.
/// An unreachable goal leaves `path` empty and is not an error.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn run_bfs(graph: &Graph, start: &str, goal: Option<&str>) -> Result<TraversalResult> {
    let start = graph.require(start)?.clone();
    let goal = goal
        .map(|g| graph.require_reference(g).cloned())
        .transpose()?;

    let mut state = BfsState::new(&start);
    let mut frontier: VecDeque<NodeId> = VecDeque::from([start.clone()]);
    let mut level = 0;
    let mut reached = false;

    'levels: while !frontier.is_empty() {
        let mut next_level = Vec::new();

        while let Some(node) = frontier.pop_front() {
            state.order.push(node.clone());

            if goal.as_ref() == Some(&node) {
                state.trace.push(TraceEvent::GoalReached { node });
                reached = true;
                break 'levels;
            }

            next_level.extend(state.expand(graph, &node, level));
        }

        // Equal-level ties are broken lexically, not by discoverer order.
        next_level.sort();
        frontier.extend(next_level);
        level += 1;
    }

    let path = match (&goal, reached) {
        (Some(goal), true) => reconstruct_path(&start, goal, &state.predecessors),
        _ => None,
    };

    tracing::debug!(
        visited = state.order.len(),
        levels = level,
        found = path.is_some(),
        "bfs_complete"
    );

    Ok(TraversalResult {
        algorithm: Algorithm::Bfs,
        start,
        goal,
        order: state.order,
        levels: state.levels,
        path,
        trace: state.trace,
    })
}
