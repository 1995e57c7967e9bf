use crate::error::{GraphwalkError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Symbolic vertex identifier, ordered lexically
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Immutable adjacency-list graph.
///
/// Neighbor lists are sorted ascending and de-duplicated at build time, so
/// every traversal sees the same tie-break order. Neighbors that are not
/// keys are sinks with no outgoing edges.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, Vec<NodeId>>,
    directed: bool,
}

impl Graph {
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Build a directed graph from `(node, neighbors)` entries
    pub fn from_adjacency<K, I, N>(entries: impl IntoIterator<Item = (K, I)>) -> Self
    where
        K: Into<NodeId>,
        I: IntoIterator<Item = N>,
        N: Into<NodeId>,
    {
        let mut builder = GraphBuilder::new();
        for (node, neighbors) in entries {
            builder = builder.neighbors(node, neighbors);
        }
        builder.build()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// True if `id` is a key of the graph
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Sorted neighbors of `id`; empty for sinks and unknown nodes
    pub fn neighbors(&self, id: &str) -> &[NodeId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Graph keys in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.adjacency.keys()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn adjacency(&self) -> &BTreeMap<NodeId, Vec<NodeId>> {
        &self.adjacency
    }

    /// Neighbors referenced somewhere that are not keys themselves
    pub fn dangling_neighbors(&self) -> BTreeSet<&NodeId> {
        self.adjacency
            .values()
            .flatten()
            .filter(|n| !self.adjacency.contains_key(*n))
            .collect()
    }

    /// Resolve `id` to the graph's own key, or fail with `NodeNotFound`
    pub(crate) fn require(&self, id: &str) -> Result<&NodeId> {
        self.adjacency
            .get_key_value(id)
            .map(|(key, _)| key)
            .ok_or_else(|| GraphwalkError::node_not_found(id))
    }

    /// True if `id` is a key or appears in some neighbor list
    pub fn references(&self, id: &str) -> bool {
        self.contains(id) || self.adjacency.values().flatten().any(|n| n.as_str() == id)
    }

    /// Like `require`, but also accepts sinks that only appear as neighbors
    pub(crate) fn require_reference(&self, id: &str) -> Result<&NodeId> {
        if let Some((key, _)) = self.adjacency.get_key_value(id) {
            return Ok(key);
        }
        self.adjacency
            .values()
            .flatten()
            .find(|n| n.as_str() == id)
            .ok_or_else(|| GraphwalkError::node_not_found(id))
    }
}

/// Incremental graph construction
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
    directed: bool,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
            directed: true,
        }
    }

    /// Undirected graphs gain the reverse of every edge at build time
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Add a node with no edges (no-op if it already exists)
    pub fn node(mut self, id: impl Into<NodeId>) -> Self {
        self.adjacency.entry(id.into()).or_default();
        self
    }

    pub fn edge(mut self, from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        self.adjacency
            .entry(from.into())
            .or_default()
            .insert(to.into());
        self
    }

    /// Add `from` as a key together with all of its neighbors
    pub fn neighbors<N: Into<NodeId>>(
        mut self,
        from: impl Into<NodeId>,
        neighbors: impl IntoIterator<Item = N>,
    ) -> Self {
        let entry = self.adjacency.entry(from.into()).or_default();
        entry.extend(neighbors.into_iter().map(Into::into));
        self
    }

    pub fn build(mut self) -> Graph {
        if !self.directed {
            let reversed: Vec<(NodeId, NodeId)> = self
                .adjacency
                .iter()
                .flat_map(|(from, tos)| tos.iter().map(move |to| (to.clone(), from.clone())))
                .collect();
            for (from, to) in reversed {
                self.adjacency.entry(from).or_default().insert(to);
            }
        }

        Graph {
            adjacency: self
                .adjacency
                .into_iter()
                .map(|(node, neighbors)| (node, neighbors.into_iter().collect()))
                .collect(),
            directed: self.directed,
        }
    }
}

/// Traversal algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Dfs,
}

impl Algorithm {
    /// Name of the per-node number each algorithm records
    pub fn level_label(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "level",
            Algorithm::Dfs => "depth",
        }
    }

    pub fn level_heading(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "Levels",
            Algorithm::Dfs => "Depths",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dfs => write!(f, "dfs"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = GraphwalkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            other => Err(GraphwalkError::unsupported("algorithm", other, "bfs, dfs")),
        }
    }
}

/// One step of the process trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// Node taken off the frontier (BFS) or stack (DFS) and expanded
    Expand { node: NodeId, level: usize },
    /// Neighbor enqueued (BFS) or pushed (DFS)
    Discover {
        node: NodeId,
        from: NodeId,
        level: usize,
    },
    /// Neighbor ignored because it was already enqueued or visited
    Skip { node: NodeId, from: NodeId },
    /// Goal taken off the frontier or stack; traversal stops
    GoalReached { node: NodeId },
}

/// Outcome of a single BFS or DFS run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalResult {
    pub algorithm: Algorithm,
    pub start: NodeId,
    pub goal: Option<NodeId>,
    /// Expansion order
    pub order: Vec<NodeId>,
    /// BFS level or DFS depth of every discovered node
    pub levels: BTreeMap<NodeId, usize>,
    /// Start-to-goal path, present only when a goal was given and reached
    pub path: Option<Vec<NodeId>>,
    pub trace: Vec<TraceEvent>,
}

impl TraversalResult {
    /// Number of edges on the goal path
    pub fn path_cost(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }

    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    pub fn level_of(&self, id: &str) -> Option<usize> {
        self.levels.get(id).copied()
    }

    /// Levels as displayed in level tables: expanded nodes in expansion
    /// order, then nodes discovered but never expanded, by level and name
    pub fn levels_in_order(&self) -> Vec<(&NodeId, usize)> {
        let expanded = self.visited();
        let mut rows: Vec<(&NodeId, usize)> = self
            .order
            .iter()
            .filter_map(|node| self.levels.get(node).map(|level| (node, *level)))
            .collect();

        let mut pending: Vec<(&NodeId, usize)> = self
            .levels
            .iter()
            .filter(|(node, _)| !expanded.contains(node))
            .map(|(node, level)| (node, *level))
            .collect();
        pending.sort_by_key(|(node, level)| (*level, *node));

        rows.extend(pending);
        rows
    }

    pub fn visited(&self) -> BTreeSet<&NodeId> {
        self.order.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_sorted_and_deduplicated() {
        let graph = Graph::from_adjacency([("A", vec!["D", "B", "C", "B"])]);
        let names: Vec<&str> = graph.neighbors("A").iter().map(NodeId::as_str).collect();
        assert_eq!(names, vec!["B", "C", "D"]);
    }

    #[test]
    fn test_unknown_node_has_no_neighbors() {
        let graph = Graph::from_adjacency([("A", vec!["B"])]);
        assert!(graph.neighbors("B").is_empty());
        assert!(graph.neighbors("Z").is_empty());
        assert!(!graph.contains("B"));
    }

    #[test]
    fn test_dangling_neighbors() {
        let graph = Graph::from_adjacency([("A", vec!["B", "C"]), ("B", vec![])]);
        let dangling: Vec<&str> = graph
            .dangling_neighbors()
            .into_iter()
            .map(NodeId::as_str)
            .collect();
        assert_eq!(dangling, vec!["C"]);
    }

    #[test]
    fn test_undirected_adds_reverse_edges() {
        let graph = Graph::builder()
            .directed(false)
            .edge("A", "B")
            .edge("B", "C")
            .build();
        assert!(!graph.is_directed());
        assert_eq!(graph.neighbors("B"), &[NodeId::from("A"), NodeId::from("C")]);
        assert_eq!(graph.neighbors("C"), &[NodeId::from("B")]);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_isolated_node() {
        let graph = Graph::builder().node("X").edge("A", "B").build();
        assert!(graph.contains("X"));
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_require_missing_node() {
        let graph = Graph::from_adjacency([("A", Vec::<&str>::new())]);
        let err = graph.require("Z").unwrap_err();
        assert!(matches!(err, GraphwalkError::NodeNotFound { ref id } if id == "Z"));
    }

    #[test]
    fn test_references_includes_sinks() {
        let graph = Graph::from_adjacency([("A", vec!["B"])]);
        assert!(graph.references("A"));
        assert!(graph.references("B"));
        assert!(!graph.references("C"));
        assert_eq!(graph.require_reference("B").unwrap().as_str(), "B");
        assert!(graph.require("B").is_err());
        assert!(graph.require_reference("C").is_err());
    }

    #[test]
    fn test_levels_in_order_keeps_unexpanded_nodes() {
        let result = TraversalResult {
            algorithm: Algorithm::Bfs,
            start: NodeId::from("A"),
            goal: Some(NodeId::from("B")),
            order: vec![NodeId::from("A"), NodeId::from("B")],
            levels: BTreeMap::from([
                (NodeId::from("A"), 0),
                (NodeId::from("B"), 1),
                (NodeId::from("C"), 1),
                (NodeId::from("D"), 2),
            ]),
            path: None,
            trace: Vec::new(),
        };
        let rows: Vec<(&str, usize)> = result
            .levels_in_order()
            .into_iter()
            .map(|(node, level)| (node.as_str(), level))
            .collect();
        assert_eq!(rows, vec![("A", 0), ("B", 1), ("C", 1), ("D", 2)]);
    }

    #[test]
    fn test_algorithm_parse_and_display() {
        assert_eq!("BFS".parse::<Algorithm>().unwrap(), Algorithm::Bfs);
        assert_eq!(Algorithm::Dfs.to_string(), "dfs");
        assert!("astar".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::Dfs.level_label(), "depth");
    }

    #[test]
    fn test_path_cost() {
        let result = TraversalResult {
            algorithm: Algorithm::Bfs,
            start: NodeId::from("A"),
            goal: Some(NodeId::from("C")),
            order: vec![NodeId::from("A")],
            levels: BTreeMap::new(),
            path: Some(vec![NodeId::from("A"), NodeId::from("B"), NodeId::from("C")]),
            trace: Vec::new(),
        };
        assert_eq!(result.path_cost(), Some(2));
        assert!(result.found());
    }
}
