//! Built-in lab graphs

use crate::error::{GraphwalkError, Result};
use crate::graph::types::Graph;

/// Preset used when nothing else selects a graph
pub const DEFAULT_PRESET: &str = "lab1";

/// A named, hardcoded adjacency list
#[derive(Debug)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    directed: bool,
    adjacency: &'static [(&'static str, &'static [&'static str])],
    pairs: &'static [(&'static str, &'static str)],
}

impl Preset {
    pub fn graph(&self) -> Graph {
        let mut builder = Graph::builder().directed(self.directed);
        for (node, neighbors) in self.adjacency {
            builder = builder.neighbors(*node, neighbors.iter().copied());
        }
        builder.build()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Start/goal pairs used by `compare` when none are given
    pub fn comparison_pairs(&self) -> &'static [(&'static str, &'static str)] {
        self.pairs
    }
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "lab1",
        description: "Directed 8-node lab graph with a C -> A back edge",
        directed: true,
        adjacency: &[
            ("A", &["B", "D"]),
            ("B", &["C", "E", "G"]),
            ("C", &["A"]),
            ("D", &["C"]),
            ("E", &["H"]),
            ("G", &["F"]),
            ("H", &["F", "G"]),
            ("F", &[]),
        ],
        pairs: &[("A", "H"), ("D", "F"), ("E", "A")],
    },
    Preset {
        name: "lab1-undirected",
        description: "Undirected 8-node lab graph",
        directed: false,
        adjacency: &[
            ("A", &["D", "C"]),
            ("B", &["C", "E"]),
            ("C", &["B", "G", "H"]),
            ("D", &["A", "C"]),
            ("E", &["B", "G"]),
            ("F", &["H"]),
            ("G", &["C", "E"]),
            ("H", &["C", "F"]),
        ],
        pairs: &[("A", "G"), ("D", "F"), ("B", "H")],
    },
    Preset {
        name: "question2",
        description: "Directed hub graph: B links to C, D, E and G with C/D cycles back",
        directed: true,
        adjacency: &[
            ("A", &["B"]),
            ("B", &["C", "D", "E", "G"]),
            ("C", &["B"]),
            ("D", &["B"]),
            ("E", &["H"]),
            ("G", &["F"]),
            ("H", &[]),
            ("F", &[]),
        ],
        pairs: &[("A", "H"), ("C", "F"), ("H", "A")],
    },
];

/// Look up a preset by name
pub fn find_preset(name: &str) -> Result<&'static Preset> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| GraphwalkError::not_found("preset", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_build() {
        for preset in PRESETS {
            let graph = preset.graph();
            assert_eq!(graph.node_count(), 8, "{}", preset.name);
            assert_eq!(graph.is_directed(), preset.is_directed());
            assert!(graph.dangling_neighbors().is_empty(), "{}", preset.name);
        }
    }

    #[test]
    fn test_comparison_pairs_reference_known_nodes() {
        for preset in PRESETS {
            let graph = preset.graph();
            for (start, goal) in preset.comparison_pairs() {
                assert!(graph.contains(start), "{} {}", preset.name, start);
                assert!(graph.contains(goal), "{} {}", preset.name, goal);
            }
        }
    }

    #[test]
    fn test_default_preset_exists() {
        assert!(find_preset(DEFAULT_PRESET).is_ok());
    }

    #[test]
    fn test_unknown_preset() {
        let err = find_preset("lab9").unwrap_err();
        assert_eq!(err.to_string(), "preset not found: lab9");
    }

    #[test]
    fn test_undirected_preset_is_symmetric() {
        let graph = find_preset("lab1-undirected").unwrap().graph();
        for node in graph.nodes() {
            for neighbor in graph.neighbors(node.as_str()) {
                assert!(graph.neighbors(neighbor.as_str()).contains(node));
            }
        }
    }
}
