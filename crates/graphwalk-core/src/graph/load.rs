//! Graph files in TOML, JSON or YAML
//!
//! ```toml
//! directed = true
//! [nodes]
//! A = ["B", "D"]
//! B = ["C"]
//! ```

use crate::bail_invalid;
use crate::error::{GraphwalkError, Result};
use crate::graph::types::Graph;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// On-disk graph description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFile {
    #[serde(default = "default_directed")]
    pub directed: bool,
    pub nodes: BTreeMap<String, Vec<String>>,
}

fn default_directed() -> bool {
    true
}

/// Graph file syntax, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFileFormat {
    Toml,
    Json,
    Yaml,
}

impl GraphFileFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "toml" => Ok(GraphFileFormat::Toml),
            "json" => Ok(GraphFileFormat::Json),
            "yaml" | "yml" => Ok(GraphFileFormat::Yaml),
            other => Err(GraphwalkError::unsupported(
                "graph file extension",
                if other.is_empty() { "(none)" } else { other },
                "toml, json, yaml, yml",
            )),
        }
    }
}

impl GraphFile {
    pub fn parse(content: &str, format: GraphFileFormat) -> Result<Self> {
        let file: GraphFile = match format {
            GraphFileFormat::Toml => toml::from_str(content)?,
            GraphFileFormat::Json => serde_json::from_str(content)?,
            GraphFileFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(file)
    }

    /// Validate identifiers and build the graph
    pub fn into_graph(self) -> Result<Graph> {
        let mut builder = Graph::builder().directed(self.directed);

        for (node, neighbors) in self.nodes {
            let node = node.trim().to_string();
            if node.is_empty() {
                bail_invalid!("node identifier", "(empty)");
            }

            let mut cleaned = Vec::with_capacity(neighbors.len());
            for neighbor in neighbors {
                let neighbor = neighbor.trim();
                if neighbor.is_empty() {
                    bail_invalid!("neighbor identifier", format!("(empty, under {})", node));
                }
                cleaned.push(neighbor.to_string());
            }

            builder = builder.neighbors(node, cleaned);
        }

        Ok(builder.build())
    }
}

/// Read and build a graph from `path`
#[tracing::instrument]
pub fn load_graph(path: &Path) -> Result<Graph> {
    let format = GraphFileFormat::from_path(path)?;
    let content = fs::read_to_string(path)
        .map_err(|e| GraphwalkError::io_operation("read graph file", path.display(), e))?;

    let file = GraphFile::parse(&content, format).map_err(|e| GraphwalkError::InvalidGraphFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let graph = file.into_graph()?;
    let dangling = graph.dangling_neighbors();
    if !dangling.is_empty() {
        tracing::debug!(
            dangling = ?dangling.iter().map(|n| n.as_str()).collect::<Vec<_>>(),
            "neighbors without entries are treated as sinks"
        );
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph_loaded"
    );
    Ok(graph)
}
