//! Graph model and traversal operations
//!
//! Provides the traversal engine and the graph sources it runs on:
//! - BFS traversal with per-node levels and shortest-hop goal paths
//! - DFS traversal with per-node discovery depths, using an explicit stack
//! - Graph files (TOML/JSON/YAML) and built-in preset graphs
//! - Side-by-side BFS/DFS comparison over start/goal pairs

pub mod bfs;
pub mod compare;
pub mod dfs;
pub mod load;
mod path;
pub mod presets;
pub mod traversal;
pub mod types;

pub use bfs::run_bfs;
pub use compare::{compare, ComparisonRow, PathSummary};
pub use dfs::run_dfs;
pub use load::{load_graph, GraphFile, GraphFileFormat};
pub use presets::{find_preset, Preset, DEFAULT_PRESET, PRESETS};
pub use traversal::run;
pub use types::{Algorithm, Graph, GraphBuilder, NodeId, TraceEvent, TraversalResult};
