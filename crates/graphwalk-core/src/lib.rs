//! Graphwalk Core Library
//!
//! Deterministic breadth-first and depth-first traversal over small,
//! hand-authored adjacency lists, plus the loading, configuration and
//! formatting pieces the `graphwalk` CLI builds on.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
