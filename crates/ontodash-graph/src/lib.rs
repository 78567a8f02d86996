//! Ontodash Hierarchy Graphs
//!
//! Converts flat tabular records into deduplicated, labeled directed graphs.
//!
//! # Core Concepts
//!
//! - [`Record`] / [`Table`]: rows of optional string cells; `None` is "absent"
//! - [`HierarchyGraphBuilder`]: level columns plus one edge label per level pair
//! - [`HierarchyGraph`]: strict graph (identical nodes and edges collapse)
//! - [`DotOptions`]: layout hints for DOT export
//!
//! Every function here is pure. Graphs are rebuilt from records on each
//! render, and a filtered view is a second graph built from a filtered record
//! subset rather than a pruned copy.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod builder;
mod dot;
mod error;
mod graph;
mod record;

// Re-exports
pub use builder::{build, level_values, subgraph, HierarchyGraphBuilder};
pub use dot::{DotOptions, RankDir};
pub use error::SchemaError;
pub use graph::{Edge, HierarchyGraph};
pub use record::{Record, Table};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
