//! Hierarchy graph builder
//!
//! Turns flat records into a [`HierarchyGraph`] given an ordered list of
//! level columns (`levels[i]` is the parent of `levels[i + 1]`) and one edge
//! label per consecutive level pair.
//!
//! # Example
//!
//! ```rust
//! use ontodash_graph::{HierarchyGraphBuilder, Record};
//!
//! let builder = HierarchyGraphBuilder::new(["Mission", "Env"], ["has environment"])?;
//! let records = vec![
//!     Record::new().with("Mission", "M1").with("Env", "E1"),
//!     Record::new().with("Mission", "M1").with("Env", "E1"),
//! ];
//!
//! let graph = builder.build(&records);
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! # Ok::<(), ontodash_graph::SchemaError>(())
//! ```

use crate::error::SchemaError;
use crate::graph::HierarchyGraph;
use crate::record::Record;
use indexmap::IndexSet;
use std::collections::HashSet;

/// Validated level/label configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyGraphBuilder {
    levels: Vec<String>,
    edge_labels: Vec<String>,
}

impl HierarchyGraphBuilder {
    /// Create builder
    ///
    /// # Errors
    /// Returns [`SchemaError`] if `edge_labels` does not hold exactly one
    /// label per consecutive level pair.
    pub fn new<L, E>(levels: L, edge_labels: E) -> Result<Self, SchemaError>
    where
        L: IntoIterator,
        L::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        let levels: Vec<String> = levels.into_iter().map(Into::into).collect();
        let edge_labels: Vec<String> = edge_labels.into_iter().map(Into::into).collect();
        SchemaError::check(levels.len(), edge_labels.len())?;
        Ok(Self {
            levels,
            edge_labels,
        })
    }

    /// Level columns, root first
    #[inline]
    #[must_use]
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    /// Edge labels, one per level pair
    #[inline]
    #[must_use]
    pub fn edge_labels(&self) -> &[String] {
        &self.edge_labels
    }

    /// Build the full graph
    ///
    /// An edge is only added when both of its endpoint values are present in
    /// the same record; a present child with an absent parent still yields
    /// the child node.
    pub fn build<'a, I>(&self, records: I) -> HierarchyGraph
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut graph = HierarchyGraph::new();
        let mut rows = 0usize;

        for record in records {
            rows += 1;
            let mut parent: Option<&str> = None;
            for (depth, level) in self.levels.iter().enumerate() {
                let value = record.get(level);
                if let Some(child) = value {
                    graph.add_node(child);
                    if let Some(parent) = parent {
                        graph.add_edge(parent, child, &self.edge_labels[depth - 1]);
                    }
                }
                parent = value;
            }
        }

        tracing::trace!(
            rows,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built hierarchy graph"
        );
        graph
    }

    /// Build the graph induced by records whose `filter_level` value is in
    /// `selected_values`
    ///
    /// An empty selection yields an empty graph.
    pub fn subgraph<'a, I, V>(
        &self,
        records: I,
        filter_level: &str,
        selected_values: &[V],
    ) -> HierarchyGraph
    where
        I: IntoIterator<Item = &'a Record>,
        V: AsRef<str>,
    {
        let selected: HashSet<&str> = selected_values.iter().map(AsRef::as_ref).collect();
        self.build(
            records
                .into_iter()
                .filter(|record| record.get(filter_level).is_some_and(|v| selected.contains(v))),
        )
    }
}

/// Build a hierarchy graph in one call
///
/// # Errors
/// Returns [`SchemaError`] if `edge_labels.len() != levels.len() - 1`.
pub fn build<'a, I, L, E>(
    records: I,
    levels: &[L],
    edge_labels: &[E],
) -> Result<HierarchyGraph, SchemaError>
where
    I: IntoIterator<Item = &'a Record>,
    L: AsRef<str>,
    E: AsRef<str>,
{
    let builder = HierarchyGraphBuilder::new(
        levels.iter().map(AsRef::as_ref),
        edge_labels.iter().map(AsRef::as_ref),
    )?;
    Ok(builder.build(records))
}

/// Build the induced subgraph in one call
///
/// # Errors
/// Returns [`SchemaError`] if `edge_labels.len() != levels.len() - 1`.
pub fn subgraph<'a, I, L, E, V>(
    records: I,
    levels: &[L],
    edge_labels: &[E],
    filter_level: &str,
    selected_values: &[V],
) -> Result<HierarchyGraph, SchemaError>
where
    I: IntoIterator<Item = &'a Record>,
    L: AsRef<str>,
    E: AsRef<str>,
    V: AsRef<str>,
{
    let builder = HierarchyGraphBuilder::new(
        levels.iter().map(AsRef::as_ref),
        edge_labels.iter().map(AsRef::as_ref),
    )?;
    Ok(builder.subgraph(records, filter_level, selected_values))
}

/// Distinct present values of one column, in first-seen order
pub fn level_values<'a, I>(records: I, level: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|record| record.get(level))
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
