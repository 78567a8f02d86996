//! Deduplicated labeled directed graph
//!
//! Nodes are identified by their exact string value. Edges are identified by
//! the full `(parent, child, label)` triple. Re-inserting either is a no-op.

use indexmap::IndexSet;
use serde::Serialize;

/// Labeled parent → child relation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge {
    /// Source node value
    pub parent: String,

    /// Target node value
    pub child: String,

    /// Relation name (e.g. "has subsystem")
    pub label: String,
}

impl Edge {
    /// Create new edge
    #[inline]
    #[must_use]
    pub fn new(
        parent: impl Into<String>,
        child: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            parent: parent.into(),
            child: child.into(),
            label: label.into(),
        }
    }
}

/// Strict directed graph produced by the hierarchy builder
///
/// Insertion order is kept for stable output but carries no meaning:
/// equality compares node and edge sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HierarchyGraph {
    nodes: IndexSet<String>,
    edges: IndexSet<Edge>,
}

impl HierarchyGraph {
    /// Create empty graph
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a node exists. Returns `true` if it was new.
    pub(crate) fn add_node(&mut self, value: &str) -> bool {
        if self.nodes.contains(value) {
            return false;
        }
        self.nodes.insert(value.to_string())
    }

    /// Ensure an edge and both its endpoints exist. Returns `true` if the
    /// edge was new.
    pub(crate) fn add_edge(&mut self, parent: &str, child: &str, label: &str) -> bool {
        self.add_node(parent);
        self.add_node(child);
        self.edges.insert(Edge::new(parent, child, label))
    }

    /// Node values in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    /// Edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Number of distinct nodes
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct edges
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if graph has no nodes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check node membership (exact string match)
    #[inline]
    #[must_use]
    pub fn contains_node(&self, value: &str) -> bool {
        self.nodes.contains(value)
    }

    /// Check edge membership
    #[must_use]
    pub fn contains_edge(&self, parent: &str, child: &str, label: &str) -> bool {
        self.edges.contains(&Edge::new(parent, child, label))
    }

    /// Direct children of a node, with the relation label
    pub fn children<'a>(&'a self, parent: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.edges
            .iter()
            .filter(move |e| e.parent == parent)
            .map(|e| (e.child.as_str(), e.label.as_str()))
    }

    /// Nodes without an incoming edge
    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.nodes
            .iter()
            .filter(|n| !self.edges.iter().any(|e| &e.child == *n))
            .map(String::as_str)
    }

    /// Check that every node and edge of `self` is also in `other`
    #[must_use]
    pub fn is_subgraph_of(&self, other: &Self) -> bool {
        self.nodes.is_subset(&other.nodes) && self.edges.is_subset(&other.edges)
    }
}
