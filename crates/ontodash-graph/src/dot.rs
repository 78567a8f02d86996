//! Graphviz DOT export
//!
//! Renders a [`HierarchyGraph`] as a `strict digraph` so that any DOT
//! consumer applies the same deduplication the builder does.

use crate::graph::HierarchyGraph;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Layout direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RankDir {
    /// Top to bottom (Graphviz default)
    #[default]
    TopBottom,
    /// Left to right
    LeftRight,
}

impl RankDir {
    fn as_dot(self) -> &'static str {
        match self {
            Self::TopBottom => "TB",
            Self::LeftRight => "LR",
        }
    }
}

/// Chart options carried alongside a graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotOptions {
    /// Leading `//` comment
    pub comment: Option<String>,

    /// Rank direction; omitted from output when `None`
    pub rank_dir: Option<RankDir>,

    /// `(height, width)` graph attributes
    pub size: Option<(u32, u32)>,
}

impl DotOptions {
    /// Options with a comment only
    #[inline]
    #[must_use]
    pub fn hierarchy(comment: impl Into<String>) -> Self {
        Self {
            comment: Some(comment.into()),
            ..Self::default()
        }
    }

    /// With rank direction
    #[inline]
    #[must_use]
    pub fn with_rank_dir(mut self, rank_dir: RankDir) -> Self {
        self.rank_dir = Some(rank_dir);
        self
    }

    /// With size attributes
    #[inline]
    #[must_use]
    pub fn with_size(mut self, height: u32, width: u32) -> Self {
        self.size = Some((height, width));
        self
    }

    fn graph_attrs(&self) -> Vec<String> {
        let mut attrs = Vec::new();
        if let Some((height, width)) = self.size {
            attrs.push(format!("height={height}"));
            attrs.push(format!("width={width}"));
        }
        if let Some(rank_dir) = self.rank_dir {
            attrs.push(format!("rankdir={}", rank_dir.as_dot()));
        }
        attrs
    }
}

impl HierarchyGraph {
    /// Render as DOT source
    #[must_use]
    pub fn to_dot(&self, options: &DotOptions) -> String {
        let mut out = String::new();
        if let Some(comment) = &options.comment {
            let _ = writeln!(out, "// {}", escape_comment(comment));
        }
        out.push_str("strict digraph {\n");

        let attrs = options.graph_attrs();
        if !attrs.is_empty() {
            let _ = writeln!(out, "\tgraph [{}]", attrs.join(" "));
        }

        for node in self.nodes() {
            let _ = writeln!(out, "\t\"{}\"", escape_dot(node));
        }
        for edge in self.edges() {
            let _ = writeln!(
                out,
                "\t\"{}\" -> \"{}\" [label=\"{}\"]",
                escape_dot(&edge.parent),
                escape_dot(&edge.child),
                escape_dot(&edge.label),
            );
        }

        out.push_str("}\n");
        out
    }
}

/// Keep a `//` comment on one line
fn escape_comment(s: &str) -> String {
    s.replace('\r', "\\r").replace('\n', "\\n")
}

/// Escape a string for a quoted DOT identifier
fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::HierarchyGraphBuilder;
    use crate::record::Record;

    #[test]
    fn to_dot_is_strict_digraph() {
        let builder = HierarchyGraphBuilder::new(["Mission", "Env"], ["has environment"]).unwrap();
        let graph = builder.build(&[Record::new().with("Mission", "M1").with("Env", "E1")]);

        let dot = graph.to_dot(&DotOptions::hierarchy("Hierarchy"));

        assert!(dot.starts_with("// Hierarchy\nstrict digraph {\n"));
        assert!(dot.contains("\t\"M1\" -> \"E1\" [label=\"has environment\"]\n"));
        assert!(!dot.contains("graph ["));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn to_dot_writes_layout_attributes() {
        let options = DotOptions::hierarchy("Hierarchy")
            .with_size(1000, 1000)
            .with_rank_dir(RankDir::LeftRight);

        let dot = HierarchyGraph::new().to_dot(&options);

        assert!(dot.contains("\tgraph [height=1000 width=1000 rankdir=LR]\n"));
    }

    #[test]
    fn to_dot_escapes_quotes() {
        let builder = HierarchyGraphBuilder::new(["A"], Vec::<String>::new()).unwrap();
        let graph = builder.build(&[Record::new().with("A", "say \"hi\"")]);

        let dot = graph.to_dot(&DotOptions::default());

        assert!(dot.contains("\"say \\\"hi\\\"\""));
    }

    #[test]
    fn to_dot_keeps_comment_on_one_line() {
        let dot = HierarchyGraph::new().to_dot(&DotOptions::hierarchy("Subset\nHierarchy"));

        assert!(dot.starts_with("// Subset\\nHierarchy\nstrict digraph {\n"));
        assert_eq!(dot.lines().filter(|l| l.starts_with("//")).count(), 1);
    }
}
