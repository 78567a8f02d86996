//! Named hierarchy configurations
//!
//! Each architecture view draws one of these; the level columns and edge
//! labels match the columns of the corresponding data file.

use ontodash_graph::{DotOptions, HierarchyGraphBuilder, RankDir, SchemaError};

/// Level columns, edge labels and chart layout of one hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hierarchy {
    /// Level columns, root first
    pub levels: &'static [&'static str],
    /// One label per consecutive level pair
    pub edge_labels: &'static [&'static str],
    /// Chart rank direction
    pub rank_dir: Option<RankDir>,
    /// Chart `(height, width)`
    pub size: Option<(u32, u32)>,
}

/// Mission → environment → mission entity
pub const MISSION: Hierarchy = Hierarchy {
    levels: &["Mission", "Env", "MissionEntities"],
    edge_labels: &["has environment", "has mission entity"],
    rank_dir: None,
    size: None,
};

/// Environment → entity → quality
pub const ENV_ENTITIES: Hierarchy = Hierarchy {
    levels: &["Env", "EnvEntities", "EnvQualities"],
    edge_labels: &["has entity", "has quality"],
    rank_dir: None,
    size: None,
};

/// System of interest → function → sub function → sub sub function
pub const FUNCTIONAL: Hierarchy = Hierarchy {
    levels: &["SOI", "SystemFunction", "SubFunction", "SubSubFunction"],
    edge_labels: &["has system function", "has sub function", "has sub sub function"],
    rank_dir: Some(RankDir::LeftRight),
    size: None,
};

/// System of interest → subsystem → assembly → component
pub const SYSTEM_LOGICAL: Hierarchy = Hierarchy {
    levels: &["SOI", "Subsystem", "Assembly", "Component"],
    edge_labels: &["has subsystem", "has assembly", "has component"],
    rank_dir: Some(RankDir::LeftRight),
    size: Some((1000, 1000)),
};

impl Hierarchy {
    /// Validated builder for this hierarchy
    ///
    /// # Errors
    /// Returns [`SchemaError`] if the label count does not fit the levels.
    pub fn builder(&self) -> Result<HierarchyGraphBuilder, SchemaError> {
        HierarchyGraphBuilder::new(self.levels.iter().copied(), self.edge_labels.iter().copied())
    }

    /// Chart options with a leading comment
    #[must_use]
    pub fn dot_options(&self, comment: &str) -> DotOptions {
        let mut options = DotOptions::hierarchy(comment);
        options.rank_dir = self.rank_dir;
        options.size = self.size;
        options
    }

    /// Column the hierarchy is filtered by in subset views (second level)
    #[must_use]
    pub fn filter_level(&self) -> Option<&'static str> {
        self.levels.get(1).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_hierarchies_are_well_formed() {
        for hierarchy in [MISSION, ENV_ENTITIES, FUNCTIONAL, SYSTEM_LOGICAL] {
            assert!(hierarchy.builder().is_ok(), "{:?}", hierarchy.levels);
        }
    }

    #[test]
    fn system_chart_layout() {
        let options = SYSTEM_LOGICAL.dot_options("Hierarchy");
        assert_eq!(options.rank_dir, Some(RankDir::LeftRight));
        assert_eq!(options.size, Some((1000, 1000)));
        assert_eq!(SYSTEM_LOGICAL.filter_level(), Some("Subsystem"));
    }

    #[test]
    fn malformed_hierarchy_is_schema_error() {
        let broken = Hierarchy {
            edge_labels: &["has subsystem"],
            ..SYSTEM_LOGICAL
        };
        assert!(broken.builder().is_err());
    }
}
