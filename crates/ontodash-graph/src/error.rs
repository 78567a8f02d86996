//! Error types for hierarchy construction
//!
//! Only builder misconfiguration is an error. Absent values and empty inputs
//! are normal states and never reach this module.

/// Malformed hierarchy configuration
///
/// This is a programmer error: callers must propagate it rather than
/// rendering a fallback in its place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Label count does not match the number of level pairs
    #[error("expected {expected} edge label(s) for {levels} level(s), got {actual}")]
    LabelCountMismatch {
        /// Number of level columns supplied
        levels: usize,
        /// Labels required (`levels - 1`)
        expected: usize,
        /// Labels actually supplied
        actual: usize,
    },

    /// No level columns at all
    #[error("hierarchy needs at least one level column (got {labels} edge label(s))")]
    NoLevels {
        /// Labels supplied alongside the empty level list
        labels: usize,
    },
}

impl SchemaError {
    /// Check a level/label pairing
    ///
    /// # Errors
    /// Returns [`SchemaError`] unless `labels == levels - 1`.
    pub fn check(levels: usize, labels: usize) -> Result<(), Self> {
        if levels == 0 {
            return Err(Self::NoLevels { labels });
        }
        if labels != levels - 1 {
            return Err(Self::LabelCountMismatch {
                levels,
                expected: levels - 1,
                actual: labels,
            });
        }
        Ok(())
    }
}
