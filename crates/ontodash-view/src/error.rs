//! Error types for ontodash views
//!
//! Provides error handling for:
//! - Reading tabular data files
//! - JSON → CSV conversion
//! - Renderer lookup and initialisation
//! - Rendering a tab

use ontodash_graph::SchemaError;
use std::path::PathBuf;

/// Errors reading a table from disk
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// File does not exist
    #[error("table not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// IO error during read
    #[error("io error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed content
    #[error("malformed table {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

impl TableError {
    /// Create parse error for path
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create IO error for path, mapping `NotFound` to [`TableError::NotFound`]
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Check if the file was simply missing
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Errors converting a JSON export to CSV
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// IO error on either side
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON
    #[error("invalid json in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON the converter cannot flatten
    #[error("unsupported json shape in {}: {message}", path.display())]
    UnsupportedShape { path: PathBuf, message: String },

    /// Writing the CSV failed
    #[error("csv write failed for {}: {message}", path.display())]
    Csv { path: PathBuf, message: String },
}

impl ConversionError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create unsupported-shape error for path
    pub fn unsupported(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::UnsupportedShape {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Renderer lookup failures
///
/// All of these resolve to "not found"; the resolver logs them and moves on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// Nothing registered under this key
    #[error("no renderer registered for '{0}'")]
    NotFound(String),

    /// Entry exists but exposes no render capability
    #[error("'{0}' has no render capability")]
    NoRender(String),

    /// Entry failed to initialise
    #[error("failed to initialise '{key}': {message}")]
    Failed { key: String, message: String },
}

impl LoadError {
    /// Create initialisation failure
    pub fn failed(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Errors a renderer reports back to the resolver
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Hierarchy misconfiguration; never turned into a fallback
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Table read failure
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// Conversion failure
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Any other renderer failure
    #[error("render failed: {0}")]
    Failed(String),
}

impl RenderError {
    /// Check if this is a schema error
    #[inline]
    #[must_use]
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema(_))
    }
}
