//! Error types for ontodash projects
//!
//! Provides error handling for:
//! - Registry selection and registration
//! - Configuration loading

use crate::descriptor::ProjectId;
use std::path::PathBuf;

/// Project registry errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No project with this name
    #[error("project not found: {0}")]
    NotFound(String),

    /// Another live project already uses this name
    #[error("duplicate project name: {0}")]
    DuplicateName(String),

    /// Another live project already uses this id
    #[error("duplicate project id: {0}")]
    DuplicateId(ProjectId),

    /// Project names must not be blank
    #[error("project name must not be empty")]
    EmptyName,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML
    #[error("invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Projects in the config collide
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
