//! Dashboard configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! reports_root = "reports"
//!
//! [[projects]]
//! name = "Catapult"
//! profile = "catapult"
//! module_prefix = "catapult"
//!
//! [files]
//! "Requirements" = ["Requirements", "Verification"]
//!
//! [profiles.catapult]
//! "Architecture" = ["MissionArchitecture", "Subsystems"]
//! ```

use crate::descriptor::{default_folder, ProjectDescriptor};
use crate::error::ConfigError;
use crate::files::{default_views, ViewFileMap};
use crate::registry::ProjectRegistry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default reports root, relative to the config file
pub const DEFAULT_REPORTS_ROOT: &str = "reports";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory holding one data folder per project
    pub reports_root: PathBuf,

    /// Projects registered at session start
    pub projects: Vec<ProjectConfig>,

    /// Shared view → file overrides
    pub files: IndexMap<String, Vec<String>>,

    /// Per-profile view → file overrides
    pub profiles: IndexMap<String, IndexMap<String, Vec<String>>>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            reports_root: PathBuf::from(DEFAULT_REPORTS_ROOT),
            projects: Vec::new(),
            files: IndexMap::new(),
            profiles: IndexMap::new(),
        }
    }
}

/// One configured project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Data folder; relative paths resolve under `reports_root`
    pub folder: Option<PathBuf>,
    /// Tabs; defaults to the profile's default tab list
    pub views: Option<Vec<String>>,
    /// Domain profile
    pub profile: Option<String>,
    /// Renderer namespace
    pub module_prefix: Option<String>,
}

impl ProjectConfig {
    /// Create project config with defaults
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// With profile and matching renderer namespace
    #[inline]
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        let profile = profile.into();
        self.module_prefix = Some(profile.clone());
        self.profile = Some(profile);
        self
    }

    /// With tabs
    #[must_use]
    pub fn with_views<I, S>(mut self, views: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.views = Some(views.into_iter().map(Into::into).collect());
        self
    }

    /// With data folder
    #[inline]
    #[must_use]
    pub fn with_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    fn descriptor(&self, reports_root: &Path) -> ProjectDescriptor {
        let folder = match &self.folder {
            Some(folder) if folder.is_absolute() => folder.clone(),
            Some(folder) => reports_root.join(folder),
            None => default_folder(reports_root, &self.name),
        };
        let views = self
            .views
            .clone()
            .unwrap_or_else(|| default_views(self.profile.as_deref()));

        let mut project = ProjectDescriptor::new(&self.name, folder)
            .with_description(&self.description)
            .with_views(views);
        if let Some(profile) = &self.profile {
            project = project.with_profile(profile);
        }
        if let Some(module_prefix) = &self.module_prefix {
            project = project.with_module_prefix(module_prefix);
        }
        project
    }
}

impl DashboardConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With reports root
    #[inline]
    #[must_use]
    pub fn with_reports_root(mut self, reports_root: impl Into<PathBuf>) -> Self {
        self.reports_root = reports_root.into();
        self
    }

    /// With project
    #[inline]
    #[must_use]
    pub fn with_project(mut self, project: ProjectConfig) -> Self {
        self.projects.push(project);
        self
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] on malformed TOML.
    pub fn from_toml_str(source: &str, origin: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse {
            path: origin.into(),
            message: e.to_string(),
        })
    }

    /// Load from file
    ///
    /// A relative `reports_root` resolves against the config file's
    /// directory.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        let mut config = Self::from_toml_str(&source, path)?;

        if config.reports_root.is_relative() {
            if let Some(base) = path.parent() {
                config.reports_root = base.join(&config.reports_root);
            }
        }

        tracing::debug!(
            path = %path.display(),
            projects = config.projects.len(),
            "loaded dashboard config"
        );
        Ok(config)
    }

    /// Built-in file ties with this config's overrides layered on top
    #[must_use]
    pub fn file_map(&self) -> ViewFileMap {
        let mut overrides = ViewFileMap::new();
        for (view, files) in &self.files {
            overrides.tie(view.as_str(), files.iter().map(String::as_str));
        }
        for (profile, ties) in &self.profiles {
            for (view, files) in ties {
                overrides.tie_profile(
                    profile.as_str(),
                    view.as_str(),
                    files.iter().map(String::as_str),
                );
            }
        }
        ViewFileMap::builtin().merged(overrides)
    }

    /// Registry holding every configured project
    ///
    /// # Errors
    /// Returns [`ConfigError::Registry`] on blank or duplicate names.
    pub fn registry(&self) -> Result<ProjectRegistry, ConfigError> {
        let mut registry = ProjectRegistry::new();
        for project in &self.projects {
            registry.add(project.descriptor(&self.reports_root))?;
        }
        Ok(registry)
    }
}
