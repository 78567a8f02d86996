//! Project descriptors
//!
//! A [`ProjectDescriptor`] names one dashboard: where its data lives, which
//! tabs it shows and which profile/renderer namespace applies to it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use ulid::Ulid;

/// Reserved tab rendered by the central home page
pub const HOME_PAGE: &str = "Home Page";

/// Unique project identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub Ulid);

impl ProjectId {
    /// Generate new project ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One dashboard project
///
/// The data folder is fixed at construction; edits go through
/// [`ProjectPatch`], which has no folder field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    id: ProjectId,
    name: String,
    #[serde(default)]
    description: String,
    folder: PathBuf,
    #[serde(default)]
    views: Vec<String>,
    #[serde(default)]
    profile: Option<String>,
    #[serde(default)]
    module_prefix: Option<String>,
}

impl ProjectDescriptor {
    /// Create descriptor with a fresh id and no views
    #[must_use]
    pub fn new(name: impl Into<String>, folder: impl Into<PathBuf>) -> Self {
        Self {
            id: ProjectId::new(),
            name: name.into(),
            description: String::new(),
            folder: folder.into(),
            views: Vec::new(),
            profile: None,
            module_prefix: None,
        }
    }

    /// With explicit id
    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: ProjectId) -> Self {
        self.id = id;
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With tab list (display order)
    #[must_use]
    pub fn with_views<I, S>(mut self, views: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.views = views.into_iter().map(Into::into).collect();
        self
    }

    /// With domain profile
    #[inline]
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// With renderer namespace
    #[inline]
    #[must_use]
    pub fn with_module_prefix(mut self, module_prefix: impl Into<String>) -> Self {
        self.module_prefix = Some(module_prefix.into());
        self
    }

    /// Project id
    #[inline]
    #[must_use]
    pub fn id(&self) -> ProjectId {
        self.id
    }

    /// Display name (unique within a registry)
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text description
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Data directory
    #[inline]
    #[must_use]
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Tabs in display order
    #[inline]
    #[must_use]
    pub fn views(&self) -> &[String] {
        &self.views
    }

    /// Domain profile, if any
    #[inline]
    #[must_use]
    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// Renderer namespace, if any
    #[inline]
    #[must_use]
    pub fn module_prefix(&self) -> Option<&str> {
        self.module_prefix.as_deref()
    }

    /// `<folder>/<base>.csv`
    #[must_use]
    pub fn csv_path(&self, base: &str) -> PathBuf {
        self.folder.join(format!("{base}.csv"))
    }

    /// `<folder>/<base>.json`
    #[must_use]
    pub fn json_path(&self, base: &str) -> PathBuf {
        self.folder.join(format!("{base}.json"))
    }

    pub(crate) fn apply(&mut self, patch: ProjectPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(views) = patch.views {
            self.views = views;
        }
        if let Some(profile) = patch.profile {
            self.profile = profile;
        }
        if let Some(module_prefix) = patch.module_prefix {
            self.module_prefix = module_prefix;
        }
    }
}

/// Edit to an existing project
///
/// `None` leaves a field unchanged. Optional fields take `Some(None)` to
/// clear them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    /// New name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New tab list
    pub views: Option<Vec<String>>,
    /// New profile
    pub profile: Option<Option<String>>,
    /// New renderer namespace
    pub module_prefix: Option<Option<String>>,
}

impl ProjectPatch {
    /// Create empty patch
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rename
    #[inline]
    #[must_use]
    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace description
    #[inline]
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace tab list
    #[must_use]
    pub fn views<I, S>(mut self, views: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.views = Some(views.into_iter().map(Into::into).collect());
        self
    }

    /// Set or clear the profile
    #[inline]
    #[must_use]
    pub fn profile(mut self, profile: Option<String>) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Set or clear the renderer namespace
    #[inline]
    #[must_use]
    pub fn module_prefix(mut self, module_prefix: Option<String>) -> Self {
        self.module_prefix = Some(module_prefix);
        self
    }
}

/// Default data folder for a project name: lower-cased, spaces to `_`
#[must_use]
pub fn default_folder(reports_root: &Path, name: &str) -> PathBuf {
    reports_root.join(name.to_lowercase().replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_builder() {
        let project = ProjectDescriptor::new("Rover", "/data/rover")
            .with_views([HOME_PAGE, "Architecture"])
            .with_profile("catapult")
            .with_module_prefix("catapult");

        assert_eq!(project.name(), "Rover");
        assert_eq!(project.views(), [HOME_PAGE, "Architecture"]);
        assert_eq!(project.profile(), Some("catapult"));
        assert_eq!(project.module_prefix(), Some("catapult"));
        assert_eq!(project.csv_path("Subsystems"), Path::new("/data/rover/Subsystems.csv"));
        assert_eq!(project.json_path("Subsystems"), Path::new("/data/rover/Subsystems.json"));
    }

    #[test]
    fn patch_clears_optional_fields() {
        let mut project = ProjectDescriptor::new("Rover", "/data/rover").with_profile("catapult");
        project.apply(ProjectPatch::new().profile(None).description("edited"));

        assert_eq!(project.profile(), None);
        assert_eq!(project.description(), "edited");
        assert_eq!(project.folder(), Path::new("/data/rover"));
    }

    #[test]
    fn default_folder_lowercases_and_joins() {
        let folder = default_folder(Path::new("reports"), "Lego Rover Dashboard");
        assert_eq!(folder, Path::new("reports/lego_rover_dashboard"));
    }

    #[test]
    fn descriptor_serde_defaults() {
        let json = r#"{"id":"01ARZ3NDEKTSV4RRFFQ69G5FAV","name":"Rover","folder":"/data/rover"}"#;
        let project: ProjectDescriptor = serde_json::from_str(json).unwrap();

        assert!(project.views().is_empty());
        assert_eq!(project.module_prefix(), None);
    }
}
