//! Session-level project registry
//!
//! Provides [`ProjectRegistry`] for holding the session's projects and the
//! current selection. Names are the selection key, so they stay unique.

use crate::descriptor::{ProjectDescriptor, ProjectId, ProjectPatch};
use crate::error::RegistryError;
use serde::{Deserialize, Serialize};

/// Projects of one session plus the current selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRegistry {
    projects: Vec<ProjectDescriptor>,
    current: Option<String>,
}

impl ProjectRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All projects in registration order
    #[inline]
    #[must_use]
    pub fn list(&self) -> &[ProjectDescriptor] {
        &self.projects
    }

    /// Project names in registration order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.projects.iter().map(ProjectDescriptor::name).collect()
    }

    /// Number of projects
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Lookup by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ProjectDescriptor> {
        self.projects.iter().find(|p| p.name() == name)
    }

    /// Lookup by id
    #[must_use]
    pub fn get_by_id(&self, id: ProjectId) -> Option<&ProjectDescriptor> {
        self.projects.iter().find(|p| p.id() == id)
    }

    /// Current project
    ///
    /// Falls back to the first registered project while nothing has been
    /// selected; `None` only when the registry is empty.
    #[must_use]
    pub fn current(&self) -> Option<&ProjectDescriptor> {
        match &self.current {
            Some(name) => self.get(name),
            None => self.projects.first(),
        }
    }

    /// Select the current project by name
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] if no project has this name; the
    /// previous selection is kept.
    pub fn set_current(&mut self, name: &str) -> Result<&ProjectDescriptor, RegistryError> {
        let index = self.index_of(name)?;
        self.current = Some(name.to_string());
        tracing::debug!(project = name, "selected current project");
        Ok(&self.projects[index])
    }

    /// Register a new project
    ///
    /// # Errors
    /// - [`RegistryError::EmptyName`] for a blank name
    /// - [`RegistryError::DuplicateName`] if the name is taken
    /// - [`RegistryError::DuplicateId`] if the id is taken
    pub fn add(&mut self, project: ProjectDescriptor) -> Result<ProjectId, RegistryError> {
        if project.name().trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.get(project.name()).is_some() {
            return Err(RegistryError::DuplicateName(project.name().to_string()));
        }
        if self.get_by_id(project.id()).is_some() {
            return Err(RegistryError::DuplicateId(project.id()));
        }

        let id = project.id();
        tracing::info!(project = project.name(), %id, "registered project");
        self.projects.push(project);
        Ok(id)
    }

    /// Edit an existing project
    ///
    /// A rename is checked for uniqueness and carries the current selection
    /// along. The data folder cannot change.
    ///
    /// # Errors
    /// - [`RegistryError::NotFound`] if no project has this name
    /// - [`RegistryError::EmptyName`] / [`RegistryError::DuplicateName`] for a
    ///   bad rename
    pub fn update(
        &mut self,
        name: &str,
        patch: ProjectPatch,
    ) -> Result<&ProjectDescriptor, RegistryError> {
        let index = self.index_of(name)?;

        if let Some(new_name) = &patch.name {
            if new_name.trim().is_empty() {
                return Err(RegistryError::EmptyName);
            }
            if new_name != name && self.get(new_name).is_some() {
                return Err(RegistryError::DuplicateName(new_name.clone()));
            }
            if self.current.as_deref() == Some(name) {
                self.current = Some(new_name.clone());
            }
        }

        self.projects[index].apply(patch);
        Ok(&self.projects[index])
    }

    /// Delete a project
    ///
    /// Clears the selection if it pointed at the removed project.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] if no project has this name.
    pub fn remove(&mut self, name: &str) -> Result<ProjectDescriptor, RegistryError> {
        let index = self.index_of(name)?;
        if self.current.as_deref() == Some(name) {
            self.current = None;
        }
        tracing::info!(project = name, "removed project");
        Ok(self.projects.remove(index))
    }

    fn index_of(&self, name: &str) -> Result<usize, RegistryError> {
        self.projects
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str) -> ProjectDescriptor {
        ProjectDescriptor::new(name, format!("/data/{name}"))
    }

    #[test]
    fn registry_new_empty() {
        let registry = ProjectRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.current().is_none());
    }

    #[test]
    fn registry_add_and_list() {
        let mut registry = ProjectRegistry::new();
        registry.add(project("Rover")).unwrap();
        registry.add(project("Catapult")).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["Rover", "Catapult"]);
    }

    #[test]
    fn registry_rejects_duplicate_name() {
        let mut registry = ProjectRegistry::new();
        registry.add(project("Rover")).unwrap();

        let result = registry.add(project("Rover"));
        assert_eq!(result, Err(RegistryError::DuplicateName("Rover".to_string())));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn registry_rejects_duplicate_id() {
        let mut registry = ProjectRegistry::new();
        let first = project("Rover");
        let id = first.id();
        registry.add(first).unwrap();

        let result = registry.add(project("Other").with_id(id));
        assert_eq!(result, Err(RegistryError::DuplicateId(id)));
    }

    #[test]
    fn registry_rejects_blank_name() {
        let mut registry = ProjectRegistry::new();
        assert_eq!(registry.add(project("  ")), Err(RegistryError::EmptyName));
    }

    #[test]
    fn current_defaults_to_first() {
        let mut registry = ProjectRegistry::new();
        registry.add(project("Rover")).unwrap();
        registry.add(project("Catapult")).unwrap();

        assert_eq!(registry.current().map(ProjectDescriptor::name), Some("Rover"));
    }

    #[test]
    fn set_current_by_name() {
        let mut registry = ProjectRegistry::new();
        registry.add(project("Rover")).unwrap();
        registry.add(project("Catapult")).unwrap();

        registry.set_current("Catapult").unwrap();
        assert_eq!(registry.current().map(ProjectDescriptor::name), Some("Catapult"));
    }

    #[test]
    fn set_current_unknown_keeps_selection() {
        let mut registry = ProjectRegistry::new();
        registry.add(project("Rover")).unwrap();
        registry.add(project("Catapult")).unwrap();
        registry.set_current("Catapult").unwrap();

        let result = registry.set_current("Missing");
        assert!(matches!(result, Err(RegistryError::NotFound(name)) if name == "Missing"));
        assert_eq!(registry.current().map(ProjectDescriptor::name), Some("Catapult"));
    }

    #[test]
    fn update_rename_follows_selection_and_keeps_folder() {
        let mut registry = ProjectRegistry::new();
        registry.add(project("Rover")).unwrap();
        registry.set_current("Rover").unwrap();

        let updated = registry
            .update("Rover", ProjectPatch::new().rename("Lego Rover").views(["Home Page"]))
            .unwrap();
        assert_eq!(updated.folder(), std::path::Path::new("/data/Rover"));

        assert_eq!(registry.current().map(ProjectDescriptor::name), Some("Lego Rover"));
        assert!(registry.get("Rover").is_none());
    }

    #[test]
    fn update_rejects_colliding_rename() {
        let mut registry = ProjectRegistry::new();
        registry.add(project("Rover")).unwrap();
        registry.add(project("Catapult")).unwrap();

        let result = registry.update("Rover", ProjectPatch::new().rename("Catapult"));
        assert!(matches!(result, Err(RegistryError::DuplicateName(_))));
        assert!(registry.get("Rover").is_some());
    }

    #[test]
    fn remove_clears_selection() {
        let mut registry = ProjectRegistry::new();
        registry.add(project("Rover")).unwrap();
        registry.add(project("Catapult")).unwrap();
        registry.set_current("Catapult").unwrap();

        let removed = registry.remove("Catapult").unwrap();
        assert_eq!(removed.name(), "Catapult");
        assert_eq!(registry.current().map(ProjectDescriptor::name), Some("Rover"));
        assert!(registry.remove("Catapult").is_err());
    }
}
