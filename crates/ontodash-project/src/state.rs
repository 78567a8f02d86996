//! Per-session application state

use crate::descriptor::ProjectDescriptor;
use crate::registry::ProjectRegistry;
use serde::{Deserialize, Serialize};

/// Signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Login name
    pub username: String,
    /// Name shown in the sidebar
    pub display_name: String,
}

impl SessionUser {
    /// Create user whose display name equals the login name
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            display_name: username.clone(),
            username,
        }
    }

    /// With display name
    #[inline]
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }
}

/// State carried across the interactions of one session
///
/// Each session owns its own copy; nothing here is shared between users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    registry: ProjectRegistry,
    user: Option<SessionUser>,
}

impl AppState {
    /// Create state around a registry
    #[inline]
    #[must_use]
    pub fn new(registry: ProjectRegistry) -> Self {
        Self {
            registry,
            user: None,
        }
    }

    /// Project registry
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &ProjectRegistry {
        &self.registry
    }

    /// Mutable project registry
    #[inline]
    pub fn registry_mut(&mut self) -> &mut ProjectRegistry {
        &mut self.registry
    }

    /// Signed-in user, if any
    #[inline]
    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Check if a user is signed in
    #[inline]
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Record a sign-in
    pub fn sign_in(&mut self, user: SessionUser) {
        tracing::info!(user = %user.username, "signed in");
        self.user = Some(user);
    }

    /// Forget the signed-in user
    pub fn sign_out(&mut self) -> Option<SessionUser> {
        let user = self.user.take();
        if let Some(user) = &user {
            tracing::info!(user = %user.username, "signed out");
        }
        user
    }

    /// Check if any project is registered
    #[inline]
    #[must_use]
    pub fn has_projects(&self) -> bool {
        !self.registry.is_empty()
    }

    /// Current project, see [`ProjectRegistry::current`]
    #[inline]
    #[must_use]
    pub fn current_project(&self) -> Option<&ProjectDescriptor> {
        self.registry.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_and_out() {
        let mut state = AppState::default();
        assert!(!state.is_signed_in());

        state.sign_in(SessionUser::new("ada").with_display_name("Ada L."));
        assert_eq!(state.user().map(|u| u.display_name.as_str()), Some("Ada L."));

        let user = state.sign_out().unwrap();
        assert_eq!(user.username, "ada");
        assert!(state.sign_out().is_none());
    }

    #[test]
    fn current_project_follows_registry() {
        let mut state = AppState::default();
        assert!(!state.has_projects());
        assert!(state.current_project().is_none());

        state
            .registry_mut()
            .add(ProjectDescriptor::new("Rover", "/data/rover"))
            .unwrap();
        assert!(state.has_projects());
        assert_eq!(state.current_project().map(ProjectDescriptor::name), Some("Rover"));
    }
}
