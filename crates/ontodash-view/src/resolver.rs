//! Tab dispatch
//!
//! Provides [`ViewResolver`], which decides which renderer draws a tab:
//!
//! 1. the home page tab always uses the central home renderer
//! 2. a project with a renderer prefix looks the normalized tab name up in
//!    that namespace
//! 3. a project without one looks it up in the root namespace
//! 4. anything else gets the generic tabular preview
//!
//! Lookups never touch the project or registry state. Lookup failures are
//! logged and treated as not found.

use crate::error::{LoadError, RenderError};
use crate::fallback::render_fallback;
use crate::home::HomeRenderer;
use crate::normalize::view_name_to_module_name;
use crate::registry::{Namespace, RendererRegistry};
use crate::renderer::{RenderEnv, ViewRenderer};
use ontodash_project::{AppState, ProjectDescriptor, HOME_PAGE};
use std::fmt;
use std::sync::Arc;

/// Where a tab's renderer comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionKind {
    /// Central home renderer
    Home,
    /// Profile namespace
    Profile,
    /// Root namespace
    Root,
    /// Generic tabular preview
    Fallback,
}

impl fmt::Display for ResolutionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Home => "home",
            Self::Profile => "profile",
            Self::Root => "root",
            Self::Fallback => "fallback",
        })
    }
}

/// Outcome of looking a tab up, without rendering it
#[derive(Clone)]
pub enum Resolution {
    /// Home page
    Home,
    /// Renderer in the project's namespace
    Profile {
        /// Qualified key (`prefix.ident`)
        key: String,
        /// Render capability
        renderer: Arc<dyn ViewRenderer>,
    },
    /// Renderer in the root namespace
    Root {
        /// Identifier
        key: String,
        /// Render capability
        renderer: Arc<dyn ViewRenderer>,
    },
    /// No usable renderer
    Fallback {
        /// Why the lookup failed
        reason: LoadError,
    },
}

impl Resolution {
    /// Kind of resolution
    #[must_use]
    pub fn kind(&self) -> ResolutionKind {
        match self {
            Self::Home => ResolutionKind::Home,
            Self::Profile { .. } => ResolutionKind::Profile,
            Self::Root { .. } => ResolutionKind::Root,
            Self::Fallback { .. } => ResolutionKind::Fallback,
        }
    }

    /// Renderer key, if a registered renderer was found
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Profile { key, .. } | Self::Root { key, .. } => Some(key.as_str()),
            Self::Home | Self::Fallback { .. } => None,
        }
    }
}

impl fmt::Debug for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("Home"),
            Self::Profile { key, .. } => f.debug_struct("Profile").field("key", key).finish(),
            Self::Root { key, .. } => f.debug_struct("Root").field("key", key).finish(),
            Self::Fallback { reason } => {
                f.debug_struct("Fallback").field("reason", reason).finish()
            }
        }
    }
}

/// Result of showing one tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A renderer drew the tab
    Rendered {
        /// Home, profile or root
        kind: ResolutionKind,
    },
    /// The generic preview drew the tab
    Fallback {
        /// Number of data files previewed
        files: usize,
        /// Lookup or renderer failure that led here
        reason: String,
    },
    /// The tab failed and the error was shown to the user
    Failed {
        /// Error text
        error: String,
    },
}

impl DispatchOutcome {
    /// Check if the tab failed
    #[inline]
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Outcome of one tab of a project render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabOutcome {
    /// Tab name
    pub tab: String,
    /// What happened
    pub outcome: DispatchOutcome,
}

/// Resolves tabs to renderers and dispatches them
#[derive(Clone)]
pub struct ViewResolver {
    registry: Arc<RendererRegistry>,
    home: Arc<dyn ViewRenderer>,
}

impl fmt::Debug for ViewResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewResolver")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl ViewResolver {
    /// Create resolver over a registry, with the built-in home page
    #[must_use]
    pub fn new(registry: Arc<RendererRegistry>) -> Self {
        Self {
            registry,
            home: Arc::new(HomeRenderer),
        }
    }

    /// With a different home renderer
    #[must_use]
    pub fn with_home(mut self, home: impl ViewRenderer + 'static) -> Self {
        self.home = Arc::new(home);
        self
    }

    /// Renderer registry
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    /// Find the renderer for a tab without running it
    #[must_use]
    pub fn resolve(&self, tab: &str, project: &ProjectDescriptor) -> Resolution {
        if tab == HOME_PAGE {
            return Resolution::Home;
        }

        let ident = view_name_to_module_name(tab);
        let namespace = match project.module_prefix() {
            Some(prefix) => Namespace::module(prefix),
            None => Namespace::Root,
        };

        match self.registry.lookup(&namespace, &ident) {
            Ok(renderer) => {
                let key = namespace.qualify(&ident);
                tracing::debug!(tab, key = %key, "resolved renderer");
                match namespace {
                    Namespace::Root => Resolution::Root { key, renderer },
                    Namespace::Module(_) => Resolution::Profile { key, renderer },
                }
            }
            Err(reason) => {
                match &reason {
                    LoadError::NotFound(_) => {
                        tracing::debug!(tab, %reason, "no renderer, using generic preview");
                    }
                    _ => {
                        tracing::warn!(tab, %reason, "renderer unavailable, using generic preview");
                    }
                }
                Resolution::Fallback { reason }
            }
        }
    }

    /// Resolve and draw one tab
    ///
    /// Never fails: renderer failures fall through to the generic preview,
    /// except schema errors, which are shown to the user.
    pub fn show_tab(
        &self,
        tab: &str,
        project: &ProjectDescriptor,
        env: &mut RenderEnv<'_>,
    ) -> DispatchOutcome {
        let resolution = self.resolve(tab, project);
        let kind = resolution.kind();

        let renderer = match resolution {
            Resolution::Home => Arc::clone(&self.home),
            Resolution::Profile { renderer, .. } | Resolution::Root { renderer, .. } => renderer,
            Resolution::Fallback { reason } => {
                let files = render_fallback(tab, project, env);
                return DispatchOutcome::Fallback {
                    files,
                    reason: reason.to_string(),
                };
            }
        };

        match renderer.render(project, env) {
            Ok(()) => DispatchOutcome::Rendered { kind },
            Err(err) => handle_failure(tab, project, env, kind, &err),
        }
    }

    /// Draw the project header and every configured tab in order
    ///
    /// A failing tab never stops the following ones.
    pub fn render_project(
        &self,
        project: &ProjectDescriptor,
        env: &mut RenderEnv<'_>,
    ) -> Vec<TabOutcome> {
        env.ui.header(project.name());
        project
            .views()
            .iter()
            .map(|tab| {
                env.ui.tab(tab);
                TabOutcome {
                    tab: tab.clone(),
                    outcome: self.show_tab(tab, project, env),
                }
            })
            .collect()
    }

    /// Draw the session's current project, or the welcome page if none
    pub fn render_current(&self, state: &AppState, env: &mut RenderEnv<'_>) -> Vec<TabOutcome> {
        match state.current_project() {
            Some(project) => self.render_project(project, env),
            None => {
                env.ui.header("Welcome!");
                env.ui.markdown("Create your first project to get started.");
                Vec::new()
            }
        }
    }
}

fn handle_failure(
    tab: &str,
    project: &ProjectDescriptor,
    env: &mut RenderEnv<'_>,
    kind: ResolutionKind,
    err: &RenderError,
) -> DispatchOutcome {
    if err.is_schema() || kind == ResolutionKind::Home {
        tracing::error!(tab, project = project.name(), error = %err, "tab failed");
        env.ui.error(&err.to_string());
        return DispatchOutcome::Failed {
            error: err.to_string(),
        };
    }

    tracing::warn!(
        tab,
        project = project.name(),
        error = %err,
        "renderer failed, using generic preview"
    );
    let files = render_fallback(tab, project, env);
    DispatchOutcome::Fallback {
        files,
        reason: err.to_string(),
    }
}
