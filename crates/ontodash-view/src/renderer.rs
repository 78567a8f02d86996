//! Renderer capability
//!
//! A [`ViewRenderer`] draws one tab of a project. Its result carries only
//! success or failure; all output goes through the [`Ui`] in [`RenderEnv`].

use crate::convert::JsonConverter;
use crate::error::RenderError;
use crate::tabular::TableReader;
use crate::ui::Ui;
use ontodash_project::{ProjectDescriptor, RequiredFiles};
use std::fmt;
use std::sync::Arc;

/// Collaborators handed to every renderer
pub struct RenderEnv<'a> {
    /// Output surface
    pub ui: &'a mut dyn Ui,
    /// Table source
    pub tables: &'a dyn TableReader,
    /// JSON → CSV converter
    pub converter: &'a dyn JsonConverter,
    /// Tab → file ties
    pub files: &'a dyn RequiredFiles,
}

impl<'a> RenderEnv<'a> {
    /// Bundle collaborators
    pub fn new(
        ui: &'a mut dyn Ui,
        tables: &'a dyn TableReader,
        converter: &'a dyn JsonConverter,
        files: &'a dyn RequiredFiles,
    ) -> Self {
        Self {
            ui,
            tables,
            converter,
            files,
        }
    }
}

impl fmt::Debug for RenderEnv<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderEnv").finish_non_exhaustive()
    }
}

/// Render capability of a tab
pub trait ViewRenderer: Send + Sync {
    /// Draw the tab for `project`
    ///
    /// # Errors
    /// Returns [`RenderError`] when the tab could not be drawn. A
    /// [`RenderError::Schema`] is shown to the user; anything else sends the
    /// tab to the generic preview.
    fn render(&self, project: &ProjectDescriptor, env: &mut RenderEnv<'_>)
        -> Result<(), RenderError>;
}

/// A registered renderer entry
///
/// An entry may exist without a render capability; looking it up then
/// behaves as if nothing was registered.
#[derive(Clone)]
pub struct ViewModule {
    name: String,
    renderer: Option<Arc<dyn ViewRenderer>>,
}

impl ViewModule {
    /// Entry with a render capability
    pub fn new(name: impl Into<String>, renderer: impl ViewRenderer + 'static) -> Self {
        Self {
            name: name.into(),
            renderer: Some(Arc::new(renderer)),
        }
    }

    /// Entry sharing an existing renderer
    pub fn shared(name: impl Into<String>, renderer: Arc<dyn ViewRenderer>) -> Self {
        Self {
            name: name.into(),
            renderer: Some(renderer),
        }
    }

    /// Entry without a render capability
    pub fn without_render(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            renderer: None,
        }
    }

    /// Entry name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render capability, if any
    #[inline]
    #[must_use]
    pub fn renderer(&self) -> Option<&Arc<dyn ViewRenderer>> {
        self.renderer.as_ref()
    }
}

impl fmt::Debug for ViewModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewModule")
            .field("name", &self.name)
            .field("renders", &self.renderer.is_some())
            .finish()
    }
}
