//! Ontodash Views
//!
//! Decides which renderer draws each tab of a project dashboard and ships
//! the built-in renderers.
//!
//! # Core Concepts
//!
//! - [`ViewResolver`]: home page, then profile namespace, then root
//!   namespace, then the generic tabular preview
//! - [`RendererRegistry`]: `(namespace, identifier) → renderer`, lazily
//!   initialised
//! - [`ViewRenderer`] / [`RenderEnv`]: the render capability and the
//!   collaborators it draws with
//! - [`Ui`]: output surface; [`TextUi`] renders plain text
//! - [`TableReader`] / [`JsonConverter`]: data file access
//!
//! # Example
//!
//! ```rust,no_run
//! use ontodash_project::{ProjectDescriptor, ViewFileMap};
//! use ontodash_view::prelude::*;
//! use std::sync::Arc;
//!
//! let resolver = ViewResolver::new(Arc::new(RendererRegistry::with_defaults()));
//! let project = ProjectDescriptor::new("Rover", "reports/rover")
//!     .with_views(["Home Page", "Requirements"]);
//!
//! let mut ui = TextUi::new(std::io::stdout());
//! let files = ViewFileMap::builtin();
//! let mut env = RenderEnv::new(&mut ui, &CsvTableReader, &JsonToCsv, &files);
//! resolver.render_project(&project, &mut env);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod artifacts;
mod convert;
mod error;
mod fallback;
pub mod hierarchies;
mod home;
mod normalize;
pub mod profiles;
mod registry;
mod renderer;
mod resolver;
mod tabular;
mod ui;
pub mod views;

// Re-exports
pub use convert::{JsonConverter, JsonToCsv};
pub use error::{ConversionError, LoadError, RenderError, TableError};
pub use fallback::render_fallback;
pub use home::HomeRenderer;
pub use normalize::view_name_to_module_name;
pub use registry::{Namespace, RendererRegistry};
pub use renderer::{RenderEnv, ViewModule, ViewRenderer};
pub use resolver::{DispatchOutcome, Resolution, ResolutionKind, TabOutcome, ViewResolver};
pub use tabular::{CsvTableReader, TableReader, NA_TOKENS};
pub use ui::{Selections, TextUi, Ui};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        CsvTableReader, DispatchOutcome, JsonToCsv, RenderEnv, RenderError, RendererRegistry,
        TextUi, Ui, ViewRenderer, ViewResolver,
    };
}
