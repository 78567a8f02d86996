//! Ontodash Projects
//!
//! Session-level bookkeeping for the dashboard: which projects exist, which
//! one is selected, and which data files each tab reads.
//!
//! # Core Concepts
//!
//! - [`ProjectDescriptor`]: one dashboard (data folder, tabs, profile)
//! - [`ProjectRegistry`]: the session's projects plus the current selection
//! - [`RequiredFiles`] / [`ViewFileMap`]: tab → data file ties, per profile
//! - [`DashboardConfig`]: TOML configuration seeding a registry
//!
//! # Example
//!
//! ```rust
//! use ontodash_project::prelude::*;
//!
//! let mut registry = ProjectRegistry::new();
//! registry.add(ProjectDescriptor::new("Rover", "reports/rover")).unwrap();
//! assert_eq!(registry.current().map(ProjectDescriptor::name), Some("Rover"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod descriptor;
mod error;
mod files;
mod registry;
mod state;

// Re-exports
pub use config::{DashboardConfig, ProjectConfig, DEFAULT_REPORTS_ROOT};
pub use descriptor::{default_folder, ProjectDescriptor, ProjectId, ProjectPatch, HOME_PAGE};
pub use error::{ConfigError, RegistryError};
pub use files::{
    default_views, RequiredFiles, ViewFileMap, ARCHITECTURE_VIEW, CATAPULT_PROFILE,
    FUNCTIONAL_VIEW, MISSION_VIEW, REQUIREMENTS_VIEW, SYSTEM_LOGICAL_VIEW,
};
pub use registry::ProjectRegistry;
pub use state::{AppState, SessionUser};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        AppState, DashboardConfig, ProjectDescriptor, ProjectRegistry, RegistryError,
        RequiredFiles, ViewFileMap, HOME_PAGE,
    };
}
