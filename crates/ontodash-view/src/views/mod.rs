//! Architecture and requirements views
//!
//! Each view is a [`ViewRenderer`](crate::ViewRenderer) drawing one or more
//! hierarchies from the project's data files. Missing or broken files are
//! reported inline; only hierarchy misconfiguration escapes as an error.

mod architecture;
mod functional;
mod mission;
mod requirements;
mod system_logical;

pub use architecture::{ArchitectureRenderer, ARCHITECTURE_SELECTOR};
pub use functional::FunctionalRenderer;
pub use mission::MissionRenderer;
pub use requirements::RequirementsRenderer;
pub use system_logical::{SystemLogicalRenderer, SUBSYSTEM_SELECTOR};
