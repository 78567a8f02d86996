//! Built-in renderer registrations
//!
//! The root namespace serves projects without a renderer prefix; each
//! profile module registers its own namespace.

pub mod catapult;

use crate::registry::{Namespace, RendererRegistry};
use crate::views::{
    FunctionalRenderer, MissionRenderer, RequirementsRenderer, SystemLogicalRenderer,
};

/// Register the root namespace renderers
pub fn register_root(registry: &mut RendererRegistry) {
    registry.register(Namespace::Root, "mission", MissionRenderer);
    registry.register(Namespace::Root, "functional_architecture", FunctionalRenderer);
    registry.register(Namespace::Root, "system_logical_architecture", SystemLogicalRenderer);
    registry.register(Namespace::Root, "requirements", RequirementsRenderer);
}

pub(crate) fn register_defaults(registry: &mut RendererRegistry) {
    register_root(registry);
    catapult::register(registry);
}
