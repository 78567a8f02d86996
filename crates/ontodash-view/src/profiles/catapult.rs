//! Catapult profile
//!
//! Consolidates the three architecture views into one selectable tab and
//! renders the separate views under the same namespace.

use crate::registry::{Namespace, RendererRegistry};
use crate::views::{
    ArchitectureRenderer, FunctionalRenderer, MissionRenderer, RequirementsRenderer,
    SystemLogicalRenderer,
};
use ontodash_project::CATAPULT_PROFILE;

/// Renderer namespace of the catapult profile
pub const NAMESPACE: &str = CATAPULT_PROFILE;

/// Register the catapult renderers
pub fn register(registry: &mut RendererRegistry) {
    let namespace = Namespace::module(NAMESPACE);
    registry.register(namespace.clone(), "architecture", ArchitectureRenderer);
    registry.register(namespace.clone(), "mission", MissionRenderer);
    registry.register(namespace.clone(), "functional_architecture", FunctionalRenderer);
    registry.register(namespace.clone(), "system_logical_architecture", SystemLogicalRenderer);
    registry.register(namespace, "requirements", RequirementsRenderer);
}
