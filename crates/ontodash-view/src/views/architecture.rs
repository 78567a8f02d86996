use super::{FunctionalRenderer, MissionRenderer, SystemLogicalRenderer};
use crate::error::RenderError;
use crate::renderer::{RenderEnv, ViewRenderer};
use ontodash_project::{ProjectDescriptor, FUNCTIONAL_VIEW, MISSION_VIEW, SYSTEM_LOGICAL_VIEW};

/// Widget key of the architecture selector
pub const ARCHITECTURE_SELECTOR: &str = "catapult_arch_selector";

/// Consolidated architecture tab
///
/// A selector switches between the mission, functional and system logical
/// views; the chosen one renders in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArchitectureRenderer;

impl ViewRenderer for ArchitectureRenderer {
    fn render(
        &self,
        project: &ProjectDescriptor,
        env: &mut RenderEnv<'_>,
    ) -> Result<(), RenderError> {
        let options: Vec<String> = [MISSION_VIEW, FUNCTIONAL_VIEW, SYSTEM_LOGICAL_VIEW]
            .iter()
            .map(|v| (*v).to_string())
            .collect();
        let choice = env
            .ui
            .select(ARCHITECTURE_SELECTOR, "Select Architecture View", &options);

        match choice.as_deref() {
            Some(MISSION_VIEW) => MissionRenderer.render(project, env),
            Some(FUNCTIONAL_VIEW) => FunctionalRenderer.render(project, env),
            Some(SYSTEM_LOGICAL_VIEW) => SystemLogicalRenderer.render(project, env),
            _ => Ok(()),
        }
    }
}
