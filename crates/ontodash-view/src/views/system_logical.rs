use crate::artifacts::{self, Availability};
use crate::error::RenderError;
use crate::hierarchies::SYSTEM_LOGICAL;
use crate::renderer::{RenderEnv, ViewRenderer};
use ontodash_graph::{level_values, Table};
use ontodash_project::ProjectDescriptor;

const SYSTEM_FILES: [&str; 3] = ["Subsystems", "Assemblies", "Components"];

/// Widget key of the subsystem multi-select
pub const SUBSYSTEM_SELECTOR: &str = "catapult_subsystem_selector";

/// System breakdown graph with a subsystem filter
///
/// The three source files are concatenated into one table. Selecting
/// subsystems shows the graph induced by their rows; an empty selection
/// shows the whole system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLogicalRenderer;

impl ViewRenderer for SystemLogicalRenderer {
    fn render(
        &self,
        project: &ProjectDescriptor,
        env: &mut RenderEnv<'_>,
    ) -> Result<(), RenderError> {
        let any_present = SYSTEM_FILES
            .iter()
            .any(|base| artifacts::availability(env, project, base) != Availability::Missing);
        if !any_present {
            env.ui.info(
                "System architecture data (Subsystems/Assemblies/Components) is not available - upload via **🪄 Edit Data**",
            );
            return Ok(());
        }
        artifacts::convert_missing(env, project, &SYSTEM_FILES);

        let system = Table::concat(
            SYSTEM_FILES
                .iter()
                .map(|base| artifacts::read_csv_or_empty(env, project, base))
                .filter(|table| !table.is_empty()),
        );

        env.ui.header("System Logical Architecture");
        let builder = SYSTEM_LOGICAL.builder()?;
        let filter_level = SYSTEM_LOGICAL.filter_level().unwrap_or_default();

        let options = level_values(&system, filter_level);
        let selected = env.ui.multiselect(
            SUBSYSTEM_SELECTOR,
            "Select one/multiple subsystem(s) to expand and display",
            &options,
        );

        if selected.is_empty() {
            let graph = builder.build(&system);
            env.ui.graph(&graph, &SYSTEM_LOGICAL.dot_options("Hierarchy"));
        } else {
            let graph = builder.subgraph(&system, filter_level, selected.as_slice());
            env.ui.graph(&graph, &SYSTEM_LOGICAL.dot_options("Subset Hierarchy"));
        }
        Ok(())
    }
}
