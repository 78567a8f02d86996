use crate::artifacts::{self, missing_data_message};
use crate::error::RenderError;
use crate::hierarchies::FUNCTIONAL;
use crate::renderer::{RenderEnv, ViewRenderer};
use ontodash_project::ProjectDescriptor;

const FUNCTIONAL_FILE: &str = "FunctionalArchitecture";

/// Functional decomposition graph, laid out left to right
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionalRenderer;

impl ViewRenderer for FunctionalRenderer {
    fn render(
        &self,
        project: &ProjectDescriptor,
        env: &mut RenderEnv<'_>,
    ) -> Result<(), RenderError> {
        match artifacts::ensure_csv(env, project, FUNCTIONAL_FILE) {
            Ok(Some(_)) => {}
            Ok(None) => {
                env.ui.info(&missing_data_message(FUNCTIONAL_FILE));
                return Ok(());
            }
            Err(err) => {
                env.ui
                    .error(&format!("Failed to convert {FUNCTIONAL_FILE}.json -> CSV: {err}"));
                return Ok(());
            }
        }

        let functions = match artifacts::read_csv(env, project, FUNCTIONAL_FILE) {
            Ok(table) => table,
            Err(err) => {
                env.ui.error(&format!("Failed to read {FUNCTIONAL_FILE}.csv: {err}"));
                return Ok(());
            }
        };

        env.ui.header("Functional Architecture");
        let graph = FUNCTIONAL.builder()?.build(&functions);
        env.ui.graph(&graph, &FUNCTIONAL.dot_options("Hierarchy"));
        Ok(())
    }
}
