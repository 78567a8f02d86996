use crate::artifacts::{self, missing_data_message};
use crate::error::RenderError;
use crate::renderer::{RenderEnv, ViewRenderer};
use ontodash_project::ProjectDescriptor;

const REQUIREMENTS_FILE: &str = "Requirements";

/// Requirements table
///
/// Needs the JSON export even when a CSV is already present. A CSV that
/// cannot be read is returned as an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequirementsRenderer;

impl ViewRenderer for RequirementsRenderer {
    fn render(
        &self,
        project: &ProjectDescriptor,
        env: &mut RenderEnv<'_>,
    ) -> Result<(), RenderError> {
        if !env.tables.exists(&project.json_path(REQUIREMENTS_FILE)) {
            env.ui.info(&missing_data_message(REQUIREMENTS_FILE));
            return Ok(());
        }

        if let Err(err) = artifacts::ensure_csv(env, project, REQUIREMENTS_FILE) {
            env.ui
                .error(&format!("Failed to convert {REQUIREMENTS_FILE}.json -> CSV: {err}"));
            return Ok(());
        }

        let requirements = artifacts::read_csv(env, project, REQUIREMENTS_FILE)?;
        env.ui.subheader("Requirements Table");
        env.ui.table(&requirements);
        Ok(())
    }
}
