use crate::artifacts::{self, missing_data_message, Availability};
use crate::error::RenderError;
use crate::hierarchies::{ENV_ENTITIES, MISSION};
use crate::renderer::{RenderEnv, ViewRenderer};
use ontodash_project::ProjectDescriptor;

const MISSION_FILE: &str = "MissionArchitecture";
const ENV_FILE: &str = "EnvEntities";
const IPT_FILE: &str = "IPTStructure";

/// Mission architecture graph with optional IPT table and environment graph
///
/// Each of the three files is drawn independently; one failing to read
/// does not hide the others.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissionRenderer;

impl ViewRenderer for MissionRenderer {
    fn render(
        &self,
        project: &ProjectDescriptor,
        env: &mut RenderEnv<'_>,
    ) -> Result<(), RenderError> {
        if artifacts::availability(env, project, MISSION_FILE) == Availability::Missing {
            env.ui.info(&missing_data_message(MISSION_FILE));
            return Ok(());
        }
        artifacts::convert_missing(env, project, &[MISSION_FILE, ENV_FILE, IPT_FILE]);

        match artifacts::read_csv(env, project, MISSION_FILE) {
            Ok(missions) => {
                env.ui.header("Mission Architecture");
                let graph = MISSION.builder()?.build(&missions);
                env.ui.graph(&graph, &MISSION.dot_options("Hierarchy"));
            }
            Err(err) => env.ui.error(&format!("Failed to read {MISSION_FILE}.csv: {err}")),
        }

        if artifacts::availability(env, project, IPT_FILE) == Availability::Csv {
            match artifacts::read_csv(env, project, IPT_FILE) {
                Ok(ipts) => {
                    env.ui.markdown("#### IPT Structure");
                    env.ui.table(&ipts);
                }
                Err(err) => env.ui.warning(&format!("Could not read {IPT_FILE}.csv: {err}")),
            }
        } else {
            env.ui.info(&format!("{IPT_FILE}.csv not present (optional)"));
        }

        if artifacts::availability(env, project, ENV_FILE) == Availability::Csv {
            match artifacts::read_csv(env, project, ENV_FILE) {
                Ok(entities) => {
                    env.ui.markdown("#### Environment Entities");
                    let graph = ENV_ENTITIES.builder()?.build(&entities);
                    env.ui.graph(&graph, &ENV_ENTITIES.dot_options("Hierarchy"));
                }
                Err(err) => env.ui.warning(&format!("Could not read {ENV_FILE}.csv: {err}")),
            }
        } else {
            env.ui.info(&format!("{ENV_FILE}.csv not present (optional)"));
        }
        Ok(())
    }
}
