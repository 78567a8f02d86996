//! Home page
//!
//! Always rendered centrally, whatever the project's profile.

use crate::artifacts::{read_csv, Availability};
use crate::error::RenderError;
use crate::renderer::{RenderEnv, ViewRenderer};
use ontodash_graph::{Record, Table};
use ontodash_project::ProjectDescriptor;

const TRIPLE_COUNT: &str = "TripleCount";
const TRIPLE_COUNT_COLUMN: &str = "tripleCount";

/// Triple count plus the tab → file reference table
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeRenderer;

impl HomeRenderer {
    /// Tab → file rows for a project, in tab order
    #[must_use]
    pub fn file_usage(project: &ProjectDescriptor, env: &RenderEnv<'_>) -> Table {
        let mut table = Table::new(["Tab Name", "Files Utilized"]);
        for view in project.views() {
            for base in env.files.required_files(view, project.profile()) {
                table.push(
                    Record::new()
                        .with("Tab Name", view.as_str())
                        .with("Files Utilized", format!("{base}.json")),
                );
            }
        }
        table
    }
}

impl ViewRenderer for HomeRenderer {
    fn render(
        &self,
        project: &ProjectDescriptor,
        env: &mut RenderEnv<'_>,
    ) -> Result<(), RenderError> {
        if crate::artifacts::availability(env, project, TRIPLE_COUNT) == Availability::Csv {
            match read_csv(env, project, TRIPLE_COUNT) {
                Ok(table) => {
                    if let Some(count) = table.first_value(TRIPLE_COUNT_COLUMN) {
                        env.ui.markdown(&format!("#### RDF Triple Count: {count}"));
                    }
                }
                Err(err) => env.ui.warning(&format!("Could not read {TRIPLE_COUNT}.csv: {err}")),
            }
        } else {
            env.ui.info(&format!(
                "{TRIPLE_COUNT}.json data is not available - upload it via **🪄 Edit Data**"
            ));
        }

        let usage = Self::file_usage(project, env);
        if !usage.is_empty() {
            env.ui.markdown("#### Files used in each tab");
            env.ui.table(&usage);
        }
        Ok(())
    }
}
