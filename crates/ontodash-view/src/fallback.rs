//! Generic tabular preview
//!
//! Shown for any tab without a working renderer: one table per data file
//! the tab reads, or an upload placeholder where the CSV is missing.

use crate::artifacts::missing_data_message;
use crate::renderer::RenderEnv;
use ontodash_project::ProjectDescriptor;

/// Preview every data file of a tab; returns how many files were processed
///
/// Never fails: a file that cannot be read is reported inline and the
/// remaining files are still shown.
pub fn render_fallback(tab: &str, project: &ProjectDescriptor, env: &mut RenderEnv<'_>) -> usize {
    let bases = env.files.required_files(tab, project.profile());
    tracing::debug!(tab, project = project.name(), files = bases.len(), "generic preview");

    for base in &bases {
        let csv_path = project.csv_path(base);
        if !env.tables.exists(&csv_path) {
            env.ui.info(&missing_data_message(base));
            continue;
        }
        match env.tables.read_table(&csv_path) {
            Ok(table) => env.ui.table(&table),
            Err(err) => {
                tracing::warn!(tab, base = base.as_str(), error = %err, "preview read failed");
                env.ui.warning(&format!("Could not read {base}.csv: {err}"));
            }
        }
    }
    bases.len()
}
