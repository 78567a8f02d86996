//! Project data artifacts
//!
//! Every data file exists as a `<base>.json` export and, once converted, a
//! `<base>.csv` next to it. Renderers read the CSV and convert on demand.

use crate::error::{ConversionError, TableError};
use crate::renderer::RenderEnv;
use ontodash_graph::Table;
use ontodash_project::ProjectDescriptor;
use std::path::PathBuf;

/// Placeholder shown for a data file that has not been uploaded
#[must_use]
pub fn missing_data_message(base: &str) -> String {
    format!("{base}.json data is not available - upload it via **🪄 Edit Data** button")
}

/// What is on disk for one base name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// CSV present
    Csv,
    /// Only the JSON export present
    JsonOnly,
    /// Neither present
    Missing,
}

/// Check which artifacts exist for `base`
#[must_use]
pub fn availability(env: &RenderEnv<'_>, project: &ProjectDescriptor, base: &str) -> Availability {
    if env.tables.exists(&project.csv_path(base)) {
        Availability::Csv
    } else if env.tables.exists(&project.json_path(base)) {
        Availability::JsonOnly
    } else {
        Availability::Missing
    }
}

/// Make sure `<base>.csv` exists, converting the JSON export if needed
///
/// Returns `None` when neither file exists.
///
/// # Errors
/// Returns [`ConversionError`] if the conversion fails.
pub fn ensure_csv(
    env: &RenderEnv<'_>,
    project: &ProjectDescriptor,
    base: &str,
) -> Result<Option<PathBuf>, ConversionError> {
    let csv_path = project.csv_path(base);
    match availability(env, project, base) {
        Availability::Csv => Ok(Some(csv_path)),
        Availability::JsonOnly => {
            env.converter.convert(&project.json_path(base), &csv_path)?;
            Ok(Some(csv_path))
        }
        Availability::Missing => Ok(None),
    }
}

/// Convert every export that lacks a CSV, warning once per failure
///
/// Missing exports are skipped silently; callers decide what is required.
pub fn convert_missing(env: &mut RenderEnv<'_>, project: &ProjectDescriptor, bases: &[&str]) {
    for base in bases {
        if availability(env, project, base) != Availability::JsonOnly {
            continue;
        }
        if let Err(err) = env.converter.convert(&project.json_path(base), &project.csv_path(base)) {
            tracing::warn!(project = project.name(), base, error = %err, "conversion failed");
            env.ui.warning(&format!("Could not convert {base}.json -> CSV: {err}"));
        }
    }
}

/// Read `<base>.csv`
///
/// # Errors
/// Returns [`TableError`] if the file is missing or malformed.
pub fn read_csv(
    env: &RenderEnv<'_>,
    project: &ProjectDescriptor,
    base: &str,
) -> Result<Table, TableError> {
    env.tables.read_table(&project.csv_path(base))
}

/// Read `<base>.csv`, treating a missing or unreadable file as empty
///
/// A missing file is silent; an unreadable one is reported as a warning.
pub fn read_csv_or_empty(
    env: &mut RenderEnv<'_>,
    project: &ProjectDescriptor,
    base: &str,
) -> Table {
    match read_csv(env, project, base) {
        Ok(table) => table,
        Err(err) if err.is_not_found() => Table::default(),
        Err(err) => {
            tracing::warn!(project = project.name(), base, error = %err, "unreadable table");
            env.ui.warning(&format!("Could not read {base}.csv: {err}"));
            Table::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::MockJsonConverter;
    use crate::tabular::{CsvTableReader, TableReader};
    use crate::ui::TextUi;
    use ontodash_project::ViewFileMap;
    use std::path::Path;

    fn project(dir: &std::path::Path) -> ProjectDescriptor {
        ProjectDescriptor::new("Rover", dir)
    }

    #[test]
    fn ensure_csv_converts_json_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Subsystems.json"), "[]").unwrap();
        let project = project(dir.path());

        let mut converter = MockJsonConverter::new();
        converter
            .expect_convert()
            .times(1)
            .returning(|_, _| Ok(()));

        let mut ui = TextUi::new(Vec::new());
        let files = ViewFileMap::builtin();
        let env = RenderEnv::new(&mut ui, &CsvTableReader, &converter, &files);

        let path = ensure_csv(&env, &project, "Subsystems").unwrap();
        assert_eq!(path, Some(dir.path().join("Subsystems.csv")));
    }

    #[test]
    fn ensure_csv_skips_conversion_when_csv_present() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Subsystems.csv"), "SOI\nRover\n").unwrap();
        std::fs::write(dir.path().join("Subsystems.json"), "[]").unwrap();
        let project = project(dir.path());

        let mut converter = MockJsonConverter::new();
        converter.expect_convert().times(0);

        let mut ui = TextUi::new(Vec::new());
        let files = ViewFileMap::builtin();
        let env = RenderEnv::new(&mut ui, &CsvTableReader, &converter, &files);

        assert!(ensure_csv(&env, &project, "Subsystems").unwrap().is_some());
        assert_eq!(ensure_csv(&env, &project, "Assemblies").unwrap(), None);
    }

    #[test]
    fn convert_missing_warns_per_failure() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Subsystems.json"), "[]").unwrap();
        std::fs::write(dir.path().join("Assemblies.json"), "[]").unwrap();
        let project = project(dir.path());

        let mut converter = MockJsonConverter::new();
        converter.expect_convert().times(2).returning(|json, _| {
            Err(ConversionError::unsupported(json, "not flat"))
        });

        let mut ui = TextUi::new(Vec::new());
        let files = ViewFileMap::builtin();
        let mut env = RenderEnv::new(&mut ui, &CsvTableReader, &converter, &files);

        convert_missing(&mut env, &project, &["Subsystems", "Assemblies", "Components"]);
        drop(env);

        let out = String::from_utf8(ui.finish().unwrap()).unwrap();
        assert_eq!(out.matches("[warning]").count(), 2);
        assert!(out.starts_with("[warning] Could not convert Subsystems.json -> CSV"));
    }

    #[test]
    fn unreadable_tables_read_as_empty_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Components.csv"), "SOI\nRover,Extra\n").unwrap();
        let project = project(dir.path());

        let converter = MockJsonConverter::new();
        let mut ui = TextUi::new(Vec::new());
        let files = ViewFileMap::builtin();
        let mut env = RenderEnv::new(&mut ui, &CsvTableReader, &converter, &files);

        assert!(read_csv_or_empty(&mut env, &project, "Components").is_empty());
        assert!(read_csv_or_empty(&mut env, &project, "Assemblies").is_empty());
        drop(env);

        let out = String::from_utf8(ui.finish().unwrap()).unwrap();
        assert_eq!(out.matches("[warning]").count(), 1);
        assert!(out.starts_with("[warning] Could not read Components.csv"));
    }

    /// Reader that reports files from a fixed list, whatever is on disk
    struct ListedFiles(Vec<PathBuf>);

    impl TableReader for ListedFiles {
        fn read_table(&self, path: &Path) -> Result<Table, TableError> {
            Err(TableError::NotFound {
                path: path.to_path_buf(),
            })
        }

        fn exists(&self, path: &Path) -> bool {
            self.0.iter().any(|p| p == path)
        }
    }

    #[test]
    fn availability_asks_the_reader_for_both_files() {
        let project = project(Path::new("/nowhere/rover"));
        let reader = ListedFiles(vec![
            project.json_path("Subsystems"),
            project.csv_path("Assemblies"),
        ]);

        let converter = MockJsonConverter::new();
        let mut ui = TextUi::new(Vec::new());
        let files = ViewFileMap::builtin();
        let env = RenderEnv::new(&mut ui, &reader, &converter, &files);

        assert_eq!(availability(&env, &project, "Subsystems"), Availability::JsonOnly);
        assert_eq!(availability(&env, &project, "Assemblies"), Availability::Csv);
        assert_eq!(availability(&env, &project, "Components"), Availability::Missing);
    }
}
