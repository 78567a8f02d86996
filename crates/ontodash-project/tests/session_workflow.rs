//! Session workflow tests: config on disk through registry edits

use ontodash_project::prelude::*;
use ontodash_project::{
    ProjectConfig, ProjectPatch, SessionUser, ARCHITECTURE_VIEW, CATAPULT_PROFILE,
    REQUIREMENTS_VIEW,
};
use pretty_assertions::assert_eq;
use std::path::Path;

fn write_config(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("ontodash.toml");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn config_file_to_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[[projects]]
name = "Lego Rover"

[[projects]]
name = "Catapult"
profile = "catapult"
module_prefix = "catapult"
"#,
    );

    let config = DashboardConfig::load(&path).unwrap();
    let mut state = AppState::new(config.registry().unwrap());
    state.sign_in(SessionUser::new("ada"));

    let rover = state.current_project().unwrap();
    assert_eq!(rover.name(), "Lego Rover");
    assert_eq!(rover.folder(), dir.path().join("reports").join("lego_rover"));

    let catapult = state.registry_mut().set_current("Catapult").unwrap();
    assert_eq!(catapult.views(), [HOME_PAGE, ARCHITECTURE_VIEW, REQUIREMENTS_VIEW]);
    assert_eq!(
        state.current_project().and_then(ProjectDescriptor::module_prefix),
        Some(CATAPULT_PROFILE)
    );
}

#[test]
fn edits_keep_names_unique_and_folders_fixed() {
    let config = DashboardConfig::new()
        .with_reports_root("/srv/reports")
        .with_project(ProjectConfig::new("Rover"))
        .with_project(ProjectConfig::new("Catapult").with_profile(CATAPULT_PROFILE));
    let mut registry = config.registry().unwrap();

    let err = registry
        .update("Catapult", ProjectPatch::new().rename("Rover"))
        .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateName("Rover".to_string()));

    let renamed = registry
        .update("Catapult", ProjectPatch::new().rename("Trebuchet"))
        .unwrap();
    assert_eq!(renamed.folder(), Path::new("/srv/reports/catapult"));
    assert_eq!(registry.names(), vec!["Rover", "Trebuchet"]);
}

#[test]
fn required_files_follow_profile() {
    let config = DashboardConfig::new();
    let files = config.file_map();

    let profile_files = files.required_files(ARCHITECTURE_VIEW, Some(CATAPULT_PROFILE));
    assert!(profile_files.contains(&"Subsystems".to_string()));
    assert!(files.required_files(ARCHITECTURE_VIEW, None).is_empty());
    assert_eq!(files.required_files(HOME_PAGE, None), vec!["TripleCount"]);
}

#[test]
fn empty_config_has_no_projects() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "");

    let state = AppState::new(DashboardConfig::load(&path).unwrap().registry().unwrap());
    assert!(!state.has_projects());
    assert!(state.current_project().is_none());
}
