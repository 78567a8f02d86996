//! View → data file ties
//!
//! Every tab reads a fixed set of data files, named by base name
//! (`Subsystems` stands for `Subsystems.json` and its `Subsystems.csv`
//! conversion). Profiles may tie the same tab to different files.

use crate::descriptor::HOME_PAGE;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Catapult profile name
pub const CATAPULT_PROFILE: &str = "catapult";

/// Mission architecture tab
pub const MISSION_VIEW: &str = "Mission";
/// Functional architecture tab
pub const FUNCTIONAL_VIEW: &str = "Functional Architecture";
/// System logical architecture tab
pub const SYSTEM_LOGICAL_VIEW: &str = "System Logical Architecture";
/// Consolidated architecture tab (catapult profile)
pub const ARCHITECTURE_VIEW: &str = "Architecture";
/// Requirements table tab
pub const REQUIREMENTS_VIEW: &str = "Requirements";

const MISSION_FILES: &[&str] = &["MissionArchitecture", "EnvEntities", "IPTStructure"];
const FUNCTIONAL_FILES: &[&str] = &["FunctionalArchitecture"];
const SYSTEM_FILES: &[&str] = &["Subsystems", "Assemblies", "Components"];

/// Lookup of the files a tab reads
///
/// Pure and profile-aware. Unknown tabs read nothing.
pub trait RequiredFiles {
    /// Base file names for a tab, in display order
    fn required_files(&self, view: &str, profile: Option<&str>) -> Vec<String>;
}

type Ties = IndexMap<String, Vec<String>>;

/// Table-driven [`RequiredFiles`]
///
/// A profile table is consulted first; tabs it does not mention fall back
/// to the shared table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewFileMap {
    #[serde(default)]
    shared: Ties,
    #[serde(default)]
    profiles: IndexMap<String, Ties>,
}

impl ViewFileMap {
    /// Create empty map
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map with the built-in ties
    #[must_use]
    pub fn builtin() -> Self {
        let mut map = Self::new();
        map.tie(HOME_PAGE, ["TripleCount"]);
        map.tie(MISSION_VIEW, MISSION_FILES.iter().copied());
        map.tie(FUNCTIONAL_VIEW, FUNCTIONAL_FILES.iter().copied());
        map.tie(SYSTEM_LOGICAL_VIEW, SYSTEM_FILES.iter().copied());
        map.tie(REQUIREMENTS_VIEW, ["Requirements"]);

        let architecture = MISSION_FILES
            .iter()
            .chain(FUNCTIONAL_FILES)
            .chain(SYSTEM_FILES)
            .copied();
        map.tie_profile(CATAPULT_PROFILE, ARCHITECTURE_VIEW, architecture);
        map
    }

    /// Tie a tab to files in the shared table (replaces existing ties)
    pub fn tie<I, S>(&mut self, view: impl Into<String>, files: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shared
            .insert(view.into(), files.into_iter().map(Into::into).collect());
    }

    /// Tie a tab to files for one profile (replaces existing ties)
    pub fn tie_profile<I, S>(
        &mut self,
        profile: impl Into<String>,
        view: impl Into<String>,
        files: I,
    )
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.profiles
            .entry(profile.into())
            .or_default()
            .insert(view.into(), files.into_iter().map(Into::into).collect());
    }

    /// Layer `other` over `self`; ties in `other` win tab by tab
    #[must_use]
    pub fn merged(mut self, other: Self) -> Self {
        self.shared.extend(other.shared);
        for (profile, ties) in other.profiles {
            self.profiles.entry(profile).or_default().extend(ties);
        }
        self
    }

    /// Tabs the map knows for a profile (profile tabs first)
    #[must_use]
    pub fn known_views(&self, profile: Option<&str>) -> Vec<&str> {
        let mut views: Vec<&str> = profile
            .and_then(|p| self.profiles.get(p))
            .map(|ties| ties.keys().map(String::as_str).collect())
            .unwrap_or_default();
        for view in self.shared.keys() {
            if !views.contains(&view.as_str()) {
                views.push(view);
            }
        }
        views
    }
}

impl RequiredFiles for ViewFileMap {
    fn required_files(&self, view: &str, profile: Option<&str>) -> Vec<String> {
        profile
            .and_then(|p| self.profiles.get(p))
            .and_then(|ties| ties.get(view))
            .or_else(|| self.shared.get(view))
            .cloned()
            .unwrap_or_default()
    }
}

/// Default tab list for a new project of a profile
#[must_use]
pub fn default_views(profile: Option<&str>) -> Vec<String> {
    let views: &[&str] = match profile {
        Some(CATAPULT_PROFILE) => &[HOME_PAGE, ARCHITECTURE_VIEW, REQUIREMENTS_VIEW],
        _ => &[
            HOME_PAGE,
            MISSION_VIEW,
            FUNCTIONAL_VIEW,
            SYSTEM_LOGICAL_VIEW,
            REQUIREMENTS_VIEW,
        ],
    };
    views.iter().map(|v| (*v).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_shared_ties() {
        let map = ViewFileMap::builtin();
        assert_eq!(
            map.required_files(SYSTEM_LOGICAL_VIEW, None),
            vec!["Subsystems", "Assemblies", "Components"]
        );
        assert_eq!(map.required_files(HOME_PAGE, None), vec!["TripleCount"]);
    }

    #[test]
    fn profile_ties_win_then_fall_back() {
        let map = ViewFileMap::builtin();

        let architecture = map.required_files(ARCHITECTURE_VIEW, Some(CATAPULT_PROFILE));
        assert_eq!(architecture.len(), 7);
        assert_eq!(architecture[0], "MissionArchitecture");

        assert_eq!(
            map.required_files(REQUIREMENTS_VIEW, Some(CATAPULT_PROFILE)),
            vec!["Requirements"]
        );
        assert!(map.required_files(ARCHITECTURE_VIEW, None).is_empty());
    }

    #[test]
    fn unknown_view_reads_nothing() {
        let map = ViewFileMap::builtin();
        assert!(map.required_files("Triples", Some("other")).is_empty());
    }

    #[test]
    fn merged_overrides_per_tab() {
        let mut overrides = ViewFileMap::new();
        overrides.tie(REQUIREMENTS_VIEW, ["Requirements", "Verification"]);
        overrides.tie_profile("lego", "Parts", ["Bricks"]);

        let map = ViewFileMap::builtin().merged(overrides);

        assert_eq!(
            map.required_files(REQUIREMENTS_VIEW, None),
            vec!["Requirements", "Verification"]
        );
        assert_eq!(map.required_files("Parts", Some("lego")), vec!["Bricks"]);
        assert_eq!(map.required_files(HOME_PAGE, Some("lego")), vec!["TripleCount"]);
    }

    #[test]
    fn known_views_lists_profile_first() {
        let map = ViewFileMap::builtin();
        let views = map.known_views(Some(CATAPULT_PROFILE));
        assert_eq!(views[0], ARCHITECTURE_VIEW);
        assert!(views.contains(&HOME_PAGE));
    }

    #[test]
    fn default_views_per_profile() {
        assert_eq!(
            default_views(Some(CATAPULT_PROFILE)),
            vec![HOME_PAGE, ARCHITECTURE_VIEW, REQUIREMENTS_VIEW]
        );
        assert_eq!(default_views(None).len(), 5);
    }
}
