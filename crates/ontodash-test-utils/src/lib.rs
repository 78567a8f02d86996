//! Testing utilities for ontodash workspace
//!
//! Shared test helpers, fixtures, and assertions.

#![allow(missing_docs)]

use ontodash_graph::{DotOptions, HierarchyGraph, SchemaError, Table};
use ontodash_project::{ProjectDescriptor, ViewFileMap};
use ontodash_view::{
    CsvTableReader, DispatchOutcome, JsonToCsv, RenderEnv, RenderError, Selections, Ui,
    ViewRenderer, ViewResolver,
};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// One call made on a [`RecordingUi`]
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Tab(String),
    Header(String),
    Subheader(String),
    Markdown(String),
    Info(String),
    Warning(String),
    Error(String),
    Table(Table),
    Graph {
        graph: HierarchyGraph,
        options: DotOptions,
    },
    Select {
        key: String,
        choice: Option<String>,
    },
    MultiSelect {
        key: String,
        options: Vec<String>,
        chosen: Vec<String>,
    },
}

/// [`Ui`] that records every call
#[derive(Debug, Default)]
pub struct RecordingUi {
    pub events: Vec<UiEvent>,
    selections: Selections,
}

impl RecordingUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selections(selections: Selections) -> Self {
        Self {
            events: Vec::new(),
            selections,
        }
    }

    pub fn infos(&self) -> Vec<&str> {
        self.texts(|e| match e {
            UiEvent::Info(t) => Some(t),
            _ => None,
        })
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.texts(|e| match e {
            UiEvent::Warning(t) => Some(t),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<&str> {
        self.texts(|e| match e {
            UiEvent::Error(t) => Some(t),
            _ => None,
        })
    }

    pub fn headers(&self) -> Vec<&str> {
        self.texts(|e| match e {
            UiEvent::Header(t) => Some(t),
            _ => None,
        })
    }

    pub fn tables(&self) -> Vec<&Table> {
        self.events
            .iter()
            .filter_map(|e| match e {
                UiEvent::Table(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    pub fn graphs(&self) -> Vec<(&HierarchyGraph, &DotOptions)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                UiEvent::Graph { graph, options } => Some((graph, options)),
                _ => None,
            })
            .collect()
    }

    fn texts<'a>(&'a self, pick: impl Fn(&'a UiEvent) -> Option<&'a String>) -> Vec<&'a str> {
        self.events.iter().filter_map(pick).map(String::as_str).collect()
    }
}

impl Ui for RecordingUi {
    fn tab(&mut self, name: &str) {
        self.events.push(UiEvent::Tab(name.to_string()));
    }

    fn header(&mut self, text: &str) {
        self.events.push(UiEvent::Header(text.to_string()));
    }

    fn subheader(&mut self, text: &str) {
        self.events.push(UiEvent::Subheader(text.to_string()));
    }

    fn markdown(&mut self, text: &str) {
        self.events.push(UiEvent::Markdown(text.to_string()));
    }

    fn info(&mut self, text: &str) {
        self.events.push(UiEvent::Info(text.to_string()));
    }

    fn warning(&mut self, text: &str) {
        self.events.push(UiEvent::Warning(text.to_string()));
    }

    fn error(&mut self, text: &str) {
        self.events.push(UiEvent::Error(text.to_string()));
    }

    fn table(&mut self, table: &Table) {
        self.events.push(UiEvent::Table(table.clone()));
    }

    fn graph(&mut self, graph: &HierarchyGraph, options: &DotOptions) {
        self.events.push(UiEvent::Graph {
            graph: graph.clone(),
            options: options.clone(),
        });
    }

    fn select(&mut self, key: &str, _label: &str, options: &[String]) -> Option<String> {
        let choice = self.selections.select(key, options);
        self.events.push(UiEvent::Select {
            key: key.to_string(),
            choice: choice.clone(),
        });
        choice
    }

    fn multiselect(&mut self, key: &str, _label: &str, options: &[String]) -> Vec<String> {
        let chosen = self.selections.multiselect(key, options);
        self.events.push(UiEvent::MultiSelect {
            key: key.to_string(),
            options: options.to_vec(),
            chosen: chosen.clone(),
        });
        chosen
    }
}

/// Temporary project data folder
pub struct ProjectFixture {
    dir: TempDir,
}

impl ProjectFixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `<base>.csv`
    pub fn csv(self, base: &str, content: &str) -> Self {
        std::fs::write(self.file(base, "csv"), content).unwrap();
        self
    }

    /// Write `<base>.json`
    pub fn json(self, base: &str, content: &str) -> Self {
        std::fs::write(self.file(base, "json"), content).unwrap();
        self
    }

    pub fn file(&self, base: &str, extension: &str) -> PathBuf {
        self.dir.path().join(format!("{base}.{extension}"))
    }

    /// Descriptor pointing at this folder
    pub fn project<I, S>(&self, name: &str, views: I) -> ProjectDescriptor
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ProjectDescriptor::new(name, self.dir.path()).with_views(views)
    }
}

impl Default for ProjectFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Show one tab with the default CSV reader, converter and file map
pub fn show_tab(
    resolver: &ViewResolver,
    ui: &mut RecordingUi,
    tab: &str,
    project: &ProjectDescriptor,
) -> DispatchOutcome {
    let files = ViewFileMap::builtin();
    let mut env = RenderEnv::new(ui, &CsvTableReader, &JsonToCsv, &files);
    resolver.show_tab(tab, project, &mut env)
}

/// Renderer that counts its calls and writes one marker line
#[derive(Debug, Clone)]
pub struct StubRenderer {
    pub marker: &'static str,
    calls: Arc<AtomicUsize>,
}

impl StubRenderer {
    pub fn new(marker: &'static str) -> Self {
        Self {
            marker,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ViewRenderer for StubRenderer {
    fn render(
        &self,
        _project: &ProjectDescriptor,
        env: &mut RenderEnv<'_>,
    ) -> Result<(), RenderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        env.ui.markdown(self.marker);
        Ok(())
    }
}

/// How a [`FailingRenderer`] fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Schema,
    Other,
}

/// Renderer that always fails
#[derive(Debug, Clone, Copy)]
pub struct FailingRenderer(pub Failure);

impl ViewRenderer for FailingRenderer {
    fn render(
        &self,
        _project: &ProjectDescriptor,
        _env: &mut RenderEnv<'_>,
    ) -> Result<(), RenderError> {
        Err(match self.0 {
            Failure::Schema => SchemaError::LabelCountMismatch {
                levels: 3,
                expected: 2,
                actual: 1,
            }
            .into(),
            Failure::Other => RenderError::Failed("stub failure".to_string()),
        })
    }
}

pub const SUBSYSTEMS_CSV: &str = "SOI,Subsystem\nRover,Drive\nRover,Frame\n";
pub const ASSEMBLIES_CSV: &str = "SOI,Subsystem,Assembly\nRover,Drive,Wheel\nRover,Frame,Chassis\n";
pub const COMPONENTS_CSV: &str =
    "SOI,Subsystem,Assembly,Component\nRover,Drive,Wheel,Tire\nRover,Frame,Chassis,Beam\n";
