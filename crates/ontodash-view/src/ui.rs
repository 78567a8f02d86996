//! UI collaborator
//!
//! Renderers never write output themselves; everything flows through a
//! [`Ui`]. The dashboard front end implements it over its widget toolkit,
//! [`TextUi`] writes plain text for headless use.

use indexmap::IndexMap;
use ontodash_graph::{DotOptions, HierarchyGraph, Table};
use std::fmt;
use std::io::{self, Write};

/// Output and input surface available to renderers
pub trait Ui {
    /// Start the content of one tab
    fn tab(&mut self, name: &str);

    /// Section header
    fn header(&mut self, text: &str);

    /// Sub-section header
    fn subheader(&mut self, text: &str);

    /// Markdown text
    fn markdown(&mut self, text: &str);

    /// Informational message
    fn info(&mut self, text: &str);

    /// Warning message
    fn warning(&mut self, text: &str);

    /// Error message
    fn error(&mut self, text: &str);

    /// Data table
    fn table(&mut self, table: &Table);

    /// Hierarchy chart
    fn graph(&mut self, graph: &HierarchyGraph, options: &DotOptions);

    /// Single choice; `None` only when `options` is empty
    fn select(&mut self, key: &str, label: &str, options: &[String]) -> Option<String>;

    /// Multiple choice; may be empty
    fn multiselect(&mut self, key: &str, label: &str, options: &[String]) -> Vec<String>;
}

/// Preset answers for select widgets, keyed by widget key
///
/// Stands in for user input when there is no interactive front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    values: IndexMap<String, Vec<String>>,
}

impl Selections {
    /// Create empty presets
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With preset values for a widget
    #[must_use]
    pub fn with<I, S>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(key, values);
        self
    }

    /// Set preset values for a widget
    pub fn set<I, S>(&mut self, key: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values
            .insert(key.into(), values.into_iter().map(Into::into).collect());
    }

    /// Answer a single select: the first preset found among `options`,
    /// otherwise the first option
    #[must_use]
    pub fn select(&self, key: &str, options: &[String]) -> Option<String> {
        self.values
            .get(key)
            .and_then(|preset| preset.iter().find(|v| options.contains(v)))
            .or_else(|| options.first())
            .cloned()
    }

    /// Answer a multi select: the presets found among `options`, otherwise
    /// nothing
    #[must_use]
    pub fn multiselect(&self, key: &str, options: &[String]) -> Vec<String> {
        self.values
            .get(key)
            .map(|preset| {
                preset
                    .iter()
                    .filter(|v| options.contains(v))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Plain-text [`Ui`] over any writer
///
/// Write errors are sticky: the first one stops further output and is
/// returned by [`TextUi::finish`].
#[derive(Debug)]
pub struct TextUi<W: Write> {
    out: W,
    selections: Selections,
    failure: Option<io::Error>,
}

impl<W: Write> TextUi<W> {
    /// Create text UI with no presets
    pub fn new(out: W) -> Self {
        Self {
            out,
            selections: Selections::new(),
            failure: None,
        }
    }

    /// With preset selections
    #[must_use]
    pub fn with_selections(mut self, selections: Selections) -> Self {
        self.selections = selections;
        self
    }

    /// Flush and hand back the writer
    ///
    /// # Errors
    /// Returns the first write error hit while rendering.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.failure.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if self.failure.is_none() {
            if let Err(err) = self.out.write_fmt(args) {
                self.failure = Some(err);
            }
        }
    }
}

impl<W: Write> Ui for TextUi<W> {
    fn tab(&mut self, name: &str) {
        self.emit(format_args!("\n== {name} ==\n"));
    }

    fn header(&mut self, text: &str) {
        self.emit(format_args!("# {text}\n"));
    }

    fn subheader(&mut self, text: &str) {
        self.emit(format_args!("## {text}\n"));
    }

    fn markdown(&mut self, text: &str) {
        self.emit(format_args!("{text}\n"));
    }

    fn info(&mut self, text: &str) {
        self.emit(format_args!("[info] {text}\n"));
    }

    fn warning(&mut self, text: &str) {
        self.emit(format_args!("[warning] {text}\n"));
    }

    fn error(&mut self, text: &str) {
        self.emit(format_args!("[error] {text}\n"));
    }

    fn table(&mut self, table: &Table) {
        let header = table.columns().join(" | ");
        self.emit(format_args!("{header}\n"));
        for row in table {
            let cells: Vec<&str> = table
                .columns()
                .iter()
                .map(|column| row.get(column).unwrap_or(""))
                .collect();
            let line = cells.join(" | ");
            self.emit(format_args!("{line}\n"));
        }
    }

    fn graph(&mut self, graph: &HierarchyGraph, options: &DotOptions) {
        let dot = graph.to_dot(options);
        self.emit(format_args!("{dot}"));
    }

    fn select(&mut self, key: &str, label: &str, options: &[String]) -> Option<String> {
        let choice = self.selections.select(key, options);
        if let Some(choice) = &choice {
            self.emit(format_args!("{label}: {choice}\n"));
        }
        choice
    }

    fn multiselect(&mut self, key: &str, label: &str, options: &[String]) -> Vec<String> {
        let chosen = self.selections.multiselect(key, options);
        let shown = chosen.join(", ");
        self.emit(format_args!("{label}: [{shown}]\n"));
        chosen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontodash_graph::Record;
    use pretty_assertions::assert_eq;

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn select_defaults_to_first_option() {
        let presets = Selections::new();
        let opts = options(&["Mission", "Functional Architecture"]);
        assert_eq!(presets.select("arch", &opts).as_deref(), Some("Mission"));
        assert_eq!(presets.select("arch", &[]), None);
    }

    #[test]
    fn presets_outside_options_are_ignored() {
        let presets = Selections::new().with("subsystems", ["Drive", "Ghost"]);
        let opts = options(&["Drive", "Frame"]);

        assert_eq!(presets.multiselect("subsystems", &opts), vec!["Drive"]);
        assert!(presets.multiselect("other", &opts).is_empty());
        assert_eq!(
            Selections::new().with("arch", ["Ghost"]).select("arch", &opts).as_deref(),
            Some("Drive")
        );
    }

    #[test]
    fn text_ui_writes_table_and_messages() {
        let mut ui = TextUi::new(Vec::new());
        let table = Table::from_rows([
            Record::new().with("Tab Name", "Home Page").with("Files Utilized", "TripleCount.json"),
            Record::new().with("Tab Name", "Requirements").with_absent("Files Utilized"),
        ]);

        ui.header("Rover");
        ui.info("nothing here");
        ui.table(&table);

        let out = String::from_utf8(ui.finish().unwrap()).unwrap();
        assert_eq!(
            out,
            "# Rover\n[info] nothing here\nTab Name | Files Utilized\nHome Page | TripleCount.json\nRequirements | \n"
        );
    }

    #[test]
    fn text_ui_echoes_choices() {
        let mut ui = TextUi::new(Vec::new())
            .with_selections(Selections::new().with("subsystems", ["Frame"]));
        let opts = options(&["Drive", "Frame"]);

        let chosen = ui.multiselect("subsystems", "Subsystems", &opts);
        assert_eq!(chosen, vec!["Frame"]);

        let out = String::from_utf8(ui.finish().unwrap()).unwrap();
        assert_eq!(out, "Subsystems: [Frame]\n");
    }
}
