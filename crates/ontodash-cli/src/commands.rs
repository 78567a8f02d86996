//! Subcommand implementations
//!
//! Each returns `Ok(false)` when it ran but something it drew failed.

use anyhow::{bail, Context};
use clap::ArgMatches;
use ontodash_graph::{DotOptions, HierarchyGraphBuilder, RankDir};
use ontodash_project::{AppState, DashboardConfig, ProjectDescriptor};
use ontodash_view::{
    CsvTableReader, DispatchOutcome, JsonConverter, JsonToCsv, RenderEnv, RendererRegistry,
    Resolution, Selections, TableReader, TextUi, Ui, ViewResolver,
};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// Parse a `KEY=V1,V2` widget preset
pub(crate) fn parse_selection(raw: &str) -> Result<(String, Vec<String>), String> {
    let (key, values) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUES, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty widget key in '{raw}'"));
    }
    let values = values
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();
    Ok((key.to_string(), values))
}

fn load_state(args: &ArgMatches) -> anyhow::Result<(DashboardConfig, AppState)> {
    let path = args
        .get_one::<PathBuf>("config")
        .context("missing --config")?;
    let config = DashboardConfig::load(path)
        .with_context(|| format!("loading {}", path.display()))?;

    let mut state = AppState::new(config.registry()?);
    if let Some(name) = args.get_one::<String>("project") {
        state.registry_mut().set_current(name)?;
    }
    Ok((config, state))
}

pub(crate) fn render(args: &ArgMatches) -> anyhow::Result<bool> {
    let (config, state) = load_state(args)?;
    let files = config.file_map();
    let resolver = ViewResolver::new(Arc::new(RendererRegistry::with_defaults()));

    let mut selections = Selections::new();
    for (key, values) in args
        .get_many::<(String, Vec<String>)>("select")
        .into_iter()
        .flatten()
    {
        selections.set(key.as_str(), values.iter().map(String::as_str));
    }

    let stdout = std::io::stdout();
    let mut ui = TextUi::new(stdout.lock()).with_selections(selections);
    let tables = CsvTableReader::new();
    let converter = JsonToCsv::new();
    let mut env = RenderEnv::new(&mut ui, &tables, &converter, &files);

    let outcomes = match args.get_one::<String>("view") {
        Some(view) => {
            let project = state
                .current_project()
                .context("no projects configured")?;
            if !project.views().contains(view) {
                tracing::warn!(
                    view = %view,
                    project = project.name(),
                    "tab is not configured for project"
                );
            }
            env.ui.header(project.name());
            env.ui.tab(view);
            vec![resolver.show_tab(view, project, &mut env)]
        }
        None => resolver
            .render_current(&state, &mut env)
            .into_iter()
            .map(|tab| tab.outcome)
            .collect(),
    };
    drop(env);
    ui.finish().context("writing output")?;

    Ok(!outcomes.iter().any(DispatchOutcome::is_failed))
}

pub(crate) fn resolve(args: &ArgMatches) -> anyhow::Result<bool> {
    let (_, state) = load_state(args)?;
    let resolver = ViewResolver::new(Arc::new(RendererRegistry::with_defaults()));
    let Some(project) = state.current_project() else {
        bail!("no projects configured");
    };

    let mut out = std::io::stdout().lock();
    for line in resolution_lines(&resolver, project) {
        writeln!(out, "{line}")?;
    }
    Ok(true)
}

fn resolution_lines(resolver: &ViewResolver, project: &ProjectDescriptor) -> Vec<String> {
    project
        .views()
        .iter()
        .map(|tab| {
            let resolution = resolver.resolve(tab, project);
            let detail = match &resolution {
                Resolution::Home => String::new(),
                Resolution::Profile { key, .. } | Resolution::Root { key, .. } => key.clone(),
                Resolution::Fallback { reason } => reason.to_string(),
            };
            format!("{tab}\t{}\t{detail}", resolution.kind())
        })
        .collect()
}

pub(crate) fn graph(args: &ArgMatches) -> anyhow::Result<bool> {
    let path = args.get_one::<PathBuf>("csv").context("missing --csv")?;
    let levels: Vec<&String> = args
        .get_many::<String>("levels")
        .context("missing --levels")?
        .collect();
    let labels: Vec<&String> = args
        .get_many::<String>("labels")
        .into_iter()
        .flatten()
        .collect();

    let builder = HierarchyGraphBuilder::new(levels, labels)?;
    let table = CsvTableReader::new()
        .read_table(path)
        .with_context(|| format!("reading {}", path.display()))?;

    let graph = match args.get_one::<String>("filter-level") {
        Some(level) => {
            let values: Vec<&String> = args
                .get_many::<String>("values")
                .into_iter()
                .flatten()
                .collect();
            builder.subgraph(&table, level, values.as_slice())
        }
        None => builder.build(&table),
    };

    let mut options = DotOptions::hierarchy("Hierarchy");
    if args.get_flag("lr") {
        options = options.with_rank_dir(RankDir::LeftRight);
    }
    print!("{}", graph.to_dot(&options));
    Ok(true)
}

pub(crate) fn convert(args: &ArgMatches) -> anyhow::Result<bool> {
    let json = args.get_one::<PathBuf>("json").context("missing input")?;
    let csv = args.get_one::<PathBuf>("csv").context("missing output")?;
    JsonToCsv::new()
        .convert(json, csv)
        .with_context(|| format!("converting {}", json.display()))?;
    Ok(true)
}
