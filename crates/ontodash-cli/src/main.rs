//! `ontodash`: render project dashboards without a browser

mod commands;

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    let config = Arg::new("config")
        .long("config")
        .short('c')
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Dashboard config (TOML)");
    let project = Arg::new("project")
        .long("project")
        .short('p')
        .help("Project to use (defaults to the first configured)");

    Command::new("ontodash")
        .version(ontodash_view::VERSION)
        .about("Ontology-backed engineering dashboards")
        .subcommand_required(true)
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .subcommand(
            Command::new("render")
                .about("Render a project's tabs as text")
                .arg(config.clone())
                .arg(project.clone())
                .arg(
                    Arg::new("view")
                        .long("view")
                        .help("Render only this tab"),
                )
                .arg(
                    Arg::new("select")
                        .long("select")
                        .action(ArgAction::Append)
                        .value_parser(commands::parse_selection)
                        .help("Preset a widget answer, KEY=V1,V2"),
                ),
        )
        .subcommand(
            Command::new("resolve")
                .about("Show which renderer each tab resolves to")
                .arg(config)
                .arg(project),
        )
        .subcommand(
            Command::new("graph")
                .about("Build a hierarchy graph from a CSV file and print it as DOT")
                .arg(
                    Arg::new("csv")
                        .long("csv")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Input CSV"),
                )
                .arg(
                    Arg::new("levels")
                        .long("levels")
                        .required(true)
                        .value_delimiter(',')
                        .help("Level columns, root first"),
                )
                .arg(
                    Arg::new("labels")
                        .long("labels")
                        .value_delimiter(',')
                        .help("Edge labels, one per level pair"),
                )
                .arg(
                    Arg::new("filter-level")
                        .long("filter-level")
                        .requires("values")
                        .help("Column to filter records by"),
                )
                .arg(
                    Arg::new("values")
                        .long("values")
                        .value_delimiter(',')
                        .requires("filter-level")
                        .help("Values kept at the filter column"),
                )
                .arg(
                    Arg::new("lr")
                        .long("lr")
                        .action(ArgAction::SetTrue)
                        .help("Lay the graph out left to right"),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a JSON export to CSV")
                .arg(
                    Arg::new("json")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Input JSON export"),
                )
                .arg(
                    Arg::new("csv")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Output CSV"),
                ),
        )
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("log-json"));

    let ok = match matches.subcommand() {
        Some(("render", args)) => commands::render(args)?,
        Some(("resolve", args)) => commands::resolve(args)?,
        Some(("graph", args)) => commands::graph(args)?,
        Some(("convert", args)) => commands::convert(args)?,
        _ => unreachable!("subcommand is required"),
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
