//! `lookahead` - search the college portal from a terminal.
//!
//! ```text
//! lookahead search stan --pages 2
//! lookahead search stan --catalog
//! lookahead colleges --tier "Tier 1" --location karnataka --page 2
//! lookahead repl
//! ```

mod commands;
mod render;
mod repl;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use lookahead_core::Config;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_FILE: &str = "lookahead.toml";

fn build_cli() -> Command {
    Command::new("lookahead")
        .about("Type-ahead search and catalog browser for the college portal")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("TOML config file (default: ./lookahead.toml if present)"),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .global(true)
                .value_name("URL")
                .help("Override the API host for both search and catalog"),
        )
        .subcommand(
            Command::new("search")
                .about("Run one debounced search and print the dropdown")
                .arg(Arg::new("query").required(true).num_args(1..))
                .arg(
                    Arg::new("pages")
                        .long("pages")
                        .value_name("N")
                        .default_value("1")
                        .value_parser(value_parser!(u32).range(1..))
                        .help("Pages to load by scrolling to the bottom"),
                )
                .arg(
                    Arg::new("catalog")
                        .long("catalog")
                        .action(ArgAction::SetTrue)
                        .help("Match names in the college catalog instead of the search endpoint"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the full records as JSON"),
                ),
        )
        .subcommand(Command::new("repl").about("Interactive search box"))
        .subcommand(
            Command::new("colleges")
                .about("List colleges with client-side filters")
                .arg(Arg::new("tier").long("tier").value_name("TIER"))
                .arg(Arg::new("type").long("type").value_name("TYPE"))
                .arg(Arg::new("recommended").long("recommended").value_name("FLAG"))
                .arg(Arg::new("location").long("location").value_name("TEXT"))
                .arg(
                    Arg::new("name")
                        .long("name")
                        .value_name("TEXT")
                        .help("Case-insensitive part of the college name"),
                )
                .arg(
                    Arg::new("page")
                        .long("page")
                        .value_name("N")
                        .default_value("1")
                        .value_parser(value_parser!(u32).range(1..))
                        .help("One-based page number"),
                )
                .arg(
                    Arg::new("refresh")
                        .long("refresh")
                        .action(ArgAction::SetTrue)
                        .help("Ignore the cached listing"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the page as JSON"),
                ),
        )
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<Config> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            Config::from_file(Path::new(DEFAULT_CONFIG_FILE))
                .with_context(|| format!("Failed to load config {}", DEFAULT_CONFIG_FILE))?
        }
        None => Config::default(),
    };
    if let Some(url) = matches.get_one::<String>("base-url") {
        config.search.base_url = url.clone();
        config.catalog.base_url = url.clone();
        config.validate()?;
    }
    Ok(config)
}

fn main() -> Result<()> {
    init_logging();
    let matches = build_cli().get_matches();
    let config = load_config(&matches)?;

    match matches.subcommand() {
        Some(("search", sub)) => {
            let query = sub
                .get_many::<String>("query")
                .map(|words| words.cloned().collect::<Vec<_>>().join(" "))
                .unwrap_or_default();
            let pages = sub.get_one::<u32>("pages").copied().unwrap_or(1);
            commands::search(
                &config,
                &query,
                pages,
                sub.get_flag("catalog"),
                sub.get_flag("json"),
            )
        }
        Some(("repl", _)) => repl::run(&config),
        Some(("colleges", sub)) => {
            let args = commands::CollegesArgs {
                tier: sub.get_one::<String>("tier").cloned(),
                kind: sub.get_one::<String>("type").cloned(),
                recommended: sub.get_one::<String>("recommended").cloned(),
                location: sub.get_one::<String>("location").cloned(),
                name: sub.get_one::<String>("name").cloned(),
                page: sub.get_one::<u32>("page").copied().unwrap_or(1) as usize,
                refresh: sub.get_flag("refresh"),
                json: sub.get_flag("json"),
            };
            commands::colleges(&config, &args)
        }
        _ => Ok(()),
    }
}
