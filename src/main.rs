mod config;
mod files;
mod logging;
mod pathfmt;
mod quick;
mod ui;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use pathlabel::{Limit, PATH_SEPARATORS};
use tracing::{debug, info};

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "pathlabel",
    version,
    about = "Short, distinguishable labels for lists of file paths"
)]
struct Cli {
    /// Path to config TOML (default: ~/.pathlabel/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable interactive prompts; print lists instead (useful in non-TTY)
    #[arg(long, global = true)]
    no_ui: bool,

    /// Print JSON instead of plain lines
    #[arg(long, global = true)]
    json: bool,

    /// Only look at the first N entries
    #[arg(long, global = true)]
    limit: Option<usize>,

    /// More log output (repeat for more)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Print short labels for paths (read from stdin, one per line, when none are given)
    Shorten {
        paths: Vec<String>,

        /// Print each label next to its full path
        #[arg(long)]
        with_paths: bool,
    },

    /// Print the longest prefix shared by all strings
    Prefix { strings: Vec<String> },

    /// Print the longest substring shared by all strings
    Lcs {
        strings: Vec<String>,

        /// Characters a match must start and end on
        #[arg(long, conflicts_with = "paths")]
        separators: Option<String>,

        /// Use the path separators `/` and `\`
        #[arg(long)]
        paths: bool,
    },

    /// List saved files with their labels (default)
    List,

    /// Pick a saved file and print its full path
    Pick,

    /// Print the saved file best matching a fuzzy query
    Find { query: String },

    /// Save a file to the list
    Add { path: PathBuf },

    /// Remove a file from the list (exact match)
    Rm { path: PathBuf },

    /// Print resolved config path and exit
    WhereConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = config::resolve_config_path(cli.config.as_deref())?;
    let mut cfg = Config::load_or_init(&config_path)?;
    logging::init_logging(cli.verbose, &cfg.log.level);
    debug!(config = %config_path.display(), "resolved config");

    let limit = Limit::from(cli.limit);
    let json = cli.json || cfg.output.json;

    match cli.cmd.unwrap_or(Cmd::List) {
        Cmd::WhereConfig => {
            println!("{}", config_path.display());
            Ok(())
        }
        Cmd::Add { path } => {
            cfg.add_path(path)?;
            cfg.save(&config_path)?;
            info!(files = cfg.files.paths.len(), "saved file list");
            Ok(())
        }
        Cmd::Rm { path } => {
            cfg.remove_path(path)?;
            cfg.save(&config_path)?;
            info!(files = cfg.files.paths.len(), "saved file list");
            Ok(())
        }
        Cmd::Shorten { paths, with_paths } => {
            let paths = if paths.is_empty() {
                files::read_lines(io::stdin().lock())?
            } else {
                paths
            };
            debug!(count = paths.len(), "shortening paths");
            let items = files::label_paths(&paths, limit);
            ui::print_labels(&items, with_paths, json)
        }
        Cmd::Prefix { strings } => {
            print_found(pathlabel::common_prefix(&strings, limit), json)
        }
        Cmd::Lcs {
            strings,
            separators,
            paths,
        } => {
            let separators = if paths {
                PATH_SEPARATORS.to_vec()
            } else {
                separators.unwrap_or_default().chars().collect()
            };
            print_found(
                pathlabel::common_substring(&strings, limit, &separators),
                json,
            )
        }
        Cmd::List => {
            let items = files::label_paths(&files::saved_paths(&cfg), limit);
            if items.is_empty() {
                ui::print_info("No saved files. Add one with `pathlabel add <path>`.");
                return Ok(());
            }
            ui::print_labels(&items, true, json)
        }
        Cmd::Pick => {
            let items = files::label_paths(&files::saved_paths(&cfg), limit);
            if items.is_empty() {
                anyhow::bail!("No saved files. Add one with `pathlabel add <path>`.");
            }
            if cli.no_ui {
                return ui::print_labels(&items, true, json);
            }
            if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
                anyhow::bail!(
                    "The input device is not a TTY. Re-run with `--no-ui` to print lists without prompts."
                );
            }
            let picked = ui::pick_file(&items)?;
            println!("{}", picked.path);
            Ok(())
        }
        Cmd::Find { query } => {
            let items = files::label_paths(&files::saved_paths(&cfg), limit);
            let interactive =
                !cli.no_ui && io::stdin().is_terminal() && io::stdout().is_terminal();
            let found = quick::find_by_query(items, &query, interactive)?;
            if json {
                ui::print_json(&found)
            } else {
                println!("{}", found.path);
                Ok(())
            }
        }
    }
}

fn print_found(found: Option<&str>, json: bool) -> Result<()> {
    if json {
        return ui::print_json(&found);
    }
    if let Some(s) = found {
        println!("{s}");
    }
    Ok(())
}
