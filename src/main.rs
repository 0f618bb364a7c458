use std::process::ExitCode;

use clap::{Parser, Subcommand};

use pathmap::app::commands::{self, Direction};
use pathmap::app::common;
use pathmap::config::Config;
use pathmap::core::fs::LocalFileSystem;
use pathmap::utils::PathmapResult;

/// Translate paths recorded in debug information to local paths, and back.
#[derive(Debug, Parser)]
#[command(name = "pathmap", version)]
struct Cli {
    /// Extra mapping, appended after the configured ones. Repeatable.
    #[arg(long = "map", value_name = "FROM=TO", global = true)]
    maps: Vec<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Debug, Subcommand)]
enum Action {
    /// Rewrite recorded paths into local paths (first matching prefix wins).
    Remap { paths: Vec<String> },
    /// Rewrite local paths back into recorded paths.
    Reverse { paths: Vec<String> },
    /// Like remap, but only report rewrites that exist on disk.
    Find { paths: Vec<String> },
    /// Print the mapping list.
    List {
        /// Print as a JSON array of [prefix, replacement] pairs.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            // a config failure happens before the configured subscriber exists
            common::init_fallback_logging();
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> PathmapResult<bool> {
    let config = Config::init()?;
    common::init_logging(&config);

    let list = common::build_mapping_list(&config, &cli.maps)?;
    let mut stdout = std::io::stdout().lock();

    let (paths, direction) = match cli.action {
        Action::Remap { paths } => (paths, Direction::Forward),
        Action::Reverse { paths } => (paths, Direction::Reverse),
        Action::Find { paths } => (paths, Direction::Existing),
        Action::List { json } => {
            commands::list_mappings(&list, json, &mut stdout)?;
            return Ok(true);
        }
    };

    commands::translate_paths(&list, &paths, direction, &LocalFileSystem, &mut stdout)
}
