//! `rolodex` — contacts, businesses and tasks kept in flat JSON files.
//!
//! # Usage
//!
//! ```text
//! rolodex people add "Ada Lovelace" --primary-email ada@example.com
//! rolodex people edit --name ada --other-phones 555-1234 555-5678
//! rolodex people list --output csv --out people.csv
//! rolodex --data-dir ~/contacts tasks add "Call Ada" --due 2025-05-01
//! ```

mod commands;
mod settings;
mod render;

use std::{io, path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{businesses::BusinessCommand, people::PeopleCommand, tasks::TaskCommand};
use rolodex_store_json::JsonStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "rolodex", version, about = "Contacts, businesses and tasks in flat JSON files")]
struct Cli {
  /// Path to a TOML config file; ignored if it does not exist.
  #[arg(short, long, value_name = "FILE", default_value = "rolodex.toml")]
  config: PathBuf,

  /// Directory holding the JSON data files (overrides config and env).
  #[arg(long, value_name = "DIR")]
  data_dir: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Manage people.
  #[command(subcommand)]
  People(PeopleCommand),
  /// Manage businesses.
  #[command(subcommand)]
  Businesses(BusinessCommand),
  /// Manage tasks.
  #[command(subcommand)]
  Tasks(TaskCommand),
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> ExitCode {
  // Logs go to stderr so stdout stays clean for json/table output.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("error: {e:#}");
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> Result<()> {
  let settings = Settings::load(&cli.config, cli.data_dir)?;
  let paths = settings.store_paths();
  tracing::debug!(?paths, "using data files");
  let store = JsonStore::new(paths);

  let stdout = io::stdout();
  let mut out = stdout.lock();

  match cli.command {
    Command::People(cmd) => commands::people::run(&store, cmd, &mut out),
    Command::Businesses(cmd) => commands::businesses::run(&store, cmd, &mut out),
    Command::Tasks(cmd) => commands::tasks::run(&store, cmd, &mut out),
  }
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn cli_definition_is_valid() { Cli::command().debug_assert(); }

  #[test]
  fn parses_edit_with_list_values() {
    let cli = Cli::try_parse_from([
      "rolodex",
      "people",
      "edit",
      "--name",
      "john",
      "--other-phones",
      "555-1234",
      "555-5678",
      "--overwrite-lists",
    ])
    .unwrap();
    let Command::People(PeopleCommand::Edit(args)) = cli.command else {
      panic!("expected people edit");
    };
    assert_eq!(args.select.name.as_deref(), Some("john"));
    assert_eq!(args.other_phones, ["555-1234", "555-5678"]);
    assert!(args.overwrite_lists);
  }
}
