//! `rolodex tasks …`

use std::io::Write;

use anyhow::{Context as _, Result};
use clap::Subcommand;
use rolodex_core::{store::RecordStore, task::Task};

#[derive(Subcommand, Debug)]
pub enum TaskCommand {
  /// Add a pending task.
  Add {
    title: String,
    /// Free-text due date.
    #[arg(long, default_value = "")]
    due:   String,
  },
  /// Print every task, one per line.
  List,
}

pub fn run<S, W>(store: &S, cmd: TaskCommand, out: &mut W) -> Result<()>
where
  S: RecordStore,
  W: Write,
{
  let mut tasks = store.load_tasks().context("loading tasks")?;
  match cmd {
    TaskCommand::Add { title, due } => {
      let task = Task::next(&tasks, title, due);
      let id = task.id;
      tasks.push(task);
      store.save_tasks(&tasks).context("saving tasks")?;
      tracing::info!(id, "added task");
      writeln!(out, "Task added with ID: {id}")?;
    }
    TaskCommand::List => {
      for task in &tasks {
        writeln!(out, "{}", task.summary())?;
      }
    }
  }
  Ok(())
}
