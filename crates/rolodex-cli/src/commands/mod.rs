//! Command orchestration: load, resolve, mutate, save, report.
//!
//! Every subcommand writes its user-facing output to the `out` writer it is
//! given; errors are returned to `main` for reporting on stderr.

pub mod businesses;
pub mod people;
pub mod tasks;

use std::{io::Write, path::PathBuf};

use anyhow::{Context as _, Result};
use clap::Args;
use rolodex_core::{
  Error,
  field::{self, Tabular},
  record::Record,
  resolve::{self, Selector},
};

use crate::render::OutputFormat;

// ─── Shared args ──────────────────────────────────────────────────────────────

/// Picks one record by exact id or by name pattern.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectArgs {
  /// Exact record id; takes precedence over --name.
  #[arg(long)]
  pub id:   Option<String>,
  /// Case-insensitive regular expression searched in the name.
  #[arg(long, value_name = "PATTERN")]
  pub name: Option<String>,
}

impl SelectArgs {
  pub fn selector(&self) -> rolodex_core::Result<Selector> {
    Selector::from_parts(self.id.as_deref(), self.name.as_deref())
  }
}

/// Output options shared by `list` and `search`.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
  #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
  pub output: OutputFormat,
  /// Comma-separated columns for table/csv output, e.g. `id,name,other_phones`.
  #[arg(long, value_name = "LIST")]
  pub fields: Option<String>,
  /// Destination file for csv output.
  #[arg(long, value_name = "FILE")]
  pub out:    Option<PathBuf>,
}

impl OutputArgs {
  /// The requested columns, or the record type's defaults.
  pub fn fields<R: Tabular>(&self) -> Result<Vec<R::Field>> {
    match self.fields.as_deref() {
      Some(list) => {
        let fields = field::parse_fields(list).with_context(|| {
          format!(
            "choosing columns (known: {})",
            field::field_names::<R::Field>().join(", ")
          )
        })?;
        if fields.is_empty() {
          Ok(R::DEFAULT_FIELDS.to_vec())
        } else {
          Ok(fields)
        }
      }
      None => Ok(R::DEFAULT_FIELDS.to_vec()),
    }
  }

  pub fn csv_path(&self, default: &str) -> PathBuf {
    self.out.clone().unwrap_or_else(|| PathBuf::from(default))
  }
}

// ─── Resolution ───────────────────────────────────────────────────────────────

/// Resolve `selector` against `records`.
///
/// When the selector is ambiguous, the candidates are listed on `out` as
/// `- {name} (id={id})` before the error is returned.
pub fn select<R: Record, W: Write>(
  records: &[R],
  selector: &Selector,
  noun: &str,
  out: &mut W,
) -> Result<usize> {
  match resolve::resolve(records, selector) {
    Ok(index) => Ok(index),
    Err(Error::Ambiguous { pattern, matches }) => {
      writeln!(out, "Multiple {noun} match '{pattern}':")?;
      for candidate in &matches {
        writeln!(out, "- {candidate}")?;
      }
      Err(Error::Ambiguous { pattern, matches }.into())
    }
    Err(e) => Err(e.into()),
  }
}
