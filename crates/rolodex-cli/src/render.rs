//! Output rendering: grid tables, JSON and CSV export.

use std::{io::Write, path::Path};

use anyhow::{Context as _, Result};
use clap::ValueEnum;
use rolodex_core::field::{self, Tabular};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Table,
  Json,
  Csv,
}

/// Write `records` in `format`.
///
/// Tables and JSON go to `out`; CSV is written to `csv_path` and only a
/// summary line goes to `out`.
pub fn emit<R, W>(
  records: &[&R],
  fields: &[R::Field],
  format: OutputFormat,
  csv_path: &Path,
  out: &mut W,
) -> Result<()>
where
  R: Tabular + Serialize,
  W: Write,
{
  match format {
    OutputFormat::Table => {
      if records.is_empty() {
        writeln!(out, "No results found.")?;
        return Ok(());
      }
      let headers: Vec<String> = fields
        .iter()
        .map(|&f| {
          let name: &'static str = f.into();
          field::header(name)
        })
        .collect();
      let rows: Vec<Vec<String>> = records.iter().map(|r| r.row(fields)).collect();
      write!(out, "{}", grid(&headers, &rows))?;
    }
    OutputFormat::Json => {
      serde_json::to_writer_pretty(&mut *out, records).context("serialising records")?;
      writeln!(out)?;
    }
    OutputFormat::Csv => {
      export_csv(records, fields, csv_path)?;
      writeln!(
        out,
        "Exported {} records to {}",
        records.len(),
        csv_path.display()
      )?;
    }
  }
  Ok(())
}

fn export_csv<R: Tabular>(records: &[&R], fields: &[R::Field], path: &Path) -> Result<()> {
  let mut writer = csv::Writer::from_path(path)
    .with_context(|| format!("creating {}", path.display()))?;
  writer.write_record(fields.iter().map(|&f| -> &'static str { f.into() }))?;
  for record in records {
    writer.write_record(record.row(fields))?;
  }
  writer.flush().with_context(|| format!("writing {}", path.display()))?;
  tracing::debug!(path = %path.display(), count = records.len(), "exported csv");
  Ok(())
}

/// Render a bordered grid with a `=` rule under the header row.
///
/// ```text
/// +----+----------+
/// | Id | Name     |
/// +====+==========+
/// | 1  | John Doe |
/// +----+----------+
/// ```
pub fn grid(headers: &[String], rows: &[Vec<String>]) -> String {
  let width = |s: &str| s.chars().count();

  let mut widths: Vec<usize> = headers.iter().map(|h| width(h.as_str())).collect();
  for row in rows {
    for (w, cell) in widths.iter_mut().zip(row) {
      *w = (*w).max(width(cell.as_str()));
    }
  }

  let rule = |fill: char| {
    let mut line = String::from("+");
    for w in &widths {
      line.extend(std::iter::repeat_n(fill, w + 2));
      line.push('+');
    }
    line.push('\n');
    line
  };
  let line = |cells: &[String]| {
    let mut line = String::from("|");
    for (w, cell) in widths.iter().zip(cells) {
      line.push(' ');
      line.push_str(cell);
      line.extend(std::iter::repeat_n(' ', w - width(cell.as_str()) + 1));
      line.push('|');
    }
    line.push('\n');
    line
  };

  let mut table = rule('-');
  table.push_str(&line(headers));
  table.push_str(&rule('='));
  for row in rows {
    table.push_str(&line(row.as_slice()));
    table.push_str(&rule('-'));
  }
  table
}

#[cfg(test)]
mod tests {
  use std::fs;

  use pretty_assertions::assert_eq;
  use rolodex_core::{
    field::PersonField,
    person::{NewPerson, Person},
  };

  use super::*;

  fn s(v: &[&str]) -> Vec<String> { v.iter().map(|x| x.to_string()).collect() }

  #[test]
  fn grid_layout() {
    let table = grid(&s(&["Id", "Name"]), &[s(&["1", "John Doe"]), s(&["22", "Al"])]);
    assert_eq!(
      table,
      "+----+----------+\n\
       | Id | Name     |\n\
       +====+==========+\n\
       | 1  | John Doe |\n\
       +----+----------+\n\
       | 22 | Al       |\n\
       +----+----------+\n"
    );
  }

  #[test]
  fn empty_table_says_so() {
    let mut out = Vec::new();
    emit::<Person, _>(
      &[],
      Person::DEFAULT_FIELDS,
      OutputFormat::Table,
      Path::new("unused.csv"),
      &mut out,
    )
    .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "No results found.\n");
  }

  #[test]
  fn json_is_an_array() {
    let p = Person::new(NewPerson::new("John Doe")).unwrap();
    let mut out = Vec::new();
    emit(
      &[&p],
      Person::DEFAULT_FIELDS,
      OutputFormat::Json,
      Path::new("unused.csv"),
      &mut out,
    )
    .unwrap();
    let parsed: Vec<Person> = serde_json::from_slice(&out).unwrap();
    assert_eq!(parsed, vec![p]);
  }

  #[test]
  fn csv_export_writes_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.csv");
    let mut p = Person::new(NewPerson::new("John Doe")).unwrap();
    p.other_phones = vec!["1".into(), "2".into()];

    let mut out = Vec::new();
    emit(
      &[&p],
      &[PersonField::Name, PersonField::OtherPhones],
      OutputFormat::Csv,
      &path,
      &mut out,
    )
    .unwrap();

    assert_eq!(
      fs::read_to_string(&path).unwrap(),
      "name,other_phones\nJohn Doe,1; 2\n"
    );
    assert_eq!(
      String::from_utf8(out).unwrap(),
      format!("Exported 1 records to {}\n", path.display())
    );
  }
}
