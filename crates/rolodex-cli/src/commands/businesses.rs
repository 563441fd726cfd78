//! `rolodex businesses …`

use std::io::Write;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use rolodex_core::{
  business::{Business, NewBusiness},
  resolve,
  store::RecordStore,
};

use super::{OutputArgs, SelectArgs, select};
use crate::render;

#[derive(Subcommand, Debug)]
pub enum BusinessCommand {
  /// Add a business.
  Add(AddArgs),
  /// List every business.
  List(OutputArgs),
  /// List businesses whose name matches a pattern.
  Search {
    /// Case-insensitive regular expression.
    pattern: String,
    #[command(flatten)]
    output:  OutputArgs,
  },
  /// Remove one business.
  Delete(SelectArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
  pub name:            String,
  #[arg(long)]
  pub primary_email:   Option<String>,
  #[arg(long)]
  pub primary_phone:   Option<String>,
  #[arg(long)]
  pub primary_address: Option<String>,
  #[arg(long)]
  pub website:         Option<String>,
}

pub fn run<S, W>(store: &S, cmd: BusinessCommand, out: &mut W) -> Result<()>
where
  S: RecordStore,
  W: Write,
{
  match cmd {
    BusinessCommand::Add(args) => {
      let business = Business::new(NewBusiness {
        name:            args.name,
        primary_email:   args.primary_email,
        primary_phone:   args.primary_phone,
        primary_address: args.primary_address,
        website:         args.website,
      })?;
      let mut businesses = load(store)?;
      tracing::info!(id = %business.id, "adding business");
      writeln!(out, "Added business {}.", business.name)?;
      businesses.push(business);
      save(store, &businesses)
    }
    BusinessCommand::List(output) => {
      let fields = output.fields::<Business>()?;
      let businesses = load(store)?;
      let refs: Vec<&Business> = businesses.iter().collect();
      render::emit(
        &refs,
        &fields,
        output.output,
        &output.csv_path("businesses_export.csv"),
        out,
      )
    }
    BusinessCommand::Search { pattern, output } => {
      let fields = output.fields::<Business>()?;
      let businesses = load(store)?;
      let matches = resolve::find_by_name(&businesses, &pattern)?;
      render::emit(
        &matches,
        &fields,
        output.output,
        &output.csv_path("businesses_search.csv"),
        out,
      )
    }
    BusinessCommand::Delete(select_args) => {
      let selector = select_args.selector()?;
      let mut businesses = load(store)?;
      let index = select(&businesses, &selector, "businesses", out)?;
      let removed = businesses.remove(index);
      tracing::info!(id = %removed.id, "deleted business");
      save(store, &businesses)?;
      writeln!(out, "Deleted business {} (id={}).", removed.name, removed.id)?;
      Ok(())
    }
  }
}

fn load<S: RecordStore>(store: &S) -> Result<Vec<Business>> {
  store.load_businesses().context("loading businesses")
}

fn save<S: RecordStore>(store: &S, businesses: &[Business]) -> Result<()> {
  store.save_businesses(businesses).context("saving businesses")
}

#[cfg(test)]
mod tests {
  use rolodex_core::Error;
  use rolodex_store_json::{JsonStore, StorePaths};

  use super::*;

  fn add_args(name: &str) -> AddArgs {
    AddArgs {
      name:            name.into(),
      primary_email:   None,
      primary_phone:   None,
      primary_address: None,
      website:         Some(format!("https://{}.example", name.to_lowercase())),
    }
  }

  #[test]
  fn add_search_delete() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::new(StorePaths::in_dir(dir.path()));
    let mut out = Vec::new();

    for name in ["Acme", "Acme Labs", "Globex"] {
      run(&store, BusinessCommand::Add(add_args(name)), &mut out).unwrap();
    }
    assert_eq!(store.load_businesses().unwrap().len(), 3);

    let err = run(
      &store,
      BusinessCommand::Delete(SelectArgs {
        id:   None,
        name: Some("acme".into()),
      }),
      &mut out,
    )
    .unwrap_err();
    assert!(matches!(
      err.downcast_ref::<Error>(),
      Some(Error::Ambiguous { matches, .. }) if matches.len() == 2
    ));

    run(
      &store,
      BusinessCommand::Delete(SelectArgs {
        id:   None,
        name: Some("^acme$".into()),
      }),
      &mut out,
    )
    .unwrap();

    let names: Vec<String> = store
      .load_businesses()
      .unwrap()
      .into_iter()
      .map(|b| b.name)
      .collect();
    assert_eq!(names, ["Acme Labs", "Globex"]);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Multiple businesses match 'acme':\n- Acme (id="));
  }
}
