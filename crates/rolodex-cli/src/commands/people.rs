//! `rolodex people …`

use std::io::Write;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use rolodex_core::{
  patch::{PersonPatch, apply_patch},
  person::{NewPerson, Person},
  resolve,
  store::RecordStore,
};

use super::{OutputArgs, SelectArgs, select};
use crate::render;

#[derive(Subcommand, Debug)]
pub enum PeopleCommand {
  /// Add a person.
  Add(AddArgs),
  /// List every person.
  List(OutputArgs),
  /// List people whose name matches a pattern.
  Search {
    /// Case-insensitive regular expression.
    pattern: String,
    #[command(flatten)]
    output:  OutputArgs,
  },
  /// Update fields on one person.
  Edit(EditArgs),
  /// Change a person's display name.
  Rename {
    #[command(flatten)]
    select:   SelectArgs,
    new_name: String,
  },
  /// Remove one person.
  Delete(SelectArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
  pub name:            String,
  #[arg(long)]
  pub preferred_name:  Option<String>,
  #[arg(long)]
  pub primary_email:   Option<String>,
  #[arg(long)]
  pub primary_phone:   Option<String>,
  #[arg(long)]
  pub primary_address: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct EditArgs {
  #[command(flatten)]
  pub select:                   SelectArgs,
  #[arg(long)]
  pub preferred_name:           Option<String>,
  #[arg(long)]
  pub primary_email:            Option<String>,
  #[arg(long)]
  pub primary_phone:            Option<String>,
  #[arg(long)]
  pub primary_address:          Option<String>,
  #[arg(long, num_args = 1.., value_name = "EMAIL")]
  pub other_emails:             Vec<String>,
  #[arg(long, num_args = 1.., value_name = "PHONE")]
  pub other_phones:             Vec<String>,
  #[arg(long, num_args = 1.., value_name = "ORG_ID")]
  pub associated_organizations: Vec<String>,
  /// Date of last contact, YYYY-MM-DD.
  #[arg(long, value_name = "DATE")]
  pub last_contacted:           Option<String>,
  /// Replace list fields instead of appending to them.
  #[arg(long)]
  pub overwrite_lists:          bool,
}

impl EditArgs {
  fn into_patch(self) -> PersonPatch {
    PersonPatch {
      preferred_name:           self.preferred_name,
      primary_email:            self.primary_email,
      primary_phone:            self.primary_phone,
      primary_address:          self.primary_address,
      other_emails:             self.other_emails,
      other_phones:             self.other_phones,
      associated_organizations: self.associated_organizations,
      last_contacted:           self.last_contacted,
      overwrite_lists:          self.overwrite_lists,
    }
  }
}

pub fn run<S, W>(store: &S, cmd: PeopleCommand, out: &mut W) -> Result<()>
where
  S: RecordStore,
  W: Write,
{
  match cmd {
    PeopleCommand::Add(args) => add(store, args, out),
    PeopleCommand::List(output) => list(store, &output, out),
    PeopleCommand::Search { pattern, output } => search(store, &pattern, &output, out),
    PeopleCommand::Edit(args) => edit(store, args, out),
    PeopleCommand::Rename { select, new_name } => rename(store, &select, new_name, out),
    PeopleCommand::Delete(select) => delete(store, &select, out),
  }
}

fn load<S: RecordStore>(store: &S) -> Result<Vec<Person>> {
  store.load_people().context("loading people")
}

fn save<S: RecordStore>(store: &S, people: &[Person]) -> Result<()> {
  store.save_people(people).context("saving people")
}

// ─── Add ──────────────────────────────────────────────────────────────────────

fn add<S: RecordStore, W: Write>(store: &S, args: AddArgs, out: &mut W) -> Result<()> {
  let person = Person::new(NewPerson {
    name:            args.name,
    preferred_name:  args.preferred_name,
    primary_email:   args.primary_email,
    primary_phone:   args.primary_phone,
    primary_address: args.primary_address,
  })?;

  let mut people = load(store)?;
  tracing::info!(id = %person.id, "adding person");
  writeln!(out, "Added person {}.", person.name)?;
  people.push(person);
  save(store, &people)
}

// ─── List / search ────────────────────────────────────────────────────────────

fn list<S: RecordStore, W: Write>(store: &S, output: &OutputArgs, out: &mut W) -> Result<()> {
  let fields = output.fields::<Person>()?;
  let people = load(store)?;
  let refs: Vec<&Person> = people.iter().collect();
  render::emit(
    &refs,
    &fields,
    output.output,
    &output.csv_path("people_export.csv"),
    out,
  )
}

fn search<S: RecordStore, W: Write>(
  store: &S,
  pattern: &str,
  output: &OutputArgs,
  out: &mut W,
) -> Result<()> {
  let fields = output.fields::<Person>()?;
  let people = load(store)?;
  let matches = resolve::find_by_name(&people, pattern)?;
  render::emit(
    &matches,
    &fields,
    output.output,
    &output.csv_path("people_search.csv"),
    out,
  )
}

// ─── Edit ─────────────────────────────────────────────────────────────────────

/// Resolve one person, patch them, and save only if something changed.
fn edit<S: RecordStore, W: Write>(store: &S, args: EditArgs, out: &mut W) -> Result<()> {
  let selector = args.select.selector()?;
  let patch = args.into_patch();

  let mut people = load(store)?;
  let index = select(&people, &selector, "people", out)?;
  let person = &mut people[index];

  let changed = apply_patch(person, patch)?;
  let name = person.name.clone();

  if changed {
    tracing::info!(id = %people[index].id, "updated person");
    save(store, &people)?;
    writeln!(out, "Updated {name}.")?;
  } else {
    writeln!(out, "No changes for {name}.")?;
  }
  Ok(())
}

// ─── Rename / delete ──────────────────────────────────────────────────────────

fn rename<S: RecordStore, W: Write>(
  store: &S,
  select_args: &SelectArgs,
  new_name: String,
  out: &mut W,
) -> Result<()> {
  let selector = select_args.selector()?;
  let mut people = load(store)?;
  let index = select(&people, &selector, "people", out)?;

  let old = people[index].rename(new_name)?;
  tracing::info!(id = %people[index].id, "renamed person");
  save(store, &people)?;
  writeln!(out, "Renamed {old} to {}.", people[index].name)?;
  Ok(())
}

fn delete<S: RecordStore, W: Write>(store: &S, select_args: &SelectArgs, out: &mut W) -> Result<()> {
  let selector = select_args.selector()?;
  let mut people = load(store)?;
  let index = select(&people, &selector, "people", out)?;

  let removed = people.remove(index);
  tracing::info!(id = %removed.id, "deleted person");
  save(store, &people)?;
  writeln!(out, "Deleted person {} (id={}).", removed.name, removed.id)?;
  Ok(())
}
