//! Static field registry.
//!
//! Each entity enumerates its fields once, as an enum whose snake_case
//! spelling matches the on-disk JSON key. The enum drives both validation of
//! user-supplied column lists and the text rendering used by tables and CSV.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::{Error, Result, business::Business, person::Person};

/// Separator used when a list field is flattened into one cell.
pub const LIST_SEPARATOR: &str = "; ";

/// A record type that can be rendered field-by-field.
pub trait Tabular {
  type Field: Copy + FromStr + Into<&'static str> + IntoEnumIterator + 'static;

  /// Columns shown when the caller does not ask for specific ones.
  const DEFAULT_FIELDS: &'static [Self::Field];

  /// Render one field as text. Absent values render as `""`.
  fn cell(&self, field: Self::Field) -> String;

  fn row(&self, fields: &[Self::Field]) -> Vec<String> {
    fields.iter().map(|&f| self.cell(f)).collect()
  }
}

// ─── Person ──────────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum PersonField {
  Id,
  Name,
  PreferredName,
  PrimaryEmail,
  OtherEmails,
  PrimaryPhone,
  OtherPhones,
  AssociatedOrganizations,
  PrimaryAddress,
  DateAdded,
  LastContacted,
}

impl Tabular for Person {
  type Field = PersonField;

  const DEFAULT_FIELDS: &'static [PersonField] = &[
    PersonField::Id,
    PersonField::Name,
    PersonField::PrimaryEmail,
    PersonField::PrimaryPhone,
  ];

  fn cell(&self, field: PersonField) -> String {
    use PersonField::*;
    match field {
      Id => self.id.clone(),
      Name => self.name.clone(),
      PreferredName => opt(&self.preferred_name),
      PrimaryEmail => opt(&self.primary_email),
      OtherEmails => self.other_emails.join(LIST_SEPARATOR),
      PrimaryPhone => opt(&self.primary_phone),
      OtherPhones => self.other_phones.join(LIST_SEPARATOR),
      AssociatedOrganizations => self.associated_organizations.join(LIST_SEPARATOR),
      PrimaryAddress => opt(&self.primary_address),
      DateAdded => self.date_added.to_string(),
      LastContacted => self
        .last_contacted
        .map(|d| d.to_string())
        .unwrap_or_default(),
    }
  }
}

// ─── Business ────────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum BusinessField {
  Id,
  Name,
  PrimaryEmail,
  OtherEmails,
  PrimaryPhone,
  OtherPhones,
  AssociatedPeople,
  PrimaryAddress,
  Website,
  DateAdded,
}

impl Tabular for Business {
  type Field = BusinessField;

  const DEFAULT_FIELDS: &'static [BusinessField] = &[
    BusinessField::Id,
    BusinessField::Name,
    BusinessField::PrimaryEmail,
    BusinessField::Website,
  ];

  fn cell(&self, field: BusinessField) -> String {
    use BusinessField::*;
    match field {
      Id => self.id.clone(),
      Name => self.name.clone(),
      PrimaryEmail => opt(&self.primary_email),
      OtherEmails => self.other_emails.join(LIST_SEPARATOR),
      PrimaryPhone => opt(&self.primary_phone),
      OtherPhones => self.other_phones.join(LIST_SEPARATOR),
      AssociatedPeople => self.associated_people.join(LIST_SEPARATOR),
      PrimaryAddress => opt(&self.primary_address),
      Website => opt(&self.website),
      DateAdded => self.date_added.to_string(),
    }
  }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn opt(value: &Option<String>) -> String { value.clone().unwrap_or_default() }

/// Parse a comma-separated field list such as `"id, name,primary_email"`.
///
/// Blank entries are skipped; any unknown name fails the whole list.
pub fn parse_fields<F: FromStr>(list: &str) -> Result<Vec<F>> {
  list
    .split(',')
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(|name| {
      name.parse().map_err(|_| Error::UnknownField {
        name: name.to_owned(),
      })
    })
    .collect()
}

/// Every field name an entity knows about, in declaration order.
pub fn field_names<F: IntoEnumIterator + Into<&'static str>>() -> Vec<&'static str> {
  F::iter().map(Into::into).collect()
}

/// Column header for a field: `primary_email` → `Primary Email`.
pub fn header(name: &str) -> String {
  name
    .split('_')
    .filter(|w| !w.is_empty())
    .map(|w| {
      let mut chars = w.chars();
      match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
      }
    })
    .collect::<Vec<_>>()
    .join(" ")
}
