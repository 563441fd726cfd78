//! Person — the record type the patch engine operates on.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  record::{self, Record},
};

/// A person in the contact store.
///
/// `id` and `date_added` are set once at creation. `name` changes only via
/// [`Person::rename`]; everything else is patchable through
/// [`crate::patch::PersonPatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:                       String,
  pub name:                     String,
  #[serde(default)]
  pub preferred_name:           Option<String>,
  #[serde(default)]
  pub primary_email:            Option<String>,
  #[serde(default)]
  pub other_emails:             Vec<String>,
  #[serde(default)]
  pub primary_phone:            Option<String>,
  #[serde(default)]
  pub other_phones:             Vec<String>,
  /// Ids of organisations this person belongs to.
  #[serde(default)]
  pub associated_organizations: Vec<String>,
  #[serde(default)]
  pub primary_address:          Option<String>,
  pub date_added:               NaiveDateTime,
  #[serde(default)]
  pub last_contacted:           Option<NaiveDate>,
}

/// Input to [`Person::new`].
#[derive(Debug, Clone, Default)]
pub struct NewPerson {
  pub name:            String,
  pub preferred_name:  Option<String>,
  pub primary_email:   Option<String>,
  pub primary_phone:   Option<String>,
  pub primary_address: Option<String>,
}

impl NewPerson {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      ..Self::default()
    }
  }
}

impl Person {
  /// Create a person with a fresh id and `date_added` set to now.
  pub fn new(input: NewPerson) -> Result<Self> {
    if input.name.trim().is_empty() {
      return Err(Error::BlankName);
    }
    Ok(Self {
      id:                       record::new_id(),
      name:                     input.name,
      preferred_name:           input.preferred_name,
      primary_email:            input.primary_email,
      other_emails:             Vec::new(),
      primary_phone:            input.primary_phone,
      other_phones:             Vec::new(),
      associated_organizations: Vec::new(),
      primary_address:          input.primary_address,
      date_added:               record::now(),
      last_contacted:           None,
    })
  }

  /// Replace the display name. Returns the previous name.
  pub fn rename(&mut self, name: impl Into<String>) -> Result<String> {
    let name = name.into();
    if name.trim().is_empty() {
      return Err(Error::BlankName);
    }
    Ok(std::mem::replace(&mut self.name, name))
  }
}

impl Record for Person {
  fn id(&self) -> &str { &self.id }

  fn name(&self) -> &str { &self.name }
}
