//! Business — organisations people can be associated with.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  record::{self, Record},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
  pub id:                String,
  pub name:              String,
  #[serde(default)]
  pub primary_email:     Option<String>,
  #[serde(default)]
  pub other_emails:      Vec<String>,
  #[serde(default)]
  pub primary_phone:     Option<String>,
  #[serde(default)]
  pub other_phones:      Vec<String>,
  /// Ids of people associated with this business.
  #[serde(default)]
  pub associated_people: Vec<String>,
  #[serde(default)]
  pub primary_address:   Option<String>,
  #[serde(default)]
  pub website:           Option<String>,
  pub date_added:        NaiveDateTime,
}

/// Input to [`Business::new`].
#[derive(Debug, Clone, Default)]
pub struct NewBusiness {
  pub name:            String,
  pub primary_email:   Option<String>,
  pub primary_phone:   Option<String>,
  pub primary_address: Option<String>,
  pub website:         Option<String>,
}

impl Business {
  pub fn new(input: NewBusiness) -> Result<Self> {
    if input.name.trim().is_empty() {
      return Err(Error::BlankName);
    }
    Ok(Self {
      id:                record::new_id(),
      name:              input.name,
      primary_email:     input.primary_email,
      other_emails:      Vec::new(),
      primary_phone:     input.primary_phone,
      other_phones:      Vec::new(),
      associated_people: Vec::new(),
      primary_address:   input.primary_address,
      website:           input.website,
      date_added:        record::now(),
    })
  }
}

impl Record for Business {
  fn id(&self) -> &str { &self.id }

  fn name(&self) -> &str { &self.name }
}
