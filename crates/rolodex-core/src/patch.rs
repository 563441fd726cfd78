//! Patch engine — applies a batch of optional field updates to one person.
//!
//! Patching happens in two steps. [`PersonPatch::validate`] parses every input
//! that can fail and produces a [`ValidatedPatch`]; only that type can touch a
//! [`Person`], and applying it cannot fail. A bad `last_contacted` therefore
//! aborts the edit before any field has changed.

use chrono::NaiveDate;

use crate::{Error, Result, person::Person};

/// The only accepted textual form for `last_contacted`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ─── Input ───────────────────────────────────────────────────────────────────

/// Raw, unvalidated updates for a [`Person`].
///
/// `None` scalars and empty lists mean "leave unchanged". There is no way to
/// clear a scalar or null a list through a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonPatch {
  pub preferred_name:           Option<String>,
  pub primary_email:            Option<String>,
  pub primary_phone:            Option<String>,
  pub primary_address:          Option<String>,
  pub other_emails:             Vec<String>,
  pub other_phones:             Vec<String>,
  pub associated_organizations: Vec<String>,
  /// `YYYY-MM-DD`.
  pub last_contacted:           Option<String>,
  /// Replace list fields instead of appending to them.
  pub overwrite_lists:          bool,
}

impl PersonPatch {
  /// Check every input that can be rejected, without touching any record.
  pub fn validate(self) -> Result<ValidatedPatch> {
    let last_contacted = self
      .last_contacted
      .map(|raw| parse_date(&raw))
      .transpose()?;

    Ok(ValidatedPatch {
      preferred_name: self.preferred_name,
      primary_email: self.primary_email,
      primary_phone: self.primary_phone,
      primary_address: self.primary_address,
      other_emails: self.other_emails,
      other_phones: self.other_phones,
      associated_organizations: self.associated_organizations,
      last_contacted,
      overwrite_lists: self.overwrite_lists,
    })
  }
}

/// Parse a `last_contacted` value in [`DATE_FORMAT`].
///
/// chrono's `%Y` tolerates a sign and leading whitespace, so the first byte
/// must be a digit.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
  let invalid = || Error::InvalidDate {
    value: raw.to_owned(),
  };
  if !raw.starts_with(|c: char| c.is_ascii_digit()) {
    return Err(invalid());
  }
  NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| invalid())
}

// ─── Validated ───────────────────────────────────────────────────────────────

/// A patch whose inputs have all been checked. Applying it is infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPatch {
  preferred_name:           Option<String>,
  primary_email:            Option<String>,
  primary_phone:            Option<String>,
  primary_address:          Option<String>,
  other_emails:             Vec<String>,
  other_phones:             Vec<String>,
  associated_organizations: Vec<String>,
  last_contacted:           Option<NaiveDate>,
  overwrite_lists:          bool,
}

impl ValidatedPatch {
  /// Apply to `person`, returning whether any field was touched.
  ///
  /// Setting a field to its current value still counts as touching it.
  pub fn apply(self, person: &mut Person) -> bool {
    let mut dirty = false;

    for (slot, value) in [
      (&mut person.preferred_name, self.preferred_name),
      (&mut person.primary_email, self.primary_email),
      (&mut person.primary_phone, self.primary_phone),
      (&mut person.primary_address, self.primary_address),
    ] {
      if let Some(value) = value {
        *slot = Some(value);
        dirty = true;
      }
    }

    for (list, values) in [
      (&mut person.other_emails, self.other_emails),
      (&mut person.other_phones, self.other_phones),
      (
        &mut person.associated_organizations,
        self.associated_organizations,
      ),
    ] {
      if values.is_empty() {
        continue;
      }
      if self.overwrite_lists {
        *list = values;
      } else {
        list.extend(values);
      }
      dirty = true;
    }

    if let Some(date) = self.last_contacted {
      person.last_contacted = Some(date);
      dirty = true;
    }

    dirty
  }
}

/// Validate `patch` and apply it to `person` in one call.
///
/// On error `person` is untouched.
pub fn apply_patch(person: &mut Person, patch: PersonPatch) -> Result<bool> {
  Ok(patch.validate()?.apply(person))
}
