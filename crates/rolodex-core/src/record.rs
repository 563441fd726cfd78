//! The `Record` trait shared by every entity that can be resolved by id or
//! name.

use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;

/// Anything with an opaque id and a display name.
pub trait Record {
  fn id(&self) -> &str;
  fn name(&self) -> &str;
}

/// A fresh opaque identifier for a newly-created record.
pub(crate) fn new_id() -> String { Uuid::new_v4().to_string() }

/// The creation timestamp stamped onto new records (UTC, no offset).
pub(crate) fn now() -> NaiveDateTime { Utc::now().naive_utc() }
