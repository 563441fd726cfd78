//! The `RecordStore` trait.
//!
//! Implemented by persistence backends (e.g. `rolodex-store-json`). The CLI
//! depends on this abstraction, not on any concrete backend.

use crate::{business::Business, person::Person, task::Task};

/// Whole-collection persistence for every entity type.
///
/// `load_*` returns records in stored order. `save_*` replaces the entire
/// stored collection; there is no partial update and no locking, so two
/// concurrent writers will lose one writer's changes.
pub trait RecordStore {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── People ────────────────────────────────────────────────────────────

  fn load_people(&self) -> Result<Vec<Person>, Self::Error>;

  fn save_people(&self, people: &[Person]) -> Result<(), Self::Error>;

  // ── Businesses ────────────────────────────────────────────────────────

  fn load_businesses(&self) -> Result<Vec<Business>, Self::Error>;

  fn save_businesses(&self, businesses: &[Business]) -> Result<(), Self::Error>;

  // ── Tasks ─────────────────────────────────────────────────────────────

  fn load_tasks(&self) -> Result<Vec<Task>, Self::Error>;

  fn save_tasks(&self, tasks: &[Task]) -> Result<(), Self::Error>;
}
