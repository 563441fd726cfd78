//! Tasks — a flat to-do list kept alongside the contacts.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
  pub id:         u64,
  pub title:      String,
  /// Free text; empty when no due date was given.
  #[serde(default)]
  pub due:        String,
  pub created_at: NaiveDateTime,
  #[serde(default)]
  pub completed:  bool,
}

impl Task {
  /// Create a pending task numbered one past the highest id in `existing`.
  pub fn next(
    existing: &[Task],
    title: impl Into<String>,
    due: impl Into<String>,
  ) -> Self {
    let id = existing.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
    Self {
      id,
      title: title.into(),
      due: due.into(),
      created_at: Local::now().naive_local(),
      completed: false,
    }
  }

  pub fn status(&self) -> &'static str {
    if self.completed { "Done" } else { "Pending" }
  }

  /// One-line listing, e.g. `3: Call Ada - Due: 2025-05-01 - Pending`.
  pub fn summary(&self) -> String {
    format!(
      "{}: {} - Due: {} - {}",
      self.id,
      self.title,
      self.due,
      self.status()
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn first_task_is_one() {
    let t = Task::next(&[], "Follow up with client", "2025-05-01");
    assert_eq!(t.id, 1);
    assert!(!t.completed);
  }

  #[test]
  fn ids_continue_from_max_not_len() {
    let mut a = Task::next(&[], "a", "");
    a.id = 7;
    let b = Task::next(&[a.clone()], "b", "");
    assert_eq!(b.id, 8);
    let c = Task::next(&[b, a], "c", "");
    assert_eq!(c.id, 9);
  }

  #[test]
  fn summary_line() {
    let mut t = Task::next(&[], "Call Ada", "Friday");
    assert_eq!(t.summary(), "1: Call Ada - Due: Friday - Pending");
    t.completed = true;
    assert_eq!(t.summary(), "1: Call Ada - Due: Friday - Done");
  }
}
