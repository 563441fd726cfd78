//! Error types for `rolodex-core`.

use thiserror::Error;

use crate::resolve::Candidate;

#[derive(Debug, Error)]
pub enum Error {
  #[error("no record selected: supply an id or a name pattern")]
  SelectionMissing,

  #[error("no record matches {selector:?}")]
  NotFound { selector: String },

  #[error("{} records match {pattern:?}", .matches.len())]
  Ambiguous {
    pattern: String,
    /// Every match, in collection order.
    matches: Vec<Candidate>,
  },

  #[error("invalid date {value:?}: expected YYYY-MM-DD")]
  InvalidDate { value: String },

  #[error("invalid name pattern {pattern:?}: {source}")]
  InvalidPattern {
    pattern: String,
    #[source]
    source:  regex::Error,
  },

  #[error("unknown field: {name:?}")]
  UnknownField { name: String },

  #[error("name must not be blank")]
  BlankName,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
