//! Resolver — narrows a collection down to exactly one record.
//!
//! A selector is either an exact id or a case-insensitive regular expression
//! searched against each record's name. Absence and ambiguity are reported as
//! errors carrying enough data for the caller to act on; the resolver never
//! picks a default.

use std::fmt;

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::{Error, Result, record::Record};

// ─── Selector ────────────────────────────────────────────────────────────────

/// How the caller identifies the target record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
  /// Exact, case-sensitive match on `id`.
  Id(String),
  /// Case-insensitive regex search on `name`.
  Pattern(String),
}

impl Selector {
  /// Build a selector from the optional id and name-pattern inputs.
  ///
  /// Blank strings count as absent. When both are given the id wins.
  pub fn from_parts(id: Option<&str>, pattern: Option<&str>) -> Result<Self> {
    fn present(s: Option<&str>) -> Option<&str> { s.filter(|s| !s.trim().is_empty()) }
    match (present(id), present(pattern)) {
      (Some(id), _) => Ok(Self::Id(id.to_owned())),
      (None, Some(pattern)) => Ok(Self::Pattern(pattern.to_owned())),
      (None, None) => Err(Error::SelectionMissing),
    }
  }

  fn as_str(&self) -> &str {
    match self {
      Self::Id(s) | Self::Pattern(s) => s,
    }
  }
}

impl fmt::Display for Selector {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Id(id) => write!(f, "id={id}"),
      Self::Pattern(p) => write!(f, "name~{p}"),
    }
  }
}

// ─── Candidate ───────────────────────────────────────────────────────────────

/// One of several records that matched an ambiguous pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
  pub id:   String,
  pub name: String,
}

impl Candidate {
  fn of<R: Record>(record: &R) -> Self {
    Self {
      id:   record.id().to_owned(),
      name: record.name().to_owned(),
    }
  }
}

impl fmt::Display for Candidate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} (id={})", self.name, self.id)
  }
}

// ─── Resolution ──────────────────────────────────────────────────────────────

fn compile(pattern: &str) -> Result<Regex> {
  RegexBuilder::new(pattern)
    .case_insensitive(true)
    .build()
    .map_err(|source| Error::InvalidPattern {
      pattern: pattern.to_owned(),
      source,
    })
}

fn positions_matching<R: Record>(records: &[R], pattern: &str) -> Result<Vec<usize>> {
  let re = compile(pattern)?;
  Ok(
    records
      .iter()
      .enumerate()
      .filter(|(_, r)| re.is_match(r.name()))
      .map(|(i, _)| i)
      .collect(),
  )
}

/// Every record whose name matches `pattern`, in collection order.
///
/// Unlike [`resolve`], zero or many matches are not errors here.
pub fn find_by_name<'a, R: Record>(records: &'a [R], pattern: &str) -> Result<Vec<&'a R>> {
  Ok(
    positions_matching(records, pattern)?
      .into_iter()
      .map(|i| &records[i])
      .collect(),
  )
}

/// Resolve `selector` to the position of exactly one record in `records`.
pub fn resolve<R: Record>(records: &[R], selector: &Selector) -> Result<usize> {
  let not_found = || Error::NotFound {
    selector: selector.as_str().to_owned(),
  };

  match selector {
    Selector::Id(id) => records.iter().position(|r| r.id() == id.as_str()).ok_or_else(not_found),
    Selector::Pattern(pattern) => {
      let hits = positions_matching(records, pattern)?;
      match hits.as_slice() {
        [] => Err(not_found()),
        [only] => Ok(*only),
        _ => {
          tracing::debug!(%selector, matches = hits.len(), "ambiguous selector");
          Err(Error::Ambiguous {
            pattern: pattern.clone(),
            matches: hits.iter().map(|&i| Candidate::of(&records[i])).collect(),
          })
        }
      }
    }
  }
}

/// Like [`resolve`], but hands back the record itself for in-place edits.
pub fn resolve_mut<'a, R: Record>(
  records: &'a mut [R],
  selector: &Selector,
) -> Result<&'a mut R> {
  let index = resolve(records, selector)?;
  Ok(&mut records[index])
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;
  use crate::person::{NewPerson, Person};

  fn people(names: &[&str]) -> Vec<Person> {
    names
      .iter()
      .map(|n| Person::new(NewPerson::new(*n)).unwrap())
      .collect()
  }

  fn by_pattern(p: &str) -> Selector { Selector::Pattern(p.into()) }

  // ─── Selector ──────────────────────────────────────────────────────────────

  #[test]
  fn selector_requires_one_input() {
    assert!(matches!(
      Selector::from_parts(None, None),
      Err(Error::SelectionMissing)
    ));
    assert!(matches!(
      Selector::from_parts(Some(" "), Some("")),
      Err(Error::SelectionMissing)
    ));
  }

  #[test]
  fn selector_prefers_id() {
    assert_eq!(
      Selector::from_parts(Some("abc"), Some("john")).unwrap(),
      Selector::Id("abc".into())
    );
    assert_eq!(
      Selector::from_parts(None, Some("john")).unwrap(),
      by_pattern("john")
    );
  }

  // ─── By id ─────────────────────────────────────────────────────────────────

  #[test]
  fn every_record_resolves_by_its_own_id() {
    let ps = people(&["John Doe", "Jane Doe", "John Smith"]);
    for (i, p) in ps.iter().enumerate() {
      let idx = resolve(&ps, &Selector::Id(p.id.clone())).unwrap();
      assert_eq!(idx, i);
      assert_eq!(&ps[idx], p);
    }
  }

  #[test]
  fn unknown_id_is_not_found() {
    let ps = people(&["John Doe"]);
    match resolve(&ps, &Selector::Id("nope".into())) {
      Err(Error::NotFound { selector }) => assert_eq!(selector, "nope"),
      other => panic!("expected NotFound, got {other:?}"),
    }
  }

  #[test]
  fn id_match_is_case_sensitive() {
    let mut ps = people(&["John Doe"]);
    ps[0].id = "ABC".into();
    assert!(resolve(&ps, &Selector::Id("abc".into())).is_err());
  }

  // ─── By pattern ────────────────────────────────────────────────────────────

  #[test]
  fn pattern_with_no_match_is_not_found() {
    let ps = people(&["John Doe"]);
    match resolve(&ps, &by_pattern("zelda")) {
      Err(Error::NotFound { selector }) => assert_eq!(selector, "zelda"),
      other => panic!("expected NotFound, got {other:?}"),
    }
  }

  #[test]
  fn pattern_with_one_match_resolves() {
    let ps = people(&["John Doe", "Jane Roe"]);
    assert_eq!(resolve(&ps, &by_pattern("jane")).unwrap(), 1);
  }

  #[test]
  fn pattern_is_case_insensitive_substring() {
    let ps = people(&["John Doe"]);
    assert_eq!(resolve(&ps, &by_pattern("JOHN")).unwrap(), 0);
    assert_eq!(resolve(&ps, &by_pattern("n d")).unwrap(), 0);
  }

  #[test]
  fn pattern_supports_regex() {
    let ps = people(&["John Doe", "Jane Doe"]);
    assert_eq!(resolve(&ps, &by_pattern("^ja.e")).unwrap(), 1);
  }

  #[test]
  fn ambiguous_pattern_lists_all_matches_in_order() {
    let ps = people(&["John Doe", "Ada Lovelace", "Jane Doe", "Bob Doe"]);
    match resolve(&ps, &by_pattern("doe")) {
      Err(Error::Ambiguous { pattern, matches }) => {
        assert_eq!(pattern, "doe");
        let expected: Vec<Candidate> = [0, 2, 3]
          .iter()
          .map(|&i| Candidate {
            id:   ps[i].id.clone(),
            name: ps[i].name.clone(),
          })
          .collect();
        assert_eq!(matches, expected);
      }
      other => panic!("expected Ambiguous, got {other:?}"),
    }
  }

  #[test]
  fn invalid_regex_is_reported() {
    let ps = people(&["John Doe"]);
    assert!(matches!(
      resolve(&ps, &by_pattern("(unclosed")),
      Err(Error::InvalidPattern { .. })
    ));
  }

  #[test]
  fn candidate_display() {
    let c = Candidate {
      id:   "42".into(),
      name: "Jane Doe".into(),
    };
    assert_eq!(c.to_string(), "Jane Doe (id=42)");
  }

  // ─── Helpers ───────────────────────────────────────────────────────────────

  #[test]
  fn find_by_name_allows_zero_and_many() {
    let ps = people(&["John Doe", "Jane Doe"]);
    assert!(find_by_name(&ps, "zelda").unwrap().is_empty());
    let hits = find_by_name(&ps, "doe").unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].name, "John Doe");
  }

  #[test]
  fn resolve_mut_edits_in_place() {
    let mut ps = people(&["John Doe", "Jane Doe"]);
    resolve_mut(&mut ps, &by_pattern("jane"))
      .unwrap()
      .primary_email = Some("jane@example.com".into());
    assert_eq!(ps[1].primary_email.as_deref(), Some("jane@example.com"));
    assert!(ps[0].primary_email.is_none());
  }
}
