//! Layered configuration: defaults, then an optional TOML file, then
//! `ROLODEX_*` environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use rolodex_store_json::StorePaths;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  /// Directory holding `people.json`, `businesses.json` and `tasks.json`.
  pub data_dir:        PathBuf,
  /// Per-collection overrides; relative paths are taken as-is, not joined to
  /// `data_dir`.
  #[serde(default)]
  pub people_file:     Option<PathBuf>,
  #[serde(default)]
  pub businesses_file: Option<PathBuf>,
  #[serde(default)]
  pub tasks_file:      Option<PathBuf>,
}

impl Settings {
  pub fn load(config_file: &Path, data_dir: Option<PathBuf>) -> Result<Self> {
    let mut builder = config::Config::builder()
      .set_default("data_dir", "data")?
      .add_source(config::File::from(config_file).required(false))
      .add_source(config::Environment::with_prefix("ROLODEX"));

    if let Some(dir) = data_dir {
      builder = builder.set_override("data_dir", dir.to_string_lossy().into_owned())?;
    }

    builder
      .build()
      .with_context(|| format!("reading config file {}", config_file.display()))?
      .try_deserialize()
      .context("parsing configuration")
  }

  pub fn store_paths(&self) -> StorePaths {
    let mut paths = StorePaths::in_dir(expand_tilde(&self.data_dir));
    if let Some(p) = &self.people_file {
      paths.people = expand_tilde(p);
    }
    if let Some(p) = &self.businesses_file {
      paths.businesses = expand_tilde(p);
    }
    if let Some(p) = &self.tasks_file {
      paths.tasks = expand_tilde(p);
    }
    paths
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use std::fs;

  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn defaults_without_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(&dir.path().join("missing.toml"), None).unwrap();
    let paths = settings.store_paths();
    assert!(paths.people.ends_with("people.json"));
    assert!(settings.people_file.is_none());
  }

  #[test]
  fn file_values_and_flag_override() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("rolodex.toml");
    fs::write(
      &file,
      "data_dir = \"/srv/rolodex\"\ntasks_file = \"/tmp/todo.json\"\n",
    )
    .unwrap();

    let settings = Settings::load(&file, None).unwrap();
    assert_eq!(settings.data_dir, PathBuf::from("/srv/rolodex"));
    let paths = settings.store_paths();
    assert_eq!(paths.people, PathBuf::from("/srv/rolodex/people.json"));
    assert_eq!(paths.tasks, PathBuf::from("/tmp/todo.json"));

    let overridden = Settings::load(&file, Some(PathBuf::from("/elsewhere"))).unwrap();
    assert_eq!(
      overridden.store_paths().businesses,
      PathBuf::from("/elsewhere/businesses.json")
    );
  }

  #[test]
  fn tilde_expands_to_home() {
    let Ok(home) = std::env::var("HOME") else {
      return;
    };
    assert_eq!(
      expand_tilde(Path::new("~/contacts")),
      PathBuf::from(home).join("contacts")
    );
    assert_eq!(expand_tilde(Path::new("data")), PathBuf::from("data"));
  }
}
