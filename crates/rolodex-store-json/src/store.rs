//! [`JsonStore`] — the flat-file implementation of [`RecordStore`].

use std::{
  fs::{self, File},
  io::{BufReader, BufWriter, Write as _},
  path::{Path, PathBuf},
};

use rolodex_core::{business::Business, person::Person, store::RecordStore, task::Task};
use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result};

// ─── Paths ───────────────────────────────────────────────────────────────────

/// Where each collection lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
  pub people:     PathBuf,
  pub businesses: PathBuf,
  pub tasks:      PathBuf,
}

impl StorePaths {
  /// `people.json`, `businesses.json` and `tasks.json` inside `dir`.
  pub fn in_dir(dir: impl AsRef<Path>) -> Self {
    let dir = dir.as_ref();
    Self {
      people:     dir.join("people.json"),
      businesses: dir.join("businesses.json"),
      tasks:      dir.join("tasks.json"),
    }
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A record store backed by one JSON array file per entity type.
///
/// Missing files are created as `[]` on first load. Saves overwrite the whole
/// file and take no lock: run one writer at a time.
#[derive(Debug, Clone)]
pub struct JsonStore {
  paths: StorePaths,
}

impl JsonStore {
  pub fn new(paths: StorePaths) -> Self { Self { paths } }

  pub fn paths(&self) -> &StorePaths { &self.paths }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
  move |source| Error::Io {
    path: path.to_path_buf(),
    source,
  }
}

fn json_err(path: &Path) -> impl FnOnce(serde_json::Error) -> Error + '_ {
  move |source| Error::Json {
    path: path.to_path_buf(),
    source,
  }
}

fn ensure_parent(path: &Path) -> Result<()> {
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    fs::create_dir_all(parent).map_err(io_err(parent))?;
  }
  Ok(())
}

/// Create `path` holding an empty array if it does not exist yet.
fn ensure_file(path: &Path) -> Result<()> {
  if path.exists() {
    return Ok(());
  }
  tracing::debug!(path = %path.display(), "creating empty collection file");
  ensure_parent(path)?;
  fs::write(path, "[]\n").map_err(io_err(path))
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
  ensure_file(path)?;
  let file = File::open(path).map_err(io_err(path))?;
  let items: Vec<T> =
    serde_json::from_reader(BufReader::new(file)).map_err(json_err(path))?;
  tracing::debug!(path = %path.display(), count = items.len(), "loaded collection");
  Ok(items)
}

fn save<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
  ensure_parent(path)?;
  let file = File::create(path).map_err(io_err(path))?;
  let mut writer = BufWriter::new(file);
  serde_json::to_writer_pretty(&mut writer, items).map_err(json_err(path))?;
  writer.write_all(b"\n").map_err(io_err(path))?;
  writer.flush().map_err(io_err(path))?;
  tracing::debug!(path = %path.display(), count = items.len(), "saved collection");
  Ok(())
}

impl RecordStore for JsonStore {
  type Error = Error;

  fn load_people(&self) -> Result<Vec<Person>> { load(&self.paths.people) }

  fn save_people(&self, people: &[Person]) -> Result<()> {
    save(&self.paths.people, people)
  }

  fn load_businesses(&self) -> Result<Vec<Business>> {
    load(&self.paths.businesses)
  }

  fn save_businesses(&self, businesses: &[Business]) -> Result<()> {
    save(&self.paths.businesses, businesses)
  }

  fn load_tasks(&self) -> Result<Vec<Task>> { load(&self.paths.tasks) }

  fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
    save(&self.paths.tasks, tasks)
  }
}
