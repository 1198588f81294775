//! Storage layer for tl
//!
//! The whole task list persists as one JSON blob: an array of
//! `{id, text, completed}` objects in display order, written atomically
//! after every mutation. Reads degrade to an empty list on any failure
//! (missing file, unreadable file, wrong shape) rather than surfacing
//! an error; the list is single-writer by design.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::task::Task;

/// File name of the store inside the data directory
pub const STORE_FILE: &str = "tasks.json";

/// Store handle bound to a concrete file path
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store at an explicit path
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Resolve the store path: explicit override first, then the config
    /// file, then the platform data directory.
    pub fn resolve(override_path: Option<PathBuf>, config: &Config) -> Result<Self> {
        if let Some(path) = override_path {
            return Ok(Self::at(path));
        }
        if let Some(path) = config.store.path.clone() {
            return Ok(Self::at(path));
        }
        let dirs = ProjectDirs::from("", "", "tl").ok_or(Error::NoStorePath)?;
        Ok(Self::at(dirs.data_dir().join(STORE_FILE)))
    }

    /// Path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted task sequence.
    ///
    /// Missing or malformed data yields an empty list, never an error.
    pub fn load(&self) -> Vec<Task> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %self.path.display(), %err, "store unreadable, starting empty");
                }
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Task>>(&content) {
            Ok(tasks) => tasks,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "store malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// Persist the full task sequence, atomically (temp file + rename).
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)?;
        self.write_atomic(json.as_bytes())
    }

    fn write_atomic(&self, data: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|_| Error::StoreNotWritable(self.path.clone()))?;
        }

        // Temp file lives in the same directory so the rename is atomic
        let temp_path = self.path.with_extension("tmp");

        let mut file = File::create(&temp_path)?;
        file.write_all(data)?;
        file.sync_all()?;

        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> Store {
        Store::at(dir.path().join(STORE_FILE))
    }

    fn task(id: u64, text: &str, completed: bool) -> Task {
        Task {
            id,
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn missing_store_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store_in(&dir).load().is_empty());
    }

    #[test]
    fn malformed_store_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        fs::write(store.path(), "not json at all").unwrap();
        assert!(store.load().is_empty());

        // Valid JSON, wrong shape
        fs::write(store.path(), r#"{"tasks": 1}"#).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips_content_and_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let tasks = vec![
            task(1, "buy milk", false),
            task(2, "walk dog", true),
            task(3, "write tests", false),
        ];

        store.save(&tasks).unwrap();
        assert_eq!(store.load(), tasks);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = Store::at(dir.path().join("nested/deeper").join(STORE_FILE));

        store.save(&[task(1, "a", false)]).unwrap();
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&[task(1, "a", false), task(2, "b", true)]).unwrap();
        store.save(&[task(1, "a", false)]).unwrap();

        assert_eq!(store.load(), vec![task(1, "a", false)]);
    }

    #[test]
    fn resolve_prefers_explicit_override() {
        let dir = TempDir::new().unwrap();
        let explicit = dir.path().join("elsewhere.json");

        let mut config = Config::default();
        config.store.path = Some(dir.path().join("from-config.json"));

        let store = Store::resolve(Some(explicit.clone()), &config).unwrap();
        assert_eq!(store.path(), explicit.as_path());

        let store = Store::resolve(None, &config).unwrap();
        assert_eq!(store.path(), dir.path().join("from-config.json").as_path());
    }
}
