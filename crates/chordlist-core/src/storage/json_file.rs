//! JSON file store

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::Shortcut;
use crate::storage::{default_store_path, ShortcutStore};

/// Stores shortcuts as a pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store targeting `path`; nothing is touched on disk yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the store at the default location, creating its directory.
    pub fn open_default() -> Result<Self> {
        let store = Self::new(default_store_path());
        store.ensure_parent_dir()?;
        Ok(store)
    }

    fn ensure_parent_dir(&self) -> io::Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }

    /// Sibling path used for the write-then-rename swap
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_atomically(&self, contents: &str) -> io::Result<()> {
        self.ensure_parent_dir()?;

        let temp_path = self.temp_path();
        if let Err(error) = fs::write(&temp_path, contents) {
            let _ = fs::remove_file(&temp_path);
            return Err(error);
        }

        fs::rename(&temp_path, &self.path).inspect_err(|_| {
            let _ = fs::remove_file(&temp_path);
        })
    }

    fn load_error(&self, reason: impl ToString) -> Error {
        Error::Load {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl ShortcutStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Shortcut>> {
        if !self.path.exists() {
            tracing::debug!("No store at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path).map_err(|error| self.load_error(error))?;
        let shortcuts: Vec<Shortcut> =
            serde_json::from_str(&raw).map_err(|error| self.load_error(error))?;

        tracing::debug!(
            "Loaded {} shortcuts from {}",
            shortcuts.len(),
            self.path.display()
        );
        Ok(shortcuts)
    }

    fn save(&self, shortcuts: &[Shortcut]) -> Result<()> {
        let save_error = |source: io::Error| Error::Save {
            path: self.path.clone(),
            source,
        };

        let serialized =
            serde_json::to_string_pretty(shortcuts).map_err(|error| save_error(error.into()))?;
        self.write_atomically(&serialized).map_err(save_error)?;

        tracing::debug!(
            "Saved {} shortcuts to {}",
            shortcuts.len(),
            self.path.display()
        );
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn set_path(&mut self, path: PathBuf) {
        self.path = path;
    }
}
