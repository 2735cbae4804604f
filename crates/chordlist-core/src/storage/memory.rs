//! In-memory store for tests and previews

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::Shortcut;
use crate::storage::ShortcutStore;

/// Keeps one shortcut list per path, mimicking a tiny filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    path: PathBuf,
    files: RefCell<HashMap<PathBuf, Vec<Shortcut>>>,
    fail_saves: Cell<bool>,
    save_count: Cell<usize>,
}

impl MemoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Seed the current path with `shortcuts`
    #[must_use]
    pub fn with_shortcuts(self, shortcuts: Vec<Shortcut>) -> Self {
        self.files.borrow_mut().insert(self.path.clone(), shortcuts);
        self
    }

    /// Make every subsequent save fail (or succeed again)
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Number of successful saves performed
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }

    /// Contents stored at `path`, if anything was saved there
    pub fn stored_at(&self, path: &Path) -> Option<Vec<Shortcut>> {
        self.files.borrow().get(path).cloned()
    }
}

impl ShortcutStore for MemoryStore {
    fn load(&self) -> Result<Vec<Shortcut>> {
        Ok(self.stored_at(&self.path).unwrap_or_default())
    }

    fn save(&self, shortcuts: &[Shortcut]) -> Result<()> {
        if self.fail_saves.get() {
            return Err(Error::Save {
                path: self.path.clone(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "saves disabled"),
            });
        }

        self.files
            .borrow_mut()
            .insert(self.path.clone(), shortcuts.to_vec());
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn set_path(&mut self, path: PathBuf) {
        self.path = path;
    }
}
