//! Shortcut persistence backends

mod json_file;
mod memory;

use std::path::{Path, PathBuf};

use crate::models::Shortcut;
use crate::Result;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Directory created under the platform data directory.
pub const APP_DIR_NAME: &str = "ShortcutList";
/// File name of the default store.
pub const STORE_FILE_NAME: &str = "shortcuts.json";

/// Trait for shortcut storage backends.
///
/// Backends always read and write the whole sequence; there is no
/// incremental log.
pub trait ShortcutStore {
    /// Load every stored shortcut in order.
    ///
    /// A missing store yields an empty list. An unreadable or malformed store
    /// yields [`crate::Error::Load`].
    fn load(&self) -> Result<Vec<Shortcut>>;

    /// Replace the stored sequence with `shortcuts`.
    fn save(&self, shortcuts: &[Shortcut]) -> Result<()>;

    /// Location future loads and saves target
    fn path(&self) -> &Path;

    /// Point future loads and saves at `path`
    fn set_path(&mut self, path: PathBuf);
}

/// Default store location: `<data dir>/ShortcutList/shortcuts.json`.
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(STORE_FILE_NAME)
}
