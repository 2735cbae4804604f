use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] chordlist_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Shortcut ID cannot be empty")]
    EmptyShortcutId,
    #[error("No recognizable chord for this key event")]
    NoChord,
    #[error("Change was kept in memory but not saved: {0}")]
    NotPersisted(chordlist_core::Error),
    #[error(
        "Refusing to modify {}: the existing store could not be read ({reason}). Fix or move the file first.",
        path.display()
    )]
    StoreUnreadable { path: PathBuf, reason: String },
}
