//! Error types for chordlist-core

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using chordlist-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in chordlist-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// The store file exists but could not be read or parsed
    #[error("Failed to load shortcuts from {}: {reason}", path.display())]
    Load { path: PathBuf, reason: String },

    /// Writing the store file failed; in-memory state is kept
    #[error("Failed to save shortcuts to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A required shortcut field was left empty
    #[error("Shortcut is incomplete: {field} is required")]
    IncompleteShortcut { field: &'static str },

    /// Shortcut not found
    #[error("Shortcut not found: {0}")]
    NotFound(String),

    /// An ID prefix matched more than one shortcut
    #[error("{0}")]
    AmbiguousId(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),
}
