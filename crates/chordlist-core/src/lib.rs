//! chordlist-core - Core library for chordlist
//!
//! This crate contains the shortcut models, the key-chord encoder, the JSON
//! storage backends, and the registry used by every chordlist interface.

pub mod chord;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod registry;
pub mod storage;
pub mod util;

pub use chord::{encode, ChordCapture, ChordOutcome, Modifiers, RawKeyEvent};
pub use error::{Error, Result};
pub use models::{SearchScope, Shortcut, ShortcutDraft, ShortcutId};
pub use registry::{RegistryEvent, ShortcutRegistry};
pub use storage::{JsonFileStore, MemoryStore, ShortcutStore};
