//! Data models for chordlist

mod shortcut;
mod suggestions;

pub use shortcut::{SearchScope, Shortcut, ShortcutDraft, ShortcutId};
pub use suggestions::{application_suggestions, SuggestionList};
