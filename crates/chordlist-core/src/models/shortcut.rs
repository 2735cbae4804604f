//! Shortcut model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::util::normalize_text;

/// A unique identifier for a shortcut.
///
/// New identifiers are UUID v7 strings, but any string read from disk is
/// accepted verbatim: files written by older clients use other id schemes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortcutId(String);

impl ShortcutId {
    /// Create a new unique shortcut ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive prefix test, used to resolve abbreviated ids.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    }
}

impl Default for ShortcutId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShortcutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ShortcutId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput("shortcut id cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// A recorded keyboard shortcut.
///
/// The serialized field names are the on-disk compatibility surface and must
/// not change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortcut {
    /// Unique identifier
    #[serde(default)]
    pub id: ShortcutId,
    /// Application the shortcut belongs to
    #[serde(default)]
    pub application_name: String,
    /// What the shortcut does
    #[serde(default)]
    pub feature_description: String,
    /// Canonical chord text, e.g. `⌘ + ⇧ + C`
    #[serde(default)]
    pub shortcut_key: String,
}

impl Shortcut {
    /// Create a new shortcut with a fresh identifier
    #[must_use]
    pub fn new(
        application_name: impl Into<String>,
        feature_description: impl Into<String>,
        shortcut_key: impl Into<String>,
    ) -> Self {
        Self {
            id: ShortcutId::new(),
            application_name: application_name.into(),
            feature_description: feature_description.into(),
            shortcut_key: shortcut_key.into(),
        }
    }

    /// Case-insensitive substring match against every text field
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.application_name.to_lowercase().contains(&query)
            || self.feature_description.to_lowercase().contains(&query)
            || self.shortcut_key.to_lowercase().contains(&query)
    }

    /// Whether all three text fields carry content
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [
            &self.application_name,
            &self.feature_description,
            &self.shortcut_key,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

/// Shortcuts are equal when they share an identity.
impl PartialEq for Shortcut {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Shortcut {}

/// Raw input from a creation form, validated before it becomes a [`Shortcut`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutDraft {
    pub application_name: String,
    pub feature_description: String,
    pub shortcut_key: String,
}

impl ShortcutDraft {
    #[must_use]
    pub fn new(
        application_name: impl Into<String>,
        feature_description: impl Into<String>,
        shortcut_key: impl Into<String>,
    ) -> Self {
        Self {
            application_name: application_name.into(),
            feature_description: feature_description.into(),
            shortcut_key: shortcut_key.into(),
        }
    }

    /// Whether the form can be submitted
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Validate and convert into a shortcut with trimmed fields.
    pub fn into_shortcut(self) -> Result<Shortcut> {
        if let Some(field) = self.missing_field() {
            return Err(Error::IncompleteShortcut { field });
        }

        Ok(Shortcut::new(
            self.application_name.trim(),
            self.feature_description.trim(),
            self.shortcut_key.trim(),
        ))
    }

    fn missing_field(&self) -> Option<&'static str> {
        if normalize_text(&self.application_name).is_none() {
            Some("application name")
        } else if normalize_text(&self.feature_description).is_none() {
            Some("feature description")
        } else if normalize_text(&self.shortcut_key).is_none() {
            Some("shortcut key")
        } else {
            None
        }
    }
}

/// Which fields a list search looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// Application name, feature description, and chord
    #[default]
    All,
    /// Application name only
    Application,
    /// Feature description only
    Feature,
}

impl FromStr for SearchScope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "application" | "app" => Ok(Self::Application),
            "feature" => Ok(Self::Feature),
            other => Err(Error::InvalidInput(format!("unknown search scope '{other}'"))),
        }
    }
}
