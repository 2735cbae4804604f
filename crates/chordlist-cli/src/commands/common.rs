use std::path::{Path, PathBuf};

use chordlist_core::config::{default_config_path, AppConfig, STORE_PATH_ENV};
use chordlist_core::storage::default_store_path;
use chordlist_core::{JsonFileStore, Shortcut, ShortcutRegistry};

use crate::error::CliError;

/// Shorthand for the registry every command works with.
pub type Registry = ShortcutRegistry<JsonFileStore>;

pub fn resolve_config_path(cli_config_path: Option<PathBuf>) -> PathBuf {
    cli_config_path.unwrap_or_else(default_config_path)
}

pub fn resolve_store_path(
    cli_store_path: Option<PathBuf>,
    config_path: &Path,
) -> Result<PathBuf, CliError> {
    let config = AppConfig::load_from_path(config_path)?;
    Ok(config.resolve_store_path(cli_store_path, std::env::var(STORE_PATH_ENV).ok()))
}

/// The default location gets its directory created on first use.
fn open_store(store_path: &Path) -> Result<JsonFileStore, CliError> {
    if store_path == default_store_path() {
        Ok(JsonFileStore::open_default()?)
    } else {
        Ok(JsonFileStore::new(store_path))
    }
}

/// Open the registry for read-only commands.
pub fn open_registry(store_path: &Path) -> Result<Registry, CliError> {
    let registry = ShortcutRegistry::open(open_store(store_path)?);
    if let Some(reason) = registry.load_error() {
        eprintln!("Warning: {reason}");
    }
    Ok(registry)
}

/// Open the registry for commands that save.
///
/// An unreadable store would be replaced by the next save, so mutations are
/// refused until it is fixed.
pub fn open_registry_for_update(store_path: &Path) -> Result<Registry, CliError> {
    let registry = ShortcutRegistry::open(open_store(store_path)?);
    if let Some(reason) = registry.load_error() {
        return Err(CliError::StoreUnreadable {
            path: store_path.to_path_buf(),
            reason: reason.to_string(),
        });
    }
    Ok(registry)
}

/// Map a failed save into the CLI's "not persisted" error.
pub fn persisted<T>(result: chordlist_core::Result<T>) -> Result<T, CliError> {
    result.map_err(|error| match error {
        chordlist_core::Error::Save { .. } => CliError::NotPersisted(error),
        other => CliError::Core(other),
    })
}

pub fn normalize_shortcut_identifier(id: &str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyShortcutId)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn format_shortcut_lines(shortcuts: &[&Shortcut]) -> Vec<String> {
    let app_width = column_width(shortcuts, |shortcut| &shortcut.application_name);
    let feature_width = column_width(shortcuts, |shortcut| &shortcut.feature_description);

    shortcuts
        .iter()
        .map(|shortcut| {
            let short_id = shortcut.id.as_str().chars().take(13).collect::<String>();
            format!(
                "{short_id:<13}  {:<app_width$}  {:<feature_width$}  {}",
                shortcut.application_name, shortcut.feature_description, shortcut.shortcut_key
            )
        })
        .collect()
}

pub fn print_shortcuts(shortcuts: &[&Shortcut], as_json: bool) -> Result<(), CliError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(shortcuts)?);
    } else {
        for line in format_shortcut_lines(shortcuts) {
            println!("{line}");
        }
    }

    Ok(())
}

fn column_width<'a, F>(shortcuts: &[&'a Shortcut], field: F) -> usize
where
    F: Fn(&'a Shortcut) -> &'a String,
{
    shortcuts
        .iter()
        .map(|shortcut| field(shortcut).chars().count())
        .max()
        .unwrap_or(0)
        .min(32)
}

