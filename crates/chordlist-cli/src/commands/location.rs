use std::path::Path;

use chordlist_core::config::AppConfig;

use crate::commands::common::{open_registry_for_update, persisted};
use crate::error::CliError;

/// Save the current list at `destination` and remember it as the store.
pub fn run_relocate(
    destination: &Path,
    store_path: &Path,
    config_path: &Path,
) -> Result<(), CliError> {
    let destination = std::path::absolute(destination)?;
    let mut registry = open_registry_for_update(store_path)?;
    persisted(registry.relocate(destination))?;

    let mut config = AppConfig::load_from_path(config_path)?;
    config.store_path = Some(registry.current_storage_path().to_path_buf());
    config.save_to_path(config_path)?;
    tracing::debug!("Recorded store location in {}", config_path.display());

    println!("{}", registry.current_storage_path().display());
    Ok(())
}

pub fn run_where(store_path: &Path) {
    println!("{}", store_path.display());
}
