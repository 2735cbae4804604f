use std::path::Path;

use crate::commands::common::{normalize_shortcut_identifier, open_registry_for_update, persisted};
use crate::error::CliError;

pub fn run_delete(id: &str, store_path: &Path) -> Result<(), CliError> {
    let normalized_id = normalize_shortcut_identifier(id)?;
    let mut registry = open_registry_for_update(store_path)?;
    let shortcut_id = registry.find_by_id_prefix(&normalized_id)?.id.clone();

    persisted(registry.delete(&shortcut_id))?;
    println!("{shortcut_id}");
    Ok(())
}
