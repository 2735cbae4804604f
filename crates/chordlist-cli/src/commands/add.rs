use std::path::Path;

use chordlist_core::ShortcutDraft;

use crate::commands::common::{open_registry_for_update, persisted};
use crate::error::CliError;

pub fn run_add(
    application: &str,
    feature: &str,
    chord: &str,
    store_path: &Path,
) -> Result<(), CliError> {
    let shortcut = ShortcutDraft::new(application, feature, chord).into_shortcut()?;
    let id = shortcut.id.clone();

    let mut registry = open_registry_for_update(store_path)?;
    persisted(registry.add(shortcut))?;

    println!("{id}");
    Ok(())
}
