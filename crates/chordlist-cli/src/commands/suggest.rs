use std::path::Path;

use crate::commands::common::open_registry;
use crate::error::CliError;

pub fn run_suggest(input: &str, store_path: &Path) -> Result<(), CliError> {
    let registry = open_registry(store_path)?;
    for name in registry.application_suggestions(input) {
        println!("{name}");
    }
    Ok(())
}
