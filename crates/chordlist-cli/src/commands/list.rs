use std::path::Path;

use crate::commands::common::{open_registry, print_shortcuts};
use crate::error::CliError;

pub fn run_list(as_json: bool, store_path: &Path) -> Result<(), CliError> {
    let registry = open_registry(store_path)?;
    let shortcuts = registry.shortcuts().iter().collect::<Vec<_>>();
    print_shortcuts(&shortcuts, as_json)
}
