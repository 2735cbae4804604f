use std::path::Path;

use chordlist_core::{SearchScope, Shortcut};

use crate::commands::common::{open_registry, print_shortcuts, Registry};
use crate::error::CliError;

pub fn run_search(
    query: &str,
    scope: SearchScope,
    as_json: bool,
    store_path: &Path,
) -> Result<(), CliError> {
    let registry = open_registry(store_path)?;
    print_shortcuts(&matching_shortcuts(&registry, query, scope), as_json)
}

/// The query is matched verbatim; only an empty query lists everything.
pub fn matching_shortcuts<'a>(
    registry: &'a Registry,
    query: &str,
    scope: SearchScope,
) -> Vec<&'a Shortcut> {
    registry.search(query, scope)
}
