use std::path::Path;

use chordlist_core::export::{
    render_shortcuts_export, suggested_export_file_name, ExportFormat as CoreExportFormat,
};

use crate::cli::ExportFormat;
use crate::commands::common::open_registry;
use crate::error::CliError;

pub fn run_export(
    format: ExportFormat,
    output_path: Option<&Path>,
    store_path: &Path,
) -> Result<(), CliError> {
    let registry = open_registry(store_path)?;
    let format = match format {
        ExportFormat::Json => CoreExportFormat::Json,
        ExportFormat::Markdown => CoreExportFormat::Markdown,
    };
    let rendered = render_shortcuts_export(registry.shortcuts(), format)?;

    if let Some(path) = output_path {
        let path = if path.is_dir() {
            path.join(suggested_export_file_name(
                format,
                chrono::Utc::now().timestamp_millis(),
            ))
        } else {
            path.to_path_buf()
        };
        std::fs::write(&path, rendered)?;
        println!("{}", path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}
