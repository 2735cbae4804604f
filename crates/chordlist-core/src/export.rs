//! Shortcut export helpers.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::models::Shortcut;

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

/// Render shortcuts as pretty-printed JSON, in the store file's shape.
pub fn render_json_export(shortcuts: &[Shortcut]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(shortcuts)
}

/// Render a Markdown cheat sheet with one table per application.
///
/// Applications appear in the order they were first recorded.
#[must_use]
pub fn render_markdown_export(shortcuts: &[Shortcut]) -> String {
    let mut applications: Vec<(&str, Vec<&Shortcut>)> = Vec::new();
    for shortcut in shortcuts {
        let name = shortcut.application_name.as_str();
        match applications.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, group)) => group.push(shortcut),
            None => applications.push((name, vec![shortcut])),
        }
    }

    let mut output = String::new();
    for (index, (application, group)) in applications.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }

        let _ = writeln!(output, "## {}", escape_cell(application));
        let _ = writeln!(output);
        let _ = writeln!(output, "| Feature | Shortcut |");
        let _ = writeln!(output, "| --- | --- |");
        for shortcut in group {
            let _ = writeln!(
                output,
                "| {} | `{}` |",
                escape_cell(&shortcut.feature_description),
                escape_cell(&shortcut.shortcut_key)
            );
        }
    }

    output
}

/// Render shortcuts based on selected export format.
pub fn render_shortcuts_export(
    shortcuts: &[Shortcut],
    format: ExportFormat,
) -> serde_json::Result<String> {
    match format {
        ExportFormat::Json => render_json_export(shortcuts),
        ExportFormat::Markdown => Ok(render_markdown_export(shortcuts)),
    }
}

/// Build a deterministic default file name for export flows.
#[must_use]
pub fn suggested_export_file_name(format: ExportFormat, timestamp_ms: i64) -> String {
    format!("shortcuts-export-{timestamp_ms}.{}", format.extension())
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn markdown_groups_by_application_in_first_seen_order() {
        let shortcuts = vec![
            Shortcut::new("Xcode", "Build", "⌘ + B"),
            Shortcut::new("Finder", "Rename", "⌘ + ⇧ + R"),
            Shortcut::new("Xcode", "Run", "⌘ + R"),
        ];

        let rendered = render_markdown_export(&shortcuts);
        assert_eq!(
            rendered,
            "## Xcode\n\n| Feature | Shortcut |\n| --- | --- |\n| Build | `⌘ + B` |\n| Run | `⌘ + R` |\n\n## Finder\n\n| Feature | Shortcut |\n| --- | --- |\n| Rename | `⌘ + ⇧ + R` |\n"
        );
    }

    #[test]
    fn markdown_escapes_pipes() {
        let rendered = render_markdown_export(&[Shortcut::new("Vim", "Filter | sort", "⌃ + |")]);
        assert!(rendered.contains("| Filter \\| sort | `⌃ + \\|` |"));
    }

    #[test]
    fn json_export_matches_store_shape() {
        let shortcut = Shortcut::new("Finder", "Rename", "⌘ + R");
        let rendered = render_json_export(std::slice::from_ref(&shortcut)).unwrap();
        let parsed: Vec<Shortcut> = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed[0].id, shortcut.id);
        assert!(rendered.contains("\"shortcutKey\""));
    }

    #[test]
    fn suggested_export_file_name_uses_format_extension() {
        assert_eq!(
            suggested_export_file_name(ExportFormat::Json, 123),
            "shortcuts-export-123.json"
        );
        assert_eq!(
            suggested_export_file_name(ExportFormat::Markdown, 456),
            "shortcuts-export-456.md"
        );
    }

    #[test]
    fn empty_export() {
        assert_eq!(render_markdown_export(&[]), "");
        assert_eq!(render_json_export(&[]).unwrap(), "[]");
    }
}
