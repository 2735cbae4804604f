//! Shared utility functions used across multiple modules.

/// Trim text and reject it when nothing is left.
pub fn normalize_text(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Normalize optional text by trimming whitespace and removing empties.
///
/// Returns `None` when the input is `None` or the trimmed value is empty.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    normalize_text(value.as_deref()?).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_text_rejects_blank() {
        assert_eq!(normalize_text(" \t\n"), None);
        assert_eq!(normalize_text(" Finder "), Some("Finder"));
    }

    #[test]
    fn normalize_text_option_rejects_empty() {
        assert_eq!(normalize_text_option(None), None);
        assert_eq!(normalize_text_option(Some("   ".to_string())), None);
    }

    #[test]
    fn normalize_text_option_trims_value() {
        assert_eq!(
            normalize_text_option(Some(" /tmp/shortcuts.json ".to_string())),
            Some("/tmp/shortcuts.json".to_string())
        );
    }
}
