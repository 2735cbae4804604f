//! Application-name autocomplete

use std::collections::HashSet;

use crate::models::Shortcut;

/// Distinct application names containing `input`, case-insensitively.
///
/// Names are returned in the order they first appear. Blank input yields no
/// suggestions.
#[must_use]
pub fn application_suggestions(shortcuts: &[Shortcut], input: &str) -> Vec<String> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    shortcuts
        .iter()
        .map(|shortcut| shortcut.application_name.as_str())
        .filter(|name| name.to_lowercase().contains(&needle))
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Dropdown state for the suggestion list under the application field.
///
/// Moving past either end clears the selection rather than wrapping around.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionList {
    candidates: Vec<String>,
    selected: Option<usize>,
}

impl SuggestionList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the candidates and reset the selection
    pub fn update(&mut self, candidates: Vec<String>) {
        self.candidates = candidates;
        self.selected = None;
    }

    pub fn clear(&mut self) {
        self.update(Vec::new());
    }

    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.candidates.is_empty()
    }

    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.candidates.get(index))
            .map(String::as_str)
    }

    pub fn select_next(&mut self) {
        if self.candidates.is_empty() {
            return;
        }
        self.selected = match self.selected {
            None => Some(0),
            Some(index) if index + 1 < self.candidates.len() => Some(index + 1),
            Some(_) => None,
        };
    }

    pub fn select_previous(&mut self) {
        if self.candidates.is_empty() {
            return;
        }
        self.selected = match self.selected {
            None => Some(self.candidates.len() - 1),
            Some(0) => None,
            Some(index) => Some(index - 1),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Xcode", "Build", "⌘ + B"),
            Shortcut::new("Finder", "Rename", "⌘ + ⇧ + R"),
            Shortcut::new("Xcode", "Run", "⌘ + R"),
            Shortcut::new("Firefox", "New tab", "⌘ + T"),
            Shortcut::new("Xcode", "Clean", "⌘ + ⇧ + K"),
        ]
    }

    #[test]
    fn suggestions_are_distinct_and_ordered() {
        let shortcuts = sample();
        assert_eq!(application_suggestions(&shortcuts, "xc"), vec!["Xcode"]);
        assert_eq!(
            application_suggestions(&shortcuts, "x"),
            vec!["Xcode", "Firefox"]
        );
        assert_eq!(
            application_suggestions(&shortcuts, "fi"),
            vec!["Finder", "Firefox"]
        );
        assert_eq!(
            application_suggestions(&shortcuts, "E"),
            vec!["Xcode", "Finder", "Firefox"]
        );
    }

    #[test]
    fn blank_input_has_no_suggestions() {
        assert!(application_suggestions(&sample(), "").is_empty());
        assert!(application_suggestions(&sample(), "  ").is_empty());
        assert!(application_suggestions(&sample(), "safari").is_empty());
    }

    #[test]
    fn navigation_falls_off_both_ends() {
        let mut list = SuggestionList::new();
        list.update(vec!["Finder".to_string(), "Firefox".to_string()]);

        list.select_next();
        assert_eq!(list.selected(), Some("Finder"));
        list.select_next();
        assert_eq!(list.selected(), Some("Firefox"));
        list.select_next();
        assert_eq!(list.selected(), None);

        list.select_previous();
        assert_eq!(list.selected(), Some("Firefox"));
        list.select_previous();
        list.select_previous();
        assert_eq!(list.selected_index(), None);
    }

    #[test]
    fn navigation_on_empty_list_is_noop() {
        let mut list = SuggestionList::new();
        list.select_next();
        list.select_previous();
        assert_eq!(list.selected(), None);
        assert!(!list.is_visible());
    }
}
