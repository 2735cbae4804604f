//! Shortcut registry
//!
//! The in-memory list is the source of truth for the running session. Every
//! mutation saves the whole list through the backend; a failed save is
//! reported to the caller but never rolls the mutation back.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::{application_suggestions, SearchScope, Shortcut, ShortcutId};
use crate::storage::{JsonFileStore, ShortcutStore};

/// Change notification delivered to registry listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    Added(ShortcutId),
    Removed(Vec<ShortcutId>),
    Relocated(PathBuf),
}

type Listener = Box<dyn FnMut(&RegistryEvent)>;

/// Ordered, persisted collection of shortcuts.
pub struct ShortcutRegistry<S: ShortcutStore = JsonFileStore> {
    store: S,
    shortcuts: Vec<Shortcut>,
    load_error: Option<String>,
    unsaved_changes: bool,
    listeners: Vec<Listener>,
}

impl<S: ShortcutStore> ShortcutRegistry<S> {
    /// Load the registry from `store`.
    ///
    /// A store that cannot be read is logged and treated as empty.
    pub fn open(store: S) -> Self {
        let (shortcuts, load_error) = match store.load() {
            Ok(shortcuts) => (shortcuts, None),
            Err(error) => {
                tracing::warn!("Starting with an empty shortcut list: {error}");
                (Vec::new(), Some(error.to_string()))
            }
        };

        Self {
            store,
            shortcuts,
            load_error,
            unsaved_changes: false,
            listeners: Vec::new(),
        }
    }

    /// All shortcuts in insertion order
    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }

    pub fn get(&self, id: &ShortcutId) -> Option<&Shortcut> {
        self.shortcuts.iter().find(|shortcut| &shortcut.id == id)
    }

    /// The backend, mostly for inspection in tests
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Diagnostic from the initial load, if it failed
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Whether the last save attempt failed
    pub const fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    /// Register a callback invoked after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&RegistryEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Append a shortcut and save.
    pub fn add(&mut self, shortcut: Shortcut) -> Result<()> {
        let id = shortcut.id.clone();
        self.shortcuts.push(shortcut);
        self.commit(RegistryEvent::Added(id))
    }

    /// Remove the shortcut with `id`. Returns whether anything was removed;
    /// an unknown id is a no-op and does not touch the store.
    pub fn delete(&mut self, id: &ShortcutId) -> Result<bool> {
        Ok(self.delete_many(std::slice::from_ref(id))? > 0)
    }

    /// Remove every shortcut whose id is listed. Returns the number removed.
    pub fn delete_many(&mut self, ids: &[ShortcutId]) -> Result<usize> {
        let targets: HashSet<&ShortcutId> = ids.iter().collect();
        let mut removed = Vec::new();
        self.shortcuts.retain(|shortcut| {
            let keep = !targets.contains(&shortcut.id);
            if !keep {
                removed.push(shortcut.id.clone());
            }
            keep
        });

        self.commit_removal(removed)
    }

    /// Remove shortcuts by position in the full list. Out-of-range indices are
    /// ignored. Returns the number removed.
    pub fn delete_at(&mut self, indices: &[usize]) -> Result<usize> {
        let mut positions: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&index| index < self.shortcuts.len())
            .collect();
        positions.sort_unstable();
        positions.dedup();

        let removed = positions
            .into_iter()
            .rev()
            .map(|index| self.shortcuts.remove(index).id)
            .collect::<Vec<_>>();

        self.commit_removal(removed.into_iter().rev().collect())
    }

    /// Case-insensitive match on application name; empty returns everything
    pub fn filter_by_application(&self, name: &str) -> Vec<&Shortcut> {
        self.filter_by(name, |shortcut, query| {
            shortcut.application_name.to_lowercase().contains(query)
        })
    }

    /// Case-insensitive match on feature description; empty returns everything
    pub fn filter_by_feature(&self, description: &str) -> Vec<&Shortcut> {
        self.filter_by(description, |shortcut, query| {
            shortcut.feature_description.to_lowercase().contains(query)
        })
    }

    /// Case-insensitive match on any field; empty returns everything
    pub fn search_all(&self, query: &str) -> Vec<&Shortcut> {
        self.filter_by(query, |shortcut, query| shortcut.matches(query))
    }

    pub fn search(&self, query: &str, scope: SearchScope) -> Vec<&Shortcut> {
        match scope {
            SearchScope::All => self.search_all(query),
            SearchScope::Application => self.filter_by_application(query),
            SearchScope::Feature => self.filter_by_feature(query),
        }
    }

    /// Distinct known application names containing `input`
    pub fn application_suggestions(&self, input: &str) -> Vec<String> {
        application_suggestions(&self.shortcuts, input)
    }

    /// Resolve a full id or a unique id prefix.
    pub fn find_by_id_prefix(&self, prefix: &str) -> Result<&Shortcut> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(Error::InvalidInput("shortcut id cannot be empty".into()));
        }

        if let Some(exact) = self
            .shortcuts
            .iter()
            .find(|shortcut| shortcut.id.as_str() == prefix)
        {
            return Ok(exact);
        }

        let matching = self
            .shortcuts
            .iter()
            .filter(|shortcut| shortcut.id.starts_with(prefix))
            .collect::<Vec<_>>();

        match matching.as_slice() {
            [] => Err(Error::NotFound(prefix.to_string())),
            [single] => Ok(*single),
            many => {
                let options = many
                    .iter()
                    .take(3)
                    .map(|shortcut| shortcut.id.as_str().chars().take(13).collect::<String>())
                    .collect::<Vec<_>>()
                    .join(", ");
                Err(Error::AmbiguousId(format!(
                    "ID prefix '{prefix}' is ambiguous; matches: {options}"
                )))
            }
        }
    }

    /// Path the backend currently reads and writes
    pub fn current_storage_path(&self) -> &Path {
        self.store.path()
    }

    /// Point the backend at `path` and save the current list there.
    ///
    /// This is a save-as: nothing is loaded from `path`. The new location
    /// stays active even when the save fails.
    pub fn relocate(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        tracing::info!("Relocating shortcut store to {}", path.display());
        self.store.set_path(path.clone());
        self.commit(RegistryEvent::Relocated(path))
    }

    /// Ask `pick_destination` for a new location, then [`Self::relocate`].
    ///
    /// Returning `None` from the picker cancels and leaves all state as it
    /// was. Returns the chosen path.
    pub fn relocate_with<F>(&mut self, pick_destination: F) -> Result<Option<PathBuf>>
    where
        F: FnOnce(&Path) -> Option<PathBuf>,
    {
        let Some(path) = pick_destination(self.store.path()) else {
            tracing::debug!("Relocation cancelled");
            return Ok(None);
        };

        self.relocate(path.clone())?;
        Ok(Some(path))
    }

    /// Save the current list again, e.g. to retry after a failure or before
    /// shutting down.
    pub fn flush(&mut self) -> Result<()> {
        self.persist()
    }

    fn filter_by<F>(&self, query: &str, predicate: F) -> Vec<&Shortcut>
    where
        F: Fn(&Shortcut, &str) -> bool,
    {
        if query.is_empty() {
            return self.shortcuts.iter().collect();
        }

        let query = query.to_lowercase();
        self.shortcuts
            .iter()
            .filter(|shortcut| predicate(shortcut, &query))
            .collect()
    }

    fn commit_removal(&mut self, removed: Vec<ShortcutId>) -> Result<usize> {
        if removed.is_empty() {
            return Ok(0);
        }

        let count = removed.len();
        self.commit(RegistryEvent::Removed(removed))?;
        Ok(count)
    }

    fn commit(&mut self, event: RegistryEvent) -> Result<()> {
        let saved = self.persist();
        for listener in &mut self.listeners {
            listener(&event);
        }
        saved
    }

    fn persist(&mut self) -> Result<()> {
        match self.store.save(&self.shortcuts) {
            Ok(()) => {
                self.unsaved_changes = false;
                Ok(())
            }
            Err(error) => {
                tracing::error!("Shortcut changes kept in memory only: {error}");
                self.unsaved_changes = true;
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;

    fn registry_with(shortcuts: Vec<Shortcut>) -> ShortcutRegistry<MemoryStore> {
        ShortcutRegistry::open(MemoryStore::new("/store.json").with_shortcuts(shortcuts))
    }

    fn sample() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Finder", "Rename", "⌘ + ⇧ + R"),
            Shortcut::new("Xcode", "Build", "⌘ + B"),
            Shortcut::new("Safari", "Reopen tab", "⌘ + ⇧ + T"),
        ]
    }

    /// Full field contents; `Shortcut` equality only looks at ids.
    fn contents(shortcuts: &[Shortcut]) -> serde_json::Value {
        serde_json::to_value(shortcuts).unwrap()
    }

    fn features(shortcuts: &[&Shortcut]) -> Vec<String> {
        shortcuts
            .iter()
            .map(|shortcut| shortcut.feature_description.clone())
            .collect()
    }

    #[test]
    fn finder_rename_scenario() {
        let mut registry = registry_with(Vec::new());
        registry
            .add(Shortcut::new("Finder", "Rename", "⌘ + ⇧ + R"))
            .unwrap();

        let found = registry.search_all("renam");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].application_name, "Finder");
        assert!(registry.filter_by_application("xcode").is_empty());
    }

    #[test]
    fn add_appends_and_saves() {
        let mut registry = registry_with(sample());
        let added = Shortcut::new("Mail", "Send", "⌘ + ⇧ + D");
        registry.add(added.clone()).unwrap();

        assert_eq!(registry.shortcuts().last(), Some(&added));
        assert_eq!(registry.store().save_count(), 1);
        assert_eq!(
            registry
                .store()
                .stored_at(Path::new("/store.json"))
                .unwrap()
                .len(),
            4
        );
    }

    #[test]
    fn empty_queries_return_everything_in_order() {
        let registry = registry_with(sample());
        let all = vec!["Rename", "Build", "Reopen tab"];

        assert_eq!(features(&registry.filter_by_application("")), all);
        assert_eq!(features(&registry.filter_by_feature("")), all);
        assert_eq!(features(&registry.search_all("")), all);
    }

    #[test]
    fn filters_are_case_insensitive_and_field_specific() {
        let registry = registry_with(sample());

        assert_eq!(
            features(&registry.filter_by_application("XCODE")),
            vec!["Build"]
        );
        assert_eq!(
            features(&registry.filter_by_feature("tab")),
            vec!["Reopen tab"]
        );
        assert!(registry.filter_by_feature("safari").is_empty());
        assert_eq!(
            features(&registry.search_all("⇧")),
            vec!["Rename", "Reopen tab"]
        );
        assert_eq!(
            features(&registry.search("re", SearchScope::Feature)),
            vec!["Rename", "Reopen tab"]
        );
        assert_eq!(
            features(&registry.search("re", SearchScope::Application)),
            Vec::<String>::new()
        );
    }

    #[test]
    fn delete_removes_by_id() {
        let shortcuts = sample();
        let target = shortcuts[1].id.clone();
        let mut registry = registry_with(shortcuts);

        assert!(registry.delete(&target).unwrap());
        assert_eq!(features(&registry.search_all("")), vec!["Rename", "Reopen tab"]);
        assert_eq!(registry.store().save_count(), 1);
    }

    #[test]
    fn deleting_unknown_id_does_not_save() {
        let mut registry = registry_with(sample());
        assert!(!registry.delete(&ShortcutId::new()).unwrap());
        assert_eq!(registry.delete_at(&[7, 99]).unwrap(), 0);
        assert_eq!(registry.delete_many(&[]).unwrap(), 0);
        assert_eq!(registry.store().save_count(), 0);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn deleting_unknown_id_leaves_file_bytes_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shortcuts.json");
        let mut registry = ShortcutRegistry::open(JsonFileStore::new(&path));
        registry.add(Shortcut::new("Finder", "Rename", "⌘ + R")).unwrap();
        let before = fs::read(&path).unwrap();

        assert!(!registry.delete(&ShortcutId::new()).unwrap());
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn delete_at_ignores_duplicates_and_out_of_range() {
        let mut registry = registry_with(sample());
        assert_eq!(registry.delete_at(&[2, 0, 2, 10]).unwrap(), 2);
        assert_eq!(features(&registry.search_all("")), vec!["Build"]);
    }

    #[test]
    fn delete_many_reports_removed_ids_in_order() {
        let shortcuts = sample();
        let ids = vec![shortcuts[2].id.clone(), shortcuts[0].id.clone()];
        let expected = vec![shortcuts[0].id.clone(), shortcuts[2].id.clone()];
        let mut registry = registry_with(shortcuts);

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        registry.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        assert_eq!(registry.delete_many(&ids).unwrap(), 2);
        assert_eq!(*events.borrow(), vec![RegistryEvent::Removed(expected)]);
    }

    #[test]
    fn failed_save_keeps_entry_and_flags_unsaved_changes() {
        let mut registry = registry_with(Vec::new());
        registry.store().set_fail_saves(true);

        let error = registry
            .add(Shortcut::new("Finder", "Rename", "⌘ + R"))
            .unwrap_err();
        assert!(matches!(error, Error::Save { .. }));
        assert_eq!(registry.len(), 1);
        assert!(registry.has_unsaved_changes());

        registry.store().set_fail_saves(false);
        registry.flush().unwrap();
        assert!(!registry.has_unsaved_changes());
        assert_eq!(
            registry
                .store()
                .stored_at(Path::new("/store.json"))
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn listeners_hear_mutations_even_when_save_fails() {
        let mut registry = registry_with(Vec::new());
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        registry.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let shortcut = Shortcut::new("Finder", "Rename", "⌘ + R");
        let id = shortcut.id.clone();
        registry.store().set_fail_saves(true);
        let _ = registry.add(shortcut);

        assert_eq!(*events.borrow(), vec![RegistryEvent::Added(id)]);
    }

    #[test]
    fn load_failure_starts_empty_with_diagnostic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shortcuts.json");
        fs::write(&path, "not json at all").unwrap();

        let registry = ShortcutRegistry::open(JsonFileStore::new(&path));
        assert!(registry.is_empty());
        assert!(registry.load_error().is_some());
    }

    #[test]
    fn relocate_saves_current_list_to_new_path() {
        let dir = tempfile::tempdir().unwrap();
        let old_path = dir.path().join("old.json");
        let new_path = dir.path().join("moved").join("shortcuts.json");

        let mut registry = ShortcutRegistry::open(JsonFileStore::new(&old_path));
        for shortcut in sample() {
            registry.add(shortcut).unwrap();
        }
        registry.relocate(&new_path).unwrap();

        assert_eq!(registry.current_storage_path(), new_path.as_path());
        let reloaded = JsonFileStore::new(&new_path).load().unwrap();
        assert_eq!(contents(&reloaded), contents(registry.shortcuts()));
    }

    #[test]
    fn content_comparison_sees_field_changes() {
        let registry = registry_with(sample());
        let mut altered = registry.shortcuts().to_vec();
        altered[0].application_name.clear();
        altered[1].shortcut_key = "⌘ + Z".to_string();

        assert_eq!(altered, registry.shortcuts());
        assert_ne!(contents(&altered), contents(registry.shortcuts()));
    }

    #[test]
    fn relocate_does_not_load_from_destination() {
        let mut registry = registry_with(sample());
        let before = registry.shortcuts().to_vec();

        registry.relocate("/elsewhere.json").unwrap();
        assert_eq!(contents(registry.shortcuts()), contents(&before));
        let stored = registry
            .store()
            .stored_at(Path::new("/elsewhere.json"))
            .unwrap();
        assert_eq!(contents(&stored), contents(&before));
    }

    #[test]
    fn relocating_an_empty_registry_writes_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("empty.json");
        let mut registry = ShortcutRegistry::open(JsonFileStore::new(dir.path().join("a.json")));

        registry.relocate(&target).unwrap();
        assert!(target.exists());
        let reloaded = JsonFileStore::new(&target).load().unwrap();
        assert_eq!(contents(&reloaded), contents(registry.shortcuts()));
        assert_eq!(contents(&reloaded), serde_json::json!([]));
    }

    #[test]
    fn cancelled_relocation_changes_nothing() {
        let mut registry = registry_with(sample());
        let chosen = registry.relocate_with(|_| None).unwrap();

        assert_eq!(chosen, None);
        assert_eq!(registry.current_storage_path(), Path::new("/store.json"));
        assert_eq!(registry.store().save_count(), 0);
    }

    #[test]
    fn picker_sees_current_path() {
        let mut registry = registry_with(sample());
        let chosen = registry
            .relocate_with(|current| Some(current.with_file_name("picked.json")))
            .unwrap();

        assert_eq!(chosen, Some(PathBuf::from("/picked.json")));
        assert_eq!(registry.current_storage_path(), Path::new("/picked.json"));
    }

    #[test]
    fn suggestions_come_from_existing_entries() {
        let mut shortcuts = sample();
        shortcuts.push(Shortcut::new("Xcode", "Run", "⌘ + R"));
        let registry = registry_with(shortcuts);

        assert_eq!(registry.application_suggestions("x"), vec!["Xcode"]);
    }

    #[test]
    fn id_prefix_resolution() {
        let shortcuts = vec![
            Shortcut {
                id: "aaaa-1111".parse().unwrap(),
                ..Shortcut::new("Finder", "Rename", "⌘ + R")
            },
            Shortcut {
                id: "aaaa-2222".parse().unwrap(),
                ..Shortcut::new("Xcode", "Build", "⌘ + B")
            },
        ];
        let registry = registry_with(shortcuts);

        assert_eq!(
            registry.find_by_id_prefix("aaaa-2").unwrap().application_name,
            "Xcode"
        );
        assert_eq!(
            registry.find_by_id_prefix("aaaa-1111").unwrap().application_name,
            "Finder"
        );
        assert!(matches!(
            registry.find_by_id_prefix("aaaa"),
            Err(Error::AmbiguousId(_))
        ));
        assert!(matches!(
            registry.find_by_id_prefix("bbbb"),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            registry.find_by_id_prefix("  "),
            Err(Error::InvalidInput(_))
        ));
    }
}
