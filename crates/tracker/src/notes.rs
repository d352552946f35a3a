//! Notes sidecar
//!
//! Persists exactly one free-text value - the game master's session notes
//! - at a well-known key, independent of the roster. No versioning, no
//! schema; the value is an opaque blob the view layer reads back on
//! startup.

use std::sync::Arc;

use tracing::debug;

use crate::ports::outbound::StorageProvider;

/// The well-known key the notes value lives under.
pub const NOTES_STORAGE_KEY: &str = "battle_tracker.notes";

/// Save/load service for the single notes field.
pub struct NotesService {
    storage: Arc<dyn StorageProvider>,
}

impl NotesService {
    pub fn new(storage: Arc<dyn StorageProvider>) -> Self {
        Self { storage }
    }

    /// The saved notes, or `None` if nothing has been saved yet.
    pub fn load(&self) -> Option<String> {
        self.storage.load(NOTES_STORAGE_KEY)
    }

    /// Persist the notes verbatim (an empty string is a valid value -
    /// the user cleared the textarea, not the record).
    pub fn save(&self, text: &str) {
        debug!(len = text.len(), "saving notes");
        self.storage.save(NOTES_STORAGE_KEY, text);
    }

    /// Drop the saved notes entirely.
    pub fn clear(&self) {
        debug!("clearing notes");
        self.storage.remove(NOTES_STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryStorageProvider;
    use crate::ports::outbound::MockStorageProvider;
    use mockall::predicate::eq;

    #[test]
    fn load_is_none_before_first_save() {
        let notes = NotesService::new(Arc::new(InMemoryStorageProvider::new()));
        assert_eq!(notes.load(), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let notes = NotesService::new(Arc::new(InMemoryStorageProvider::new()));
        notes.save("the zombies came from the crypt");
        assert_eq!(
            notes.load().as_deref(),
            Some("the zombies came from the crypt")
        );
    }

    #[test]
    fn empty_string_is_saved_not_removed() {
        let notes = NotesService::new(Arc::new(InMemoryStorageProvider::new()));
        notes.save("something");
        notes.save("");
        assert_eq!(notes.load().as_deref(), Some(""));
    }

    #[test]
    fn clear_removes_the_value() {
        let notes = NotesService::new(Arc::new(InMemoryStorageProvider::new()));
        notes.save("something");
        notes.clear();
        assert_eq!(notes.load(), None);
    }

    #[test]
    fn uses_the_well_known_key() {
        let mut storage = MockStorageProvider::new();
        storage
            .expect_save()
            .with(eq(NOTES_STORAGE_KEY), eq("hello"))
            .times(1)
            .return_const(());

        NotesService::new(Arc::new(storage)).save("hello");
    }
}
