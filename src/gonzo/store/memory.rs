use super::addressing::id_to_path;
use super::NoteStore;
use crate::error::{GonzoError, Result};
use crate::model::NoteId;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    notes: BTreeMap<NoteId, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl NoteStore for InMemoryStore {
    fn save(&mut self, id: &NoteId, content: &str) -> Result<()> {
        self.notes.insert(id.clone(), content.to_string());
        Ok(())
    }

    fn load(&self, id: &NoteId) -> Result<String> {
        self.notes
            .get(id)
            .cloned()
            .ok_or_else(|| GonzoError::NoteNotFound(id.clone()))
    }

    fn remove(&mut self, id: &NoteId) -> Result<()> {
        if self.notes.remove(id).is_none() {
            return Err(GonzoError::NoteNotFound(id.clone()));
        }
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<NoteId>> {
        // BTreeMap keys are already ascending
        Ok(self.notes.keys().cloned().collect())
    }

    fn note_path(&self, id: &NoteId) -> PathBuf {
        id_to_path(Path::new("memory://"), id)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds one note per id, content `"note <id>"`.
        pub fn with_notes(mut self, ids: &[&str]) -> Self {
            for id in ids {
                self.store
                    .save(&NoteId::new(*id), &format!("note {}", id))
                    .unwrap();
            }
            self
        }

        pub fn with_note(mut self, id: &str, content: &str) -> Self {
            self.store.save(&NoteId::new(id), content).unwrap();
            self
        }
    }
}
