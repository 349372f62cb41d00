//! NoteStore: in-memory note storage
//!
//! Notes are kept in insertion order in a `Vec`. Every lookup is a linear
//! scan, which is fine for the sizes this service is meant for.

use crate::error::StoreError;
use notes_types::Note;
use parking_lot::RwLock;

struct Inner {
    notes: Vec<Note>,
    next_id: i64,
}

/// Ordered note collection plus the id counter, behind a single lock.
///
/// Ids start at 1 and are never reused, even after deletion.
pub struct NoteStore {
    inner: RwLock<Inner>,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                notes: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of all notes, or of those whose title contains `filter`
    /// (case-insensitive). An empty filter matches everything.
    pub fn list(&self, filter: Option<&str>) -> Vec<Note> {
        let inner = self.inner.read();

        match filter.filter(|f| !f.is_empty()) {
            None => inner.notes.clone(),
            Some(filter) => {
                let needle = filter.to_lowercase();
                inner
                    .notes
                    .iter()
                    .filter(|n| n.title.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            }
        }
    }

    pub fn create(&self, title: String, content: String) -> Note {
        let mut inner = self.inner.write();

        let note = Note {
            id: inner.next_id,
            title,
            content,
        };
        inner.next_id += 1;
        inner.notes.push(note.clone());

        note
    }

    pub fn find_by_id(&self, id: i64) -> Result<Note, StoreError> {
        self.inner
            .read()
            .notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Overwrite title and content of an existing note. The id is untouched.
    pub fn update(&self, id: i64, title: String, content: String) -> Result<Note, StoreError> {
        let mut inner = self.inner.write();

        let note = inner
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(StoreError::NotFound(id))?;
        note.title = title;
        note.content = content;

        Ok(note.clone())
    }

    /// Remove a note, keeping the relative order of the rest. Returns the
    /// removed note.
    pub fn delete(&self, id: i64) -> Result<Note, StoreError> {
        let mut inner = self.inner.write();

        let index = inner
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(StoreError::NotFound(id))?;

        Ok(inner.notes.remove(index))
    }

    pub fn len(&self) -> usize {
        self.inner.read().notes.len()
    }
}
