//! NoteStore — in-memory note collection
//!
//! Holds notes in insertion order together with the id counter. Ids are
//! never reused: deleting a note leaves `next_id` untouched.

use crate::error::NoteError;
use notes_types::{Note, NoteId};
use parking_lot::RwLock;

const FIRST_ID: u64 = 1;

struct Inner {
    notes: Vec<Note>,
    next_id: u64,
}

impl Inner {
    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }
}

/// Process-lifetime note storage guarded by a single lock
pub struct NoteStore {
    inner: RwLock<Inner>,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Trim a title and reject it if nothing is left.
pub fn validate_title(title: &str) -> Result<String, NoteError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(NoteError::title_required());
    }
    Ok(trimmed.to_string())
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                notes: Vec::new(),
                next_id: FIRST_ID,
            }),
        }
    }

    /// All notes in insertion order
    pub fn list(&self) -> Vec<Note> {
        self.inner.read().notes.clone()
    }

    pub fn create(&self, title: &str) -> Result<Note, NoteError> {
        let title = validate_title(title)?;

        let mut inner = self.inner.write();
        let note = Note {
            id: NoteId(inner.next_id),
            title,
        };
        inner.next_id += 1;
        inner.notes.push(note.clone());

        log::info!("[NOTES] Created note {}", note.id);
        Ok(note)
    }

    pub fn get(&self, id: NoteId) -> Result<Note, NoteError> {
        self.inner
            .read()
            .notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(NoteError::NotFound)
    }

    /// Overwrite the title of an existing note. An unknown id wins over an
    /// invalid title.
    pub fn replace(&self, id: NoteId, title: &str) -> Result<Note, NoteError> {
        let mut inner = self.inner.write();
        let idx = inner.position(id).ok_or(NoteError::NotFound)?;
        let title = validate_title(title)?;

        let note = &mut inner.notes[idx];
        note.title = title;

        log::info!("[NOTES] Replaced note {}", id);
        Ok(note.clone())
    }

    pub fn delete(&self, id: NoteId) -> Result<(), NoteError> {
        let mut inner = self.inner.write();
        let idx = inner.position(id).ok_or(NoteError::NotFound)?;
        inner.notes.remove(idx);

        log::info!("[NOTES] Deleted note {}", id);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.read().notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().notes.is_empty()
    }

    /// The id the next successful create will receive
    pub fn next_id(&self) -> NoteId {
        NoteId(self.inner.read().next_id)
    }
}
