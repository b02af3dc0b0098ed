//! In-memory note store.
//!
//! # Responsibility
//! - Own the ordered note collection and all of its mutation entry points.
//! - Validate text fields before any state is touched.
//!
//! # Invariants
//! - Note ids are unique within the store for its whole lifetime.
//! - Order is insertion order and changes only through `move_note`.
//! - A failed operation leaves the store exactly as it was.

use crate::model::note::{validate_fields, Note, NoteId, NoteValidationError};
use log::debug;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for note store operations.
///
/// Every variant is recoverable; the store stays valid and usable after any
/// failed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Title or message failed validation; no mutation occurred.
    Validation(NoteValidationError),
    /// The referenced note id is absent from the store.
    NotFound(NoteId),
    /// A `move_note` index fell outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for {len} notes")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NoteValidationError> for StoreError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Read-time view selector for `NoteStore::list`.
///
/// A filter never mutates the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteFilter {
    /// Every note in current order.
    #[default]
    All,
    /// Only notes with `is_favorite == true`, relative order preserved.
    FavoritesOnly,
}

/// Owner of the ordered diary note collection.
///
/// Plain mutable state with no interior synchronization: all operations are
/// synchronous and expected to run on one logical thread (the presentation
/// layer's main thread in the original app). Callers needing concurrent
/// access must add their own locking around the store.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a note with a fresh id and appends it to the end.
    ///
    /// Returns the stored note. Fails with `StoreError::Validation` when
    /// title or message is empty after trimming.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> StoreResult<Note> {
        let title = title.into();
        let message = message.into();
        validate_fields(&title, &message)?;

        let note = Note::new(title, message);
        debug!("event=note_added id={} position={}", note.id, self.notes.len());
        self.notes.push(note.clone());
        Ok(note)
    }

    /// Replaces title and message of the note with the given id.
    ///
    /// Position and `is_favorite` are preserved. Fails with
    /// `StoreError::NotFound` when the id is absent and
    /// `StoreError::Validation` on empty fields; validation runs first so
    /// neither failure mutates anything.
    pub fn update(
        &mut self,
        id: NoteId,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> StoreResult<Note> {
        let title = title.into();
        let message = message.into();
        validate_fields(&title, &message)?;

        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(StoreError::NotFound(id))?;
        note.title = title;
        note.message = message;
        debug!("event=note_updated id={id}");
        Ok(note.clone())
    }

    /// Removes the note with the given id.
    ///
    /// Returns `true` when a note was removed and `false` when the id was
    /// absent. Removing an absent id is an idempotent no-op, not an error.
    pub fn remove(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let removed = self.notes.len() < before;
        debug!("event=note_removed id={id} removed={removed}");
        removed
    }

    /// Relocates the note at `from` to `to`, shifting intervening notes.
    ///
    /// Fails with `StoreError::IndexOutOfRange` when either index is outside
    /// `[0, len)`; the order is untouched on failure.
    pub fn move_note(&mut self, from: usize, to: usize) -> StoreResult<()> {
        let len = self.notes.len();
        for index in [from, to] {
            if index >= len {
                return Err(StoreError::IndexOutOfRange { index, len });
            }
        }

        let note = self.notes.remove(from);
        debug!("event=note_moved id={} from={from} to={to}", note.id);
        self.notes.insert(to, note);
        Ok(())
    }

    /// Flips `is_favorite` for the note with the given id.
    ///
    /// Returns the new flag value. Fails with `StoreError::NotFound` when
    /// the id is absent.
    pub fn toggle_favorite(&mut self, id: NoteId) -> StoreResult<bool> {
        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(StoreError::NotFound(id))?;
        note.is_favorite = !note.is_favorite;
        debug!("event=note_favorite_toggled id={id} value={}", note.is_favorite);
        Ok(note.is_favorite)
    }

    /// Returns a snapshot of the collection in current order.
    ///
    /// The result owns its notes; later store mutations never alter a
    /// previously returned list. `FavoritesOnly` keeps the relative order
    /// of the full list.
    pub fn list(&self, filter: NoteFilter) -> Vec<Note> {
        match filter {
            NoteFilter::All => self.notes.clone(),
            NoteFilter::FavoritesOnly => self
                .notes
                .iter()
                .filter(|note| note.is_favorite)
                .cloned()
                .collect(),
        }
    }

    /// Upserts a note by its id.
    ///
    /// When a note with the same id exists this behaves as `update` (text
    /// replaced in place, position and `is_favorite` preserved); otherwise
    /// the supplied note is appended carrying its exact id. This mirrors the
    /// save-from-edit-screen flow where an edited note is matched back by
    /// identity and a new note is appended when no match is found.
    pub fn save(&mut self, note: Note) -> StoreResult<Note> {
        note.validate()?;

        if self.notes.iter().any(|existing| existing.id == note.id) {
            debug!("event=note_saved id={} mode=update", note.id);
            return self.update(note.id, note.title, note.message);
        }

        debug!("event=note_saved id={} mode=insert", note.id);
        self.notes.push(note.clone());
        Ok(note)
    }

    /// Gets one note by id without cloning.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Returns the number of notes, favorites included.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns whether the store holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
