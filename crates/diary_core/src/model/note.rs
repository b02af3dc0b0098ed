//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical diary note record owned by the store.
//! - Provide constructors for generated and caller-supplied identity.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - Equality and hashing are defined solely by `id`; editing `title` or
//!   `message` never changes a note's identity.
//! - `title` and `message` are never stored empty (see `validate`).

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Stable identifier for a diary note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Validation failure for note text fields.
///
/// Whitespace-only values count as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// `title` is empty or whitespace-only.
    EmptyTitle,
    /// `message` is empty or whitespace-only.
    EmptyMessage,
}

impl std::fmt::Display for NoteValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title must not be empty"),
            Self::EmptyMessage => write!(f, "note message must not be empty"),
        }
    }
}

impl std::error::Error for NoteValidationError {}

/// A single diary entry.
///
/// Two notes with identical text but different ids are distinct; a note
/// whose text was edited still compares equal to its prior self.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Stable global ID used for lookup, reorder targeting and upserts.
    pub id: NoteId,
    /// Short headline shown in list rows.
    pub title: String,
    /// Free-form body text.
    pub message: String,
    /// Marks the note for the favorites-only view. Defaults to `false`.
    pub is_favorite: bool,
}

impl Note {
    /// Creates a new note with a generated stable ID.
    ///
    /// `is_favorite` starts as `false`. The constructor does not validate
    /// text fields; the store does before admitting the note.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, message)
    }

    /// Creates a note with a caller-provided stable ID.
    ///
    /// Used by the upsert path where identity already exists externally.
    pub fn with_id(
        id: NoteId,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            message: message.into(),
            is_favorite: false,
        }
    }

    /// Checks that `title` and `message` are non-empty after trimming.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        validate_fields(&self.title, &self.message)
    }
}

/// Validates raw text fields before a note is constructed or edited.
pub(crate) fn validate_fields(title: &str, message: &str) -> Result<(), NoteValidationError> {
    if title.trim().is_empty() {
        return Err(NoteValidationError::EmptyTitle);
    }
    if message.trim().is_empty() {
        return Err(NoteValidationError::EmptyMessage);
    }
    Ok(())
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
