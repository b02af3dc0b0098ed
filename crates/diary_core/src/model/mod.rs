//! Domain model for diary notes.
//!
//! # Responsibility
//! - Define canonical data structures used by the note store.
//!
//! # Invariants
//! - Every domain object is identified by a stable `NoteId`.

pub mod note;
