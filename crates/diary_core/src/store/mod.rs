//! Note collection ownership and mutation entry points.
//!
//! # Responsibility
//! - House the in-memory store consumed by presentation layers.
//!
//! # Invariants
//! - All mutation goes through `NoteStore`; no other module edits notes.

pub mod note_store;
