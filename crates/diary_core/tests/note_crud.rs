use diary_core::{NoteFilter, NoteStore, NoteValidationError, StoreError};
use uuid::Uuid;

#[test]
fn add_appends_new_note_last_and_unfavorited() {
    let mut store = NoteStore::new();
    store.add("Day 1", "Today I did many things").unwrap();
    let added = store.add("Day 2", "Today I didn't do much").unwrap();

    let listed = store.list(NoteFilter::All);
    assert_eq!(listed.len(), 2);
    assert_eq!(listed.last().unwrap().id, added.id);
    assert!(!listed.last().unwrap().is_favorite);
}

#[test]
fn add_with_empty_field_fails_and_leaves_list_unchanged() {
    let mut store = NoteStore::new();
    store.add("Day 1", "Today I did many things").unwrap();

    let empty_title = store.add("", "x").unwrap_err();
    assert_eq!(
        empty_title,
        StoreError::Validation(NoteValidationError::EmptyTitle)
    );

    let empty_message = store.add("x", "").unwrap_err();
    assert_eq!(
        empty_message,
        StoreError::Validation(NoteValidationError::EmptyMessage)
    );

    assert_eq!(store.list(NoteFilter::All).len(), 1);
}

#[test]
fn update_replaces_text_in_place_preserving_position_and_favorite() {
    let mut store = NoteStore::new();
    store.add("Day 1", "first").unwrap();
    let target = store.add("Day 2", "second").unwrap();
    store.add("Day 3", "third").unwrap();
    store.toggle_favorite(target.id).unwrap();

    let updated = store.update(target.id, "Day 2 revised", "rewritten").unwrap();
    assert_eq!(updated.title, "Day 2 revised");
    assert_eq!(updated.message, "rewritten");

    let listed = store.list(NoteFilter::All);
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[1].id, target.id);
    assert_eq!(listed[1].title, "Day 2 revised");
    assert!(listed[1].is_favorite);
}

#[test]
fn update_on_unknown_id_fails_without_mutation() {
    let mut store = NoteStore::new();
    let existing = store.add("Day 1", "first").unwrap();

    let missing = Uuid::new_v4();
    let err = store.update(missing, "t", "m").unwrap_err();
    assert_eq!(err, StoreError::NotFound(missing));

    let listed = store.list(NoteFilter::All);
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, existing.id);
    assert_eq!(listed[0].title, "Day 1");
}

#[test]
fn update_validates_before_looking_up_the_note() {
    let mut store = NoteStore::new();
    let note = store.add("Day 1", "first").unwrap();

    let err = store.update(note.id, "", "m").unwrap_err();
    assert_eq!(
        err,
        StoreError::Validation(NoteValidationError::EmptyTitle)
    );
    assert_eq!(store.get(note.id).unwrap().title, "Day 1");
}

#[test]
fn remove_drops_the_note_and_is_idempotent() {
    let mut store = NoteStore::new();
    let kept = store.add("Day 1", "first").unwrap();
    let removed = store.add("Day 2", "second").unwrap();

    assert!(store.remove(removed.id));
    assert!(store.list(NoteFilter::All).iter().all(|n| n.id != removed.id));

    assert!(!store.remove(removed.id));
    let listed = store.list(NoteFilter::All);
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, kept.id);
}

#[test]
fn store_stays_usable_after_failed_calls() {
    let mut store = NoteStore::new();
    let missing = Uuid::new_v4();

    assert!(store.add("", "").is_err());
    assert!(store.update(missing, "t", "m").is_err());
    assert!(store.toggle_favorite(missing).is_err());
    assert!(store.move_note(0, 0).is_err());

    let note = store.add("Day 1", "still works").unwrap();
    assert_eq!(store.get(note.id).unwrap().message, "still works");
    assert_eq!(store.len(), 1);
}
