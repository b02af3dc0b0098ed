//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `diary_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use diary_core::{NoteFilter, NoteStore};

fn main() {
    println!("diary_core ping={}", diary_core::ping());
    println!("diary_core version={}", diary_core::core_version());

    let mut store = NoteStore::new();
    if let Err(err) = seed(&mut store) {
        eprintln!("seed failed: {err}");
        std::process::exit(1);
    }

    for note in store.list(NoteFilter::All) {
        println!("note title={} favorite={}", note.title, note.is_favorite);
    }
    println!("favorites={}", store.list(NoteFilter::FavoritesOnly).len());
}

fn seed(store: &mut NoteStore) -> diary_core::StoreResult<()> {
    store.add("Day 1", "Today I did many things")?;
    let second = store.add("Day 2", "Today I didn't do much")?;
    let third = store.add("Day 3", "Today I rested")?;
    store.toggle_favorite(second.id)?;
    store.toggle_favorite(third.id)?;
    Ok(())
}
