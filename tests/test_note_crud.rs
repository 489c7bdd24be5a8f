//! Integration tests for Note and DailyEntry CRUD operations.
//!
//! Tests cover:
//! - Clock-derived defaults (creation timestamp, entry date)
//! - Partial updates leave other fields alone
//! - Deletes, including unknown ids

mod common;

use common::*;

#[test]
fn test_add_note_defaults() -> anyhow::Result<()> {
    let mut store = create_test_store();

    let id = store.add_note(NewNote::default());

    let note = store.note_by_id(&id).expect("note should exist");
    assert_eq!(note.id, "note-1000");
    assert_eq!(note.title, "New Note");
    assert_eq!(note.category, "General");
    assert_eq!(note.content, "");
    assert_eq!(note.created_at, TEST_TIMESTAMP);

    Ok(())
}

#[test]
fn test_add_note_keeps_given_timestamp() -> anyhow::Result<()> {
    let mut store = create_test_store();

    let id = store.add_note(NewNote {
        title: Some("Imported".to_string()),
        created_at: Some("2023-06-01T08:00:00Z".to_string()),
        ..Default::default()
    });

    let note = store.note_by_id(&id).expect("note should exist");
    assert_eq!(note.title, "Imported");
    assert_eq!(note.created_at, "2023-06-01T08:00:00Z");

    Ok(())
}

#[test]
fn test_update_note_changes_only_content() -> anyhow::Result<()> {
    let mut store = create_test_store();
    let before = store.note_by_id("note-1").expect("seed note").clone();

    let update = NoteUpdate {
        content: Some("new".to_string()),
        ..Default::default()
    };
    assert!(store.update_note("note-1", &update));

    let note = store.note_by_id("note-1").expect("seed note");
    assert_eq!(note.content, "new");
    assert_eq!(note.title, before.title);
    assert_eq!(note.category, before.category);
    assert_eq!(note.created_at, before.created_at);

    Ok(())
}

#[test]
fn test_delete_note() -> anyhow::Result<()> {
    let mut store = create_test_store();
    let before = snapshot(&store);

    assert!(!store.delete_note("note-42"));
    assert_eq!(store.state(), &before);

    assert!(store.delete_note("note-2"));
    assert_eq!(store.notes().len(), 1);
    assert_eq!(store.notes()[0].id, "note-1");

    Ok(())
}

#[test]
fn test_add_daily_entry_defaults_to_today() -> anyhow::Result<()> {
    let mut store = create_test_store();

    let id = store.add_daily_entry(NewDailyEntry {
        activity: Some("Gym".to_string()),
        ..Default::default()
    });

    let entry = store.daily_entry_by_id(&id).expect("entry should exist");
    assert_eq!(entry.id, "daily-1000");
    assert_eq!(entry.date, TEST_DATE);
    assert_eq!(entry.activity, "Gym");
    assert_eq!(entry.notes, "");

    Ok(())
}

#[test]
fn test_update_and_delete_daily_entry() -> anyhow::Result<()> {
    let mut store = create_test_store();

    let update = DailyEntryUpdate {
        notes: Some("Moved to Friday".to_string()),
        ..Default::default()
    };
    assert!(store.update_daily_entry("daily-1", &update));
    assert!(!store.update_daily_entry("daily-9", &update));

    let entry = store.daily_entry_by_id("daily-1").expect("seed entry");
    assert_eq!(entry.notes, "Moved to Friday");
    assert_eq!(entry.activity, "Team Meeting");
    assert_eq!(entry.date, "2024-01-15");

    assert!(store.delete_daily_entry("daily-1"));
    assert!(!store.delete_daily_entry("daily-1"));
    assert_eq!(store.daily_entries().len(), 1);

    Ok(())
}
