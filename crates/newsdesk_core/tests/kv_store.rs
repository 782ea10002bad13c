use chrono::{TimeZone, Utc};
use newsdesk_core::store::{notes_key, LAYOUT_MODE_KEY, VIEW_MODE_KEY};
use newsdesk_core::{
    AutosaveStatus, KeyValueStore, LayoutMode, ManualClock, NotesEditor, Preferences,
    SqliteStore, ViewMode,
};

#[test]
fn sqlite_store_upserts_and_removes() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    assert_eq!(store.get("missing").unwrap(), None);

    store.set("k", "one").unwrap();
    store.set("k", "two").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));

    store.remove("k").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn keys_with_prefix_lists_note_keys_only() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.set(&notes_key("2"), "[]").unwrap();
    store.set(&notes_key("10"), "[]").unwrap();
    store.set(VIEW_MODE_KEY, "mains").unwrap();

    assert_eq!(
        store.keys_with_prefix("article-notes-").unwrap(),
        vec!["article-notes-10", "article-notes-2"]
    );
    assert!(store.keys_with_prefix("nothing").unwrap().is_empty());
}

#[test]
fn notes_and_preferences_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("newsdesk.db");
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());

    {
        let mut store = SqliteStore::open(&path).unwrap();
        let mut editor = NotesEditor::open_with_clock("42", &mut store, clock.clone());
        let id = editor.create().id.clone();
        editor.update(&id, "GDP grew 8.2%").unwrap();
        assert_eq!(editor.save(), AutosaveStatus::Saved);
        drop(editor);

        let mut prefs = Preferences::load(&mut store);
        prefs.set_view_mode(ViewMode::Prelims).unwrap();
        prefs.set_layout_mode(LayoutMode::List).unwrap();
    }

    let mut store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.get(LAYOUT_MODE_KEY).unwrap().as_deref(), Some("list"));

    let prefs = Preferences::load(&mut store);
    assert_eq!(prefs.view_mode(), ViewMode::Prelims);
    assert_eq!(prefs.layout_mode(), LayoutMode::List);
    drop(prefs);

    let editor = NotesEditor::open_with_clock("42", &mut store, clock);
    assert_eq!(editor.list().len(), 1);
    assert_eq!(editor.active().unwrap().content, "GDP grew 8.2%");
    assert_eq!(editor.active().unwrap().version, 2);
}
