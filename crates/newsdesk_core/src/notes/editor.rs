//! Notes editor bound to one article.
//!
//! # Responsibility
//! - Hold the in-memory note list, the active note and its cursor selection.
//! - Record undo/redo snapshots for edits of the active note.
//! - Debounce autosave and track [`AutosaveStatus`] transitions.
//!
//! # Invariants
//! - `list()` is ordered most-recently-created first.
//! - Undo history belongs to the active note; changing the active note
//!   clears it.
//! - Every content change bumps the note `version` by exactly one.
//! - Status transitions: `Saved -> Saving` on edit, `Saving -> Saved|Error`
//!   on write, `Error -> Saved` on a successful retry.

use crate::clock::{Clock, SystemClock};
use crate::model::note::{Note, NoteId};
use crate::notes::autosave::{AutosaveStatus, TaskHandle, TimerQueue, AUTOSAVE_DELAY};
use crate::notes::format::{apply_format, Format};
use crate::notes::history::{EditorSnapshot, Selection, UndoHistory};
use crate::store::{notes_key, KeyValueStore, StoreResult};
use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorTask {
    Autosave,
}

type StatusListener = Box<dyn FnMut(AutosaveStatus)>;

/// Note collection and editing session for one article.
pub struct NotesEditor<S: KeyValueStore, C: Clock = SystemClock> {
    article_id: String,
    storage_key: String,
    notes: Vec<Note>,
    active: Option<NoteId>,
    selection: Selection,
    history: UndoHistory,
    status: AutosaveStatus,
    timers: TimerQueue<EditorTask>,
    pending_autosave: Option<TaskHandle>,
    status_listeners: Vec<StatusListener>,
    store: S,
    clock: C,
}

impl<S: KeyValueStore> NotesEditor<S, SystemClock> {
    /// Opens the notes of `article_id` using wall-clock time.
    pub fn open(article_id: impl Into<String>, store: S) -> Self {
        Self::open_with_clock(article_id, store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> NotesEditor<S, C> {
    /// Opens the notes of `article_id`, loading whatever is persisted.
    ///
    /// Unreadable or malformed stored data is logged and treated as an empty
    /// collection. The first loaded note becomes active.
    pub fn open_with_clock(article_id: impl Into<String>, store: S, clock: C) -> Self {
        let article_id = article_id.into();
        let storage_key = notes_key(&article_id);
        let notes = load_notes(&store, &storage_key);
        let active = notes.first().map(|note| note.id.clone());
        let selection = notes
            .first()
            .map_or_else(Selection::default, |note| Selection::caret(note.character_count));

        Self {
            article_id,
            storage_key,
            notes,
            active,
            selection,
            history: UndoHistory::new(),
            status: AutosaveStatus::Saved,
            timers: TimerQueue::new(),
            pending_autosave: None,
            status_listeners: Vec::new(),
            store,
            clock,
        }
    }

    pub fn article_id(&self) -> &str {
        &self.article_id
    }

    /// Notes, most recently created first.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, note_id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == note_id)
    }

    pub fn active(&self) -> Option<&Note> {
        self.active.as_deref().and_then(|id| self.get(id))
    }

    pub fn status(&self) -> AutosaveStatus {
        self.status
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Deadline of the pending autosave, if an edit is waiting to be written.
    pub fn autosave_due_at(&self) -> Option<DateTime<Utc>> {
        self.timers.next_deadline()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Registers a callback invoked once per status transition.
    pub fn on_status_change(&mut self, listener: impl FnMut(AutosaveStatus) + 'static) {
        self.status_listeners.push(Box::new(listener));
    }

    /// Makes `note_id` the active note. Unknown ids return `false`.
    pub fn select(&mut self, note_id: &str) -> bool {
        if self.get(note_id).is_none() {
            return false;
        }
        self.activate(Some(note_id.to_string()));
        true
    }

    /// Moves the cursor selection inside the active note.
    pub fn set_selection(&mut self, start: usize, end: usize) {
        let len = self.active().map_or(0, |note| note.character_count);
        self.selection = Selection::new(start, end).clamp_to(len);
    }

    /// Creates an empty note at the head of the list and activates it.
    pub fn create(&mut self) -> &Note {
        let note = Note::new("", self.clock.now());
        debug!(
            "event=note_create module=notes article_id={} note_id={}",
            self.article_id, note.id
        );
        self.insert_active(note)
    }

    /// Replaces the content of `note_id`, recording an undo snapshot.
    ///
    /// Editing a non-active note activates it first. Unknown ids return
    /// `None` and change nothing.
    pub fn update(&mut self, note_id: &str, content: impl Into<String>) -> Option<&Note> {
        let index = self.index_of(note_id)?;
        if self.active.as_deref() != Some(note_id) {
            self.activate(Some(note_id.to_string()));
        }

        let before = EditorSnapshot::new(self.notes[index].content.clone(), self.selection);
        self.history.record(before);
        self.apply_content(index, content.into());
        Some(&self.notes[index])
    }

    /// Reverts the active note to its previous snapshot.
    ///
    /// Returns `false` (and does nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some((index, current)) = self.active_snapshot() else {
            return false;
        };
        let Some(previous) = self.history.undo(current) else {
            return false;
        };
        self.restore(index, previous);
        true
    }

    /// Re-applies the snapshot most recently undone.
    pub fn redo(&mut self) -> bool {
        let Some((index, current)) = self.active_snapshot() else {
            return false;
        };
        let Some(next) = self.history.redo(current) else {
            return false;
        };
        self.restore(index, next);
        true
    }

    /// Removes a note. When it was active, the first remaining note (if any)
    /// becomes active.
    pub fn delete(&mut self, note_id: &str) -> bool {
        let Some(index) = self.index_of(note_id) else {
            return false;
        };
        self.notes.remove(index);
        if self.active.as_deref() == Some(note_id) {
            let next = self.notes.first().map(|note| note.id.clone());
            self.activate(next);
        }
        debug!(
            "event=note_delete module=notes article_id={} note_id={} remaining={}",
            self.article_id,
            note_id,
            self.notes.len()
        );
        self.mark_dirty();
        true
    }

    /// Wraps the current selection of the active note with `format`.
    ///
    /// Goes through [`NotesEditor::update`], so it is undoable. The cursor
    /// ends just past the inserted span.
    pub fn apply_format(&mut self, format: Format) -> Option<&Note> {
        let note_id = self.active.clone()?;
        let content = self.get(&note_id)?.content.clone();
        let (formatted, caret) = apply_format(&content, self.selection, format);
        self.update(&note_id, formatted)?;
        self.selection = caret;
        self.get(&note_id)
    }

    /// Human-readable dump of every note, in list order.
    pub fn export_as_text(&self) -> String {
        self.notes
            .iter()
            .map(|note| {
                format!(
                    "Note {}\n{}\n\nLast edited: {}\n---\n",
                    note.id,
                    note.content,
                    note.last_edited.format("%Y-%m-%d %H:%M:%S UTC")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Suggested download name for [`NotesEditor::export_as_text`].
    pub fn export_file_name(&self) -> String {
        format!("notes-{}.txt", self.article_id)
    }

    /// Creates one note holding the whole of `text`, at the head, active.
    pub fn import_from_text(&mut self, text: impl Into<String>) -> &Note {
        let note = Note::new(text, self.clock.now());
        info!(
            "event=notes_import module=notes status=ok article_id={} note_id={} chars={}",
            self.article_id, note.id, note.character_count
        );
        self.insert_active(note)
    }

    /// Reads a text or markdown file and imports it as one note.
    ///
    /// # Errors
    /// - Returns the I/O error when the file cannot be read as UTF-8; the
    ///   note list is left untouched.
    pub fn import_from_path(&mut self, path: impl AsRef<Path>) -> std::io::Result<&Note> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|err| {
            warn!(
                "event=notes_import module=notes status=error article_id={} error={}",
                self.article_id, err
            );
            err
        })?;
        Ok(self.import_from_text(text))
    }

    /// Writes the whole collection now and returns the resulting status.
    ///
    /// Failures are logged and reported as [`AutosaveStatus::Error`]; the
    /// in-memory notes are kept so the save can be retried.
    pub fn save(&mut self) -> AutosaveStatus {
        if let Some(handle) = self.pending_autosave.take() {
            self.timers.cancel(handle);
        }
        if self.status == AutosaveStatus::Saved {
            self.set_status(AutosaveStatus::Saving);
        }

        let started_at = Instant::now();
        match self.write_notes() {
            Ok(()) => {
                info!(
                    "event=notes_save module=notes status=ok article_id={} notes={} duration_ms={}",
                    self.article_id,
                    self.notes.len(),
                    started_at.elapsed().as_millis()
                );
                self.set_status(AutosaveStatus::Saved);
            }
            Err(err) => {
                error!(
                    "event=notes_save module=notes status=error article_id={} notes={} error={}",
                    self.article_id,
                    self.notes.len(),
                    err
                );
                self.set_status(AutosaveStatus::Error);
            }
        }
        self.status
    }

    /// Runs the autosave if its debounce deadline has passed.
    ///
    /// Returns `true` when a save was attempted.
    pub fn poll(&mut self) -> bool {
        let due = self.timers.take_due(self.clock.now());
        if due.is_empty() {
            return false;
        }
        self.pending_autosave = None;
        for task in due {
            match task {
                EditorTask::Autosave => {
                    self.save();
                }
            }
        }
        true
    }

    fn write_notes(&mut self) -> StoreResult<()> {
        let json = serde_json::to_string(&self.notes)?;
        self.store.set(&self.storage_key, &json)
    }

    fn index_of(&self, note_id: &str) -> Option<usize> {
        self.notes.iter().position(|note| note.id == note_id)
    }

    fn active_snapshot(&self) -> Option<(usize, EditorSnapshot)> {
        let index = self.index_of(self.active.as_deref()?)?;
        let current = EditorSnapshot::new(self.notes[index].content.clone(), self.selection);
        Some((index, current))
    }

    fn insert_active(&mut self, note: Note) -> &Note {
        let note_id = note.id.clone();
        self.notes.insert(0, note);
        self.activate(Some(note_id));
        self.mark_dirty();
        &self.notes[0]
    }

    fn activate(&mut self, note_id: Option<NoteId>) {
        if self.active == note_id {
            return;
        }
        self.history.clear();
        self.active = note_id;
        let len = self.active().map_or(0, |note| note.character_count);
        self.selection = Selection::caret(len);
    }

    fn restore(&mut self, index: usize, snapshot: EditorSnapshot) {
        self.apply_content(index, snapshot.content);
        self.selection = snapshot.selection.clamp_to(self.notes[index].character_count);
    }

    fn apply_content(&mut self, index: usize, content: String) {
        let now = self.clock.now();
        let note = &mut self.notes[index];
        note.edit(content, now);
        self.selection = self.selection.clamp_to(note.character_count);
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        if self.status == AutosaveStatus::Saved {
            self.set_status(AutosaveStatus::Saving);
        }
        if let Some(handle) = self.pending_autosave.take() {
            self.timers.cancel(handle);
        }
        let now = self.clock.now();
        self.pending_autosave = Some(self.timers.schedule(now, AUTOSAVE_DELAY, EditorTask::Autosave));
    }

    fn set_status(&mut self, status: AutosaveStatus) {
        if self.status == status {
            return;
        }
        self.status = status;
        for listener in &mut self.status_listeners {
            listener(status);
        }
    }
}

fn load_notes<S: KeyValueStore>(store: &S, key: &str) -> Vec<Note> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            error!("event=notes_load module=notes status=error key={key} error={err}");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Note>>(&raw) {
        Ok(mut notes) => {
            for note in &mut notes {
                note.resync_character_count();
            }
            debug!(
                "event=notes_load module=notes status=ok key={key} notes={}",
                notes.len()
            );
            notes
        }
        Err(err) => {
            warn!(
                "event=notes_load module=notes status=error error_code=malformed_notes key={key} error={err}"
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NotesEditor;
    use crate::clock::ManualClock;
    use crate::notes::autosave::AutosaveStatus;
    use crate::notes::format::Format;
    use crate::store::{KeyValueStore, MemoryStore};
    use chrono::{Duration, TimeZone, Utc};

    fn editor() -> (NotesEditor<MemoryStore, ManualClock>, ManualClock) {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
        let editor = NotesEditor::open_with_clock("7", MemoryStore::new(), clock.clone());
        (editor, clock)
    }

    #[test]
    fn undo_restores_previous_selection() {
        let (mut editor, _) = editor();
        let id = editor.create().id.clone();
        editor.update(&id, "hello").unwrap();
        editor.set_selection(1, 3);
        editor.update(&id, "hello world").unwrap();

        assert!(editor.undo());
        assert_eq!(editor.active().unwrap().content, "hello");
        assert_eq!((editor.selection().start, editor.selection().end), (1, 3));
    }

    #[test]
    fn switching_active_note_clears_history() {
        let (mut editor, _) = editor();
        let first = editor.create().id.clone();
        editor.update(&first, "one").unwrap();
        let second = editor.create().id.clone();
        assert!(!editor.can_undo());
        assert!(!editor.undo());
        assert_eq!(editor.active().unwrap().id, second);
        assert_eq!(editor.get(&first).unwrap().content, "one");
    }

    #[test]
    fn format_is_undoable_and_moves_caret() {
        let (mut editor, _) = editor();
        let id = editor.create().id.clone();
        editor.update(&id, "make this loud").unwrap();
        editor.set_selection(5, 9);
        let note = editor.apply_format(Format::Bold).unwrap();
        assert_eq!(note.content, "make **this** loud");
        assert_eq!(editor.selection().start, 13);

        assert!(editor.undo());
        assert_eq!(editor.active().unwrap().content, "make this loud");
    }

    #[test]
    fn malformed_storage_is_treated_as_empty() {
        let mut store = MemoryStore::new();
        store.set("article-notes-7", "{not json").unwrap();
        let editor = NotesEditor::open("7", store);
        assert!(editor.list().is_empty());
        assert!(editor.active().is_none());
    }

    #[test]
    fn autosave_waits_for_idle_period() {
        let (mut editor, clock) = editor();
        let id = editor.create().id.clone();
        clock.advance(Duration::seconds(20));
        editor.update(&id, "draft").unwrap();

        clock.advance(Duration::seconds(20));
        assert!(!editor.poll());
        assert_eq!(editor.status(), AutosaveStatus::Saving);

        clock.advance(Duration::seconds(10));
        assert!(editor.poll());
        assert_eq!(editor.status(), AutosaveStatus::Saved);
        let stored = editor.store().get("article-notes-7").unwrap().unwrap();
        assert!(stored.contains("\"draft\""));
        assert!(editor.autosave_due_at().is_none());
    }
}
