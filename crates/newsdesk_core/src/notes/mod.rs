//! Per-article notes store.
//!
//! # Responsibility
//! - Own the note collection of one article: create, edit, delete, import
//!   and export.
//! - Keep a session-only linear undo/redo history for the active note.
//! - Persist through the key-value port on manual save and on a debounced
//!   autosave timer, surfacing failures as [`AutosaveStatus`].
//!
//! # Invariants
//! - Notes are ordered most-recently-created first.
//! - Storage and JSON failures never escape as panics or errors from edit
//!   operations; in-memory notes stay authoritative.

pub mod autosave;
pub mod editor;
pub mod format;
pub mod history;
pub mod preview;

pub use autosave::{AutosaveStatus, TaskHandle, TimerQueue, AUTOSAVE_DELAY};
pub use editor::NotesEditor;
pub use format::{apply_format, Format};
pub use history::{EditorSnapshot, Selection, UndoHistory};
pub use preview::note_preview;
