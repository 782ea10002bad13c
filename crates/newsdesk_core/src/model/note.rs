//! Per-article note model.
//!
//! # Responsibility
//! - Define the persisted note record (camelCase JSON).
//! - Keep derived counters consistent on every content change.
//!
//! # Invariants
//! - `character_count == content.chars().count()` after every mutation.
//! - `version` starts at 1 and increases by exactly 1 per edit.
//! - `timestamp` (creation time) never changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for notes.
///
/// Kept as a plain string so previously persisted ids stay loadable.
pub type NoteId = String;

/// Free-text note attached to one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub content: String,
    /// Creation time.
    pub timestamp: DateTime<Utc>,
    pub last_edited: DateTime<Utc>,
    pub character_count: usize,
    pub version: u32,
}

impl Note {
    /// Creates a note with a generated id at version 1.
    pub fn new(content: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), content, now)
    }

    /// Creates a note with a caller-provided id.
    pub fn with_id(id: impl Into<NoteId>, content: impl Into<String>, now: DateTime<Utc>) -> Self {
        let content = content.into();
        Self {
            id: id.into(),
            character_count: content.chars().count(),
            content,
            timestamp: now,
            last_edited: now,
            version: 1,
        }
    }

    /// Replaces the content and advances edit metadata.
    pub fn edit(&mut self, content: impl Into<String>, now: DateTime<Utc>) {
        self.content = content.into();
        self.character_count = self.content.chars().count();
        self.last_edited = now;
        self.version += 1;
    }

    /// Repairs the derived counter after loading untrusted persisted data.
    pub(crate) fn resync_character_count(&mut self) {
        self.character_count = self.content.chars().count();
    }
}
