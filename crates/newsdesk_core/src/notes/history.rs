//! Linear undo/redo history for one editing session.
//!
//! # Invariants
//! - Recording a new edit clears the redo stack.
//! - Undo and redo move exactly one snapshot between the stacks.
//! - Stacks are bounded only by memory and never persisted.

/// Cursor selection in character offsets, `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Normalized selection; swapped bounds are reordered.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// Collapsed cursor at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Clamps both ends into `0..=len`.
    pub fn clamp_to(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Editor state captured before an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSnapshot {
    pub content: String,
    pub selection: Selection,
}

impl EditorSnapshot {
    pub fn new(content: impl Into<String>, selection: Selection) -> Self {
        Self {
            content: content.into(),
            selection,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    undo: Vec<EditorSnapshot>,
    redo: Vec<EditorSnapshot>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pre-edit state of a fresh edit.
    pub fn record(&mut self, before: EditorSnapshot) {
        self.undo.push(before);
        self.redo.clear();
    }

    /// Pops the last undo snapshot, parking `current` on the redo stack.
    pub fn undo(&mut self, current: EditorSnapshot) -> Option<EditorSnapshot> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Pops the last redo snapshot, parking `current` on the undo stack.
    pub fn redo(&mut self, current: EditorSnapshot) -> Option<EditorSnapshot> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{EditorSnapshot, Selection, UndoHistory};

    fn snap(content: &str) -> EditorSnapshot {
        EditorSnapshot::new(content, Selection::caret(content.chars().count()))
    }

    #[test]
    fn undo_and_redo_swap_snapshots() {
        let mut history = UndoHistory::new();
        history.record(snap(""));
        let restored = history.undo(snap("a")).unwrap();
        assert_eq!(restored.content, "");
        assert!(history.can_redo());

        let reapplied = history.redo(snap("")).unwrap();
        assert_eq!(reapplied.content, "a");
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn empty_stacks_are_noops() {
        let mut history = UndoHistory::new();
        assert!(history.undo(snap("x")).is_none());
        assert!(history.redo(snap("x")).is_none());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_edit_clears_redo() {
        let mut history = UndoHistory::new();
        history.record(snap("a"));
        history.undo(snap("ab")).unwrap();
        history.record(snap("a"));
        assert!(!history.can_redo());
    }

    #[test]
    fn selection_normalizes_and_clamps() {
        assert_eq!(Selection::new(5, 2), Selection { start: 2, end: 5 });
        assert_eq!(Selection::new(3, 9).clamp_to(4), Selection { start: 3, end: 4 });
    }
}
