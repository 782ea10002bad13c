//! Debounce scheduling for autosave.
//!
//! Tasks are plain values that come due at a deadline. The owner polls
//! [`TimerQueue::take_due`] with the current time; nothing runs on its own.

use chrono::{DateTime, Duration, Utc};
use std::fmt::{Display, Formatter};

/// Idle period after the last edit before notes are written.
pub const AUTOSAVE_DELAY: Duration = Duration::seconds(30);

/// Persistence indicator shown next to the editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AutosaveStatus {
    #[default]
    Saved,
    /// Unsaved edits exist or a write is in progress.
    Saving,
    /// Last write failed; edits are only in memory.
    Error,
}

impl Display for AutosaveStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Saved => "Saved",
            Self::Saving => "Saving...",
            Self::Error => "Error",
        })
    }
}

/// Handle returned by [`TimerQueue::schedule`], used to cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Scheduled<A> {
    handle: TaskHandle,
    due_at: DateTime<Utc>,
    action: A,
}

/// Cancellable deferred actions ordered by deadline.
#[derive(Debug)]
pub struct TimerQueue<A> {
    next_handle: u64,
    tasks: Vec<Scheduled<A>>,
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self {
            next_handle: 0,
            tasks: Vec::new(),
        }
    }
}

impl<A> TimerQueue<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `action` to come due `delay` after `now`.
    pub fn schedule(&mut self, now: DateTime<Utc>, delay: Duration, action: A) -> TaskHandle {
        self.next_handle += 1;
        let handle = TaskHandle(self.next_handle);
        self.tasks.push(Scheduled {
            handle,
            due_at: now + delay,
            action,
        });
        handle
    }

    /// Cancels a pending task. Returns `false` when it already ran or was
    /// cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.handle != handle);
        self.tasks.len() != before
    }

    /// Removes and returns every action due at `now`, earliest first.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Vec<A> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.tasks)
            .into_iter()
            .partition(|task| task.due_at <= now);
        self.tasks = pending;
        due.sort_by_key(|task| (task.due_at, task.handle));
        due.into_iter().map(|task| task.action).collect()
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.tasks.iter().map(|task| task.due_at).min()
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|task| task.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
