//! Single-slot undo buffer for deleted tasks.

use crate::core::Task;
use std::time::{Duration, Instant};

/// A deleted task together with where and when it was removed.
#[derive(Debug, Clone)]
pub struct DeletedTask {
    pub task: Task,
    pub index: usize,
    pub deleted_at: Instant,
}

/// Holds at most one most-recently-deleted task.
///
/// Recording a new deletion replaces the previous one; the slot never
/// refers to anything but the latest delete.
#[derive(Debug, Clone)]
pub struct UndoSlot {
    window: Duration,
    entry: Option<DeletedTask>,
}

impl UndoSlot {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            entry: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn record(&mut self, task: Task, index: usize, deleted_at: Instant) {
        self.entry = Some(DeletedTask {
            task,
            index,
            deleted_at,
        });
    }

    pub fn peek(&self) -> Option<&DeletedTask> {
        self.entry.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    /// Whether the pending entry's undo window has elapsed at `now`.
    pub fn is_expired(&self, now: Instant) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|e| now.saturating_duration_since(e.deleted_at) >= self.window)
    }

    pub fn take(&mut self) -> Option<DeletedTask> {
        self.entry.take()
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }

    /// Clears the slot if its window has elapsed. Returns whether it did.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.is_expired(now) {
            self.entry = None;
            true
        } else {
            false
        }
    }
}
