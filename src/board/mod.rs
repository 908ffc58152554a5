//! In-memory task board with create, edit, delete and undo-delete.

pub mod undo;

use crate::core::types::validate_title;
use crate::core::{Error, Priority, Result, Task, TaskId};
use crate::ranking::{rank_tasks, RankedTask};
use chrono::Utc;
use std::time::{Duration, Instant};

pub use undo::{DeletedTask, UndoSlot};

/// Input for [`TaskBoard::create`].
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub priority: Priority,
    pub revenue: Option<f64>,
    pub time_taken: Option<f64>,
}

/// Partial edit; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub priority: Option<Priority>,
    pub revenue: Option<Option<f64>>,
    pub time_taken: Option<Option<f64>>,
}

#[derive(Debug, Clone)]
pub struct TaskBoard {
    tasks: Vec<Task>,
    undo: UndoSlot,
}

impl TaskBoard {
    pub fn new(tasks: Vec<Task>, undo_window: Duration) -> Self {
        Self {
            tasks,
            undo: UndoSlot::new(undo_window),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn undo_slot(&self) -> &UndoSlot {
        &self.undo
    }

    /// Current tasks ranked for display, with ROI recomputed from their
    /// present revenue and time taken.
    pub fn ranked(&self) -> Vec<RankedTask> {
        rank_tasks(self.tasks.iter().cloned())
    }

    pub fn create(&mut self, new_task: NewTask) -> Result<TaskId> {
        validate_title(&new_task.title)?;
        let id = self.next_id()?;
        self.tasks.push(Task {
            id,
            title: new_task.title,
            priority: new_task.priority,
            revenue: new_task.revenue,
            time_taken: new_task.time_taken,
            created_at: Utc::now(),
        });
        log::debug!("Created task {}", id);
        Ok(id)
    }

    pub fn update(&mut self, id: TaskId, patch: TaskPatch) -> Result<()> {
        if let Some(ref title) = patch.title {
            validate_title(title)?;
        }
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::TaskNotFound(id))?;

        if let Some(title) = patch.title {
            task.title = title;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(revenue) = patch.revenue {
            task.revenue = revenue;
        }
        if let Some(time_taken) = patch.time_taken {
            task.time_taken = time_taken;
        }
        log::debug!("Updated task {}", id);
        Ok(())
    }

    /// Removes a task and makes it the pending undo entry.
    pub fn delete(&mut self, id: TaskId, now: Instant) -> Result<Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        let task = self.tasks.remove(index);
        if let Some(previous) = self.undo.peek() {
            log::debug!("Dropping undo entry for task {}", previous.task.id);
        }
        self.undo.record(task.clone(), index, now);
        log::info!(
            "Deleted task {} ({}), restorable for {:?}",
            task.id,
            task.title,
            self.undo.window()
        );
        Ok(task)
    }

    /// Restores the most recently deleted task at its former position.
    pub fn undo_delete(&mut self, now: Instant) -> Result<TaskId> {
        let expired = self.undo.is_expired(now);
        let entry = self.undo.take().ok_or(Error::NothingToUndo)?;
        let id = entry.task.id;
        if expired {
            log::debug!("Undo window elapsed for task {}", id);
            return Err(Error::UndoExpired(id));
        }
        if self.get(id).is_some() {
            return Err(Error::validation(format!(
                "cannot restore task {id}: id already in use"
            )));
        }
        let index = entry.index.min(self.tasks.len());
        self.tasks.insert(index, entry.task);
        log::info!("Restored task {}", id);
        Ok(id)
    }

    /// Drops the pending undo entry, e.g. when the undo prompt is dismissed.
    pub fn clear_undo(&mut self) {
        self.undo.clear();
    }

    /// Drops the pending undo entry if its window has elapsed.
    pub fn expire_undo(&mut self, now: Instant) -> bool {
        self.undo.expire(now)
    }

    fn next_id(&self) -> Result<TaskId> {
        let max_live = self.tasks.iter().map(|t| t.id.0).max();
        let pending = self.undo.peek().map(|e| e.task.id.0);
        match max_live.max(pending) {
            None => Ok(TaskId(1)),
            Some(max) => max
                .checked_add(1)
                .map(TaskId)
                .ok_or_else(|| Error::validation(format!("no task id available after {max}"))),
        }
    }
}
