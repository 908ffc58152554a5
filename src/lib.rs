// Export modules for library usage
pub mod board;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod ranking;
pub mod roi;

// Re-export commonly used types
pub use crate::core::{Error, Priority, Result, Task, TaskId};

pub use crate::roi::{compute_roi, compute_task_roi, Roi};

pub use crate::ranking::{annotate, compare_tasks, rank_tasks, RankedTask};

pub use crate::board::{NewTask, TaskBoard, TaskPatch, UndoSlot};

pub use crate::io::{JsonFileSource, TaskRepository, TaskSource};
