//! Loading the task list.
//!
//! The task list comes from a static JSON file and is read exactly once per
//! application load. [`TaskRepository`] enforces that: repeated calls to
//! [`TaskRepository::tasks`] return the cached list without touching the
//! source again.

use crate::core::{Error, Result, ResultExt, Task};
use crate::io::read_file;
use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A place tasks can be fetched from.
///
/// Implementations should be thread-safe (`Send + Sync`) so a repository
/// can be shared.
pub trait TaskSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<Task>>;

    /// Short human-readable description used in log messages.
    fn describe(&self) -> String;
}

/// Reads tasks from a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskSource for JsonFileSource {
    fn fetch(&self) -> Result<Vec<Task>> {
        let contents = read_file(&self.path)?;
        parse_tasks(&contents)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parses and validates a JSON task list.
pub fn parse_tasks(contents: &str) -> Result<Vec<Task>> {
    let tasks: Vec<Task> = serde_json::from_str(contents)?;
    validate_tasks(&tasks)?;
    Ok(tasks)
}

fn validate_tasks(tasks: &[Task]) -> Result<()> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        task.validate().context(format!("task {}", task.id))?;
        if !seen.insert(task.id) {
            return Err(Error::validation(format!("duplicate task id {}", task.id)));
        }
    }
    Ok(())
}

/// Fetch-once cache in front of a [`TaskSource`].
///
/// A failed fetch is not cached, so a later call may retry.
pub struct TaskRepository<S: TaskSource> {
    source: S,
    tasks: OnceCell<Vec<Task>>,
    fetches: AtomicUsize,
}

impl<S: TaskSource> TaskRepository<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            tasks: OnceCell::new(),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn tasks(&self) -> Result<&[Task]> {
        self.tasks
            .get_or_try_init(|| {
                self.fetches.fetch_add(1, Ordering::SeqCst);
                let tasks = self.source.fetch()?;
                log::info!(
                    "Loaded {} tasks from {}",
                    tasks.len(),
                    self.source.describe()
                );
                Ok(tasks)
            })
            .map(Vec::as_slice)
    }

    /// Number of times the underlying source has been asked for tasks.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn is_loaded(&self) -> bool {
        self.tasks.get().is_some()
    }

    /// Consumes the repository, returning the loaded tasks (fetching if needed).
    pub fn into_tasks(self) -> Result<Vec<Task>> {
        self.tasks()?;
        Ok(self.tasks.into_inner().unwrap_or_default())
    }
}
