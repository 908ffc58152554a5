//! Deterministic ranking of tasks by ROI.
//!
//! Pure functions only: ordering never depends on time, randomness or the
//! order in which tasks were supplied.


use crate::core::Task;
use crate::roi::{compute_task_roi, Roi};
use serde::Serialize;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// A task paired with its freshly computed ROI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTask {
    #[serde(flatten)]
    pub task: Task,
    pub roi: Roi,
}

impl RankedTask {
    pub fn new(task: Task) -> Self {
        let roi = compute_task_roi(&task);
        Self { task, roi }
    }
}

/// Three-way comparison: ROI descending, then priority descending, then
/// title ascending.
pub fn compare_tasks(a: &RankedTask, b: &RankedTask) -> Ordering {
    b.roi
        .cmp(&a.roi)
        .then_with(|| b.task.priority.cmp(&a.task.priority))
        .then_with(|| compare_titles(&a.task.title, &b.task.title))
}

/// Locale-style title order: base letters first (accents and case
/// ignored), then case-insensitive text, then the exact text, so only
/// identical titles compare equal.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| {
            let folded_a = a.chars().flat_map(char::to_lowercase);
            let folded_b = b.chars().flat_map(char::to_lowercase);
            folded_a.cmp(folded_b)
        })
        .then_with(|| a.cmp(b))
}

/// Canonical decomposition with combining marks dropped, lowercased.
fn collation_key(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Annotates each task with its ROI, preserving input order.
pub fn annotate(tasks: impl IntoIterator<Item = Task>) -> Vec<RankedTask> {
    tasks.into_iter().map(RankedTask::new).collect()
}

/// Annotates and sorts tasks for display.
pub fn rank_tasks(tasks: impl IntoIterator<Item = Task>) -> Vec<RankedTask> {
    let mut ranked = annotate(tasks);
    sort_ranked(&mut ranked);
    ranked
}

/// Sorts already annotated tasks in place with [`compare_tasks`].
pub fn sort_ranked(items: &mut [RankedTask]) {
    items.sort_by(compare_tasks);
}

/// Keeps the first `top` entries when a limit is given.
pub fn take_top(mut items: Vec<RankedTask>, top: Option<usize>) -> Vec<RankedTask> {
    if let Some(n) = top {
        items.truncate(n);
    }
    items
}
