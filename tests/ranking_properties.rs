//! Property-based tests for task ranking
//!
//! The comparator must be a strict total order:
//! - antisymmetric and reflexive-equal
//! - transitive
//! - Equal only for tasks with the same ROI, priority and title
//! and ranking must not depend on the order tasks arrive in.

use proptest::prelude::*;
use std::cmp::Ordering;
use taskroi::ranking::compare_titles;
use taskroi::{compare_tasks, rank_tasks, Priority, RankedTask, Task, TaskId};

fn priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High),
    ]
}

/// Small value pools so ties on ROI, priority and title are common
fn task_strategy() -> impl Strategy<Value = Task> {
    (
        any::<u64>(),
        prop::sample::select(vec!["Apple", "apple", "Zebra", "mango", "Écrire", "b"]),
        priority(),
        prop_oneof![Just(0.0f64), Just(50.0), Just(100.0), Just(-20.0), Just(f64::NAN)],
        prop_oneof![Just(0.0f64), Just(5.0), Just(10.0), Just(-1.0), Just(f64::INFINITY)],
    )
        .prop_map(|(id, title, priority, revenue, time_taken)| {
            Task::new(TaskId(id), title, priority, revenue, time_taken)
        })
}

fn ranked_strategy() -> impl Strategy<Value = RankedTask> {
    task_strategy().prop_map(RankedTask::new)
}

fn sort_key(r: &RankedTask) -> (taskroi::Roi, Priority, String) {
    (r.roi, r.task.priority, r.task.title.clone())
}

proptest! {
    #[test]
    fn prop_compare_is_antisymmetric(a in ranked_strategy(), b in ranked_strategy()) {
        prop_assert_eq!(compare_tasks(&a, &b), compare_tasks(&b, &a).reverse());
        prop_assert_eq!(compare_tasks(&a, &a), Ordering::Equal);
    }

    #[test]
    fn prop_compare_is_transitive(
        a in ranked_strategy(),
        b in ranked_strategy(),
        c in ranked_strategy(),
    ) {
        let mut items = [a, b, c];
        items.sort_by(compare_tasks);
        prop_assert_ne!(compare_tasks(&items[0], &items[1]), Ordering::Greater);
        prop_assert_ne!(compare_tasks(&items[1], &items[2]), Ordering::Greater);
        prop_assert_ne!(compare_tasks(&items[0], &items[2]), Ordering::Greater);
    }

    #[test]
    fn prop_equal_only_when_keys_match(a in ranked_strategy(), b in ranked_strategy()) {
        if compare_tasks(&a, &b) == Ordering::Equal {
            prop_assert_eq!(sort_key(&a), sort_key(&b));
        }
    }

    #[test]
    fn prop_ties_follow_title_order(
        title_a in "[a-zA-Z]{1,8}",
        title_b in "[a-zA-Z]{1,8}",
        p in priority(),
    ) {
        let a = RankedTask::new(Task::new(TaskId(1), title_a.clone(), p, 100.0, 10.0));
        let b = RankedTask::new(Task::new(TaskId(2), title_b.clone(), p, 100.0, 10.0));
        prop_assert_eq!(compare_tasks(&a, &b), compare_titles(&title_a, &title_b));
        if title_a != title_b {
            prop_assert_ne!(compare_tasks(&a, &b), Ordering::Equal);
        }
    }

    #[test]
    fn prop_not_applicable_ranks_last(tasks in prop::collection::vec(task_strategy(), 0..20)) {
        let ranked = rank_tasks(tasks);
        let first_na = ranked.iter().position(|r| !r.roi.is_applicable());
        if let Some(idx) = first_na {
            prop_assert!(ranked[idx..].iter().all(|r| !r.roi.is_applicable()));
        }
    }

    #[test]
    fn prop_ranking_is_repeatable(tasks in prop::collection::vec(task_strategy(), 0..20)) {
        let first: Vec<_> = rank_tasks(tasks.clone()).iter().map(sort_key).collect();
        let second: Vec<_> = rank_tasks(tasks.clone()).iter().map(sort_key).collect();
        let reversed: Vec<_> = rank_tasks(tasks.into_iter().rev()).iter().map(sort_key).collect();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &reversed);
    }
}

#[test]
fn test_not_applicable_below_finite_scenario() {
    let ranked = rank_tasks(vec![
        Task::new(TaskId(1), "B", Priority::High, 100.0, 0.0),
        Task::new(TaskId(2), "A", Priority::High, 50.0, 10.0),
    ]);
    let titles: Vec<_> = ranked.iter().map(|r| r.task.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B"]);
}

#[test]
fn test_title_tie_break_scenario() {
    let ranked = rank_tasks(vec![
        Task::new(TaskId(1), "Zebra", Priority::Medium, 100.0, 10.0),
        Task::new(TaskId(2), "Apple", Priority::Medium, 100.0, 10.0),
    ]);
    let titles: Vec<_> = ranked.iter().map(|r| r.task.title.as_str()).collect();
    assert_eq!(titles, vec!["Apple", "Zebra"]);
}
