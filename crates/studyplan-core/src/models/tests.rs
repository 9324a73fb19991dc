//! Tests for the model types.

use super::*;

fn tasks_with_done(done_flags: &[bool]) -> Vec<Task> {
    done_flags
        .iter()
        .enumerate()
        .map(|(i, &done)| {
            let mut task = Task::new(i as u32 + 1, format!("Task {}", i + 1));
            task.done = done;
            task
        })
        .collect()
}

#[test]
fn test_task_serializes_with_wire_field_names() {
    let task = Task::new(1, "Learn syntax");
    let json = serde_json::to_value(&task).expect("Failed to serialize task");

    assert_eq!(json["day"], 1);
    assert_eq!(json["task"], "Learn syntax");
    assert_eq!(json["done"], false);
    assert!(json.get("description").is_none());
}

#[test]
fn test_plan_serializes_history_as_weekly_plan() {
    let plan = Plan::generated("Python", 3, vec![], "Day 1: Learn syntax.".to_string());
    let json = serde_json::to_value(&plan).expect("Failed to serialize plan");

    assert_eq!(json["goal"], "Python");
    assert_eq!(json["days"], 3);
    assert_eq!(json["weekly_plan"][0], "Day 1: Learn syntax.");
    assert!(json.get("history").is_none());
}

#[test]
fn test_plan_round_trip() {
    let plan = Plan::generated(
        "Rust",
        2,
        vec![Task::new(1, "Read the book"), Task::new(2, "Write a CLI")],
        "Day 1: Read the book. Day 2: Write a CLI.".to_string(),
    );

    let json = serde_json::to_string(&plan).expect("Failed to serialize plan");
    let restored: Plan = serde_json::from_str(&json).expect("Failed to deserialize plan");
    assert_eq!(restored, plan);
}

#[test]
fn test_plan_deserialize_fills_missing_fields() {
    // Older documents may carry only the goal; days and the task list
    // fall back to their defaults.
    let restored: Plan = serde_json::from_str(r#"{"goal": "Python"}"#)
        .expect("Failed to deserialize minimal plan");

    assert_eq!(restored.goal, "Python");
    assert_eq!(restored.days, DEFAULT_DAYS);
    assert!(restored.tasks.is_empty());
    assert!(restored.history.is_empty());
}

#[test]
fn test_default_plan_shape() {
    let plan = Plan::default();
    assert_eq!(plan.goal, "");
    assert_eq!(plan.days, 7);
    assert!(plan.tasks.is_empty());
    assert!(plan.history.is_empty());
    assert!(!plan.has_tasks());
}

#[test]
fn test_percent_complete_empty_is_zero() {
    assert_eq!(percent_complete(&[]), 0);
}

#[test]
fn test_percent_complete_floors() {
    let tasks = tasks_with_done(&[true, false, false]);
    assert_eq!(percent_complete(&tasks), 33);
}

#[test]
fn test_percent_complete_hundred_only_when_all_done() {
    let all_done = tasks_with_done(&[true, true, true]);
    assert_eq!(percent_complete(&all_done), 100);

    let one_missing = tasks_with_done(&[true, true, false]);
    assert!(percent_complete(&one_missing) < 100);
}

#[test]
fn test_progress_summary_counts() {
    let tasks = tasks_with_done(&[true, false, true, false]);
    let progress = ProgressSummary::from_tasks(&tasks);

    assert_eq!(progress.total, 4);
    assert_eq!(progress.completed, 2);
    assert_eq!(progress.percent, 50);
    assert!(!progress.is_complete());
}

#[test]
fn test_progress_empty_is_not_complete() {
    let progress = ProgressSummary::from_tasks(&[]);
    assert_eq!(progress.percent, 0);
    assert!(!progress.is_complete());
}

#[test]
fn test_toggling_last_task_reaches_hundred() {
    let mut tasks = tasks_with_done(&[true, true, true, true, false]);
    assert_eq!(percent_complete(&tasks), 80);

    tasks[4].done = true;
    assert_eq!(percent_complete(&tasks), 100);
    assert!(ProgressSummary::from_tasks(&tasks).is_complete());
}
