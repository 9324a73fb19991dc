//! Completion statistics derived from the task list.

use super::Task;

/// Completion statistics for a task list.
///
/// Derived on demand, never persisted. The percentage is the floor of
/// `100 * completed / total`, so it only reaches 100 when every task is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    /// Total number of tasks
    pub total: u32,
    /// Number of tasks marked done
    pub completed: u32,
    /// Completion percentage in `[0, 100]`
    pub percent: u8,
}

impl ProgressSummary {
    /// Computes the statistics for a task list.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len() as u32;
        let completed = tasks.iter().filter(|t| t.done).count() as u32;
        Self {
            total,
            completed,
            percent: percent_complete(tasks),
        }
    }

    /// Whether every task is done and there is at least one task.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Completion percentage in `[0, 100]`.
///
/// An empty list is 0% complete, not a division error.
pub fn percent_complete(tasks: &[Task]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    let done = tasks.iter().filter(|t| t.done).count();
    (done * 100 / tasks.len()) as u8
}
