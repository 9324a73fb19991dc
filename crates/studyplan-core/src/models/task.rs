//! Task model definition.

use serde::{Deserialize, Serialize};

/// One day's checklist entry within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Day number within the plan, 1-based and sequential
    pub day: u32,

    /// What to study that day
    #[serde(rename = "task")]
    pub description: String,

    /// Whether the user has checked the task off
    pub done: bool,
}

impl Task {
    /// Creates a pending task for the given day.
    pub fn new(day: u32, description: impl Into<String>) -> Self {
        Self {
            day,
            description: description.into(),
            done: false,
        }
    }
}
