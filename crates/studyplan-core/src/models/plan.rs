//! Plan model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::Task;

/// Plan duration used when no persisted document exists yet.
pub const DEFAULT_DAYS: u32 = 7;

/// The persisted study plan document.
///
/// Wire field names are fixed by the on-disk format: the raw-text history is
/// stored under `weekly_plan` and each task's description under `task`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Learning goal the plan was generated for
    pub goal: String,

    /// Requested duration in days
    #[serde(default = "default_days")]
    pub days: u32,

    /// Ordered daily checklist
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Raw generated text snapshots
    #[serde(rename = "weekly_plan", default)]
    pub history: Vec<String>,
}

fn default_days() -> u32 {
    DEFAULT_DAYS
}

impl Plan {
    /// Builds a freshly generated plan from extractor output and the raw
    /// text it came from.
    pub fn generated(goal: impl Into<String>, days: u32, tasks: Vec<Task>, raw_text: String) -> Self {
        Self {
            goal: goal.into(),
            days,
            tasks,
            history: vec![raw_text],
        }
    }

    /// Whether the plan has any tasks to show.
    pub fn has_tasks(&self) -> bool {
        !self.tasks.is_empty()
    }
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            goal: String::new(),
            days: DEFAULT_DAYS,
            tasks: Vec::new(),
            history: Vec::new(),
        }
    }
}
