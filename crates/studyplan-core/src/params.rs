//! Parameter structures for studyplan operations.
//!
//! These structures are shared across interfaces (CLI today, anything else
//! later) without framework-specific derives. Interface layers define their
//! own argument wrappers with clap attributes and convert into these types,
//! keeping input validation in one place.

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Lowest accepted plan duration in days.
pub const MIN_DURATION_DAYS: u32 = 1;

/// Highest accepted plan duration in days.
pub const MAX_DURATION_DAYS: u32 = 30;

/// Parameters for generating a new plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratePlan {
    /// Learning goal to plan for (required, non-empty)
    pub goal: String,
    /// Plan duration in days
    pub duration: u32,
}

impl GeneratePlan {
    /// Validates generation parameters.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - when the goal is empty after trimming
    /// * `PlannerError::InvalidInput` - when the duration is outside
    ///   [`MIN_DURATION_DAYS`]..=[`MAX_DURATION_DAYS`]
    pub fn validate(&self) -> Result<()> {
        if self.goal.trim().is_empty() {
            return Err(PlannerError::invalid_input("goal").with_reason("Goal must not be empty"));
        }

        if !(MIN_DURATION_DAYS..=MAX_DURATION_DAYS).contains(&self.duration) {
            return Err(PlannerError::invalid_input("duration").with_reason(format!(
                "Duration must be between {MIN_DURATION_DAYS} and {MAX_DURATION_DAYS} days, got {}",
                self.duration
            )));
        }

        Ok(())
    }
}

/// Parameters for toggling a task's completion state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleTask {
    /// 0-based index of the task within the plan
    pub index: usize,
    /// New completion state
    pub done: bool,
}
