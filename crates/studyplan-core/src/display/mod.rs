//! Display formatting for plans, tasks, and progress.
//!
//! Domain models render themselves as markdown via [`std::fmt::Display`];
//! the CLI feeds the result through its terminal renderer. Keeping the
//! formatting here means every interface shows the same dashboard: goal
//! header, daily checklist, completion statistics with a progress bar, and
//! the celebration line once everything is done.

pub mod models;

use std::fmt;

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Creates a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Creates a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}
