//! Data models for the study plan and its tasks.
//!
//! This module contains the core domain models: the persisted [`Plan`]
//! document, its [`Task`] entries, and the derived [`ProgressSummary`]
//! statistics. Display implementations live in [`crate::display::models`] to
//! keep data structures and presentation logic separate.
//!
//! The serialized shape of [`Plan`] and [`Task`] matches the on-disk JSON
//! document exactly (`goal`, `days`, `tasks` with `day`/`task`/`done`, and
//! `weekly_plan` for the raw-text history), so loading and saving are plain
//! serde round-trips.

pub mod plan;
pub mod progress;
pub mod task;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use plan::{Plan, DEFAULT_DAYS};
pub use progress::{percent_complete, ProgressSummary};
pub use task::Task;
