//! External text-generation collaborator.
//!
//! Generation is a single opaque call: a prompt string goes out, a generated
//! string comes back. The [`GenerationClient`] trait is the seam between the
//! planner and the service; [`HttpGenerationClient`] talks to a hosted
//! inference endpoint. The client is constructed once at process start and
//! injected into the planner; there is no process-wide cached handle.

pub mod client;
mod error;
mod http;

pub use client::{GenerationClient, GenerationRequest};
pub use error::GenerationError;
pub use http::{GenerationConfig, HttpGenerationClient};

/// Default cap on generated tokens per request.
pub const DEFAULT_MAX_NEW_TOKENS: u32 = 150;

/// Builds the prompt asking for a day-by-day schedule.
///
/// The wording only needs to elicit a `Day 1: ..., Day 2: ...` listing; the
/// extractor tolerates variation in what comes back.
pub fn build_prompt(goal: &str, duration: u32) -> String {
    format!(
        "Create a {duration}-day study schedule for {goal}. \
         List tasks as Day 1: [task], Day 2: [task]."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_goal_and_duration() {
        let prompt = build_prompt("Python basics", 5);
        assert!(prompt.contains("Python basics"));
        assert!(prompt.contains("5-day"));
        assert!(prompt.contains("Day 1:"));
    }
}
