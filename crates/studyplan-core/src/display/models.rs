//! Display implementations for domain models.
//!
//! All output is markdown, rendered rich or plain by the CLI. A task prints
//! as one checklist line, a plan as the full tracker dashboard, and a
//! progress summary as the statistics block the dashboard ends with.

use std::fmt;

use crate::models::{Plan, ProgressSummary, Task};

/// Cells in the textual progress bar.
const PROGRESS_BAR_WIDTH: usize = 10;

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.done { "x" } else { " " };
        write!(f, "- [{mark}] Day {}: {}", self.day, self.description)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Study Tracker: {}", self.goal)?;
        writeln!(f)?;
        writeln!(f, "- Duration: {} days", self.days)?;
        writeln!(f)?;
        writeln!(f, "## Daily Roadmap")?;
        writeln!(f)?;

        if self.tasks.is_empty() {
            writeln!(f, "No tasks in this plan.")?;
        } else {
            for task in &self.tasks {
                writeln!(f, "{task}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Statistics")?;
        writeln!(f)?;
        writeln!(f, "- Completed: {}/{}", self.completed, self.total)?;
        writeln!(f, "- Completion rate: {}%", self.percent)?;
        writeln!(f)?;
        writeln!(f, "`{}` {}%", progress_bar(self.percent), self.percent)?;

        if self.is_complete() {
            writeln!(f)?;
            writeln!(f, "**Goal achieved!** 🏆")?;
        }

        Ok(())
    }
}

fn progress_bar(percent: u8) -> String {
    let filled = (percent as usize * PROGRESS_BAR_WIDTH) / 100;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::percent_complete;

    fn sample_plan() -> Plan {
        let mut tasks = vec![
            Task::new(1, "Learn syntax."),
            Task::new(2, "Build a script."),
        ];
        tasks[0].done = true;
        Plan::generated("Python", 2, tasks, "raw text".to_string())
    }

    #[test]
    fn test_task_renders_as_checklist_line() {
        let mut task = Task::new(3, "Review notes.");
        assert_eq!(format!("{task}"), "- [ ] Day 3: Review notes.");

        task.done = true;
        assert_eq!(format!("{task}"), "- [x] Day 3: Review notes.");
    }

    #[test]
    fn test_plan_dashboard_lists_tasks() {
        let output = format!("{}", sample_plan());

        assert!(output.contains("# Study Tracker: Python"));
        assert!(output.contains("- Duration: 2 days"));
        assert!(output.contains("- [x] Day 1: Learn syntax."));
        assert!(output.contains("- [ ] Day 2: Build a script."));
    }

    #[test]
    fn test_empty_plan_has_placeholder() {
        let output = format!("{}", Plan::default());
        assert!(output.contains("No tasks in this plan."));
    }

    #[test]
    fn test_progress_block_shows_counts_and_bar() {
        let plan = sample_plan();
        let progress = ProgressSummary::from_tasks(&plan.tasks);
        let output = format!("{progress}");

        assert!(output.contains("- Completed: 1/2"));
        assert!(output.contains("- Completion rate: 50%"));
        assert!(output.contains("█████░░░░░"));
        assert!(!output.contains("Goal achieved"));
    }

    #[test]
    fn test_progress_celebrates_at_hundred() {
        let mut plan = sample_plan();
        for task in &mut plan.tasks {
            task.done = true;
        }
        assert_eq!(percent_complete(&plan.tasks), 100);

        let output = format!("{}", ProgressSummary::from_tasks(&plan.tasks));
        assert!(output.contains("██████████"));
        assert!(output.contains("Goal achieved"));
    }

    #[test]
    fn test_progress_bar_extremes() {
        assert_eq!(progress_bar(0), "░░░░░░░░░░");
        assert_eq!(progress_bar(100), "██████████");
    }
}
