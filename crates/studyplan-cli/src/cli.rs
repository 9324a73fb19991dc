//! Command handlers connecting parsed arguments to the core planner.
//!
//! Each handler runs one controller action to completion, then renders the
//! resulting dashboard. Toggling persists immediately: a CLI invocation is a
//! whole session, so an unsaved toggle would simply be lost.

use anyhow::Result;
use studyplan_core::{OperationStatus, Planner};

use crate::args::{GenerateArgs, ToggleArgs};
use crate::renderer::TerminalRenderer;

/// Dispatcher holding the planner session and the output renderer.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Generate a fresh plan and show the resulting dashboard.
    pub async fn generate(mut self, args: GenerateArgs) -> Result<()> {
        let params = args.into();
        self.planner.generate_plan(&params).await?;
        self.render_dashboard()
    }

    /// Render the current plan and its progress.
    pub fn show(self) -> Result<()> {
        self.render_dashboard()
    }

    /// Toggle one day's completion state and persist the plan.
    pub async fn toggle(mut self, args: ToggleArgs, done: bool) -> Result<()> {
        let params = args.into_params(done);
        self.planner.toggle_task(&params)?;
        self.planner.save_plan().await?;
        self.render_dashboard()
    }

    /// Persist the in-memory plan unchanged.
    pub async fn save(self) -> Result<()> {
        self.planner.save_plan().await?;
        self.renderer
            .render(&OperationStatus::success("Progress saved").to_string())
    }

    fn render_dashboard(&self) -> Result<()> {
        let plan = self.planner.plan();
        if !plan.has_tasks() {
            // Either a first run or a generation that produced nothing usable
            let message = if plan.goal.is_empty() {
                "Welcome! Generate a plan to get started:\n\n\
                 `sp generate \"Python basics\" --days 7`\n"
                    .to_string()
            } else {
                format!("No tasks yet for \"{}\". Try generating again.\n", plan.goal)
            };
            return self.renderer.render(&message);
        }

        let mut output = plan.to_string();
        output.push('\n');
        output.push_str(&self.planner.progress().to_string());
        self.renderer.render(&output)
    }
}
