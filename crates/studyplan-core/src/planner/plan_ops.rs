//! Session operations for the Planner.

use log::info;
use tokio::task;

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    extract::Extractor,
    generate::{build_prompt, GenerationRequest, DEFAULT_MAX_NEW_TOKENS},
    models::{Plan, ProgressSummary, Task},
    params::{GeneratePlan, ToggleTask},
};

impl Planner {
    /// Generates a fresh plan for the given goal and duration.
    ///
    /// The previous plan is replaced wholesale, completion state included.
    /// If the generation call fails, neither the in-memory plan nor the
    /// persisted document changes. An extraction yielding no tasks is not an
    /// error: the empty plan is persisted and the presentation layer reports
    /// it.
    pub async fn generate_plan(&mut self, params: &GeneratePlan) -> Result<&Plan> {
        params.validate()?;

        let prompt = build_prompt(&params.goal, params.duration);
        let raw = self
            .client
            .generate(GenerationRequest {
                prompt,
                max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            })
            .await?;

        let tasks = Extractor::new().extract(&raw, params.duration);
        info!("Extracted {} tasks for goal '{}'", tasks.len(), params.goal);

        let plan = Plan::generated(params.goal.clone(), params.duration, tasks, raw);
        self.persist(plan.clone()).await?;
        self.plan = plan;
        Ok(&self.plan)
    }

    /// Sets the completion state of one task in the in-memory plan.
    ///
    /// The change is not persisted until [`Planner::save_plan`] runs.
    pub fn toggle_task(&mut self, params: &ToggleTask) -> Result<&Task> {
        let len = self.plan.tasks.len();
        let task = self
            .plan
            .tasks
            .get_mut(params.index)
            .ok_or(PlannerError::TaskIndex {
                index: params.index,
                len,
            })?;

        task.done = params.done;
        Ok(&self.plan.tasks[params.index])
    }

    /// Persists the current in-memory plan. Idempotent.
    pub async fn save_plan(&self) -> Result<()> {
        self.persist(self.plan.clone()).await
    }

    /// Re-reads the persisted plan into memory.
    ///
    /// A missing or unparseable document loads as the default empty plan.
    pub async fn load_plan(&mut self) -> Result<&Plan> {
        let store = self.store.clone();
        let plan = task::spawn_blocking(move || store.load())
            .await
            .map_err(|e| PlannerError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        self.plan = plan;
        Ok(&self.plan)
    }

    /// Completion statistics for the current plan.
    pub fn progress(&self) -> ProgressSummary {
        ProgressSummary::from_tasks(&self.plan.tasks)
    }

    async fn persist(&self, plan: Plan) -> Result<()> {
        let store = self.store.clone();
        task::spawn_blocking(move || store.save(&plan))
            .await
            .map_err(|e| PlannerError::Configuration {
                message: format!("Task join error: {e}"),
            })?
    }
}
