//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task;

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    generate::GenerationClient,
    store::PlanStore,
};

/// Builder for creating and configuring Planner instances.
#[derive(Default)]
pub struct PlannerBuilder {
    store_path: Option<PathBuf>,
    client: Option<Arc<dyn GenerationClient>>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            store_path: None,
            client: None,
        }
    }

    /// Sets a custom plan file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/studyplan/plan.json` or
    /// `~/.local/share/studyplan/plan.json`
    pub fn with_store_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.store_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the generation client used by `generate_plan`.
    ///
    /// The client is constructed once by the caller and shared by reference;
    /// the planner never builds its own.
    pub fn with_client(mut self, client: Arc<dyn GenerationClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Builds the configured planner, loading the persisted plan if present.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` if no generation client was set
    /// Returns `PlannerError::Store` if the store directory cannot be created
    /// or the store file is unreadable
    pub async fn build(self) -> Result<Planner> {
        let client = self.client.ok_or_else(|| PlannerError::Configuration {
            message: "A generation client is required".to_string(),
        })?;

        let store_path = if let Some(path) = self.store_path {
            path
        } else {
            Self::default_store_path()?
        };

        if let Some(parent) = store_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PlannerError::store(parent.to_path_buf(), e))?;
        }

        let store = PlanStore::new(&store_path);
        let load_store = store.clone();
        let plan = task::spawn_blocking(move || load_store.load())
            .await
            .map_err(|e| PlannerError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        Ok(Planner::new(store, client, plan))
    }

    /// Returns the default plan file path following XDG Base Directory
    /// specification.
    fn default_store_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("studyplan")
            .place_data_file("plan.json")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}
