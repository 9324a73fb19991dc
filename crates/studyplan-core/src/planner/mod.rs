//! High-level session API for generating and tracking a study plan.
//!
//! [`Planner`] is the single-session controller: it owns the in-memory plan,
//! the store handle, and the injected generation client, and implements the
//! generate / toggle / save / load operations the presentation layer calls.
//!
//! ```text
//! user action ──▶ Planner ──▶ GenerationClient (one HTTP call)
//!                    │              │ raw text
//!                    │              ▼
//!                    │          Extractor
//!                    ▼
//!                PlanStore (one JSON document)
//! ```
//!
//! One session, one action at a time: every operation runs to completion
//! before the next is accepted, so the in-memory plan is never mutated
//! concurrently. Generating is destructive: the previous plan, including
//! completion state, is replaced wholesale.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use studyplan_core::{
//!     generate::{GenerationConfig, HttpGenerationClient},
//!     params::GeneratePlan,
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpGenerationClient::from_config(GenerationConfig::default())?;
//! let mut planner = PlannerBuilder::new()
//!     .with_client(Arc::new(client))
//!     .build()
//!     .await?;
//!
//! let plan = planner
//!     .generate_plan(&GeneratePlan {
//!         goal: "Python basics".to_string(),
//!         duration: 7,
//!     })
//!     .await?;
//! println!("{plan}");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

pub mod builder;
pub mod plan_ops;


pub use builder::PlannerBuilder;

use crate::generate::GenerationClient;
use crate::models::Plan;
use crate::store::PlanStore;

/// Session controller for one study plan.
pub struct Planner {
    pub(crate) store: PlanStore,
    pub(crate) client: Arc<dyn GenerationClient>,
    pub(crate) plan: Plan,
}

impl Planner {
    /// Creates a planner over a loaded plan.
    pub(crate) fn new(store: PlanStore, client: Arc<dyn GenerationClient>, plan: Plan) -> Self {
        Self { store, client, plan }
    }

    /// The current in-memory plan.
    pub fn plan(&self) -> &Plan {
        &self.plan
    }
}
