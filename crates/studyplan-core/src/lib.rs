//! Core library for the studyplan generator and tracker.
//!
//! Turns a learning goal into a day-by-day checklist: a prompt goes to an
//! external text-generation service, the free-text answer is split into
//! ordered tasks, and the resulting plan is persisted as one JSON document
//! with completion tracked per task.
//!
//! The interesting piece is [`extract`]: generated prose arrives with no
//! guaranteed structure, so task boundaries are recovered from day markers
//! (falling back to sentence boundaries) and day numbers are reassigned
//! sequentially. The [`store`] and [`planner`] modules are thin glue over
//! that conversion.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use studyplan_core::{
//!     generate::{GenerationConfig, HttpGenerationClient},
//!     params::{GeneratePlan, ToggleTask},
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
//! planner
//!     .generate_plan(&GeneratePlan {
//!         goal: "Python basics".to_string(),
//!         duration: 7,
//!     })
//!     .await?;
//!
//! planner.toggle_task(&ToggleTask { index: 0, done: true })?;
//! planner.save_plan().await?;
//! println!("{}", planner.progress().percent);
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod extract;
pub mod generate;
pub mod models;
pub mod params;
pub mod planner;
pub mod store;

// Re-export commonly used types
pub use display::OperationStatus;
pub use error::{PlannerError, Result};
pub use extract::{extract, Extractor};
pub use generate::{
    GenerationClient, GenerationConfig, GenerationError, GenerationRequest, HttpGenerationClient,
};
pub use models::{percent_complete, Plan, ProgressSummary, Task};
pub use params::{GeneratePlan, ToggleTask};
pub use planner::{Planner, PlannerBuilder};
pub use store::PlanStore;
