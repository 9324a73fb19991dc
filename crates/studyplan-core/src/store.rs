//! Whole-document persistence for the plan.
//!
//! The store is one JSON file, read and overwritten in full; there are no
//! partial updates and no locking. Concurrent sessions writing the same file
//! race and the last write wins, an accepted limitation of the single-user
//! design.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::{PlannerError, Result};
use crate::models::Plan;

/// Handle to the plan document on disk.
#[derive(Debug, Clone)]
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    /// Creates a store handle for the given file path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the underlying document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the plan document.
    ///
    /// A missing file or unparseable content yields the default plan; both
    /// are expected on first run and recovered without error. Other read
    /// failures surface as [`PlannerError::Store`].
    pub fn load(&self) -> Result<Plan> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Plan::default()),
            Err(e) => return Err(PlannerError::store(&self.path, e)),
        };

        match serde_json::from_str(&text) {
            Ok(plan) => Ok(plan),
            Err(e) => {
                warn!(
                    "Discarding unparseable plan document at {}: {e}",
                    self.path.display()
                );
                Ok(Plan::default())
            }
        }
    }

    /// Overwrites the plan document with the given plan.
    pub fn save(&self, plan: &Plan) -> Result<()> {
        let text = serde_json::to_string_pretty(plan)?;
        fs::write(&self.path, text).map_err(|e| PlannerError::store(&self.path, e))
    }
}
