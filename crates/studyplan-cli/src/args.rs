use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use studyplan_core::params::{GeneratePlan, ToggleTask};

/// Main command-line interface for the studyplan tracker
///
/// studyplan turns a learning goal into a day-by-day checklist: it asks a
/// hosted text-generation model for a schedule, converts the answer into
/// dated tasks, persists them as a single JSON document, and tracks
/// completion as tasks are checked off.
#[derive(Parser)]
#[command(version, about, name = "sp")]
pub struct Args {
    /// Path to the plan JSON file. Defaults to
    /// $XDG_DATA_HOME/studyplan/plan.json
    #[arg(long, global = true)]
    pub store_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Base URL of the text-generation service
    #[arg(
        long,
        global = true,
        default_value = "https://api-inference.huggingface.co"
    )]
    pub endpoint: String,

    /// Model used to generate plans
    #[arg(long, global = true, default_value = "google/flan-t5-small")]
    pub model: String,

    /// Generation request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the studyplan CLI
///
/// Running without a command shows the current plan, matching the most
/// frequent action.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a fresh plan for a learning goal
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Show the current plan and its progress
    #[command(alias = "s")]
    Show,
    /// Mark a day's task as done
    #[command(alias = "c")]
    Check(ToggleArgs),
    /// Mark a day's task as not done
    #[command(alias = "u")]
    Uncheck(ToggleArgs),
    /// Persist the current plan as-is
    Save,
}

/// Generate a new study plan
///
/// Replaces the stored plan wholesale; the previous checklist and its
/// completion state are discarded.
#[derive(ClapArgs)]
pub struct GenerateArgs {
    /// Learning goal, e.g. "Python basics"
    pub goal: String,
    /// Plan duration in days (1 to 30)
    #[arg(short, long, default_value_t = 7)]
    pub days: u32,
}

impl From<GenerateArgs> for GeneratePlan {
    fn from(val: GenerateArgs) -> Self {
        GeneratePlan {
            goal: val.goal,
            duration: val.days,
        }
    }
}

/// Select one day of the checklist
#[derive(ClapArgs)]
pub struct ToggleArgs {
    /// Day number as shown in the checklist (1-based)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub day: u32,
}

impl ToggleArgs {
    /// Converts the 1-based day number into core toggle parameters.
    pub fn into_params(self, done: bool) -> ToggleTask {
        ToggleTask {
            index: (self.day - 1) as usize,
            done,
        }
    }
}
