pub mod config;
pub mod decision;
pub mod error;
pub mod launch;
pub mod prompt;

pub use config::{PromptOptions, PromptSettings};
pub use decision::{Decision, DecisionPolicy};
pub use error::AppError;
pub use launch::{LaunchRequest, LaunchResult, MISSING_EXECUTABLE_PATH};
pub use prompt::{PromptMode, PromptOutcome, PromptSpec};
