//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod quit_plan;

pub use quit_plan::{GenerateQuitPlanCommand, GenerateQuitPlanHandler, QuitPlanResult};
