//! Quit plan handlers.

mod generate_quit_plan;

pub use generate_quit_plan::{GenerateQuitPlanCommand, GenerateQuitPlanHandler, QuitPlanResult};
