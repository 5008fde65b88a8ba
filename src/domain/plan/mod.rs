//! Plan Module - Turns intake answers and a risk assessment into a
//! personalized action plan.
//!
//! # Components
//!
//! - `ChecklistBuilder` - Day-zero tasks (base list + risk tier list)
//! - `ToolPriorityBuilder` - Up to four in-app tools, trigger-adjusted
//! - `NrtAdvisor` - Nicotine replacement guidance by interest and dependency
//! - `ChallengePredictor` - Up to five expected challenges
//! - `MotivationalMessageSelector` - Message by motivation and timeline
//! - `StrategyBuilder` - Up to six custom coping strategies
//! - `PlanSynthesizer` - Runs all of the above into one `PersonalizedPlan`
//!
//! Every builder is total: unknown answers add nothing rather than failing.

mod challenges;
mod checklist;
mod motivation;
mod nrt_advisor;
mod strategies;
mod synthesizer;
mod tool_priority;

pub use challenges::{ChallengePredictor, MAX_EXPECTED_CHALLENGES};
pub use checklist::{ChecklistBuilder, BASE_CHECKLIST};
pub use motivation::{MotivationalMessageSelector, FALLBACK_MESSAGE};
pub use nrt_advisor::{NrtAdvisor, MAX_NRT_RECOMMENDATIONS};
pub use strategies::{StrategyBuilder, MAX_CUSTOM_STRATEGIES};
pub use synthesizer::{PersonalizedPlan, PlanSynthesizer};
pub use tool_priority::{ToolId, ToolPriorityBuilder, MAX_PRIORITY_TOOLS};
