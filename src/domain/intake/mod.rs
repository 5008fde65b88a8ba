//! Intake module - the shared vocabulary of survey answers.
//!
//! A [`ResponseRecord`] is produced by whatever collects the questionnaire
//! and is read, never modified, by the assessment and plan modules.

mod answers;
mod response_record;

pub use answers::{
    ChoiceVsNeed, Motivation, NrtInterest, PreviousAttempts, QuitTimeline, SleepQuality,
    SocialContext, StressLevel, SubstanceType, Trigger,
};
pub use response_record::{ResponseRecord, UsageAmount};
