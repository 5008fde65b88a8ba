//! Challenge Predictor - what the user should expect to struggle with.

use crate::domain::assessment::RiskLevel;
use crate::domain::intake::{QuitTimeline, ResponseRecord, Trigger};

/// Maximum number of challenges in a plan.
pub const MAX_EXPECTED_CHALLENGES: usize = 5;

fn timeline_challenge(timeline: QuitTimeline) -> Option<&'static str> {
    match timeline {
        QuitTimeline::Today => {
            Some("Intense cravings in the first 72 hours while nicotine leaves your body")
        }
        QuitTimeline::ThisWeek => Some("Pre-quit nerves as you count down to quit day"),
        QuitTimeline::NextWeek => {
            Some("The urge to use up your supply before quit day arrives")
        }
        QuitTimeline::ThisMonth => Some("Losing momentum during a long lead-up to quit day"),
        QuitTimeline::Unrecognized => None,
    }
}

fn trigger_challenge(trigger: Trigger) -> &'static str {
    match trigger {
        Trigger::Stress => "Stressful moments setting off an automatic reach for nicotine",
        Trigger::Boredom => "Idle stretches with nothing to keep your hands busy",
        Trigger::Social => "Pressure to join in when people around you are using",
        Trigger::Routine => "Habit cues in your routine: coffee, commutes, and after meals",
    }
}

const HIGH_RISK_CHALLENGE: &str =
    "Strong withdrawal in the first weeks: irritability, restlessness, and trouble focusing";
const DAILY_SOCIAL_CHALLENGE: &str = "Seeing people who use nicotine every single day";
const REPEAT_ATTEMPT_CHALLENGE: &str =
    "Doubt carried over from past attempts, even though each one built real skill";

pub struct ChallengePredictor;

impl ChallengePredictor {
    /// Challenges in a fixed order, truncated to [`MAX_EXPECTED_CHALLENGES`].
    pub fn predict(responses: &ResponseRecord, level: RiskLevel) -> Vec<String> {
        let mut challenges: Vec<&str> = Vec::new();

        if let Some(challenge) = responses.quit_timeline.and_then(timeline_challenge) {
            challenges.push(challenge);
        }
        challenges.extend(responses.known_triggers().map(trigger_challenge));
        if level == RiskLevel::High {
            challenges.push(HIGH_RISK_CHALLENGE);
        }
        if responses.is_daily_social() {
            challenges.push(DAILY_SOCIAL_CHALLENGE);
        }
        if responses.has_multiple_attempts() {
            challenges.push(REPEAT_ATTEMPT_CHALLENGE);
        }

        challenges
            .into_iter()
            .take(MAX_EXPECTED_CHALLENGES)
            .map(str::to_string)
            .collect()
    }
}
