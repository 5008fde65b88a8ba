//! Custom strategies tailored to triggers and lifestyle answers.

use crate::domain::intake::{ResponseRecord, Trigger};

/// Maximum number of custom strategies in a plan.
pub const MAX_CUSTOM_STRATEGIES: usize = 6;

fn trigger_strategy(trigger: Trigger) -> &'static str {
    match trigger {
        Trigger::Stress => "Use 4-7-8 breathing the moment stress builds: in for 4, hold for 7, out for 8",
        Trigger::Boredom => "Keep a list of five-minute activities ready for idle moments",
        Trigger::Social => "Rehearse a short, confident \"no thanks\" before social plans",
        Trigger::Routine => "Change one step of each habit loop, like a new coffee spot or a different route",
    }
}

const POOR_SLEEP_STRATEGY: &str =
    "Skip nicotine in the hour before bed and keep a steady wind-down routine";
const HIGH_STRESS_STRATEGY: &str = "Block out two short decompression breaks in every day";
const DAILY_SOCIAL_STRATEGY: &str =
    "Tell the people you see every day that you are quitting and ask them not to offer";

pub struct StrategyBuilder;

impl StrategyBuilder {
    /// Strategies in a fixed order, truncated to [`MAX_CUSTOM_STRATEGIES`].
    pub fn build(responses: &ResponseRecord) -> Vec<String> {
        let mut strategies: Vec<&str> = responses.known_triggers().map(trigger_strategy).collect();

        if responses.has_poor_sleep() {
            strategies.push(POOR_SLEEP_STRATEGY);
        }
        if responses.is_high_stress() {
            strategies.push(HIGH_STRESS_STRATEGY);
        }
        if responses.is_daily_social() {
            strategies.push(DAILY_SOCIAL_STRATEGY);
        }

        strategies
            .into_iter()
            .take(MAX_CUSTOM_STRATEGIES)
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::{SleepQuality, SocialContext, StressLevel};

    #[test]
    fn empty_record_has_no_strategies() {
        assert!(StrategyBuilder::build(&ResponseRecord::default()).is_empty());
    }

    #[test]
    fn repeated_trigger_yields_one_strategy() {
        let record = ResponseRecord {
            triggers: vec!["stress".into(); 4],
            ..Default::default()
        };
        assert_eq!(
            StrategyBuilder::build(&record),
            vec![trigger_strategy(Trigger::Stress).to_string()]
        );
    }

    #[test]
    fn lifestyle_strategies_follow_trigger_strategies() {
        let record = ResponseRecord {
            triggers: vec!["boredom".into()],
            sleep_quality: Some(SleepQuality::Poor),
            stress_level: Some(StressLevel::High),
            ..Default::default()
        };
        assert_eq!(
            StrategyBuilder::build(&record),
            vec![
                trigger_strategy(Trigger::Boredom).to_string(),
                POOR_SLEEP_STRATEGY.to_string(),
                HIGH_STRESS_STRATEGY.to_string(),
            ]
        );
    }

    #[test]
    fn truncates_to_six() {
        let record = ResponseRecord {
            triggers: vec!["stress".into(), "boredom".into(), "social".into(), "routine".into()],
            sleep_quality: Some(SleepQuality::Poor),
            stress_level: Some(StressLevel::High),
            social_context: Some(SocialContext::Daily),
            ..Default::default()
        };
        let strategies = StrategyBuilder::build(&record);
        assert_eq!(strategies.len(), MAX_CUSTOM_STRATEGIES);
        assert_eq!(strategies[5], HIGH_STRESS_STRATEGY);
        assert!(!strategies.iter().any(|s| s == DAILY_SOCIAL_STRATEGY));
    }

    #[test]
    fn fair_sleep_and_medium_stress_add_nothing() {
        let record = ResponseRecord {
            sleep_quality: Some(SleepQuality::Fair),
            stress_level: Some(StressLevel::Medium),
            social_context: Some(SocialContext::Sometimes),
            ..Default::default()
        };
        assert!(StrategyBuilder::build(&record).is_empty());
    }
}
