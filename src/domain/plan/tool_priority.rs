//! Tool priority - which in-app tools to surface first.

use crate::domain::assessment::RiskLevel;
use crate::domain::intake::{ResponseRecord, Trigger};

/// Maximum number of tools surfaced in a plan.
pub const MAX_PRIORITY_TOOLS: usize = 4;

/// In-app craving tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    SosButton,
    CravingTimer,
    UrgeSurfing,
    DistractionGames,
    ProgressTracker,
    SavingsCalculator,
    CravingJournal,
    BreathingExercise,
    SocialScripts,
}

impl ToolId {
    /// Display label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            ToolId::SosButton => "SOS Craving Help",
            ToolId::CravingTimer => "Craving Timer",
            ToolId::UrgeSurfing => "Urge Surfing",
            ToolId::DistractionGames => "Distraction Games",
            ToolId::ProgressTracker => "Progress Tracker",
            ToolId::SavingsCalculator => "Savings Calculator",
            ToolId::CravingJournal => "Craving Journal",
            ToolId::BreathingExercise => "Breathing Exercises",
            ToolId::SocialScripts => "Social Situation Scripts",
        }
    }
}

fn candidates(level: RiskLevel) -> [ToolId; 4] {
    match level {
        RiskLevel::High => [
            ToolId::SosButton,
            ToolId::CravingTimer,
            ToolId::UrgeSurfing,
            ToolId::DistractionGames,
        ],
        RiskLevel::Medium => [
            ToolId::CravingTimer,
            ToolId::UrgeSurfing,
            ToolId::ProgressTracker,
            ToolId::CravingJournal,
        ],
        RiskLevel::Low => [
            ToolId::ProgressTracker,
            ToolId::SavingsCalculator,
            ToolId::CravingJournal,
            ToolId::CravingTimer,
        ],
    }
}

pub struct ToolPriorityBuilder;

impl ToolPriorityBuilder {
    /// Tool ids in priority order, at most [`MAX_PRIORITY_TOOLS`].
    ///
    /// Stress puts breathing first; social adds scripts at the end, where it
    /// only survives truncation if the list was short.
    pub fn prioritize(responses: &ResponseRecord, level: RiskLevel) -> Vec<ToolId> {
        let mut tools = Vec::with_capacity(MAX_PRIORITY_TOOLS + 2);
        if responses.has_trigger(Trigger::Stress) {
            tools.push(ToolId::BreathingExercise);
        }
        tools.extend(candidates(level));
        if responses.has_trigger(Trigger::Social) {
            tools.push(ToolId::SocialScripts);
        }
        tools.truncate(MAX_PRIORITY_TOOLS);
        tools
    }

    /// Display labels for the prioritized tools.
    pub fn build(responses: &ResponseRecord, level: RiskLevel) -> Vec<String> {
        Self::prioritize(responses, level)
            .iter()
            .map(|tool| tool.label().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_triggers(names: &[&str]) -> ResponseRecord {
        ResponseRecord {
            triggers: names.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn no_triggers_returns_tier_candidates() {
        let tools = ToolPriorityBuilder::prioritize(&ResponseRecord::default(), RiskLevel::High);
        assert_eq!(tools, candidates(RiskLevel::High).to_vec());
    }

    #[test]
    fn stress_moves_breathing_to_front_and_drops_last_candidate() {
        let tools = ToolPriorityBuilder::prioritize(&with_triggers(&["stress"]), RiskLevel::Medium);
        assert_eq!(
            tools,
            vec![
                ToolId::BreathingExercise,
                ToolId::CravingTimer,
                ToolId::UrgeSurfing,
                ToolId::ProgressTracker,
            ]
        );
    }

    #[test]
    fn social_tool_is_truncated_away_behind_full_candidate_list() {
        let tools = ToolPriorityBuilder::prioritize(&with_triggers(&["social"]), RiskLevel::Low);
        assert_eq!(tools.len(), MAX_PRIORITY_TOOLS);
        assert!(!tools.contains(&ToolId::SocialScripts));
    }

    #[test]
    fn result_never_exceeds_cap() {
        for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            let tools = ToolPriorityBuilder::build(&with_triggers(&["stress", "social"]), level);
            assert_eq!(tools.len(), MAX_PRIORITY_TOOLS);
        }
    }

    #[test]
    fn build_maps_ids_to_labels() {
        let labels = ToolPriorityBuilder::build(&with_triggers(&["stress"]), RiskLevel::High);
        assert_eq!(labels[0], "Breathing Exercises");
        assert_eq!(labels[1], "SOS Craving Help");
    }
}
