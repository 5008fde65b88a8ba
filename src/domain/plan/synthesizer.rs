//! Plan Synthesizer - assembles the personalized plan from its builders.

use serde::{Deserialize, Serialize};

use super::challenges::ChallengePredictor;
use super::checklist::ChecklistBuilder;
use super::motivation::MotivationalMessageSelector;
use super::nrt_advisor::NrtAdvisor;
use super::strategies::StrategyBuilder;
use super::tool_priority::ToolPriorityBuilder;
use crate::domain::assessment::{RiskAssessment, RiskLevel};
use crate::domain::intake::ResponseRecord;

/// The personalized action plan handed to the presentation layer.
///
/// Every field is populated for any input, including an empty record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedPlan {
    pub risk_level: RiskLevel,
    pub risk_score: u32,
    pub day0_checklist: Vec<String>,
    pub priority_tools: Vec<String>,
    pub nrt_recommendations: Vec<String>,
    pub expected_challenges: Vec<String>,
    pub motivational_message: String,
    pub custom_strategies: Vec<String>,
}

pub struct PlanSynthesizer;

impl PlanSynthesizer {
    /// Builds the plan for the given answers at the assessed risk.
    ///
    /// The builders share no state, so their order here is cosmetic.
    pub fn build_plan(responses: &ResponseRecord, risk: &RiskAssessment) -> PersonalizedPlan {
        PersonalizedPlan {
            risk_level: risk.level,
            risk_score: risk.score,
            day0_checklist: ChecklistBuilder::build(risk.level),
            priority_tools: ToolPriorityBuilder::build(responses, risk.level),
            nrt_recommendations: NrtAdvisor::advise(responses),
            expected_challenges: ChallengePredictor::predict(responses, risk.level),
            motivational_message: MotivationalMessageSelector::select(responses),
            custom_strategies: StrategyBuilder::build(responses),
        }
    }
}
