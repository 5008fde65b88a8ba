//! GenerateQuitPlanHandler - Runs the full intake-to-plan pipeline.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::domain::assessment::{
    BadgeAssigner, DependencyScore, DependencyScorer, RiskAssessment, RiskScorer, UserBadge,
};
use crate::domain::intake::ResponseRecord;
use crate::domain::plan::{PersonalizedPlan, PlanSynthesizer};
use crate::ports::Clock;

/// Command to generate a plan from completed intake answers.
#[derive(Debug, Clone)]
pub struct GenerateQuitPlanCommand {
    pub responses: ResponseRecord,
}

/// Everything computed from one intake, as one immutable snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuitPlanResult {
    pub badge: UserBadge,
    pub dependency_score: DependencyScore,
    pub risk_assessment: RiskAssessment,
    pub plan: PersonalizedPlan,
}

/// Handler for generating quit plans.
///
/// Holds no mutable state; one instance can serve any number of threads.
pub struct GenerateQuitPlanHandler {
    clock: Arc<dyn Clock>,
}

impl GenerateQuitPlanHandler {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn handle(&self, cmd: GenerateQuitPlanCommand) -> QuitPlanResult {
        let responses = &cmd.responses;

        // 1. Independent assessments
        let dependency_score = DependencyScorer::score(responses);
        let risk_assessment = RiskScorer::score(responses);
        let badge = BadgeAssigner::assign(
            responses.primary_motivation.as_deref().unwrap_or_default(),
            self.clock.now(),
        );

        debug!(
            risk_score = risk_assessment.score,
            risk_level = %risk_assessment.level,
            dependency_total = dependency_score.total.value(),
            dependency_level = %dependency_score.risk_level,
            badge = %badge.badge_type,
            "Assessed intake responses"
        );

        // 2. Plan from the risk tier
        let plan = PlanSynthesizer::build_plan(responses, &risk_assessment);

        debug!(
            checklist_items = plan.day0_checklist.len(),
            priority_tools = plan.priority_tools.len(),
            nrt_recommendations = plan.nrt_recommendations.len(),
            expected_challenges = plan.expected_challenges.len(),
            custom_strategies = plan.custom_strategies.len(),
            "Synthesized personalized plan"
        );

        QuitPlanResult {
            badge,
            dependency_score,
            risk_assessment,
            plan,
        }
    }
}
