//! Dependency Scorer - a 0-100 behavioral dependency score.
//!
//! Weighted independently of the risk scorer and read against its own
//! answer vocabulary (`within_5_min`, `every_hour`, ...). The two scores are
//! never merged.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::DependencyPoints;
use crate::domain::intake::{ChoiceVsNeed, ResponseRecord};

/// Time to first use after waking, as the dependency questionnaire spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorningUseWindow {
    Within5Min,
    Within30Min,
    Within1Hour,
    After1Hour,
}

impl MorningUseWindow {
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer {
            "within_5_min" => Some(Self::Within5Min),
            "within_30_min" => Some(Self::Within30Min),
            "within_1_hour" => Some(Self::Within1Hour),
            "after_1_hour" => Some(Self::After1Hour),
            _ => None,
        }
    }

    fn points(&self) -> u8 {
        match self {
            MorningUseWindow::Within5Min => 25,
            MorningUseWindow::Within30Min => 20,
            MorningUseWindow::Within1Hour => 10,
            MorningUseWindow::After1Hour => 0,
        }
    }
}

/// How often nicotine is used through the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsageFrequency {
    Every5Min,
    Every30Min,
    EveryHour,
    FewTimesDay,
}

impl UsageFrequency {
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer {
            "every_5_min" => Some(Self::Every5Min),
            "every_30_min" => Some(Self::Every30Min),
            "every_hour" => Some(Self::EveryHour),
            "few_times_day" => Some(Self::FewTimesDay),
            _ => None,
        }
    }

    fn points(&self) -> u8 {
        match self {
            UsageFrequency::Every5Min => 25,
            UsageFrequency::Every30Min => 20,
            UsageFrequency::EveryHour => 15,
            UsageFrequency::FewTimesDay => 5,
        }
    }
}

/// Four-tier dependency classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DependencyRiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl DependencyRiskLevel {
    /// Classifies a total. Thresholds are inclusive lower bounds.
    pub fn from_total(total: DependencyPoints) -> Self {
        match total.value() {
            75..=u8::MAX => DependencyRiskLevel::Critical,
            50..=74 => DependencyRiskLevel::High,
            25..=49 => DependencyRiskLevel::Moderate,
            _ => DependencyRiskLevel::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DependencyRiskLevel::Low => "Low",
            DependencyRiskLevel::Moderate => "Moderate",
            DependencyRiskLevel::High => "High",
            DependencyRiskLevel::Critical => "Critical",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DependencyRiskLevel::Low => {
                "Your dependency is mild. Building new routines now will make quitting smoother."
            }
            DependencyRiskLevel::Moderate => {
                "You show a moderate dependency. A structured plan and craving tools will make a real difference."
            }
            DependencyRiskLevel::High => {
                "Your dependency is significant. Combining craving tools with outside support greatly improves your odds."
            }
            DependencyRiskLevel::Critical => {
                "Your dependency is very strong. Nicotine replacement and daily support are highly recommended."
            }
        }
    }
}

impl fmt::Display for DependencyRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-component points. Each field is bounded by its `*_MAX` constant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyBreakdown {
    pub morning_dependency: u8,
    pub usage_frequency: u8,
    pub behavioral_compulsion: u8,
    pub environmental_factors: u8,
    pub struggle_count: u8,
}

impl DependencyBreakdown {
    pub const MORNING_DEPENDENCY_MAX: u8 = 25;
    pub const USAGE_FREQUENCY_MAX: u8 = 25;
    pub const BEHAVIORAL_COMPULSION_MAX: u8 = 20;
    pub const ENVIRONMENTAL_FACTORS_MAX: u8 = 15;
    pub const STRUGGLE_COUNT_MAX: u8 = 15;

    /// Sum of all components, clamped to the 0-100 scale.
    pub fn total(&self) -> DependencyPoints {
        let sum: u16 = [
            self.morning_dependency,
            self.usage_frequency,
            self.behavioral_compulsion,
            self.environmental_factors,
            self.struggle_count,
        ]
        .iter()
        .map(|&points| u16::from(points))
        .sum();

        DependencyPoints::new(u8::try_from(sum).unwrap_or(u8::MAX))
    }
}

/// Scored dependency with its classification and explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyScore {
    pub total: DependencyPoints,
    pub risk_level: DependencyRiskLevel,
    pub breakdown: DependencyBreakdown,
    pub risk_description: String,
}

impl DependencyScore {
    pub fn from_breakdown(breakdown: DependencyBreakdown) -> Self {
        let total = breakdown.total();
        let risk_level = DependencyRiskLevel::from_total(total);
        Self {
            total,
            risk_level,
            breakdown,
            risk_description: risk_level.description().to_string(),
        }
    }
}

/// Scorer for behavioral dependency.
pub struct DependencyScorer;

impl DependencyScorer {
    pub fn score(responses: &ResponseRecord) -> DependencyScore {
        let breakdown = DependencyBreakdown {
            morning_dependency: Self::morning_dependency(responses),
            usage_frequency: Self::usage_frequency(responses),
            behavioral_compulsion: Self::behavioral_compulsion(responses),
            environmental_factors: Self::environmental_factors(responses),
            struggle_count: Self::struggle_count(responses),
        };

        DependencyScore::from_breakdown(breakdown)
    }

    fn morning_dependency(responses: &ResponseRecord) -> u8 {
        responses
            .first_use_time()
            .and_then(MorningUseWindow::from_answer)
            .map(|window| window.points())
            .unwrap_or(0)
    }

    fn usage_frequency(responses: &ResponseRecord) -> u8 {
        responses
            .usage_tag()
            .and_then(UsageFrequency::from_answer)
            .map(|frequency| frequency.points())
            .unwrap_or(0)
    }

    fn behavioral_compulsion(responses: &ResponseRecord) -> u8 {
        match responses.choice_vs_need {
            Some(ChoiceVsNeed::GraduallyMonths) => 20,
            Some(ChoiceVsNeed::WithinWeeks) => 15,
            Some(ChoiceVsNeed::WithinDays) => 10,
            Some(ChoiceVsNeed::StillChoice) | Some(ChoiceVsNeed::Unrecognized) | None => 0,
        }
    }

    fn environmental_factors(responses: &ResponseRecord) -> u8 {
        let mut points = 0;
        if responses.is_daily_social() {
            points += 4;
        }
        if responses.is_high_stress() {
            points += 4;
        }
        if responses.has_poor_sleep() {
            points += 3;
        }
        if responses.has_multiple_attempts() {
            points += 4;
        }
        points
    }

    fn struggle_count(responses: &ResponseRecord) -> u8 {
        let points = responses
            .struggle_count()
            .saturating_mul(2)
            .min(usize::from(DependencyBreakdown::STRUGGLE_COUNT_MAX));
        // Bounded by STRUGGLE_COUNT_MAX above.
        points as u8
    }
}
