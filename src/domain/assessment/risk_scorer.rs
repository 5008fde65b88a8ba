//! Risk Scorer - additive relapse-risk points and the three-tier level
//! that selects plan content.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::intake::{ResponseRecord, SocialContext, StressLevel, SubstanceType};

/// Score at or above which risk is high.
pub const HIGH_RISK_THRESHOLD: u32 = 8;

/// Score at or above which risk is medium.
pub const MEDIUM_RISK_THRESHOLD: u32 = 4;

/// Descending (threshold, points) ladder for daily cigarettes.
const CIGARETTE_USAGE_LADDER: [(f64, u32); 3] = [(20.0, 3), (10.0, 2), (5.0, 1)];

/// Descending (threshold, points) ladder for daily vape sessions.
const VAPE_USAGE_LADDER: [(f64, u32); 3] = [(3.0, 3), (2.0, 2), (1.0, 1)];

/// How soon after waking the first use happens, as the risk questionnaire
/// spells it (`within-5min`, `within-30min`, `within-1hour`, `later`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FirstUseWindow {
    Within5Min,
    Within30Min,
    Within1Hour,
    Later,
}

impl FirstUseWindow {
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer {
            "within-5min" => Some(Self::Within5Min),
            "within-30min" => Some(Self::Within30Min),
            "within-1hour" => Some(Self::Within1Hour),
            "later" => Some(Self::Later),
            _ => None,
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            FirstUseWindow::Within5Min => 3,
            FirstUseWindow::Within30Min => 2,
            FirstUseWindow::Within1Hour => 1,
            FirstUseWindow::Later => 0,
        }
    }

    /// First use within half an hour of waking.
    pub fn is_early(&self) -> bool {
        matches!(self, FirstUseWindow::Within5Min | FirstUseWindow::Within30Min)
    }
}

/// Three-tier risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classifies a score. Thresholds are inclusive lower bounds.
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scored relapse risk. Has no upper bound on `score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u32,
    pub level: RiskLevel,
}

impl RiskAssessment {
    /// Builds an assessment whose level always agrees with its score.
    pub fn from_score(score: u32) -> Self {
        Self {
            score,
            level: RiskLevel::from_score(score),
        }
    }
}

/// Scorer for relapse risk.
///
/// Each rule is independent; unrecognized or missing answers add nothing.
pub struct RiskScorer;

impl RiskScorer {
    pub fn score(responses: &ResponseRecord) -> RiskAssessment {
        let score = Self::first_use_points(responses)
            + Self::usage_intensity_points(responses)
            + Self::social_points(responses)
            + Self::stress_points(responses)
            + Self::sleep_points(responses)
            + Self::attempt_points(responses)
            + Self::trigger_points(responses);

        RiskAssessment::from_score(score)
    }

    fn first_use_points(responses: &ResponseRecord) -> u32 {
        responses
            .first_use_time()
            .and_then(FirstUseWindow::from_answer)
            .map(|window| window.points())
            .unwrap_or(0)
    }

    /// Points from daily usage, read against the ladder for the substance.
    ///
    /// The first threshold met wins. `both` and unknown substances have no
    /// ladder and score zero.
    pub fn usage_intensity_points(responses: &ResponseRecord) -> u32 {
        let Some(count) = responses.usage_count() else {
            return 0;
        };

        let ladder = match responses.substance_type {
            Some(SubstanceType::Cigarettes) => &CIGARETTE_USAGE_LADDER,
            Some(SubstanceType::Vape) => &VAPE_USAGE_LADDER,
            Some(SubstanceType::Both) | Some(SubstanceType::Unrecognized) | None => return 0,
        };

        ladder
            .iter()
            .find(|(threshold, _)| count >= *threshold)
            .map(|(_, points)| *points)
            .unwrap_or(0)
    }

    fn social_points(responses: &ResponseRecord) -> u32 {
        match responses.social_context {
            Some(SocialContext::Daily) => 2,
            Some(SocialContext::Sometimes) => 1,
            _ => 0,
        }
    }

    fn stress_points(responses: &ResponseRecord) -> u32 {
        match responses.stress_level {
            Some(StressLevel::High) => 2,
            Some(StressLevel::Medium) => 1,
            _ => 0,
        }
    }

    fn sleep_points(responses: &ResponseRecord) -> u32 {
        u32::from(responses.has_poor_sleep())
    }

    fn attempt_points(responses: &ResponseRecord) -> u32 {
        u32::from(responses.has_multiple_attempts())
    }

    fn trigger_points(responses: &ResponseRecord) -> u32 {
        match responses.trigger_count() {
            n if n >= 4 => 2,
            n if n >= 2 => 1,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::{PreviousAttempts, SleepQuality, UsageAmount};

    fn triggers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn heavy_smoker() -> ResponseRecord {
        ResponseRecord {
            first_use_time: Some("within-5min".to_string()),
            substance_type: Some(SubstanceType::Cigarettes),
            usage_amount: Some(UsageAmount::Count(20.0)),
            social_context: Some(SocialContext::Daily),
            stress_level: Some(StressLevel::High),
            sleep_quality: Some(SleepQuality::Poor),
            previous_attempts: Some(PreviousAttempts::Multiple),
            triggers: triggers(&["stress", "boredom", "social", "routine"]),
            ..Default::default()
        }
    }

    #[test]
    fn empty_record_scores_zero_and_low() {
        let assessment = RiskScorer::score(&ResponseRecord::default());
        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.level, RiskLevel::Low);
    }

    #[test]
    fn heavy_smoker_accumulates_every_rule() {
        // 3 + 3 + 2 + 2 + 1 + 1 + 2
        let assessment = RiskScorer::score(&heavy_smoker());
        assert_eq!(assessment.score, 14);
        assert_eq!(assessment.level, RiskLevel::High);
    }

    #[test]
    fn level_boundaries_are_inclusive_lower_bounds() {
        assert_eq!(RiskLevel::from_score(8), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(7), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(4), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(3), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(1000), RiskLevel::High);
    }

    #[test]
    fn first_use_window_points() {
        for (answer, expected) in [
            ("within-5min", 3),
            ("within-30min", 2),
            ("within-1hour", 1),
            ("later", 0),
            ("within_5_min", 0),
            ("", 0),
        ] {
            let record = ResponseRecord {
                first_use_time: Some(answer.to_string()),
                ..Default::default()
            };
            assert_eq!(RiskScorer::score(&record).score, expected, "answer {answer:?}");
        }
    }

    #[test]
    fn cigarette_ladder_takes_first_matching_threshold() {
        for (count, expected) in [(40.0, 3), (20.0, 3), (19.0, 2), (10.0, 2), (5.0, 1), (4.0, 0)] {
            let record = ResponseRecord {
                substance_type: Some(SubstanceType::Cigarettes),
                usage_amount: Some(UsageAmount::Count(count)),
                ..Default::default()
            };
            assert_eq!(RiskScorer::usage_intensity_points(&record), expected, "count {count}");
        }
    }

    #[test]
    fn vape_ladder_takes_first_matching_threshold() {
        for (count, expected) in [(5.0, 3), (3.0, 3), (2.0, 2), (1.0, 1), (0.5, 0)] {
            let record = ResponseRecord {
                substance_type: Some(SubstanceType::Vape),
                usage_amount: Some(UsageAmount::Count(count)),
                ..Default::default()
            };
            assert_eq!(RiskScorer::usage_intensity_points(&record), expected, "count {count}");
        }
    }

    #[test]
    fn usage_without_known_ladder_scores_zero() {
        let both = ResponseRecord {
            substance_type: Some(SubstanceType::Both),
            usage_amount: Some(UsageAmount::Count(30.0)),
            ..Default::default()
        };
        assert_eq!(RiskScorer::usage_intensity_points(&both), 0);

        let tagged = ResponseRecord {
            substance_type: Some(SubstanceType::Cigarettes),
            usage_amount: Some(UsageAmount::Tag("every_5_min".to_string())),
            ..Default::default()
        };
        assert_eq!(RiskScorer::usage_intensity_points(&tagged), 0);
    }

    #[test]
    fn trigger_count_thresholds() {
        for (names, expected) in [
            (vec![], 0),
            (vec!["stress"], 0),
            (vec!["stress", "social"], 1),
            (vec!["stress", "social", "routine"], 1),
            (vec!["stress", "social", "routine", "boredom"], 2),
            (vec!["a", "b", "c", "d", "e"], 2),
        ] {
            let record = ResponseRecord {
                triggers: triggers(&names),
                ..Default::default()
            };
            assert_eq!(RiskScorer::score(&record).score, expected);
        }
    }

    #[test]
    fn repeated_trigger_counts_once() {
        let record = ResponseRecord {
            triggers: triggers(&["stress", "stress", "stress", "stress"]),
            ..Default::default()
        };
        assert_eq!(RiskScorer::score(&record).score, 0);
    }

    #[test]
    fn infinite_usage_tag_scores_no_usage_points() {
        let record = ResponseRecord {
            substance_type: Some(SubstanceType::Cigarettes),
            usage_amount: Some(UsageAmount::Tag("inf".to_string())),
            ..Default::default()
        };
        assert_eq!(RiskScorer::usage_intensity_points(&record), 0);
    }

    #[test]
    fn sometimes_social_and_medium_stress_add_one_each() {
        let record = ResponseRecord {
            social_context: Some(SocialContext::Sometimes),
            stress_level: Some(StressLevel::Medium),
            ..Default::default()
        };
        assert_eq!(RiskScorer::score(&record).score, 2);
    }

    #[test]
    fn unrecognized_answers_contribute_nothing() {
        let record = ResponseRecord {
            substance_type: Some(SubstanceType::Unrecognized),
            usage_amount: Some(UsageAmount::Count(50.0)),
            social_context: Some(SocialContext::Unrecognized),
            stress_level: Some(StressLevel::Unrecognized),
            sleep_quality: Some(SleepQuality::Unrecognized),
            previous_attempts: Some(PreviousAttempts::Unrecognized),
            ..Default::default()
        };
        assert_eq!(RiskScorer::score(&record).score, 0);
    }

    #[test]
    fn risk_level_serializes_lowercase() {
        let json = serde_json::to_string(&RiskAssessment::from_score(9)).unwrap();
        assert_eq!(json, r#"{"score":9,"level":"high"}"#);
    }

    #[test]
    fn early_first_use_covers_thirty_minutes() {
        assert!(FirstUseWindow::Within5Min.is_early());
        assert!(FirstUseWindow::Within30Min.is_early());
        assert!(!FirstUseWindow::Within1Hour.is_early());
        assert!(!FirstUseWindow::Later.is_early());
    }
}
