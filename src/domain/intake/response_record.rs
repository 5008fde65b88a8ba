//! The sparse record of intake answers consumed by every scorer and builder.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::answers::{
    ChoiceVsNeed, NrtInterest, PreviousAttempts, QuitTimeline, SleepQuality, SocialContext,
    StressLevel, SubstanceType, Trigger,
};

/// The `usageAmount` answer.
///
/// The risk scorer reads it as a daily count (cigarettes or vape sessions);
/// the dependency scorer reads it as a frequency tag such as `every_hour`.
/// Both shapes arrive under the same key, so both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UsageAmount {
    Count(f64),
    Tag(String),
}

impl UsageAmount {
    /// Numeric view of the answer.
    ///
    /// A tag that is itself a number (`"20"`) counts; anything else is `None`.
    pub fn as_count(&self) -> Option<f64> {
        match self {
            UsageAmount::Count(n) => Some(*n),
            UsageAmount::Tag(tag) => tag.trim().parse().ok().filter(|n: &f64| n.is_finite()),
        }
    }

    /// Frequency-tag view of the answer.
    pub fn as_tag(&self) -> Option<&str> {
        match self {
            UsageAmount::Tag(tag) => Some(tag.as_str()),
            UsageAmount::Count(_) => None,
        }
    }
}

/// Intake answers keyed by question.
///
/// Every field may be absent. `firstUseTime` stays a raw string because the
/// two scorers read it against different vocabularies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_motivation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substance_type: Option<SubstanceType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_amount: Option<UsageAmount>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_use_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice_vs_need: Option<ChoiceVsNeed>,

    #[serde(default)]
    pub triggers: Vec<String>,

    #[serde(default)]
    pub struggles: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_context: Option<SocialContext>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<StressLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_quality: Option<SleepQuality>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_attempts: Option<PreviousAttempts>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quit_timeline: Option<QuitTimeline>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nrt_interest: Option<NrtInterest>,
}

impl ResponseRecord {
    /// Returns true if the given trigger was reported.
    pub fn has_trigger(&self, trigger: Trigger) -> bool {
        self.triggers.iter().any(|t| t == trigger.as_str())
    }

    /// Reported triggers with repeats dropped, in first-seen order.
    pub fn distinct_triggers(&self) -> impl Iterator<Item = &str> + '_ {
        first_seen(&self.triggers)
    }

    /// Recognized triggers, each once, in the order they were answered.
    pub fn known_triggers(&self) -> impl Iterator<Item = Trigger> + '_ {
        self.distinct_triggers().filter_map(Trigger::from_answer)
    }

    /// Number of different triggers reported.
    pub fn trigger_count(&self) -> usize {
        self.distinct_triggers().count()
    }

    /// Number of different struggles reported.
    pub fn struggle_count(&self) -> usize {
        first_seen(&self.struggles).count()
    }

    /// Usage amount as a daily count, if one was given.
    pub fn usage_count(&self) -> Option<f64> {
        self.usage_amount.as_ref().and_then(UsageAmount::as_count)
    }

    /// Usage amount as a frequency tag, if one was given.
    pub fn usage_tag(&self) -> Option<&str> {
        self.usage_amount.as_ref().and_then(UsageAmount::as_tag)
    }

    pub fn first_use_time(&self) -> Option<&str> {
        self.first_use_time.as_deref()
    }

    pub fn is_daily_social(&self) -> bool {
        self.social_context == Some(SocialContext::Daily)
    }

    pub fn is_high_stress(&self) -> bool {
        self.stress_level == Some(StressLevel::High)
    }

    pub fn has_poor_sleep(&self) -> bool {
        self.sleep_quality == Some(SleepQuality::Poor)
    }

    pub fn has_multiple_attempts(&self) -> bool {
        self.previous_attempts == Some(PreviousAttempts::Multiple)
    }
}

/// `triggers` and `struggles` are answer sets; repeats carry no weight.
fn first_seen(items: &[String]) -> impl Iterator<Item = &str> + '_ {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(String::as_str)
        .filter(move |item| seen.insert(*item))
}
