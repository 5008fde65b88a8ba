//! Categorical answer vocabularies collected during intake.
//!
//! Each serde-backed enum carries an `Unrecognized` catch-all so that an
//! answer outside the known vocabulary deserializes cleanly and contributes
//! nothing downstream. `Motivation` and `Trigger` are parsed from raw strings
//! with `from_answer` instead.

use serde::{Deserialize, Serialize};

/// What the user names as their main reason for quitting.
///
/// Kept separate from the raw `primaryMotivation` answer because the badge
/// records the answer exactly as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motivation {
    Health,
    Money,
    Family,
    Control,
    Other,
}

impl Motivation {
    /// Parses a raw answer, returning `None` for anything unknown.
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer {
            "health" => Some(Self::Health),
            "money" => Some(Self::Money),
            "family" => Some(Self::Family),
            "control" => Some(Self::Control),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubstanceType {
    Cigarettes,
    Vape,
    Both,
    #[serde(other)]
    Unrecognized,
}

/// How quickly use stopped feeling optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceVsNeed {
    GraduallyMonths,
    WithinWeeks,
    WithinDays,
    StillChoice,
    #[serde(other)]
    Unrecognized,
}

/// How often the user is around other people who use nicotine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialContext {
    Daily,
    Sometimes,
    Rarely,
    Never,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    High,
    Medium,
    Low,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    Poor,
    Fair,
    Good,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviousAttempts {
    Never,
    Once,
    Multiple,
    #[serde(other)]
    Unrecognized,
}

/// When the user intends to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuitTimeline {
    Today,
    ThisWeek,
    NextWeek,
    ThisMonth,
    #[serde(other)]
    Unrecognized,
}

/// Interest in nicotine replacement therapy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NrtInterest {
    Yes,
    Maybe,
    No,
    AlreadyUsing,
    #[serde(other)]
    Unrecognized,
}

/// Situations the user reports as setting off cravings.
///
/// Triggers travel as free-form strings in the record; this is the subset
/// the plan builders react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Stress,
    Boredom,
    Social,
    Routine,
}

impl Trigger {
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer {
            "stress" => Some(Self::Stress),
            "boredom" => Some(Self::Boredom),
            "social" => Some(Self::Social),
            "routine" => Some(Self::Routine),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trigger::Stress => "stress",
            Trigger::Boredom => "boredom",
            Trigger::Social => "social",
            Trigger::Routine => "routine",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_timeline_uses_kebab_case_spelling() {
        let timeline: QuitTimeline = serde_json::from_str("\"this-week\"").unwrap();
        assert_eq!(timeline, QuitTimeline::ThisWeek);
        assert_eq!(
            serde_json::to_string(&QuitTimeline::NextWeek).unwrap(),
            "\"next-week\""
        );
    }

    #[test]
    fn nrt_interest_parses_already_using() {
        let interest: NrtInterest = serde_json::from_str("\"already-using\"").unwrap();
        assert_eq!(interest, NrtInterest::AlreadyUsing);
    }

    #[test]
    fn choice_vs_need_uses_snake_case_spelling() {
        let answer: ChoiceVsNeed = serde_json::from_str("\"gradually_months\"").unwrap();
        assert_eq!(answer, ChoiceVsNeed::GraduallyMonths);
    }

    #[test]
    fn unknown_answers_fall_into_unrecognized() {
        let stress: StressLevel = serde_json::from_str("\"extreme\"").unwrap();
        assert_eq!(stress, StressLevel::Unrecognized);

        let social: SocialContext = serde_json::from_str("\"hourly\"").unwrap();
        assert_eq!(social, SocialContext::Unrecognized);
    }

    #[test]
    fn motivation_parses_known_answers_only() {
        assert_eq!(Motivation::from_answer("family"), Some(Motivation::Family));
        assert_eq!(Motivation::from_answer("other"), Some(Motivation::Other));
        assert_eq!(Motivation::from_answer("Family"), None);
        assert_eq!(Motivation::from_answer(""), None);
    }

    #[test]
    fn trigger_round_trips_through_str() {
        for trigger in [Trigger::Stress, Trigger::Boredom, Trigger::Social, Trigger::Routine] {
            assert_eq!(Trigger::from_answer(trigger.as_str()), Some(trigger));
        }
        assert_eq!(Trigger::from_answer("alcohol"), None);
    }
}
