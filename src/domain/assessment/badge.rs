//! Identity badges awarded from the user's primary motivation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Timestamp;
use crate::domain::intake::Motivation;

/// Identity badge shown alongside the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BadgeType {
    VapeBreaker,
    CloudWarrior,
    LifeGuardian,
    WealthBuilder,
}

impl BadgeType {
    /// Badge for a motivation. Anything other than the four mapped
    /// motivations gets the health badge.
    pub fn for_motivation(motivation: Option<Motivation>) -> Self {
        match motivation {
            Some(Motivation::Health) => BadgeType::VapeBreaker,
            Some(Motivation::Control) => BadgeType::CloudWarrior,
            Some(Motivation::Family) => BadgeType::LifeGuardian,
            Some(Motivation::Money) => BadgeType::WealthBuilder,
            Some(Motivation::Other) | None => BadgeType::VapeBreaker,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BadgeType::VapeBreaker => "VapeBreaker",
            BadgeType::CloudWarrior => "CloudWarrior",
            BadgeType::LifeGuardian => "LifeGuardian",
            BadgeType::WealthBuilder => "WealthBuilder",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BadgeType::VapeBreaker => "Breaking free for your health, one clear breath at a time.",
            BadgeType::CloudWarrior => "Taking back control from every craving.",
            BadgeType::LifeGuardian => "Quitting for the people who matter most.",
            BadgeType::WealthBuilder => "Turning every skipped purchase into real savings.",
        }
    }
}

impl fmt::Display for BadgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A badge as awarded to one user at one moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBadge {
    #[serde(rename = "type")]
    pub badge_type: BadgeType,
    pub display_name: String,
    pub description: String,
    pub assigned_at: Timestamp,
    /// The motivation answer exactly as given.
    pub motivation: String,
}

/// Assigns identity badges.
pub struct BadgeAssigner;

impl BadgeAssigner {
    /// Assigns the badge for a raw motivation answer, stamped with `assigned_at`.
    ///
    /// The caller supplies the time so that assignment stays deterministic.
    pub fn assign(motivation: &str, assigned_at: Timestamp) -> UserBadge {
        let badge_type = BadgeType::for_motivation(Motivation::from_answer(motivation));

        UserBadge {
            badge_type,
            display_name: badge_type.display_name().to_string(),
            description: badge_type.description().to_string(),
            assigned_at,
            motivation: motivation.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_time() -> Timestamp {
        Timestamp::from_unix_secs(1704326400)
    }

    #[test]
    fn each_motivation_maps_to_its_badge() {
        for (motivation, expected) in [
            ("health", BadgeType::VapeBreaker),
            ("control", BadgeType::CloudWarrior),
            ("family", BadgeType::LifeGuardian),
            ("money", BadgeType::WealthBuilder),
        ] {
            assert_eq!(BadgeAssigner::assign(motivation, fixed_time()).badge_type, expected);
        }
    }

    #[test]
    fn family_badge_carries_display_name() {
        let badge = BadgeAssigner::assign("family", fixed_time());
        assert_eq!(badge.badge_type, BadgeType::LifeGuardian);
        assert_eq!(badge.display_name, "LifeGuardian");
        assert_eq!(badge.motivation, "family");
    }

    #[test]
    fn unmatched_motivation_falls_back_to_health_badge() {
        for motivation in ["unknown", "other", "", "HEALTH"] {
            let badge = BadgeAssigner::assign(motivation, fixed_time());
            assert_eq!(badge.badge_type, BadgeType::VapeBreaker, "motivation {motivation:?}");
            assert_eq!(badge.motivation, motivation);
        }
    }

    #[test]
    fn assignment_is_stamped_with_supplied_time() {
        let badge = BadgeAssigner::assign("money", fixed_time());
        assert_eq!(badge.assigned_at, fixed_time());
    }

    #[test]
    fn same_input_and_time_give_identical_badges() {
        assert_eq!(
            BadgeAssigner::assign("control", fixed_time()),
            BadgeAssigner::assign("control", fixed_time())
        );
    }

    #[test]
    fn badge_serializes_type_key() {
        let json = serde_json::to_value(BadgeAssigner::assign("money", fixed_time())).unwrap();
        assert_eq!(json["type"], "WealthBuilder");
        assert_eq!(json["displayName"], "WealthBuilder");
        assert!(json["assignedAt"].as_str().unwrap().starts_with("2024-01-04"));
    }
}
