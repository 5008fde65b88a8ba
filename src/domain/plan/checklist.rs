//! Day-zero checklist: a fixed base list plus the tasks for the risk tier.

use crate::domain::assessment::RiskLevel;

/// Tasks every plan starts with.
pub const BASE_CHECKLIST: [&str; 4] = [
    "Throw away every cigarette, vape, pod, and lighter you own",
    "Tell one person you trust that today is your quit day",
    "Drink a full glass of water whenever a craving starts",
    "Open the app tonight and log how your first day went",
];

const HIGH_RISK_CHECKLIST: [&str; 5] = [
    "Clear spare devices and stashes out of your car, bag, and desk",
    "Set a reminder for a two-minute breathing break every two hours",
    "Pick a support buddy you can text the moment a craving hits",
    "Plan what you will do instead of your first use tomorrow morning",
    "Ask a pharmacist about nicotine replacement before the day ends",
];

const MEDIUM_RISK_CHECKLIST: [&str; 4] = [
    "Write down the three moments you expect cravings tomorrow",
    "Stock up on gum, mints, or crunchy snacks for your hands and mouth",
    "Practice one breathing exercise before bed",
    "Decide what you will do during your usual break times",
];

const LOW_RISK_CHECKLIST: [&str; 3] = [
    "Write your number one reason for quitting where you will see it",
    "Plan a reward for your first nicotine-free week",
    "Try one craving tool before bed so it is ready when you need it",
];

pub struct ChecklistBuilder;

impl ChecklistBuilder {
    /// Base tasks followed by the tier tasks. Never deduplicated or capped.
    pub fn build(level: RiskLevel) -> Vec<String> {
        let tier: &[&str] = match level {
            RiskLevel::High => &HIGH_RISK_CHECKLIST,
            RiskLevel::Medium => &MEDIUM_RISK_CHECKLIST,
            RiskLevel::Low => &LOW_RISK_CHECKLIST,
        };

        BASE_CHECKLIST
            .iter()
            .chain(tier)
            .map(|task| task.to_string())
            .collect()
    }
}
