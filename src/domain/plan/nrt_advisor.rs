//! NRT Advisor - nicotine replacement guidance.

use crate::domain::assessment::{FirstUseWindow, RiskScorer};
use crate::domain::intake::{NrtInterest, ResponseRecord};

/// Maximum number of NRT recommendations in a plan.
pub const MAX_NRT_RECOMMENDATIONS: usize = 5;

/// Usage-intensity points at which a user counts as a heavy user
/// (10+ cigarettes or 2+ vape sessions a day).
const HEAVY_USE_POINTS: u32 = 2;

const ALREADY_USING: [&str; 2] = [
    "Keep using your current NRT exactly as directed and do not stop early",
    "Work out a gradual step-down with your pharmacist over the next 8 to 12 weeks",
];

const COMBINATION_THERAPY: [&str; 3] = [
    "Combination therapy works best for your level of use: a daily patch plus a fast-acting form such as gum, lozenge, or spray",
    "Put the patch on first thing on quit morning, before your usual first use",
    "Use the fast-acting form for breakthrough cravings, staying within the label maximum",
];

const SITUATIONAL: [&str; 2] = [
    "A fast-acting form such as gum or a lozenge can cover the moments cravings peak",
    "Keep it with you in the situations where you would normally use",
];

const CLOSING: [&str; 2] = [
    "Check with a pharmacist or doctor before starting, especially if you are pregnant or take other medication",
    "Plan to use NRT for at least 8 weeks for the best chance of staying quit",
];

pub struct NrtAdvisor;

impl NrtAdvisor {
    pub fn advise(responses: &ResponseRecord) -> Vec<String> {
        match responses.nrt_interest {
            Some(NrtInterest::No) => Vec::new(),
            Some(NrtInterest::AlreadyUsing) => to_strings(&ALREADY_USING),
            Some(NrtInterest::Yes)
            | Some(NrtInterest::Maybe)
            | Some(NrtInterest::Unrecognized)
            | None => {
                let opening: &[&str] =
                    if Self::is_high_dependency(responses) || Self::is_heavy_user(responses) {
                        &COMBINATION_THERAPY
                    } else {
                        &SITUATIONAL
                    };
                opening.iter().chain(&CLOSING).map(|s| s.to_string()).collect()
            }
        }
    }

    /// First use within thirty minutes of waking.
    pub fn is_high_dependency(responses: &ResponseRecord) -> bool {
        responses
            .first_use_time()
            .and_then(FirstUseWindow::from_answer)
            .is_some_and(|window| window.is_early())
    }

    pub fn is_heavy_user(responses: &ResponseRecord) -> bool {
        RiskScorer::usage_intensity_points(responses) >= HEAVY_USE_POINTS
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
