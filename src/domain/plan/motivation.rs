//! Motivational message keyed by why and when the user is quitting.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::intake::{Motivation, QuitTimeline, ResponseRecord};

/// Message used whenever the (motivation, timeline) pair has no entry.
pub const FALLBACK_MESSAGE: &str =
    "Every craving you ride out makes the next one weaker. You have already taken the first step.";

static MESSAGES: Lazy<HashMap<(Motivation, QuitTimeline), &'static str>> = Lazy::new(|| {
    use Motivation::*;
    use QuitTimeline::*;

    HashMap::from([
        ((Health, Today), "Within 20 minutes of your last use your heart rate starts to settle. Your body begins healing today."),
        ((Health, ThisWeek), "In a few days your lungs start clearing out. This week is the start of breathing easier."),
        ((Health, NextWeek), "Use the days before quit day to get ready. Your lungs will thank you from the first morning."),
        ((Health, ThisMonth), "A month to prepare means a stronger start. Every healthy habit you build now carries you through."),
        ((Money, Today), "Your savings counter starts now. Watch it grow with every day you stay quit."),
        ((Money, ThisWeek), "By the end of this week the money you would have spent is already yours to keep."),
        ((Money, NextWeek), "Pick something to save for before quit day. Next week the money starts going there instead."),
        ((Money, ThisMonth), "Add up a month of spending and picture what it buys. That is your first reward."),
        ((Family, Today), "The people who love you get a healthier you starting today."),
        ((Family, ThisWeek), "This week you are giving your family more years together. Let them cheer you on."),
        ((Family, NextWeek), "Tell your family your quit day. Having them in your corner makes next week easier."),
        ((Family, ThisMonth), "Use this month to bring your family into the plan. You are doing this for them and with them."),
        ((Control, Today), "Starting today, nicotine stops making your decisions. You are back in charge."),
        ((Control, ThisWeek), "This week you take the controls back, one craving at a time."),
        ((Control, NextWeek), "You chose the date. That choice is the first sign you are already taking control."),
        ((Control, ThisMonth), "A planned quit is a controlled quit. Use this month to set the terms."),
    ])
});

pub struct MotivationalMessageSelector;

impl MotivationalMessageSelector {
    /// Looks up the message for the user's motivation and timeline.
    ///
    /// Independent of risk level.
    pub fn select(responses: &ResponseRecord) -> String {
        let motivation = responses
            .primary_motivation
            .as_deref()
            .and_then(Motivation::from_answer);

        motivation
            .zip(responses.quit_timeline)
            .and_then(|key| MESSAGES.get(&key).copied())
            .unwrap_or(FALLBACK_MESSAGE)
            .to_string()
    }
}
