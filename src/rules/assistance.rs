//! Service-desk advice. Shares the high-volume calendar with parking.

use chrono::NaiveDateTime;

use crate::Answer;
use crate::config::ParkingRules;
use crate::rules::helpers::is_high_volume;
use crate::rules::messages;

pub fn evaluate_assistance(rules: &ParkingRules, now: NaiveDateTime) -> Vec<Answer> {
    let high_volume = is_high_volume(&rules.high_volume_dates, now);
    tracing::debug!(%now, high_volume, "evaluating assistance");

    let mut answers = Vec::with_capacity(2);
    if high_volume {
        answers.push(Answer::advice(messages::ASSISTANCE_HIGH_VOLUME));
    }
    answers.push(Answer::tip(messages::ASSISTANCE_TIP));
    answers
}
