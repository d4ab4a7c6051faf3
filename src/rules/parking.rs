//! Parking advice: high-volume days, shift-exit proximity and the credential tip.

use chrono::NaiveDateTime;

use crate::Answer;
use crate::config::ParkingRules;
use crate::rules::helpers::{is_near_exit_time, matching_spans};
use crate::rules::messages;

/// ```text
/// [high-volume day?] [not near a shift exit?] [credential tip]
/// ```
///
/// The alternate exit pays off when the student is *not* leaving together
/// with a shift, so that message is gated on the negated proximity check.
pub fn evaluate_parking(rules: &ParkingRules, now: NaiveDateTime) -> Vec<Answer> {
    let spans = matching_spans(&rules.high_volume_dates, now);
    let near_exit = is_near_exit_time(&rules.shift_ending_times, now);

    tracing::debug!(%now, high_volume_spans = spans.len(), near_exit, "evaluating parking");

    let mut answers = Vec::with_capacity(3);
    if !spans.is_empty() {
        answers.push(Answer::advice(messages::PARKING_HIGH_VOLUME));
    }
    if !near_exit {
        answers.push(Answer::advice(messages::PARKING_ALTERNATE_EXIT));
    }
    answers.push(Answer::tip(messages::PARKING_CREDENTIAL_TIP));
    answers
}
