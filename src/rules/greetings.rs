use chrono::{NaiveDateTime, Timelike};

use crate::Answer;
use crate::rules::messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Salutation {
    Morning,
    Afternoon,
    Evening,
}

impl Salutation {
    /// `[5, 12)` morning, `[12, 18)` afternoon, anything else evening.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Salutation::Morning,
            12..=17 => Salutation::Afternoon,
            _ => Salutation::Evening,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Salutation::Morning => messages::GOOD_MORNING,
            Salutation::Afternoon => messages::GOOD_AFTERNOON,
            Salutation::Evening => messages::GOOD_EVENING,
        }
    }
}

pub fn evaluate_greetings(now: NaiveDateTime) -> Vec<Answer> {
    vec![Answer::advice(Salutation::from_hour(now.hour()).message())]
}
