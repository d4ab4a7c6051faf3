use chrono::{Datelike, NaiveDateTime, NaiveTime};

use crate::config::{DateSpan, DateSpanTemplate};

/// Proximity window, in minutes, for "about to leave a shift".
pub const EXIT_WINDOW_MINUTES: i64 = 5;

/// Resolve every span against `now`'s year and keep the ones containing `now`.
///
/// All spans are evaluated; callers that only need a yes/no use
/// [`is_high_volume`].
pub fn matching_spans(spans: &[DateSpanTemplate], now: NaiveDateTime) -> Vec<DateSpan> {
    let today = now.date();
    spans.iter().filter_map(|t| t.resolve(today.year())).filter(|span| span.contains(today)).collect()
}

pub fn is_high_volume(spans: &[DateSpanTemplate], now: NaiveDateTime) -> bool {
    !matching_spans(spans, now).is_empty()
}

/// Absolute distance between two instants in whole minutes, rounded up.
pub fn minutes_apart(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    let delta = (a - b).abs();
    let seconds = delta.num_seconds() + i64::from(delta.subsec_nanos() != 0);
    (seconds + 59) / 60
}

/// The first shift-ending time (placed on `now`'s date) within
/// [`EXIT_WINDOW_MINUTES`] of `now`.
pub fn nearest_exit_time(times: &[NaiveTime], now: NaiveDateTime) -> Option<NaiveTime> {
    times.iter().copied().find(|&time| minutes_apart(now.date().and_time(time), now) <= EXIT_WINDOW_MINUTES)
}

pub fn is_near_exit_time(times: &[NaiveTime], now: NaiveDateTime) -> bool {
    nearest_exit_time(times, now).is_some()
}
