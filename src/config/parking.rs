use super::{ConfigError, DateSpanTemplate};
use chrono::NaiveTime;
use serde::Deserialize;

/// Wire shape of `parkingRules.json`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawParkingRules {
    high_volume_dates: Vec<String>,
    shift_ending_times: Vec<String>,
}

/// Parking (and service-desk) tables.
///
/// `high_volume_dates` is shared with the assistance evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingRules {
    pub high_volume_dates: Vec<DateSpanTemplate>,
    pub shift_ending_times: Vec<NaiveTime>,
}

impl ParkingRules {
    /// Build from table-style strings: span templates and `HH:MM` times.
    pub fn new(high_volume_dates: &[&str], shift_ending_times: &[&str]) -> Result<Self, ConfigError> {
        Ok(ParkingRules {
            high_volume_dates: high_volume_dates.iter().map(|s| DateSpanTemplate::parse(s)).collect::<Result<_, _>>()?,
            shift_ending_times: shift_ending_times.iter().map(|s| parse_shift_time(s)).collect::<Result<_, _>>()?,
        })
    }

    pub(crate) fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawParkingRules =
            serde_json::from_str(json).map_err(|source| ConfigError::Json { table: super::PARKING_FILE, source })?;

        let spans: Vec<&str> = raw.high_volume_dates.iter().map(String::as_str).collect();
        let times: Vec<&str> = raw.shift_ending_times.iter().map(String::as_str).collect();
        Self::new(&spans, &times)
    }
}

fn parse_shift_time(value: &str) -> Result<NaiveTime, ConfigError> {
    if !regex!(r"^\d{1,2}:\d{2}$").is_match(value.trim()) {
        return Err(ConfigError::InvalidTime(value.to_string()));
    }
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| ConfigError::InvalidTime(value.to_string()))
}
