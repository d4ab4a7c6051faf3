//! Rule tables: the data-file contract of the engine.
//!
//! Everything the evaluators consult besides the question and the clock comes
//! from three JSON tables, loaded once at startup and immutable afterwards:
//!
//! ```text
//! featuresKeywords.json ──▶ Vec<KeywordRule>      (extractor)
//! parkingRules.json     ──▶ ParkingRules          (parking + assistance)
//! snackShops.json       ──▶ SnackShopRanking      (snacks)
//! ```
//!
//! All parsing and validation happens here, so a malformed table fails
//! initialization with a [`ConfigError`] instead of surfacing per request.
//! Date spans are turned into typed [`DateSpanTemplate`]s at load time; the
//! evaluators only ever resolve them against a year.
//!
//! A default set of tables is embedded in the binary (see `data/`).

#[path = "config/dates.rs"]
mod dates;
#[path = "config/error.rs"]
mod error;
#[path = "config/keywords.rs"]
mod keywords;
#[path = "config/parking.rs"]
mod parking;
#[path = "config/snacks.rs"]
mod snacks;

pub use dates::{DateSpan, DateSpanTemplate, DateTemplate, YearSpec};
pub use error::ConfigError;
pub use keywords::KeywordRule;
pub use parking::ParkingRules;
pub use snacks::SnackShopRanking;

use std::fs;
use std::path::Path;

pub const KEYWORDS_FILE: &str = "featuresKeywords.json";
pub const PARKING_FILE: &str = "parkingRules.json";
pub const SNACKS_FILE: &str = "snackShops.json";

const EMBEDDED_KEYWORDS: &str = include_str!("../data/featuresKeywords.json");
const EMBEDDED_PARKING: &str = include_str!("../data/parkingRules.json");
const EMBEDDED_SNACKS: &str = include_str!("../data/snackShops.json");

/// All rule tables the engine needs, validated and ready to share.
#[derive(Debug, Clone)]
pub struct RuleTables {
    pub keywords: Vec<KeywordRule>,
    pub parking: ParkingRules,
    pub snacks: SnackShopRanking,
}

impl RuleTables {
    /// Parse the three tables from their JSON text.
    pub fn from_json(keywords: &str, parking: &str, snacks: &str) -> Result<Self, ConfigError> {
        let tables = RuleTables {
            keywords: KeywordRule::list_from_json(keywords)?,
            parking: ParkingRules::from_json(parking)?,
            snacks: SnackShopRanking::from_json(snacks)?,
        };

        tracing::info!(
            keyword_rules = tables.keywords.len(),
            high_volume_spans = tables.parking.high_volume_dates.len(),
            shift_ending_times = tables.parking.shift_ending_times.len(),
            snack_shops = tables.snacks.shops.len(),
            "rule tables loaded"
        );

        Ok(tables)
    }

    /// The tables compiled into the crate.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_KEYWORDS, EMBEDDED_PARKING, EMBEDDED_SNACKS)
    }

    /// Load `featuresKeywords.json`, `parkingRules.json` and `snackShops.json`
    /// from `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        tracing::info!(dir = %dir.display(), "loading rule tables");

        let keywords = read_table(dir, KEYWORDS_FILE)?;
        let parking = read_table(dir, PARKING_FILE)?;
        let snacks = read_table(dir, SNACKS_FILE)?;

        Self::from_json(&keywords, &parking, &snacks)
    }
}

fn read_table(dir: &Path, file: &str) -> Result<String, ConfigError> {
    let path = dir.join(file);
    fs::read_to_string(&path).map_err(|source| ConfigError::Io { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Feature;

    #[test]
    fn embedded_tables_load() {
        let tables = RuleTables::embedded().unwrap();

        assert!(tables.keywords.iter().any(|k| k.feature == Feature::Parking));
        assert!(tables.keywords.iter().any(|k| !k.feature.is_supported()));
        assert!(!tables.parking.high_volume_dates.is_empty());
        assert!(!tables.parking.shift_ending_times.is_empty());
        assert!(tables.snacks.shops.iter().any(|s| s == crate::BUILDING_SEVEN_BAR));
    }

    #[test]
    fn load_dir_reads_all_three_tables() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(KEYWORDS_FILE), r#"[{"name": "parking", "words": ["vaga"], "order": 1}]"#)
            .unwrap();
        fs::write(
            dir.path().join(PARKING_FILE),
            r#"{"highVolumeDates": ["{year}-03-01|{year}-03-15"], "shiftEndingTimes": ["18:00"]}"#,
        )
        .unwrap();
        fs::write(dir.path().join(SNACKS_FILE), r#"{"ranking": ["A", "B"]}"#).unwrap();

        let tables = RuleTables::load_dir(dir.path()).unwrap();
        assert_eq!(tables.keywords.len(), 1);
        assert_eq!(tables.parking.high_volume_dates.len(), 1);
        assert_eq!(tables.snacks.shops, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn load_dir_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RuleTables::load_dir(dir.path()).unwrap_err();

        match err {
            ConfigError::Io { path, .. } => assert!(path.ends_with(KEYWORDS_FILE)),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
