#[macro_use]
mod macros;
mod api;
pub mod config;
mod engine;
mod rules;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use api::{Advisor, Context, MatchedKeyword, QuestionDetails, QuestionResultVerbose, ask, ask_verbose_with, ask_with};
pub use config::{ConfigError, DateSpan, DateSpanTemplate, KeywordRule, ParkingRules, RuleTables, SnackShopRanking};
pub use engine::{Extraction, FeatureExtractor, KeywordHit, Pipeline, RuleEngine, RunMetrics, RunResult, default_answer};
pub use rules::assistance::evaluate_assistance;
pub use rules::greetings::evaluate_greetings;
pub use rules::parking::evaluate_parking;
pub use rules::snacks::{BUILDING_SEVEN_BAR, evaluate_snacks};

// --- Features ---------------------------------------------------------------

/// A feature identifier produced by keyword matching.
///
/// Keyword tables are free to name features the engine has no evaluator for;
/// those are carried as [`Feature::Unsupported`] and skipped at dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Feature {
    Snacks,
    Parking,
    Assistance,
    Greetings,
    Unsupported(String),
}

impl Feature {
    pub fn from_name(name: &str) -> Self {
        match name {
            "snacks" => Feature::Snacks,
            "parking" => Feature::Parking,
            "assistance" => Feature::Assistance,
            "greetings" => Feature::Greetings,
            other => Feature::Unsupported(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Feature::Snacks => "snacks",
            Feature::Parking => "parking",
            Feature::Assistance => "assistance",
            Feature::Greetings => "greetings",
            Feature::Unsupported(name) => name,
        }
    }

    /// The bit for this feature, empty for unsupported identifiers.
    pub fn flag(&self) -> FeatureSet {
        match self {
            Feature::Snacks => FeatureSet::SNACKS,
            Feature::Parking => FeatureSet::PARKING,
            Feature::Assistance => FeatureSet::ASSISTANCE,
            Feature::Greetings => FeatureSet::GREETINGS,
            Feature::Unsupported(_) => FeatureSet::empty(),
        }
    }

    pub fn is_supported(&self) -> bool {
        !self.flag().is_empty()
    }
}

impl From<String> for Feature {
    fn from(name: String) -> Self {
        Feature::from_name(&name)
    }
}

impl From<Feature> for String {
    fn from(feature: Feature) -> Self {
        feature.name().to_string()
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// Set of supported features present in an extraction.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FeatureSet: u8 {
        const SNACKS     = 1 << 0;
        const PARKING    = 1 << 1;
        const ASSISTANCE = 1 << 2;
        const GREETINGS  = 1 << 3;
    }
}

impl FeatureSet {
    pub fn of(features: &[Feature]) -> Self {
        features.iter().fold(FeatureSet::empty(), |set, f| set | f.flag())
    }
}

// --- Answers ----------------------------------------------------------------

/// One line of advice returned to the student.
///
/// `is_tip` marks supplementary advice that an evaluator always appends;
/// `false` marks a recommendation that depends on the current situation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub message: String,
    pub is_tip: bool,
}

impl Answer {
    pub(crate) fn advice(message: impl Into<String>) -> Self {
        Answer { message: message.into(), is_tip: false }
    }

    pub(crate) fn tip(message: impl Into<String>) -> Self {
        Answer { message: message.into(), is_tip: true }
    }
}

/// Response payload: the original question and the answers built for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub question: String,
    pub answers: Vec<Answer>,
}
