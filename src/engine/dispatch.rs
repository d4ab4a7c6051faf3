//! Feature dispatch (features → answers).
//!
//! ```text
//! features ──┬─ none supported ──▶ [default answer]
//!            └─ for each feature, in order
//!                 ├─ Snacks      -> evaluate_snacks(question)
//!                 ├─ Parking     -> evaluate_parking(now)
//!                 ├─ Assistance  -> evaluate_assistance(now)
//!                 ├─ Greetings   -> evaluate_greetings(now)
//!                 └─ Unsupported -> skipped
//! ```
//!
//! Unsupported features only matter when they are *all* there is; next to a
//! supported feature they contribute nothing.

use crate::config::RuleTables;
use crate::rules::assistance::evaluate_assistance;
use crate::rules::greetings::evaluate_greetings;
use crate::rules::messages;
use crate::rules::parking::evaluate_parking;
use crate::rules::snacks::evaluate_snacks;
use crate::{Answer, Context, Feature, FeatureSet};

#[derive(Debug, Clone, Copy)]
pub struct RuleEngine<'a> {
    tables: &'a RuleTables,
}

impl<'a> RuleEngine<'a> {
    pub fn new(tables: &'a RuleTables) -> Self {
        RuleEngine { tables }
    }

    /// True when the fallback answer would be returned for `features`.
    pub fn falls_back(features: &[Feature]) -> bool {
        FeatureSet::of(features).is_empty()
    }

    pub fn build_answers(&self, features: &[Feature], question: &str, context: &Context) -> Vec<Answer> {
        if Self::falls_back(features) {
            return vec![default_answer()];
        }

        features.iter().flat_map(|feature| self.evaluate(feature, question, context)).collect()
    }

    fn evaluate(&self, feature: &Feature, question: &str, context: &Context) -> Vec<Answer> {
        let now = context.reference_time;
        match feature {
            Feature::Snacks => evaluate_snacks(&self.tables.snacks, question),
            Feature::Parking => evaluate_parking(&self.tables.parking, now),
            Feature::Assistance => evaluate_assistance(&self.tables.parking, now),
            Feature::Greetings => evaluate_greetings(now),
            Feature::Unsupported(name) => {
                tracing::debug!(feature = %name, "no evaluator for feature, skipping");
                Vec::new()
            }
        }
    }
}

pub fn default_answer() -> Answer {
    Answer::advice(messages::DEFAULT_ANSWER)
}
