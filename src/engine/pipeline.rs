//! Question pipeline: extraction followed by dispatch.
//!
//! ```text
//! new() -> FeatureExtractor::scan() -> RuleEngine::build_answers()
//! ```

use super::dispatch::RuleEngine;
use super::extractor::FeatureExtractor;
use super::metrics::{RunMetrics, RunResult};
use crate::config::RuleTables;
use crate::{Answer, Context};
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'a> {
    question: &'a str,
    tables: &'a RuleTables,
}

impl<'a> Pipeline<'a> {
    pub fn new(question: &'a str, tables: &'a RuleTables) -> Self {
        Pipeline { question, tables }
    }

    pub fn run(&self, context: &Context) -> Vec<Answer> {
        let features = FeatureExtractor::new(&self.tables.keywords).extract_features(self.question);
        tracing::debug!(question = self.question, ?features, "features extracted");

        RuleEngine::new(self.tables).build_answers(&features, self.question, context)
    }

    pub fn run_with_metrics(&self, context: &Context) -> RunResult<'a> {
        let start = Instant::now();

        let extraction = FeatureExtractor::new(&self.tables.keywords).scan(self.question);
        let extracted_at = Instant::now();
        tracing::debug!(question = self.question, features = ?extraction.features, "features extracted");

        let fallback = RuleEngine::falls_back(&extraction.features);
        let answers = RuleEngine::new(self.tables).build_answers(&extraction.features, self.question, context);
        let done = Instant::now();

        RunResult {
            hits: extraction.hits,
            features: extraction.features,
            fallback,
            answers,
            metrics: RunMetrics {
                total: done - start,
                extraction: extracted_at - start,
                evaluation: done - extracted_at,
            },
        }
    }
}
