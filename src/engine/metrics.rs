//! Pipeline run metrics.
//!
//! `Pipeline::run` skips all of this; `Pipeline::run_with_metrics` times each
//! phase and keeps the intermediate extraction for verbose reporting.

use super::extractor::KeywordHit;
use crate::{Answer, Feature};
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for [`Pipeline::run_with_metrics`](super::Pipeline::run_with_metrics).
    pub total: Duration,
    /// Time spent scanning keywords.
    pub extraction: Duration,
    /// Time spent in evaluators.
    pub evaluation: Duration,
}

/// Pipeline output bundled with the extraction that produced it.
#[derive(Debug, Clone)]
pub struct RunResult<'a> {
    pub hits: Vec<KeywordHit<'a>>,
    pub features: Vec<Feature>,
    /// Whether the default answer was returned.
    pub fallback: bool,
    pub answers: Vec<Answer>,
    pub metrics: RunMetrics,
}
