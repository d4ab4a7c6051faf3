//! Question-answering engine.
//!
//! Answering a question is a two-stage pipeline over immutable rule tables:
//!
//! ```text
//! question ── FeatureExtractor::scan ──▶ Vec<Feature>   (extractor.rs)
//!             - lowercase once
//!             - substring match every keyword
//!             - stable sort by order, dedup
//!                               │
//!                               v
//!             RuleEngine::build_answers ──▶ Vec<Answer>  (dispatch.rs)
//!             - default answer if nothing supported
//!             - one evaluator call per feature, in order
//! ```
//!
//! Both stages are pure functions of the question, the tables and the
//! reference time in [`Context`](crate::Context); the same inputs always give
//! the same answers.
//!
//! ## Responsibilities by module
//!
//! - `extractor.rs`: keyword scanning, ordering and deduplication.
//! - `dispatch.rs`: fallback policy and per-feature evaluator dispatch.
//! - `pipeline.rs`: runs both stages, optionally with timings.
//! - `metrics.rs`: timing and intermediate data for verbose runs.
//!
//! Evaluators themselves live under `src/rules/`.
//!
//! ## Debugging
//!
//! Run with `RUST_LOG=fila=debug` to trace extracted features and evaluator
//! decisions.

#[path = "engine/dispatch.rs"]
mod dispatch;
#[path = "engine/extractor.rs"]
mod extractor;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/pipeline.rs"]
mod pipeline;

pub use dispatch::{RuleEngine, default_answer};
pub use extractor::{Extraction, FeatureExtractor, KeywordHit};
pub use metrics::{RunMetrics, RunResult};
pub use pipeline::Pipeline;
