use crate::config::{ConfigError, RuleTables};
use crate::engine::{self, Pipeline};
use crate::{Answer, Feature, QuestionResult};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use std::path::Path;
use std::time::Duration;

static DEFAULT_ADVISOR: Lazy<Advisor> =
    Lazy::new(|| Advisor::new(RuleTables::embedded().expect("embedded rule tables are valid")));

/// Evaluation context.
///
/// Holds the reference time the evaluators treat as "now". Inject a fixed
/// time for deterministic answers.
#[derive(Debug, Clone)]
pub struct Context {
    pub reference_time: NaiveDateTime,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
            let time = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
            Self { reference_time: NaiveDateTime::new(date, time) }
        } else {
            Self { reference_time: Local::now().naive_local() }
        }
    }
}

/// A keyword that matched the question, as reported by verbose runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedKeyword {
    pub feature: Feature,
    pub word: String,
    pub order: i32,
}

/// Extra details returned by [`ask_verbose_with`] and [`Advisor::ask_verbose_with`].
#[derive(Debug, Clone)]
pub struct QuestionDetails {
    /// Matching keywords, sorted by rule order.
    pub keywords: Vec<MatchedKeyword>,
    /// Deduplicated features in evaluation order.
    pub features: Vec<Feature>,
    /// Whether the default answer was returned.
    pub fallback: bool,
    pub reference_time: NaiveDateTime,
    pub total: Duration,
    pub extraction: Duration,
    pub evaluation: Duration,
}

/// Result from [`ask_verbose_with`].
#[derive(Debug, Clone)]
pub struct QuestionResultVerbose {
    pub result: QuestionResult,
    pub details: QuestionDetails,
}

/// Answers questions against one set of rule tables.
///
/// The tables are immutable, so an `Advisor` can be shared across threads and
/// queried concurrently.
#[derive(Debug, Clone)]
pub struct Advisor {
    tables: RuleTables,
}

impl Advisor {
    pub fn new(tables: RuleTables) -> Self {
        Advisor { tables }
    }

    /// Build an advisor from the JSON tables in `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self::new(RuleTables::load_dir(dir)?))
    }

    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }

    pub fn ask_with(&self, question: &str, context: &Context) -> QuestionResult {
        let answers: Vec<Answer> = Pipeline::new(question, &self.tables).run(context);
        QuestionResult { question: question.to_string(), answers }
    }

    pub fn ask_verbose_with(&self, question: &str, context: &Context) -> QuestionResultVerbose {
        let run = Pipeline::new(question, &self.tables).run_with_metrics(context);

        let details = QuestionDetails {
            keywords: run.hits.iter().map(to_matched_keyword).collect(),
            features: run.features,
            fallback: run.fallback,
            reference_time: context.reference_time,
            total: run.metrics.total,
            extraction: run.metrics.extraction,
            evaluation: run.metrics.evaluation,
        };

        QuestionResultVerbose { result: QuestionResult { question: question.to_string(), answers: run.answers }, details }
    }
}

impl Default for Advisor {
    fn default() -> Self {
        DEFAULT_ADVISOR.clone()
    }
}

/// Answer `question` with the embedded rule tables and the current local time.
///
/// # Example
/// ```
/// let out = fila::ask("onde fica o estacionamento?");
/// assert!(out.answers.last().unwrap().is_tip);
/// ```
pub fn ask(question: &str) -> QuestionResult {
    ask_with(question, &Context::default())
}

/// Answer `question` with the embedded rule tables at `context.reference_time`.
pub fn ask_with(question: &str, context: &Context) -> QuestionResult {
    DEFAULT_ADVISOR.ask_with(question, context)
}

/// Like [`ask_with`], plus matched keywords and timings.
pub fn ask_verbose_with(question: &str, context: &Context) -> QuestionResultVerbose {
    DEFAULT_ADVISOR.ask_verbose_with(question, context)
}

fn to_matched_keyword(hit: &engine::KeywordHit<'_>) -> MatchedKeyword {
    MatchedKeyword { feature: hit.rule.feature.clone(), word: hit.word.to_string(), order: hit.rule.order }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::messages;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Context {
        Context { reference_time: NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, 0).unwrap() }
    }

    #[test]
    fn ask_with_echoes_question() {
        let res = ask_with("onde estaciono?", &at(2026, 10, 19, 10, 0));

        assert_eq!(res.question, "onde estaciono?");
        assert_eq!(
            res.answers,
            vec![Answer::advice(messages::PARKING_ALTERNATE_EXIT), Answer::tip(messages::PARKING_CREDENTIAL_TIP)]
        );
    }

    #[test]
    fn default_context_is_frozen_in_tests() {
        assert_eq!(ask("bom dia").answers, vec![Answer::advice(messages::GOOD_MORNING)]);
    }

    #[test]
    fn verbose_reports_keywords_and_timings() {
        let res = ask_verbose_with("oi, tem café perto do estacionamento?", &at(2026, 10, 19, 10, 0));

        assert_eq!(res.details.features, vec![Feature::Snacks, Feature::Parking]);
        assert_eq!(
            res.details.keywords.iter().map(|k| k.word.as_str()).collect::<Vec<_>>(),
            vec!["café", "estacion"]
        );
        assert!(!res.details.fallback);
        assert!(res.details.extraction <= res.details.total);
        assert_eq!(res.result, ask_with("oi, tem café perto do estacionamento?", &at(2026, 10, 19, 10, 0)));
    }

    #[test]
    fn advisor_default_uses_embedded_tables() {
        let advisor = Advisor::default();
        assert!(!advisor.tables().keywords.is_empty());
    }
}
