//! Keyword scanning (question → features).
//!
//! The extractor lowercases the question once and checks every word of every
//! [`KeywordRule`] for substring containment. Matches are then ordered and
//! deduplicated:
//!
//! ```text
//! hits (one per matching word, table order)
//!   └─ stable sort by rule.order
//!        └─ map to Feature
//!             └─ dedup, first occurrence wins
//! ```
//!
//! ## Design notes
//!
//! - There is no word-boundary check: "van" matches "vantagem". Keyword tables
//!   are written with that in mind.
//! - Lowercasing is Unicode-aware (`to_lowercase`) since questions are
//!   Portuguese; table words are validated lowercase at load time.

use crate::Feature;
use crate::config::KeywordRule;
use std::collections::HashSet;

/// A single keyword that matched the question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordHit<'a> {
    pub rule: &'a KeywordRule,
    pub word: &'a str,
}

/// Result of scanning one question.
#[derive(Debug, Clone)]
pub struct Extraction<'a> {
    /// Every matching word, sorted by rule order (stable).
    pub hits: Vec<KeywordHit<'a>>,
    /// Deduplicated features in priority order.
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Copy)]
pub struct FeatureExtractor<'a> {
    rules: &'a [KeywordRule],
}

impl<'a> FeatureExtractor<'a> {
    pub fn new(rules: &'a [KeywordRule]) -> Self {
        FeatureExtractor { rules }
    }

    pub fn extract_features(&self, question: &str) -> Vec<Feature> {
        self.scan(question).features
    }

    pub fn scan(&self, question: &str) -> Extraction<'a> {
        if question.trim().is_empty() {
            return Extraction { hits: Vec::new(), features: Vec::new() };
        }

        let lower = question.to_lowercase();

        let mut hits: Vec<KeywordHit<'a>> = Vec::new();
        for rule in self.rules {
            for word in &rule.words {
                if lower.contains(word.as_str()) {
                    hits.push(KeywordHit { rule, word });
                }
            }
        }

        // `sort_by_key` is stable: equal orders keep table order.
        hits.sort_by_key(|hit| hit.rule.order);

        let mut seen: HashSet<&Feature> = HashSet::new();
        let features = hits
            .iter()
            .map(|hit| &hit.rule.feature)
            .filter(|feature| seen.insert(*feature))
            .cloned()
            .collect();

        Extraction { hits, features }
    }
}
