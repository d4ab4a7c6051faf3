use super::ConfigError;
use crate::Feature;
use serde::Deserialize;

/// One row of the keyword table: a feature, the substrings that trigger it and
/// its priority (lower sorts first).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeywordRule {
    #[serde(rename = "name")]
    pub feature: Feature,
    pub words: Vec<String>,
    pub order: i32,
}

impl KeywordRule {
    pub fn new(feature: Feature, words: &[&str], order: i32) -> Self {
        KeywordRule { feature, words: words.iter().map(|w| w.to_string()).collect(), order }
    }

    pub(crate) fn list_from_json(json: &str) -> Result<Vec<Self>, ConfigError> {
        let rules: Vec<KeywordRule> =
            serde_json::from_str(json).map_err(|source| ConfigError::Json { table: super::KEYWORDS_FILE, source })?;

        for rule in &rules {
            rule.validate()?;
        }
        Ok(rules)
    }

    /// Matching lowercases the question, so words must already be lowercase.
    /// An empty word would match every question.
    fn validate(&self) -> Result<(), ConfigError> {
        for word in &self.words {
            if word.is_empty() {
                return Err(ConfigError::EmptyKeyword { rule: self.feature.to_string() });
            }
            if word.to_lowercase() != *word {
                return Err(ConfigError::UppercaseKeyword { rule: self.feature.to_string(), word: word.clone() });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_table_and_maps_names_to_features() {
        let json = r#"[
            {"name": "parking", "words": ["vaga", "carro"], "order": 2},
            {"name": "library", "words": ["livro"], "order": 9}
        ]"#;
        let rules = KeywordRule::list_from_json(json).unwrap();

        assert_eq!(rules[0], KeywordRule::new(Feature::Parking, &["vaga", "carro"], 2));
        assert_eq!(rules[1].feature, Feature::Unsupported("library".to_string()));
    }

    #[test]
    fn rejects_uppercase_and_empty_words() {
        let upper = r#"[{"name": "parking", "words": ["Vaga"], "order": 1}]"#;
        assert!(matches!(KeywordRule::list_from_json(upper), Err(ConfigError::UppercaseKeyword { .. })));

        let empty = r#"[{"name": "parking", "words": [""], "order": 1}]"#;
        assert!(matches!(KeywordRule::list_from_json(empty), Err(ConfigError::EmptyKeyword { .. })));
    }

    #[test]
    fn reports_json_errors_with_table_name() {
        let err = KeywordRule::list_from_json("[{").unwrap_err();
        assert!(err.to_string().contains(super::super::KEYWORDS_FILE));
    }
}
