use super::ConfigError;
use serde::Deserialize;

/// Snack shops ordered by congestion: the first entry is the busiest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SnackShopRanking {
    #[serde(rename = "ranking")]
    pub shops: Vec<String>,
}

impl SnackShopRanking {
    pub fn new(shops: &[&str]) -> Result<Self, ConfigError> {
        let ranking = SnackShopRanking { shops: shops.iter().map(|s| s.to_string()).collect() };
        ranking.validate()?;
        Ok(ranking)
    }

    pub(crate) fn from_json(json: &str) -> Result<Self, ConfigError> {
        let ranking: SnackShopRanking =
            serde_json::from_str(json).map_err(|source| ConfigError::Json { table: super::SNACKS_FILE, source })?;
        ranking.validate()?;
        Ok(ranking)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.shops.is_empty() {
            return Err(ConfigError::EmptyRanking);
        }
        Ok(())
    }
}
