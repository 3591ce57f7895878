//! Ranking configuration.
//!
//! All tunable constants of the ranking pipeline live here so they can be
//! changed from a JSON file without touching code.

use internmatch_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// String similarity used by the fallback matcher when a skill token is not
/// a literal substring of the requirement text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FuzzyMetric {
    /// Matching-blocks ratio `2·M / (|a| + |b|)`
    #[default]
    Sequence,
    /// Jaro-Winkler similarity
    JaroWinkler,
    /// `1 - levenshtein / max(|a|, |b|)`
    NormalizedLevenshtein,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RankingConfig {
    /// Best score below this switches to the fallback matcher
    pub weak_match_threshold: f64,
    /// Added to rows whose location contains the preferred location
    pub location_boost: f64,
    /// Minimum fuzzy ratio for partial credit
    pub fuzzy_ratio_threshold: f64,
    /// Credit for a token found literally in the requirement text
    pub exact_token_credit: f64,
    /// Credit for a token that only matches approximately
    pub fuzzy_token_credit: f64,
    /// Result count used when the request does not give a positive one
    pub default_top_n: usize,
    pub fuzzy_metric: FuzzyMetric,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            weak_match_threshold: 0.20,
            location_boost: 0.10,
            fuzzy_ratio_threshold: 0.45,
            exact_token_credit: 1.0,
            fuzzy_token_credit: 0.5,
            default_top_n: 5,
            fuzzy_metric: FuzzyMetric::Sequence,
        }
    }
}

impl RankingConfig {
    /// Read a JSON config file; fields left out keep their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: RankingConfig = serde_json::from_str(&text)
            .map_err(|e| Error::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("weak_match_threshold", self.weak_match_threshold),
            ("location_boost", self.location_boost),
            ("exact_token_credit", self.exact_token_credit),
            ("fuzzy_token_credit", self.fuzzy_token_credit),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.fuzzy_ratio_threshold) {
            return Err(Error::InvalidConfig(format!(
                "fuzzy_ratio_threshold must be within [0, 1], got {}",
                self.fuzzy_ratio_threshold
            )));
        }
        if self.default_top_n == 0 {
            return Err(Error::InvalidConfig("default_top_n must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RankingConfig::default();
        assert_eq!(config.weak_match_threshold, 0.20);
        assert_eq!(config.location_boost, 0.10);
        assert_eq!(config.fuzzy_ratio_threshold, 0.45);
        assert_eq!(config.default_top_n, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: RankingConfig =
            serde_json::from_str(r#"{"location_boost": 0.25, "fuzzy_metric": "jaro_winkler"}"#).unwrap();
        assert_eq!(config.location_boost, 0.25);
        assert_eq!(config.fuzzy_metric, FuzzyMetric::JaroWinkler);
        assert_eq!(config.weak_match_threshold, 0.20);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = RankingConfig { fuzzy_ratio_threshold: 1.5, ..Default::default() };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = RankingConfig { location_boost: -0.1, ..Default::default() };
        assert!(config.validate().is_err());

        let config = RankingConfig { default_top_n: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"weak_match_threshold": 0.3}}"#).unwrap();
        let config = RankingConfig::from_file(file.path()).unwrap();
        assert_eq!(config.weak_match_threshold, 0.3);

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, "not json").unwrap();
        assert!(matches!(
            RankingConfig::from_file(bad.path()),
            Err(Error::InvalidConfig(_))
        ));
    }
}
