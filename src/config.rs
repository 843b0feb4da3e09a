use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ReviewError};

/// Thresholds used by the reviewer, enhancer and report generator.
///
/// Every field has a default, so a config file only needs to name the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Text is plain language only below this percentage of complex words.
    pub plain_complex_word_pct: f64,
    /// ...and below this average sentence length.
    pub plain_max_sentence_words: f64,
    /// Shorter tooltips get the "expand" suggestion.
    pub min_word_count: usize,
    /// Readability scores below this get the "simplify further" suggestion.
    pub min_readability: f64,
    /// Estimated syllables at which a word counts as complex.
    pub complex_word_syllables: usize,
    /// Tooltips longer than this (in chars) with metrics and examples are left alone.
    pub enhance_skip_chars: usize,
    /// Maximum before/after pairs kept in a report.
    pub report_example_limit: usize,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            plain_complex_word_pct: 15.0,
            plain_max_sentence_words: 20.0,
            min_word_count: 50,
            min_readability: 60.0,
            complex_word_syllables: 3,
            enhance_skip_chars: 200,
            report_example_limit: 5,
        }
    }
}

impl ReviewConfig {
    /// Load a JSON config file and validate it.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ReviewError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ReviewError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let pct_fields = [
            ("plain_complex_word_pct", self.plain_complex_word_pct),
            ("min_readability", self.min_readability),
        ];
        for (name, value) in pct_fields {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(ReviewError::Config(format!(
                    "{name} must be between 0 and 100, got {value}"
                )));
            }
        }
        if !self.plain_max_sentence_words.is_finite() || self.plain_max_sentence_words <= 0.0 {
            return Err(ReviewError::Config(format!(
                "plain_max_sentence_words must be positive, got {}",
                self.plain_max_sentence_words
            )));
        }
        if self.complex_word_syllables == 0 {
            return Err(ReviewError::Config(
                "complex_word_syllables must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: ReviewConfig = serde_json::from_str(r#"{"min_word_count": 30}"#).unwrap();
        assert_eq!(config.min_word_count, 30);
        assert_eq!(config.plain_complex_word_pct, 15.0);
        assert_eq!(config.report_example_limit, 5);
    }

    #[test]
    fn rejects_out_of_range_percentage() {
        let config = ReviewConfig {
            min_readability: 140.0,
            ..ReviewConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("min_readability"));
    }

    #[test]
    fn rejects_zero_syllable_threshold() {
        let config = ReviewConfig {
            complex_word_syllables: 0,
            ..ReviewConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_is_valid() {
        assert!(ReviewConfig::default().validate().is_ok());
    }
}
