use serde::Serialize;

use crate::config::ReviewConfig;
use crate::detect;
use crate::question::Category;
use crate::text::TextMetrics;

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

pub const SUGGEST_COMPLETE: &str = "add a complete explanation.";
pub const SUGGEST_SIMPLIFY: &str = "simplify language / reduce sentence complexity";
pub const SUGGEST_JARGON_PREFIX: &str = "explain or replace jargon: ";
pub const SUGGEST_METRICS: &str = "add specific numbers/percentages/timeframes";
pub const SUGGEST_EXAMPLE: &str = "include a practical example";
pub const SUGGEST_EXPAND: &str = "expand explanation with more context";
pub const SUGGEST_SIMPLIFY_FURTHER: &str = "simplify further";

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResult {
    pub plain_language: bool,
    pub jargon_identified: Vec<String>,
    pub has_metrics: bool,
    pub has_examples: bool,
    pub word_count: usize,
    /// 0-100, higher reads easier.
    pub readability_score: f64,
    suggested_improvements: Vec<String>,
}

impl ReviewResult {
    /// Derived from the other fields; there is no way to set it directly.
    pub fn suggested_improvements(&self) -> &[String] {
        &self.suggested_improvements
    }

    pub fn needs_improvement(&self) -> bool {
        !self.suggested_improvements.is_empty()
    }

    fn empty() -> Self {
        Self {
            plain_language: false,
            jargon_identified: Vec::new(),
            has_metrics: false,
            has_examples: false,
            word_count: 0,
            readability_score: 0.0,
            suggested_improvements: vec![SUGGEST_COMPLETE.to_string()],
        }
    }
}

// ---------------------------------------------------------------------------
// Reviewer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Reviewer {
    config: ReviewConfig,
}

impl Reviewer {
    pub fn new(config: ReviewConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    pub fn review(&self, help_text: Option<&str>, category: &Category) -> ReviewResult {
        let text = help_text.unwrap_or_default();
        if text.trim().is_empty() {
            tracing::debug!(%category, "empty help text");
            return ReviewResult::empty();
        }

        let metrics = TextMetrics::measure(text, self.config.complex_word_syllables);
        let jargon_identified = detect::find_jargon(text);
        let plain_language =
            detect::is_plain_language(&metrics, &jargon_identified, &self.config);
        let has_metrics = detect::has_metrics(text);
        let has_examples = detect::has_examples(text);

        let mut suggestions = Vec::new();
        if !plain_language {
            suggestions.push(SUGGEST_SIMPLIFY.to_string());
        }
        if !jargon_identified.is_empty() {
            suggestions.push(format!(
                "{SUGGEST_JARGON_PREFIX}{}",
                jargon_identified.join(", ")
            ));
        }
        if !has_metrics {
            suggestions.push(SUGGEST_METRICS.to_string());
        }
        if !has_examples {
            suggestions.push(SUGGEST_EXAMPLE.to_string());
        }
        if metrics.word_count < self.config.min_word_count {
            suggestions.push(SUGGEST_EXPAND.to_string());
        }
        if metrics.readability_score < self.config.min_readability {
            suggestions.push(SUGGEST_SIMPLIFY_FURTHER.to_string());
        }

        tracing::debug!(
            %category,
            words = metrics.word_count,
            readability = metrics.readability_score,
            suggestions = suggestions.len(),
            "reviewed tooltip"
        );

        ReviewResult {
            plain_language,
            jargon_identified,
            has_metrics,
            has_examples,
            word_count: metrics.word_count,
            readability_score: metrics.readability_score,
            suggested_improvements: suggestions,
        }
    }
}

/// Review with the default thresholds.
pub fn review_tooltip(help_text: &str, category: &Category) -> ReviewResult {
    Reviewer::default().review(Some(help_text), category)
}
