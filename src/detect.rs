//! Independent pattern checks over a tooltip's text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ReviewConfig;
use crate::text::TextMetrics;

// ---------------------------------------------------------------------------
// Vocabularies
// ---------------------------------------------------------------------------

/// Terms assumed unfamiliar to a practice owner unless defined inline.
/// Results are reported in this order.
pub const JARGON_TERMS: &[&str] = &[
    "ROI",
    "KPI",
    "EBITDA",
    "HIPAA",
    "OSHA",
    "EHR",
    "CPT",
    "RCM",
    "amortization",
    "depreciation",
    "liquidity",
    "accrual",
    "audit",
    "benchmarking",
    "capitalization",
    "leverage",
];

const EXAMPLE_TRIGGERS: &[&str] = &[
    "for example",
    "such as",
    "instance",
    "e.g.",
    "to illustrate",
    "scenario",
];

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static PERCENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?\s?%").unwrap());

static CURRENCY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\s?\d").unwrap());

static DURATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b\d+\s*(?:hour|day|week|month|year)s?\b").unwrap());

static EXAMPLE_RE: Lazy<Regex> = Lazy::new(|| {
    let alt = EXAMPLE_TRIGGERS
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){alt}")).unwrap()
});

struct JargonPattern {
    term: &'static str,
    mention: Regex,
    definition: Regex,
}

static JARGON_PATTERNS: Lazy<Vec<JargonPattern>> = Lazy::new(|| {
    JARGON_TERMS
        .iter()
        .copied()
        .map(|term| {
            let escaped = regex::escape(term);
            JargonPattern {
                term,
                mention: Regex::new(&format!(r"(?i)\b{escaped}\b")).unwrap(),
                definition: Regex::new(&format!(
                    r"(?i)\b{escaped}\s+(?:is|means|refers\s+to)\b"
                ))
                .unwrap(),
            }
        })
        .collect()
});

// ---------------------------------------------------------------------------
// Detectors
// ---------------------------------------------------------------------------

/// Percentages, dollar amounts, or durations like "3 days".
pub fn has_metrics(text: &str) -> bool {
    PERCENT_RE.is_match(text) || CURRENCY_RE.is_match(text) || DURATION_RE.is_match(text)
}

pub fn has_examples(text: &str) -> bool {
    EXAMPLE_RE.is_match(text)
}

/// Jargon terms present in `text` and not defined where they appear.
pub fn find_jargon(text: &str) -> Vec<String> {
    JARGON_PATTERNS
        .iter()
        .filter(|p| p.mention.is_match(text) && !p.definition.is_match(text))
        .map(|p| p.term.to_string())
        .collect()
}

/// Short sentences, few complex words, and no undefined jargon.
pub fn is_plain_language(metrics: &TextMetrics, jargon: &[String], config: &ReviewConfig) -> bool {
    metrics.word_count > 0
        && jargon.is_empty()
        && metrics.complex_word_pct < config.plain_complex_word_pct
        && metrics.avg_words_per_sentence < config.plain_max_sentence_words
}
