//! Word, sentence and readability measurements.
//!
//! Syllables are estimated by counting vowel groups, so words like
//! "queue" or "business" come out wrong. The estimate is only used to
//! decide whether a word is "complex" and is good enough for that.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

static VOWEL_GROUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]+").unwrap());

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Rough syllable count: vowel groups, minus a trailing silent "e".
pub fn estimate_syllables(word: &str) -> usize {
    let letters: String = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if letters.is_empty() {
        return 0;
    }
    let mut groups = VOWEL_GROUP_RE.find_iter(&letters).count();
    if groups > 1 && letters.ends_with('e') && !letters.ends_with("le") {
        groups -= 1;
    }
    groups.max(1)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_words_per_sentence: f64,
    pub complex_word_pct: f64,
    /// 0-100, higher reads easier.
    pub readability_score: f64,
}

impl TextMetrics {
    pub fn measure(text: &str, complex_syllables: usize) -> Self {
        let words: Vec<&str> = text.split_whitespace().collect();
        let wc = words.len();
        let sentence_count = split_sentences(text).len();

        let avg_words_per_sentence = if sentence_count > 0 {
            wc as f64 / sentence_count as f64
        } else {
            0.0
        };
        let complex_word_pct = if wc > 0 {
            let complex = words
                .iter()
                .filter(|w| estimate_syllables(w) >= complex_syllables)
                .count();
            complex as f64 / wc as f64 * 100.0
        } else {
            0.0
        };

        let readability_score = if wc == 0 {
            0.0
        } else {
            readability(avg_words_per_sentence, complex_word_pct)
        };

        Self {
            word_count: wc,
            sentence_count,
            avg_words_per_sentence,
            complex_word_pct,
            readability_score,
        }
    }
}

/// `100 - 0.5 * words_per_sentence - 0.5 * complex_pct`, clamped to 0-100
/// and rounded to one decimal.
pub fn readability(avg_words_per_sentence: f64, complex_word_pct: f64) -> f64 {
    let raw = 100.0 - 0.5 * avg_words_per_sentence - 0.5 * complex_word_pct;
    (raw.clamp(0.0, 100.0) * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_collapses_whitespace() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("a b c"), 3);
        assert_eq!(word_count("  a   b  "), 2);
        assert_eq!(word_count("line\none\ttwo"), 3);
    }

    #[test]
    fn sentences_drop_empty_fragments() {
        let sentences = split_sentences("One. Two!! Three?  ...");
        assert_eq!(sentences, vec!["One", "Two", "Three"]);
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn syllable_estimates() {
        assert_eq!(estimate_syllables("cat"), 1);
        assert_eq!(estimate_syllables("make"), 1);
        assert_eq!(estimate_syllables("table"), 2);
        assert_eq!(estimate_syllables("amortization"), 5);
        assert_eq!(estimate_syllables("$300,000"), 0);
        assert_eq!(estimate_syllables("Rhythm"), 1);
    }

    #[test]
    fn empty_text_is_worst_case() {
        let m = TextMetrics::measure("", 3);
        assert_eq!(m.word_count, 0);
        assert_eq!(m.sentence_count, 0);
        assert_eq!(m.readability_score, 0.0);
    }

    #[test]
    fn text_without_terminator_counts_as_one_sentence() {
        let m = TextMetrics::measure("we pay the rent on time", 3);
        assert_eq!(m.sentence_count, 1);
        assert_eq!(m.avg_words_per_sentence, 6.0);
        assert_eq!(m.complex_word_pct, 0.0);
        assert_eq!(m.readability_score, 97.0);
    }

    #[test]
    fn complex_words_lower_the_score() {
        let simple = TextMetrics::measure("The bill is due. We pay it now.", 3);
        let dense = TextMetrics::measure(
            "Organizational amortization necessitates comprehensive reconciliation.",
            3,
        );
        assert!(dense.complex_word_pct > 50.0);
        assert!(dense.readability_score < simple.readability_score);
    }

    #[test]
    fn readability_is_clamped() {
        assert_eq!(readability(400.0, 100.0), 0.0);
        assert_eq!(readability(0.0, 0.0), 100.0);
    }
}
