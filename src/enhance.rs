//! Appends missing explanatory content to weak tooltips.
//!
//! Existing text is never rewritten. When an opening clause is put in
//! front, leading whitespace is dropped and the first letter lowercased.

use rand::Rng;

use crate::config::ReviewConfig;
use crate::detect;
use crate::question::Category;
use crate::text::TextMetrics;

// ---------------------------------------------------------------------------
// Template selection
// ---------------------------------------------------------------------------

/// Chooses one template out of `len` candidates. `len` is never zero.
pub trait TemplatePicker {
    fn pick(&mut self, len: usize) -> usize;
}

/// Random selection backed by any `rand` generator.
#[derive(Debug)]
pub struct RngPicker<R> {
    rng: R,
}

impl<R: Rng> RngPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TemplatePicker for RngPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed sequence of indices, wrapping at the end.
#[derive(Debug, Clone)]
pub struct FixedPicker {
    picks: Vec<usize>,
    pos: usize,
}

impl FixedPicker {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, pos: 0 }
    }

    /// Always the first template.
    pub fn first() -> Self {
        Self::new(vec![0])
    }
}

impl TemplatePicker for FixedPicker {
    fn pick(&mut self, len: usize) -> usize {
        if self.picks.is_empty() || len == 0 {
            return 0;
        }
        let choice = self.picks[self.pos % self.picks.len()];
        self.pos += 1;
        choice % len
    }
}

// ---------------------------------------------------------------------------
// Template pools
// ---------------------------------------------------------------------------

pub struct TemplatePool {
    pub openings: &'static [&'static str],
    pub metrics: &'static [&'static str],
    pub examples: &'static [&'static str],
    pub impacts: &'static [&'static str],
}

static FINANCIAL_POOL: TemplatePool = TemplatePool {
    openings: &["In plain terms,", "Put simply,"],
    metrics: &[
        "Most practices aim to keep this within 5% of their yearly budget.",
        "A shift of even 2% can mean $20,000 a year for a mid-sized practice.",
    ],
    examples: &[
        "For example, a practice that trims supply costs by $1,000 a month saves $12,000 a year.",
        "For instance, moving billing from 45 days to 30 days brings cash in sooner.",
    ],
    impacts: &[
        "Getting this right has a direct impact on cash flow and profit.",
        "This affects how much money is left to invest in staff and equipment.",
    ],
};

static COMPLIANCE_POOL: TemplatePool = TemplatePool {
    openings: &["In plain terms,", "Simply put,"],
    metrics: &[
        "Fines for a single violation can start at $100 and climb past $50,000.",
        "Most rules expect a review at least once every 12 months.",
    ],
    examples: &[
        "For example, a missed staff training can turn a small slip into a reportable breach.",
        "For instance, leaving a chart open on an unattended screen counts as an exposure.",
    ],
    impacts: &[
        "Staying on top of this benefits the practice by avoiding fines and lost patient trust.",
        "Gaps here can affect your standing with payers and regulators.",
    ],
};

static DEFAULT_POOL: TemplatePool = TemplatePool {
    openings: &["In plain terms,", "Simply put,"],
    metrics: &[
        "Practices that track this each month often see gains of 10% or more within a year.",
        "Set a target and check progress every 30 days.",
    ],
    examples: &[
        "For example, a front desk that confirms visits 2 days ahead can cut no-shows.",
        "For instance, a short weekly huddle can catch problems before they grow.",
    ],
    impacts: &[
        "Improving this has a direct impact on patient care and staff workload.",
        "Small gains here benefit both patients and the team.",
    ],
};

impl TemplatePool {
    pub fn for_category(category: &Category) -> &'static TemplatePool {
        match category {
            Category::Financial => &FINANCIAL_POOL,
            Category::Compliance => &COMPLIANCE_POOL,
            _ => &DEFAULT_POOL,
        }
    }
}

const IMPACT_WORDS: &[&str] = &["impact", "affect", "benefit"];

// ---------------------------------------------------------------------------
// Enhancer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Enhancer {
    config: ReviewConfig,
}

impl Enhancer {
    pub fn new(config: ReviewConfig) -> Self {
        Self { config }
    }

    /// True when the tooltip already has everything the enhancer would add.
    pub fn is_complete(&self, help_text: &str) -> bool {
        detect::has_metrics(help_text)
            && detect::has_examples(help_text)
            && (help_text.chars().count() > self.config.enhance_skip_chars
                || crate::text::word_count(help_text) >= self.config.min_word_count)
    }

    pub fn enhance(
        &self,
        help_text: &str,
        category: &Category,
        picker: &mut dyn TemplatePicker,
    ) -> String {
        if self.is_complete(help_text) {
            return help_text.to_string();
        }

        let pool = TemplatePool::for_category(category);
        let metrics = TextMetrics::measure(help_text, self.config.complex_word_syllables);
        let body = help_text.trim_end();

        let jargon = detect::find_jargon(help_text);
        let mut out = if !body.is_empty()
            && !detect::is_plain_language(&metrics, &jargon, &self.config)
        {
            let opening = choose(pool.openings, picker);
            format!("{opening} {}", lowercase_first(help_text.trim_start()))
        } else {
            help_text.to_string()
        };

        let lower = help_text.to_lowercase();
        let mut additions: Vec<&str> = Vec::new();
        if !detect::has_metrics(help_text) {
            additions.push(choose(pool.metrics, picker));
        }
        if !detect::has_examples(help_text) {
            additions.push(choose(pool.examples, picker));
        }
        if !IMPACT_WORDS.iter().any(|w| lower.contains(w)) {
            additions.push(choose(pool.impacts, picker));
        }

        if !additions.is_empty() {
            if !body.is_empty()
                && body.len() == help_text.len()
                && !body.ends_with(&['.', '!', '?'][..])
            {
                out.push('.');
            }
            for sentence in additions {
                if !out.is_empty() && !out.ends_with(char::is_whitespace) {
                    out.push(' ');
                }
                out.push_str(sentence);
            }
        }

        tracing::debug!(
            %category,
            before = help_text.len(),
            after = out.len(),
            "enhanced tooltip"
        );
        out
    }
}

/// Enhance with default thresholds and a thread-local random source.
pub fn enhance_tooltip(help_text: &str, category: &Category) -> String {
    let mut picker = RngPicker::new(rand::thread_rng());
    Enhancer::default().enhance(help_text, category, &mut picker)
}

fn choose(templates: &'static [&'static str], picker: &mut dyn TemplatePicker) -> &'static str {
    let idx = picker.pick(templates.len());
    templates[idx.min(templates.len() - 1)]
}

/// Lowercase the first non-whitespace character unless the first word is
/// an acronym ("HIPAA", "EHR") or the pronoun "I".
fn lowercase_first(text: &str) -> String {
    let body = text.trim_start();
    let (lead, _) = text.split_at(text.len() - body.len());
    let first_word = body
        .split(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or_default();
    let mut chars = body.chars();
    let Some(first) = chars.next() else {
        return text.to_string();
    };
    let acronym = first_word.chars().nth(1).is_some_and(char::is_uppercase);
    if acronym || first_word == "I" {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    out.push_str(lead);
    out.extend(first.to_lowercase());
    out.push_str(chars.as_str());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_picker_wraps() {
        let mut picker = FixedPicker::new(vec![1, 0, 5]);
        assert_eq!(picker.pick(2), 1);
        assert_eq!(picker.pick(2), 0);
        assert_eq!(picker.pick(2), 1);
        assert_eq!(picker.pick(2), 1);
    }

    #[test]
    fn lowercase_first_respects_acronyms() {
        assert_eq!(lowercase_first("Regular checks"), "regular checks");
        assert_eq!(lowercase_first("HIPAA rules"), "HIPAA rules");
        assert_eq!(lowercase_first(""), "");
        assert_eq!(lowercase_first("  Regular checks"), "  regular checks");
        assert_eq!(lowercase_first("I think so"), "I think so");
        assert_eq!(lowercase_first("I'm not sure"), "I'm not sure");
        assert_eq!(lowercase_first("It works"), "it works");
    }

    #[test]
    fn pools_fall_back_to_default() {
        let pool = TemplatePool::for_category(&Category::Other("???".into()));
        assert!(std::ptr::eq(pool, &DEFAULT_POOL));
        let pool = TemplatePool::for_category(&Category::Staffing);
        assert!(std::ptr::eq(pool, &DEFAULT_POOL));
    }

    #[test]
    fn every_template_satisfies_its_check() {
        for pool in [&FINANCIAL_POOL, &COMPLIANCE_POOL, &DEFAULT_POOL] {
            assert!(pool.metrics.iter().all(|t| detect::has_metrics(t)));
            assert!(pool.examples.iter().all(|t| detect::has_examples(t)));
            assert!(pool
                .impacts
                .iter()
                .all(|t| IMPACT_WORDS.iter().any(|w| t.to_lowercase().contains(w))));
        }
    }
}
