use std::fmt::Write as _;

use indexmap::IndexMap;
use serde::Serialize;

use crate::enhance::{Enhancer, TemplatePicker};
use crate::question::{Category, Question};
use crate::review::Reviewer;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub category: Category,
    pub total: usize,
    pub need_improvement: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueCount {
    pub issue: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhancementExample {
    pub question_id: String,
    pub category: Category,
    pub before: String,
    pub after: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateReport {
    pub total_reviewed: usize,
    pub with_metrics: usize,
    pub with_examples: usize,
    pub plain_language: usize,
    pub with_jargon: usize,
    pub need_improvement: usize,
    /// In order of first appearance.
    pub categories: Vec<CategoryStats>,
    /// Most frequent first; ties keep first-seen order.
    pub top_issues: Vec<IssueCount>,
    pub examples: Vec<EnhancementExample>,
}

/// Whole-number percentage; 0 when `total` is 0.
pub fn percent(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

pub fn generate_report(
    questions: &[Question],
    reviewer: &Reviewer,
    enhancer: &Enhancer,
    picker: &mut dyn TemplatePicker,
) -> AggregateReport {
    let example_limit = reviewer.config().report_example_limit;
    let mut report = AggregateReport::default();
    let mut categories: IndexMap<Category, CategoryStats> = IndexMap::new();
    let mut issues: IndexMap<String, usize> = IndexMap::new();

    for question in questions {
        let result = reviewer.review(Some(&question.help_text), &question.category);

        report.total_reviewed += 1;
        report.with_metrics += usize::from(result.has_metrics);
        report.with_examples += usize::from(result.has_examples);
        report.plain_language += usize::from(result.plain_language);
        report.with_jargon += usize::from(!result.jargon_identified.is_empty());

        let stats = categories
            .entry(question.category.clone())
            .or_insert_with(|| CategoryStats {
                category: question.category.clone(),
                total: 0,
                need_improvement: 0,
            });
        stats.total += 1;

        if !result.needs_improvement() {
            continue;
        }
        report.need_improvement += 1;
        stats.need_improvement += 1;
        for issue in result.suggested_improvements() {
            *issues.entry(issue.clone()).or_insert(0) += 1;
        }

        if report.examples.len() < example_limit {
            let after = enhancer.enhance(&question.help_text, &question.category, picker);
            if after != question.help_text {
                report.examples.push(EnhancementExample {
                    question_id: question.id.clone(),
                    category: question.category.clone(),
                    before: question.help_text.clone(),
                    after,
                });
            }
        }
    }

    let mut top_issues: Vec<IssueCount> = issues
        .into_iter()
        .map(|(issue, count)| IssueCount { issue, count })
        .collect();
    // Stable sort keeps first-seen order among equal counts.
    top_issues.sort_by(|a, b| b.count.cmp(&a.count));

    report.categories = categories.into_values().collect();
    report.top_issues = top_issues;

    tracing::info!(
        reviewed = report.total_reviewed,
        need_improvement = report.need_improvement,
        examples = report.examples.len(),
        "tooltip report generated"
    );
    report
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn render_markdown(report: &AggregateReport) -> String {
    let total = report.total_reviewed;
    let mut md = String::new();

    md.push_str("# Tooltip Readability Review Report\n\n");

    md.push_str("## Summary\n\n");
    let _ = writeln!(md, "- Total tooltips reviewed: {total}");
    let summary = [
        ("With metrics", report.with_metrics),
        ("With examples", report.with_examples),
        ("Plain language", report.plain_language),
        ("Contain jargon", report.with_jargon),
        ("Need improvement", report.need_improvement),
    ];
    for (label, count) in summary {
        let _ = writeln!(
            md,
            "- {label}: {count}/{total} ({}%)",
            percent(count, total)
        );
    }

    md.push_str("\n## Category Breakdown\n\n");
    for stats in &report.categories {
        let _ = writeln!(
            md,
            "- {}: {}/{} need improvement ({}%)",
            stats.category,
            stats.need_improvement,
            stats.total,
            percent(stats.need_improvement, stats.total)
        );
    }

    md.push_str("\n## Top Issues\n\n");
    if report.top_issues.is_empty() {
        md.push_str("No issues found.\n");
    }
    for (rank, issue) in report.top_issues.iter().enumerate() {
        let _ = writeln!(md, "{}. {} ({})", rank + 1, issue.issue, issue.count);
    }

    md.push_str("\n## Example Enhancements\n");
    if report.examples.is_empty() {
        md.push_str("\nNo tooltips needed enhancement.\n");
    }
    for example in &report.examples {
        let _ = writeln!(md, "\n### {} ({})\n", example.question_id, example.category);
        let _ = writeln!(md, "**Before:** {}\n", example.before);
        let _ = writeln!(md, "**After:** {}", example.after);
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_handles_zero_total() {
        assert_eq!(percent(3, 0), 0);
        assert_eq!(percent(1, 4), 25);
        assert_eq!(percent(2, 3), 67);
    }

    #[test]
    fn empty_report_renders_all_sections() {
        let md = render_markdown(&AggregateReport::default());
        for heading in [
            "# Tooltip Readability Review Report",
            "## Summary",
            "## Category Breakdown",
            "## Top Issues",
            "## Example Enhancements",
        ] {
            assert!(md.contains(heading), "missing {heading}");
        }
        assert!(md.contains("- Need improvement: 0/0 (0%)"));
    }
}
