//! Readability review for assessment help-text tooltips.
//!
//! Each tooltip is measured (word count, sentence length, complex words),
//! checked for concrete numbers, examples and unexplained jargon, and
//! given a list of suggested improvements. Weak tooltips can be enhanced
//! by appending canned sentences, and a batch of questions can be rolled
//! up into a Markdown report.

pub mod config;
pub mod detect;
pub mod enhance;
pub mod error;
pub mod question;
pub mod report;
pub mod review;
pub mod text;

pub use config::ReviewConfig;
pub use enhance::{enhance_tooltip, Enhancer, FixedPicker, RngPicker, TemplatePicker};
pub use error::{Result, ReviewError};
pub use question::{load_questions, sample_questions, Category, Question};
pub use report::{generate_report, render_markdown, AggregateReport};
pub use review::{review_tooltip, ReviewResult, Reviewer};
