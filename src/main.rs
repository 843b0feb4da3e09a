use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tooltip_review::{
    generate_report, load_questions, render_markdown, sample_questions, Category, Enhancer,
    ReviewConfig, Reviewer, RngPicker,
};

#[derive(Parser)]
#[command(
    name = "tooltip-review",
    about = "Review and enhance assessment help-text tooltips",
    version
)]
struct Cli {
    /// JSON file overriding review thresholds
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Review help text and print the result as JSON
    Review {
        /// Files to review (reads stdin if none provided)
        files: Vec<PathBuf>,
        #[arg(long, default_value = "default")]
        category: String,
    },
    /// Print an enhanced version of the help text
    Enhance {
        /// Files to enhance (reads stdin if none provided)
        files: Vec<PathBuf>,
        #[arg(long, default_value = "default")]
        category: String,
        /// Seed for template selection
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Review a set of questions and render a report
    Report {
        /// JSON array of questions (uses the built-in sample set if omitted)
        #[arg(long)]
        questions: Option<PathBuf>,
        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Emit JSON instead of Markdown
        #[arg(long)]
        json: bool,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => ReviewConfig::from_path(path)?,
        None => ReviewConfig::default(),
    };

    match cli.command {
        Command::Review { files, category } => {
            let reviewer = Reviewer::new(config);
            let category = Category::from(category.as_str());
            for text in read_inputs(&files)? {
                let result = reviewer.review(Some(&text), &category);
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
        }
        Command::Enhance {
            files,
            category,
            seed,
        } => {
            let enhancer = Enhancer::new(config);
            let category = Category::from(category.as_str());
            let mut picker = RngPicker::new(rng_from(seed));
            for text in read_inputs(&files)? {
                println!("{}", enhancer.enhance(&text, &category, &mut picker));
            }
        }
        Command::Report {
            questions,
            output,
            json,
            seed,
        } => {
            let questions = match &questions {
                Some(path) => load_questions(path)?,
                None => sample_questions(),
            };
            let reviewer = Reviewer::new(config.clone());
            let enhancer = Enhancer::new(config);
            let mut picker = RngPicker::new(rng_from(seed));
            let report = generate_report(&questions, &reviewer, &enhancer, &mut picker);

            let rendered = if json {
                serde_json::to_string_pretty(&report)?
            } else {
                render_markdown(&report)
            };
            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Report written to {}", path.display());
                }
                None => println!("{rendered}"),
            }
        }
    }
    Ok(())
}

fn read_inputs(files: &[PathBuf]) -> Result<Vec<String>> {
    if files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        return Ok(vec![input]);
    }
    files
        .iter()
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))
        })
        .collect()
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
