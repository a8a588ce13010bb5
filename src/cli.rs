use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::scoring::DEFAULT_PASS_THRESHOLD;
use crate::types::{AccuracyResult, PracticeCategory, ScoringOptions};

#[derive(Parser, Debug)]
#[command(
    name = "radiocheck",
    version,
    about = "Score spoken radio phrases, 10-codes and phonetic spelling against expected answers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a single transcript against an expected answer.
    Score(ScoreArgs),
    /// Score every attempt in a JSON batch file, one JSON line per attempt.
    Batch(BatchArgs),
    /// List the accepted spoken forms of a 10-code or letter.
    Variants(VariantsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ThresholdArgs {
    /// JSON file overriding the default scoring thresholds.
    #[arg(long = "thresholds", value_name = "PATH")]
    pub thresholds: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Recognized speech transcript.
    #[arg(long)]
    pub spoken: String,
    /// Expected answer for the scenario.
    #[arg(long)]
    pub expected: String,
    /// Practice category: codes, phonetic or radio-protocol.
    #[arg(long, default_value = "radio-protocol")]
    pub category: PracticeCategory,
    /// Raise the generic token threshold.
    #[arg(long)]
    pub strict: bool,
    /// Award zero instead of raw similarity for missed tokens.
    #[arg(long = "no-partial-credit")]
    pub no_partial_credit: bool,
    #[arg(long = "case-sensitive")]
    pub case_sensitive: bool,
    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
    #[command(flatten)]
    pub config: ThresholdArgs,
}

impl ScoreArgs {
    pub fn options(&self) -> ScoringOptions {
        ScoringOptions {
            case_sensitive: self.case_sensitive,
            allow_partial_credit: !self.no_partial_credit,
            strict_mode: self.strict,
            category: self.category,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Path to a JSON file of the form `{"attempts": [...]}`.
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,
    /// Minimum score counted as likely correct.
    #[arg(
        long = "pass-threshold",
        default_value_t = DEFAULT_PASS_THRESHOLD,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub pass_threshold: u8,
    #[command(flatten)]
    pub config: ThresholdArgs,
}

#[derive(Args, Debug, Clone)]
pub struct VariantsArgs {
    #[command(subcommand)]
    pub kind: VariantKind,
}

#[derive(Subcommand, Debug, Clone)]
pub enum VariantKind {
    /// Spoken forms of a 10-code, e.g. `10-4`.
    Code { code: String },
    /// Phonetic words for a letter, e.g. `W`.
    Letter { letter: String },
}

/// Human-readable summary of a scoring result.
pub fn render_report(result: &AccuracyResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Score: {}/100 ({})", result.score, result.category);
    if !result.matches.is_empty() {
        let _ = writeln!(out, "Tokens:");
    }
    for record in &result.matches {
        let mark = if record.matched { "ok" } else { "miss" };
        let actual = if record.actual.is_empty() {
            "-"
        } else {
            record.actual.as_str()
        };
        let _ = writeln!(
            out,
            "  [{mark:>4}] {:<16} heard {:<16} {:>5.1}%",
            record.expected, actual, record.similarity
        );
    }
    if !result.suggestions.is_empty() {
        let _ = writeln!(out, "Suggestions:");
    }
    for suggestion in &result.suggestions {
        let _ = writeln!(out, "  - {suggestion}");
    }
    out
}
