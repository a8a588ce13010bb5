use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use radiocheck::cli::{render_report, BatchArgs, Cli, Command, ScoreArgs, VariantKind, VariantsArgs};
use radiocheck::config::AppConfig;
use radiocheck::scoring::{code_variants, is_likely_correct, phonetic_variants};
use radiocheck::types::{AttemptBatch, AttemptReport};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Score(args) => handle_score(&args),
        Command::Batch(args) => handle_batch(&args),
        Command::Variants(args) => handle_variants(&args),
    }
}

fn handle_score(args: &ScoreArgs) -> Result<()> {
    let config = AppConfig::from_override(args.config.thresholds.clone())
        .context("Failed to load scoring thresholds")?;
    let options = args.options();
    if options.case_sensitive {
        warn!("--case-sensitive has no effect; transcripts are compared case-insensitively");
    }
    let result = config
        .scorer()
        .compute_accuracy(&args.spoken, &args.expected, &options);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_report(&result));
    }
    Ok(())
}

fn handle_batch(args: &BatchArgs) -> Result<()> {
    let config = AppConfig::from_override(args.config.thresholds.clone())
        .context("Failed to load scoring thresholds")?;
    let batch = load_batch(&args.input)?;
    batch.validate().context("Batch validation failed")?;
    info!(
        attempts = batch.attempts.len(),
        pass_threshold = args.pass_threshold,
        "scoring batch"
    );

    let scorer = config.scorer();
    for (index, attempt) in batch.attempts.into_iter().enumerate() {
        let result =
            scorer.compute_accuracy(&attempt.transcript, &attempt.expected_answer, &attempt.options);
        let report = AttemptReport {
            index,
            scenario: attempt.scenario,
            likely_correct: is_likely_correct(&result, args.pass_threshold),
            result,
        };
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}

fn load_batch(path: &Path) -> Result<AttemptBatch> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file {:?}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse batch file {:?}", path))
}

fn handle_variants(args: &VariantsArgs) -> Result<()> {
    let variants = match &args.kind {
        VariantKind::Code { code } => code_variants(code),
        VariantKind::Letter { letter } => phonetic_variants(letter),
    };
    for variant in variants {
        println!("{variant}");
    }
    Ok(())
}
