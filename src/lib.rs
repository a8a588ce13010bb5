//! Accuracy scoring for spoken radio-procedure practice.
//!
//! Compares a recognized transcript with an expected 10-code, phonetic spelling or
//! radio phrase and reports a 0-100 score, per-token diagnostics and hints.

pub mod cli;
pub mod config;
pub mod scoring;
pub mod types;

pub use scoring::{
    code_variants, compute_accuracy, is_likely_correct, phonetic_variants, quick_score,
    AccuracyScorer, ScoringError, ScoringThresholds, DEFAULT_PASS_THRESHOLD,
};
pub use types::{AccuracyCategory, AccuracyResult, MatchRecord, PracticeCategory, ScoringOptions};
