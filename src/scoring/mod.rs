pub mod dictionary;
pub mod matchers;
pub mod normalize;
pub mod parser;
pub mod scorer;
pub mod similarity;
pub mod suggestions;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::{AccuracyResult, PracticeCategory, ScoringOptions};

pub use dictionary::{code_variants, phonetic_variants, AliasTable};
pub use matchers::{MatchOutcome, MatcherKind};
pub use normalize::normalize_text;
pub use parser::tokenize;
pub use scorer::AccuracyScorer;
pub use similarity::{levenshtein_distance, similarity};
pub use suggestions::generate_suggestions;

/// Score at or above which a result is treated as a likely-correct attempt.
pub const DEFAULT_PASS_THRESHOLD: u8 = 75;

/// Convenient alias for results returned by scoring setup routines.
pub type Result<T> = std::result::Result<T, ScoringError>;

/// Error raised while building alias tables or validating thresholds.
///
/// Scoring itself never fails; only the setup paths around it do.
#[derive(Debug, Clone)]
pub struct ScoringError {
    message: Arc<str>,
}

impl ScoringError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Arc::from(message.into()),
        }
    }
}

impl Display for ScoringError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ScoringError {}

/// Policy thresholds used by the matchers, the aggregator and the suggestion bands.
///
/// Similarity thresholds are percentages in `[0, 100]`; category cutoffs apply to the
/// rounded integer score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringThresholds {
    #[serde(alias = "codeMatch")]
    pub code_match: f64,
    #[serde(alias = "phoneticMatch")]
    pub phonetic_match: f64,
    #[serde(alias = "tokenMatch")]
    pub token_match: f64,
    #[serde(alias = "strictTokenMatch")]
    pub strict_token_match: f64,
    #[serde(alias = "partialRecognition")]
    pub partial_recognition: f64,
    pub excellent: u8,
    pub good: u8,
    #[serde(alias = "needsImprovement")]
    pub needs_improvement: u8,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            code_match: 80.0,
            phonetic_match: 85.0,
            token_match: 80.0,
            strict_token_match: 95.0,
            partial_recognition: 50.0,
            excellent: 90,
            good: 75,
            needs_improvement: 50,
        }
    }
}

impl ScoringThresholds {
    /// Rejects out-of-range percentages and category cutoffs that are not descending.
    pub fn validate(&self) -> Result<()> {
        let percentages = [
            ("code_match", self.code_match),
            ("phonetic_match", self.phonetic_match),
            ("token_match", self.token_match),
            ("strict_token_match", self.strict_token_match),
            ("partial_recognition", self.partial_recognition),
        ];
        for (label, value) in percentages {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(ScoringError::new(format!(
                    "{label} must be within [0, 100], got {value}"
                )));
            }
        }
        if self.excellent > 100 {
            return Err(ScoringError::new(format!(
                "excellent cutoff must be at most 100, got {}",
                self.excellent
            )));
        }
        if !(self.excellent >= self.good && self.good >= self.needs_improvement) {
            return Err(ScoringError::new(format!(
                "category cutoffs must descend: excellent {} >= good {} >= needs_improvement {}",
                self.excellent, self.good, self.needs_improvement
            )));
        }
        if self.partial_recognition > self.token_match {
            return Err(ScoringError::new(format!(
                "partial_recognition ({}) cannot exceed token_match ({})",
                self.partial_recognition, self.token_match
            )));
        }
        Ok(())
    }

    /// Acceptance threshold for the generic token matcher.
    pub fn token_threshold(&self, strict_mode: bool) -> f64 {
        if strict_mode {
            self.strict_token_match
        } else {
            self.token_match
        }
    }
}

/// Scores `spoken_text` against `expected_answer` with the default thresholds.
pub fn compute_accuracy(
    spoken_text: &str,
    expected_answer: &str,
    options: &ScoringOptions,
) -> AccuracyResult {
    AccuracyScorer::new().compute_accuracy(spoken_text, expected_answer, options)
}

/// Returns only the integer score of [`compute_accuracy`] for the given category.
pub fn quick_score(spoken_text: &str, expected_answer: &str, category: PracticeCategory) -> u8 {
    AccuracyScorer::new().quick_score(spoken_text, expected_answer, category)
}

/// True when the result scores at or above `threshold`.
pub fn is_likely_correct(result: &AccuracyResult, threshold: u8) -> bool {
    result.score >= threshold
}
