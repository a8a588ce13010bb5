//! Core data types shared by the scoring engine, the CLI and batch input

use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scoring::ScoringThresholds;

/// Kind of phrase being practiced; selects tokenization and matching policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum PracticeCategory {
    /// Radio 10-codes such as `10-4`
    Codes,
    /// NATO phonetic-alphabet letters
    Phonetic,
    /// General radio phrases compared word by word
    #[default]
    RadioProtocol,
}

impl PracticeCategory {
    /// Parses a category label; unknown labels fall back to generic comparison.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "codes" | "code" | "10-codes" => Self::Codes,
            "phonetic" | "phonetics" => Self::Phonetic,
            "radio-protocol" | "radio_protocol" | "radioprotocol" | "" => Self::RadioProtocol,
            other => {
                debug!(label = other, "unknown practice category; using generic comparison");
                Self::RadioProtocol
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Codes => "codes",
            Self::Phonetic => "phonetic",
            Self::RadioProtocol => "radio-protocol",
        }
    }
}

impl From<String> for PracticeCategory {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl FromStr for PracticeCategory {
    type Err = Infallible;

    fn from_str(label: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_label(label))
    }
}

impl Display for PracticeCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse label derived from the integer score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccuracyCategory {
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
}

impl AccuracyCategory {
    pub fn from_score(score: u8, thresholds: &ScoringThresholds) -> Self {
        if score >= thresholds.excellent {
            Self::Excellent
        } else if score >= thresholds.good {
            Self::Good
        } else if score >= thresholds.needs_improvement {
            Self::NeedsImprovement
        } else {
            Self::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::NeedsImprovement => "needs-improvement",
            Self::Poor => "poor",
        }
    }
}

impl Display for AccuracyCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Comparison of one expected token with the spoken token at the same position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub expected: String,
    pub actual: String,
    #[serde(rename = "match")]
    pub matched: bool,
    /// Percentage in [0, 100]
    pub similarity: f64,
}

/// Full scoring outcome for one spoken attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyResult {
    /// Integer score in [0, 100]
    pub score: u8,
    /// One record per expected token, in expected order
    pub matches: Vec<MatchRecord>,
    /// At most three hints
    pub suggestions: Vec<String>,
    pub category: AccuracyCategory,
}

/// Options controlling a single scoring call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringOptions {
    /// Accepted for compatibility; normalization lowercases both inputs regardless
    #[serde(alias = "caseSensitive")]
    pub case_sensitive: bool,
    #[serde(alias = "allowPartialCredit")]
    pub allow_partial_credit: bool,
    #[serde(alias = "strictMode")]
    pub strict_mode: bool,
    pub category: PracticeCategory,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            allow_partial_credit: true,
            strict_mode: false,
            category: PracticeCategory::RadioProtocol,
        }
    }
}

impl ScoringOptions {
    pub fn for_category(category: PracticeCategory) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }
}

/// One practice attempt as handed over by a voice-practice session
#[derive(Debug, Clone, Deserialize)]
pub struct PracticeAttempt {
    #[serde(default, alias = "id", alias = "scenarioId")]
    pub scenario: Option<String>,
    #[serde(alias = "spokenText")]
    pub transcript: String,
    #[serde(alias = "expectedAnswer", alias = "expected")]
    pub expected_answer: String,
    #[serde(flatten)]
    pub options: ScoringOptions,
}

impl PracticeAttempt {
    fn validate(&self, index: usize) -> Result<()> {
        ensure!(
            !self.expected_answer.trim().is_empty(),
            "Attempt {} has an empty expected answer",
            index
        );
        Ok(())
    }
}

/// Batch of attempts parsed from JSON input
#[derive(Debug, Clone, Deserialize)]
pub struct AttemptBatch {
    #[serde(default)]
    pub attempts: Vec<PracticeAttempt>,
}

impl AttemptBatch {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.attempts.is_empty(),
            "Batch must contain at least one attempt"
        );
        for (idx, attempt) in self.attempts.iter().enumerate() {
            attempt.validate(idx)?;
        }
        Ok(())
    }
}

/// Per-attempt output line of a batch run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptReport {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    pub likely_correct: bool,
    #[serde(flatten)]
    pub result: AccuracyResult,
}
