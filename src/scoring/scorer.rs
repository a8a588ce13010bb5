use tracing::debug;

use crate::scoring::matchers::MatcherKind;
use crate::scoring::parser::tokenize;
use crate::scoring::suggestions::generate_suggestions;
use crate::scoring::ScoringThresholds;
use crate::types::{AccuracyCategory, AccuracyResult, MatchRecord, PracticeCategory, ScoringOptions};

const MAX_SCORE: f64 = 100.0;

/// Scores spoken transcripts against expected radio phrases.
///
/// Holds only immutable thresholds, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct AccuracyScorer {
    thresholds: ScoringThresholds,
}

impl AccuracyScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: ScoringThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ScoringThresholds {
        &self.thresholds
    }

    /// Pairs expected token `i` with spoken token `i` and aggregates the per-token results.
    ///
    /// Tokens are aligned strictly by position: a dropped or inserted word shifts every
    /// later pair. Missing spoken tokens compare against the empty string.
    pub fn compute_accuracy(
        &self,
        spoken_text: &str,
        expected_answer: &str,
        options: &ScoringOptions,
    ) -> AccuracyResult {
        let expected_tokens = tokenize(expected_answer, options.category);
        let spoken_tokens = tokenize(spoken_text, options.category);

        let matches: Vec<MatchRecord> = expected_tokens
            .iter()
            .enumerate()
            .map(|(index, expected)| {
                let actual = spoken_tokens.get(index).map(String::as_str).unwrap_or("");
                self.match_pair(expected, actual, options)
            })
            .collect();

        let score = aggregate_score(&matches, options.allow_partial_credit);
        let category = AccuracyCategory::from_score(score, &self.thresholds);
        let suggestions = generate_suggestions(&matches, options.category, &self.thresholds);
        debug!(
            category = %options.category,
            expected_tokens = expected_tokens.len(),
            spoken_tokens = spoken_tokens.len(),
            score,
            label = %category,
            "scored spoken attempt"
        );

        AccuracyResult {
            score,
            matches,
            suggestions,
            category,
        }
    }

    pub fn quick_score(
        &self,
        spoken_text: &str,
        expected_answer: &str,
        category: PracticeCategory,
    ) -> u8 {
        self.compute_accuracy(
            spoken_text,
            expected_answer,
            &ScoringOptions::for_category(category),
        )
        .score
    }

    fn match_pair(&self, expected: &str, actual: &str, options: &ScoringOptions) -> MatchRecord {
        let kind = MatcherKind::select(options.category, expected);
        let outcome = kind.evaluate(expected, actual, options, &self.thresholds);
        debug!(
            expected,
            actual,
            matcher = ?kind,
            similarity = outcome.similarity,
            matched = outcome.matched,
            best_variant = outcome.best_variant.as_deref().unwrap_or(""),
            "token compared"
        );
        MatchRecord {
            expected: expected.to_string(),
            actual: actual.to_string(),
            matched: outcome.matched,
            similarity: outcome.similarity,
        }
    }
}

/// Averages per-token contributions into an integer score in `[0, 100]`.
///
/// Matched tokens contribute 100; misses contribute their similarity with partial
/// credit and 0 without. No expected tokens scores 0.
pub fn aggregate_score(matches: &[MatchRecord], allow_partial_credit: bool) -> u8 {
    if matches.is_empty() {
        return 0;
    }
    let total: f64 = matches
        .iter()
        .map(|record| contribution(record, allow_partial_credit))
        .sum();
    let average = (total / matches.len() as f64).round();
    average.clamp(0.0, MAX_SCORE) as u8
}

fn contribution(record: &MatchRecord, allow_partial_credit: bool) -> f64 {
    if record.matched {
        MAX_SCORE
    } else if allow_partial_credit {
        record.similarity.clamp(0.0, MAX_SCORE)
    } else {
        0.0
    }
}
