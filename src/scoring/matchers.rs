use crate::scoring::dictionary::AliasTable;
use crate::scoring::normalize::normalize_text;
use crate::scoring::similarity::similarity;
use crate::scoring::ScoringThresholds;
use crate::types::{PracticeCategory, ScoringOptions};

/// Outcome of comparing one spoken token against one expected token.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub matched: bool,
    pub similarity: f64,
    pub best_variant: Option<String>,
}

/// Matching policy applied to a single expected token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherKind {
    Code,
    Phonetic,
    Token,
}

impl MatcherKind {
    /// Picks the matcher from the practice category and the shape of the expected token.
    pub fn select(category: PracticeCategory, expected: &str) -> Self {
        match category {
            PracticeCategory::Codes if expected.starts_with("10") => Self::Code,
            PracticeCategory::Phonetic if is_single_letter(expected) => Self::Phonetic,
            _ => Self::Token,
        }
    }

    pub fn evaluate(
        self,
        expected: &str,
        actual: &str,
        options: &ScoringOptions,
        thresholds: &ScoringThresholds,
    ) -> MatchOutcome {
        match self {
            Self::Code => match_code(actual, expected, thresholds),
            Self::Phonetic => match_phonetic(actual, expected, thresholds),
            Self::Token => match_token(expected, actual, options.strict_mode, thresholds),
        }
    }
}

/// Compares a spoken token against every accepted form of a 10-code.
pub fn match_code(spoken: &str, code: &str, thresholds: &ScoringThresholds) -> MatchOutcome {
    match_variants(spoken, code, AliasTable::codes(), thresholds.code_match)
}

/// Compares a spoken token against the phonetic words for a letter.
pub fn match_phonetic(spoken: &str, letter: &str, thresholds: &ScoringThresholds) -> MatchOutcome {
    match_variants(spoken, letter, AliasTable::phonetic(), thresholds.phonetic_match)
}

/// Direct similarity between expected and actual tokens.
pub fn match_token(
    expected: &str,
    actual: &str,
    strict_mode: bool,
    thresholds: &ScoringThresholds,
) -> MatchOutcome {
    let score = similarity(expected, actual);
    MatchOutcome {
        matched: score >= thresholds.token_threshold(strict_mode),
        similarity: score,
        best_variant: None,
    }
}

fn match_variants(
    spoken: &str,
    canonical: &str,
    table: &AliasTable,
    threshold: f64,
) -> MatchOutcome {
    let spoken = normalize_text(spoken);
    let mut best_similarity = 0.0;
    let mut best_variant: Option<&str> = None;

    for variant in table.variants_or_literal(canonical) {
        let candidate = normalize_text(variant);
        if candidate == spoken {
            return MatchOutcome {
                matched: true,
                similarity: 100.0,
                best_variant: Some(variant.to_string()),
            };
        }
        let score = similarity(&spoken, &candidate);
        if best_variant.is_none() || score > best_similarity {
            best_similarity = score;
            best_variant = Some(variant);
        }
    }

    MatchOutcome {
        matched: best_similarity >= threshold,
        similarity: best_similarity,
        best_variant: best_variant.map(str::to_string),
    }
}

fn is_single_letter(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(ch), None) if ch.is_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_matcher_accepts_spelled_out_form() {
        let outcome = match_code("ten four", "10-4", &ScoringThresholds::default());
        assert!(outcome.matched);
        assert_eq!(outcome.similarity, 100.0);
        assert_eq!(outcome.best_variant.as_deref(), Some("ten four"));
    }

    #[test]
    fn code_matcher_tolerates_small_recognition_errors() {
        let outcome = match_code("ten for", "10-4", &ScoringThresholds::default());
        assert!(outcome.matched, "{outcome:?}");
        assert!(outcome.similarity < 100.0);
    }

    #[test]
    fn code_matcher_rejects_unrelated_speech() {
        let outcome = match_code("xyz", "10-4", &ScoringThresholds::default());
        assert!(!outcome.matched);
        assert!(outcome.similarity < 50.0);
    }

    #[test]
    fn unknown_code_compares_against_literal() {
        let outcome = match_code("10-77", "10-77", &ScoringThresholds::default());
        assert!(outcome.matched);
        assert_eq!(outcome.best_variant.as_deref(), Some("10-77"));
    }

    #[test]
    fn phonetic_matcher_accepts_synonyms() {
        let thresholds = ScoringThresholds::default();
        assert!(match_phonetic("whisky", "w", &thresholds).matched);
        assert!(match_phonetic("Charley", "C", &thresholds).matched);
        assert!(!match_phonetic("bravo", "C", &thresholds).matched);
    }

    #[test]
    fn strict_mode_tightens_token_matching() {
        let thresholds = ScoringThresholds::default();
        let relaxed = match_token("dispatch", "dispach", false, &thresholds);
        let strict = match_token("dispatch", "dispach", true, &thresholds);
        assert!(relaxed.matched);
        assert!(!strict.matched);
        assert_eq!(relaxed.similarity, strict.similarity);
    }

    #[test]
    fn selects_matcher_by_category_and_shape() {
        assert_eq!(MatcherKind::select(PracticeCategory::Codes, "10-8"), MatcherKind::Code);
        assert_eq!(MatcherKind::select(PracticeCategory::Codes, "copy"), MatcherKind::Token);
        assert_eq!(MatcherKind::select(PracticeCategory::Phonetic, "w"), MatcherKind::Phonetic);
        assert_eq!(
            MatcherKind::select(PracticeCategory::Phonetic, "whiskey"),
            MatcherKind::Token
        );
        assert_eq!(
            MatcherKind::select(PracticeCategory::RadioProtocol, "10-4"),
            MatcherKind::Token
        );
    }
}
