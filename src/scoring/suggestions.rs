use crate::scoring::ScoringThresholds;
use crate::types::{MatchRecord, PracticeCategory};

pub const MAX_SUGGESTIONS: usize = 3;

pub const ALL_CORRECT: &str = "Excellent! Every word was recognized correctly.";

static CODE_TIPS: [&str; 2] = [
    "Speak the numbers in each 10-code clearly and distinctly.",
    "Both numeral and spelled-out forms are accepted (\"10-4\" or \"ten four\").",
];

static PHONETIC_TIPS: [&str; 2] = [
    "Use the NATO phonetic alphabet words (Alpha, Bravo, Charlie...).",
    "Pronounce each letter word distinctly with a short pause between them.",
];

/// Builds at most [`MAX_SUGGESTIONS`] hints from the per-token results.
///
/// Category tips come first, followed by one hint per missed token in order; the cap
/// applies to the combined list. An empty match list counts as fully matched.
pub fn generate_suggestions(
    matches: &[MatchRecord],
    category: PracticeCategory,
    thresholds: &ScoringThresholds,
) -> Vec<String> {
    if matches.iter().all(|record| record.matched) {
        return vec![ALL_CORRECT.to_string()];
    }

    category_tips(category)
        .iter()
        .map(|tip| tip.to_string())
        .chain(
            matches
                .iter()
                .filter(|record| !record.matched)
                .filter_map(|record| token_tip(record, thresholds)),
        )
        .take(MAX_SUGGESTIONS)
        .collect()
}

fn category_tips(category: PracticeCategory) -> &'static [&'static str] {
    match category {
        PracticeCategory::Codes => &CODE_TIPS,
        PracticeCategory::Phonetic => &PHONETIC_TIPS,
        PracticeCategory::RadioProtocol => &[],
    }
}

fn token_tip(record: &MatchRecord, thresholds: &ScoringThresholds) -> Option<String> {
    if record.similarity < thresholds.partial_recognition {
        Some(format!(
            "\"{}\" was not recognized. Try speaking more clearly.",
            record.expected
        ))
    } else if record.similarity < thresholds.token_match {
        Some(format!(
            "\"{}\" was partially recognized. Check your pronunciation.",
            record.expected
        ))
    } else {
        None
    }
}
