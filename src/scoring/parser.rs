use once_cell::sync::Lazy;
use regex::Regex;

use crate::scoring::normalize::normalize_text;
use crate::types::PracticeCategory;

const UNITS: &str = "zero|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|\
                     thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|nineteen";
const TENS: &str = "twenty|thirty|forty|fifty|sixty|seventy|eighty|ninety";
const DIGITS: &str = "one|two|three|four|five|six|seven|eight|nine";

/// A `10`/`ten` lead plus its numeral stays one token; anything else splits on whitespace.
static CODE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    let numeral = format!(r"\d+|(?:{TENS})(?:[\s-]+(?:{DIGITS}))?|{UNITS}");
    Regex::new(&format!(r"\b(?:10|ten)[\s-]+(?:{numeral})\b|\S+"))
        .unwrap_or_else(|err| panic!("failed to compile code token pattern: {err}"))
});

/// Normalizes `text` and splits it into ordered, non-empty tokens for `category`.
///
/// The same policy applies to expected answers and to spoken transcripts so that
/// spelled-out codes such as `ten four` line up with a single `10-4` token.
pub fn tokenize(text: &str, category: PracticeCategory) -> Vec<String> {
    let normalized = normalize_text(text);
    match category {
        PracticeCategory::Codes => CODE_TOKEN
            .find_iter(&normalized)
            .map(|token| rejoin_hyphen(token.as_str()))
            .collect(),
        PracticeCategory::Phonetic | PracticeCategory::RadioProtocol => normalized
            .split_whitespace()
            .map(str::to_string)
            .collect(),
    }
}

// `10- 4` and `10 -4` both mean `10-4`.
fn rejoin_hyphen(token: &str) -> String {
    token.replace("- ", "-").replace(" -", "-")
}
