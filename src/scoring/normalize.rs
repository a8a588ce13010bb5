use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\w\s-]")
        .unwrap_or_else(|err| panic!("failed to compile normalizer pattern: {err}"))
});

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").unwrap_or_else(|err| panic!("failed to compile whitespace pattern: {err}"))
});

/// Canonicalizes raw text for comparison.
///
/// Lowercases, drops everything except word characters, whitespace and hyphens,
/// collapses whitespace runs to a single space and trims both ends.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = DISALLOWED_CHARS.replace_all(&lowered, "");
    WHITESPACE_RUN
        .replace_all(stripped.trim(), " ")
        .into_owned()
}
