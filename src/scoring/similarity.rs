/// Levenshtein distance with unit costs, compared case-insensitively per character.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

/// Percentage similarity in `[0, 100]` derived from the edit distance.
///
/// Two empty strings are identical and score 100.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 100.0;
    }
    let distance = levenshtein_distance(a, b);
    let ratio = (max_len - distance) as f64 / max_len as f64;
    (ratio * 100.0).max(0.0)
}
