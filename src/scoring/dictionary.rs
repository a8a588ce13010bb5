use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::scoring::{Result, ScoringError};

const TEN_CODE_LISTING: &str = include_str!("../../assets/aliases/ten_codes.txt");
const PHONETIC_LISTING: &str = include_str!("../../assets/aliases/phonetic.txt");

/// Shared 10-code table backed by the bundled listing.
pub static TEN_CODES: Lazy<AliasTable> = Lazy::new(|| {
    AliasTable::from_listing(TEN_CODE_LISTING)
        .unwrap_or_else(|err| panic!("failed to initialize 10-code aliases: {err}"))
});

/// Shared NATO phonetic-alphabet table backed by the bundled listing.
pub static PHONETIC_ALPHABET: Lazy<AliasTable> = Lazy::new(|| {
    AliasTable::from_listing(PHONETIC_LISTING)
        .unwrap_or_else(|err| panic!("failed to initialize phonetic aliases: {err}"))
});

/// Read-only mapping from a canonical token to its accepted spoken variants.
///
/// Keys are stored in canonical form (trimmed, uppercased) so `"w"` and `"W"`
/// resolve to the same entry; variants keep listing order.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: HashMap<String, Vec<&'static str>>,
}

impl AliasTable {
    /// Builds a table from `CANONICAL | variant, variant` lines.
    ///
    /// Blank lines and lines starting with `;` are skipped.
    pub fn from_listing(data: &'static str) -> Result<Self> {
        let mut entries: HashMap<String, Vec<&'static str>> = HashMap::new();

        for (idx, line) in data.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(';') {
                continue;
            }

            let (raw_key, raw_variants) = trimmed.split_once('|').ok_or_else(|| {
                ScoringError::new(format!(
                    "alias line {idx} missing '|' separator: {trimmed}"
                ))
            })?;

            let key = canonical_key(raw_key);
            if key.is_empty() {
                return Err(ScoringError::new(format!(
                    "alias line {idx} has an empty canonical token"
                )));
            }

            let variants: Vec<&'static str> = raw_variants
                .split(',')
                .map(str::trim)
                .filter(|variant| !variant.is_empty())
                .collect();
            if variants.is_empty() {
                return Err(ScoringError::new(format!(
                    "alias line {idx} lists no variants for {key}"
                )));
            }

            if entries.insert(key.clone(), variants).is_some() {
                return Err(ScoringError::new(format!(
                    "alias line {idx} duplicates canonical token {key}"
                )));
            }
        }

        if entries.is_empty() {
            return Err(ScoringError::new("alias listing contained no entries"));
        }

        Ok(Self { entries })
    }

    pub fn codes() -> &'static Self {
        &TEN_CODES
    }

    pub fn phonetic() -> &'static Self {
        &PHONETIC_ALPHABET
    }

    /// Returns the listed variants for `token`, if the table knows it.
    pub fn get(&self, token: &str) -> Option<&[&'static str]> {
        self.entries
            .get(&canonical_key(token))
            .map(|variants| variants.as_slice())
    }

    /// Returns the listed variants, or `token` itself as the sole variant when unknown.
    pub fn variants_or_literal<'a>(&'a self, token: &'a str) -> Vec<&'a str> {
        match self.get(token) {
            Some(variants) => variants.to_vec(),
            None => vec![token],
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(&canonical_key(token))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Accepted spoken forms of a 10-code; unknown codes yield the code itself.
pub fn code_variants(code: &str) -> Vec<String> {
    owned(AliasTable::codes().variants_or_literal(code))
}

/// Accepted words for a letter; unknown letters yield the input itself.
pub fn phonetic_variants(letter: &str) -> Vec<String> {
    owned(AliasTable::phonetic().variants_or_literal(letter))
}

fn owned(variants: Vec<&str>) -> Vec<String> {
    variants.into_iter().map(str::to_string).collect()
}

fn canonical_key(raw: &str) -> String {
    raw.trim().to_uppercase()
}
