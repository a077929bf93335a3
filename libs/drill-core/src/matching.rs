//! Diacritic-insensitive matching and ranking over a word collection.
//!
//! Every comparison goes through [`normalize`], so "María", "MARIA" and
//! "maria" are the same string to this module. Nothing here returns an error:
//! search-as-you-type input is routinely empty or half-typed.

use crate::types::WordRecord;
use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const SCORE_HEADWORD_EXACT: u32 = 100;
const SCORE_HEADWORD_PREFIX: u32 = 80;
const SCORE_HEADWORD_SUBSTRING: u32 = 60;
const SCORE_TRANSLATION_EXACT: u32 = 90;
const SCORE_TRANSLATION_SUBSTRING: u32 = 50;
const SCORE_GENITIVE_SUBSTRING: u32 = 20;
const SCORE_ALTERNATE_SUBSTRING: u32 = 10;

/// Lowercase and strip diacritics (macrons, acute/grave, dieresis, tilde...).
///
/// Decomposes to NFD and drops combining marks, so precomposed and
/// decomposed spellings of the same letter normalize identically.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Normalize whitespace in a string (trim and collapse multiple spaces).
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True if `field` contains `query`, ignoring case and diacritics.
/// An empty query matches everything.
pub fn matches_substring(field: &str, query: &str) -> bool {
    normalize(field).contains(&normalize(query))
}

/// True if `field` starts with `query`, ignoring case and diacritics.
pub fn matches_prefix(field: &str, query: &str) -> bool {
    normalize(field).starts_with(&normalize(query))
}

/// True if both strings are equal after normalization.
pub fn equals(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Criteria for [`filter`]. Empty label sets do not restrict.
///
/// Labels are compared against `Declension::as_str` / `Gender::as_str`;
/// an unknown label simply never matches.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub declensions: HashSet<String>,
    pub genders: HashSet<String>,
    pub query: String,
}

impl FilterCriteria {
    /// Criteria with only a free-text query.
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_declensions<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declensions = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_genders<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genders = labels.into_iter().map(Into::into).collect();
        self
    }

    fn accepts(&self, word: &WordRecord, query: Option<&str>) -> bool {
        if !self.declensions.is_empty() && !self.declensions.contains(word.declension.as_str()) {
            return false;
        }
        if !self.genders.is_empty() && !self.genders.contains(word.gender.as_str()) {
            return false;
        }
        match query {
            Some(q) => {
                matches_substring(&word.headword, q)
                    || matches_substring(&word.genitive, q)
                    || matches_substring(&word.translation, q)
                    || word
                        .alternate_meanings
                        .iter()
                        .any(|meaning| matches_substring(meaning, q))
            }
            None => true,
        }
    }
}

/// Select the words accepted by `criteria`, preserving collection order.
///
/// A blank query does not restrict the result.
pub fn filter<'a>(words: &'a [WordRecord], criteria: &FilterCriteria) -> Vec<&'a WordRecord> {
    let query = criteria.query.trim();
    let query = (!query.is_empty()).then_some(query);

    words
        .iter()
        .filter(|word| criteria.accepts(word, query))
        .collect()
}

/// Relevance of `word` for an already-normalized, non-empty query.
fn score_normalized(word: &WordRecord, query: &str) -> u32 {
    let mut score = 0;

    let headword = normalize(&word.headword);
    if headword == query {
        score += SCORE_HEADWORD_EXACT;
    } else if headword.starts_with(query) {
        score += SCORE_HEADWORD_PREFIX;
    } else if headword.contains(query) {
        score += SCORE_HEADWORD_SUBSTRING;
    }

    let translation = normalize(&word.translation);
    if translation == query {
        score += SCORE_TRANSLATION_EXACT;
    } else if translation.contains(query) {
        score += SCORE_TRANSLATION_SUBSTRING;
    }

    if normalize(&word.genitive).contains(query) {
        score += SCORE_GENITIVE_SUBSTRING;
    }
    if word
        .alternate_meanings
        .iter()
        .any(|meaning| normalize(meaning).contains(query))
    {
        score += SCORE_ALTERNATE_SUBSTRING;
    }

    score
}

/// Relevance score of `word` for `query`. Zero means no match.
pub fn score(word: &WordRecord, query: &str) -> u32 {
    let query = normalize(query.trim());
    if query.is_empty() {
        return 0;
    }
    score_normalized(word, &query)
}

/// Words matching `query`, best first. Ties keep collection order.
///
/// A blank query ranks nothing.
pub fn rank<'a>(words: &'a [WordRecord], query: &str) -> Vec<&'a WordRecord> {
    let query = normalize(query.trim());
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(u32, &WordRecord)> = words
        .iter()
        .map(|word| (score_normalized(word, &query), word))
        .filter(|(score, _)| *score > 0)
        .collect();

    // Stable sort keeps collection order among equal scores.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, word)| word).collect()
}
