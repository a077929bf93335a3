//! Word list loading and pool selection.

use anyhow::{bail, Context};
use drill_core::{filter, FilterCriteria, WordRecord};
use std::path::Path;

/// Read a JSON array of word records.
pub fn load_words(path: &Path) -> anyhow::Result<Vec<WordRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    parse_words(&content).with_context(|| format!("invalid word list {}", path.display()))
}

pub fn parse_words(content: &str) -> anyhow::Result<Vec<WordRecord>> {
    Ok(serde_json::from_str(content)?)
}

/// Apply the configured selection. Refuses to return an empty pool, so a
/// session is never started without words.
pub fn select_pool(words: &[WordRecord], criteria: &FilterCriteria) -> anyhow::Result<Vec<WordRecord>> {
    let pool: Vec<WordRecord> = filter(words, criteria).into_iter().cloned().collect();
    if pool.is_empty() {
        bail!(
            "no words match the selection ({} words loaded)",
            words.len()
        );
    }
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../data/sample_words.json");

    #[test]
    fn sample_list_parses() {
        let words = parse_words(SAMPLE).unwrap();
        assert_eq!(words.len(), 13);
        assert!(words.iter().any(|w| w.headword == "rēx"));
    }

    #[test]
    fn selection_by_gender() {
        let words = parse_words(SAMPLE).unwrap();
        let criteria = FilterCriteria::default().with_genders(["neuter"]);
        let pool = select_pool(&words, &criteria).unwrap();
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn selection_ignores_macrons() {
        let words = parse_words(SAMPLE).unwrap();
        let pool = select_pool(&words, &FilterCriteria::query("dies")).unwrap();
        assert_eq!(pool[0].headword, "diēs");
    }

    #[test]
    fn empty_selection_is_an_error() {
        let words = parse_words(SAMPLE).unwrap();
        assert!(select_pool(&words, &FilterCriteria::query("zzz")).is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_words("[{\"id\": 1}]").is_err());
    }
}
