//! Terminal configuration read from the environment.

use anyhow::{bail, Context};
use drill_core::{ExerciseKind, FilterCriteria, ReviewMode, SessionConfig};
use std::path::PathBuf;

/// Settings for one terminal run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub words_path: PathBuf,
    pub session: SessionConfig,
    pub criteria: FilterCriteria,
    pub seed: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let words_path = get("DRILL_WORDS")
            .map(PathBuf::from)
            .context("DRILL_WORDS must be set to a JSON word list")?;

        let mut session = SessionConfig::default();
        if let Some(minutes) = get("DRILL_MINUTES") {
            session.duration_minutes = minutes
                .trim()
                .parse()
                .with_context(|| format!("invalid DRILL_MINUTES: {}", minutes))?;
        }
        if let Some(count) = get("DRILL_CHOICES") {
            session.choice_count = count
                .trim()
                .parse()
                .with_context(|| format!("invalid DRILL_CHOICES: {}", count))?;
        }
        if let Some(kinds) = get("DRILL_KINDS") {
            session.exercise_kinds = parse_kinds(&kinds)?;
        }
        if get("DRILL_SKIP_REVIEW").is_some_and(|value| is_truthy(&value)) {
            session.review = ReviewMode::Skip;
        }

        let criteria = FilterCriteria::query(get("DRILL_QUERY").unwrap_or_default())
            .with_declensions(get("DRILL_DECLENSIONS").map(|v| split_list(&v)).unwrap_or_default())
            .with_genders(get("DRILL_GENDERS").map(|v| split_list(&v)).unwrap_or_default());

        let seed = get("DRILL_SEED")
            .map(|seed| {
                seed.trim()
                    .parse()
                    .with_context(|| format!("invalid DRILL_SEED: {}", seed))
            })
            .transpose()?;

        Ok(Self {
            words_path,
            session,
            criteria,
            seed,
        })
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

fn parse_kinds(value: &str) -> anyhow::Result<Vec<ExerciseKind>> {
    let mut kinds = Vec::new();
    for name in split_list(value) {
        match ExerciseKind::from_str(&name) {
            Some(kind) => kinds.push(kind),
            None => bail!("unknown exercise kind in DRILL_KINDS: {}", name),
        }
    }
    Ok(kinds)
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn requires_words_path() {
        let err = config(&[]).unwrap_err();
        assert!(err.to_string().contains("DRILL_WORDS"));
    }

    #[test]
    fn defaults_when_only_words_set() {
        let config = config(&[("DRILL_WORDS", "words.json")]).unwrap();
        assert_eq!(config.words_path, PathBuf::from("words.json"));
        assert_eq!(config.session.duration_minutes, 5);
        assert_eq!(config.session.review, ReviewMode::Required);
        assert!(config.criteria.query.is_empty());
        assert_eq!(config.seed, None);
        assert_eq!(config.session.choice_count, drill_core::choices::DEFAULT_CHOICE_COUNT);
    }

    #[test]
    fn parses_all_settings() {
        let config = config(&[
            ("DRILL_WORDS", "words.json"),
            ("DRILL_MINUTES", "2"),
            ("DRILL_KINDS", "gender_choice, Typed_Translation"),
            ("DRILL_SKIP_REVIEW", "yes"),
            ("DRILL_DECLENSIONS", "first,third"),
            ("DRILL_GENDERS", "neuter"),
            ("DRILL_QUERY", "rex"),
            ("DRILL_SEED", "99"),
            ("DRILL_CHOICES", "3"),
        ])
        .unwrap();

        assert_eq!(config.session.duration_minutes, 2);
        assert_eq!(
            config.session.exercise_kinds,
            vec![ExerciseKind::GenderChoice, ExerciseKind::TypedTranslation]
        );
        assert_eq!(config.session.review, ReviewMode::Skip);
        assert_eq!(config.criteria.declensions.len(), 2);
        assert!(config.criteria.genders.contains("neuter"));
        assert_eq!(config.criteria.query, "rex");
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.session.choice_count, 3);
    }

    #[test]
    fn rejects_unknown_kind_and_bad_numbers() {
        assert!(config(&[("DRILL_WORDS", "w.json"), ("DRILL_KINDS", "listening")]).is_err());
        assert!(config(&[("DRILL_WORDS", "w.json"), ("DRILL_MINUTES", "ten")]).is_err());
        assert!(config(&[("DRILL_WORDS", "w.json"), ("DRILL_SEED", "-1")]).is_err());
    }
}
