//! Core types for the vocabulary drill engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Noun declension (inflection class).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Declension {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl Declension {
    pub const ALL: [Declension; 5] = [
        Self::First,
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::Fifth,
    ];

    /// Get the declension label as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
            Self::Fourth => "fourth",
            Self::Fifth => "fifth",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first" => Some(Self::First),
            "second" => Some(Self::Second),
            "third" => Some(Self::Third),
            "fourth" => Some(Self::Fourth),
            "fifth" => Some(Self::Fifth),
            _ => None,
        }
    }
}

/// Grammatical gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Self::Masculine, Self::Feminine, Self::Neuter];

    /// Get the gender label as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Masculine => "masculine",
            Self::Feminine => "feminine",
            Self::Neuter => "neuter",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "masculine" => Some(Self::Masculine),
            "feminine" => Some(Self::Feminine),
            "neuter" => Some(Self::Neuter),
            _ => None,
        }
    }
}

/// A vocabulary entry. Supplied by the host and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    pub id: u32,
    /// Dictionary form (nominative singular).
    pub headword: String,
    /// Genitive singular, shown as a disambiguating hint.
    pub genitive: String,
    pub declension: Declension,
    pub gender: Gender,
    pub translation: String,
    #[serde(default)]
    pub alternate_meanings: Vec<String>,
}

/// Kind of drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    /// Pick the matching translation (or headword) from a list.
    TranslationChoice,
    /// Pick the declension of the headword.
    DeclensionChoice,
    /// Pick the gender of the headword.
    GenderChoice,
    /// Type the translation (or headword) freely.
    TypedTranslation,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 4] = [
        Self::TranslationChoice,
        Self::DeclensionChoice,
        Self::GenderChoice,
        Self::TypedTranslation,
    ];

    /// Prompt directions this kind can be framed in. Empty for kinds with a
    /// single framing.
    pub fn directions(&self) -> &'static [PromptDirection] {
        match self {
            Self::TranslationChoice | Self::TypedTranslation => &PromptDirection::ALL,
            Self::DeclensionChoice | Self::GenderChoice => &[],
        }
    }

    /// Whether the learner picks from a list of options.
    pub fn is_multiple_choice(&self) -> bool {
        !matches!(self, Self::TypedTranslation)
    }

    /// Get the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TranslationChoice => "translation_choice",
            Self::DeclensionChoice => "declension_choice",
            Self::GenderChoice => "gender_choice",
            Self::TypedTranslation => "typed_translation",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "translation_choice" => Some(Self::TranslationChoice),
            "declension_choice" => Some(Self::DeclensionChoice),
            "gender_choice" => Some(Self::GenderChoice),
            "typed_translation" => Some(Self::TypedTranslation),
            _ => None,
        }
    }
}

/// Which side of the word is shown as the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptDirection {
    /// Show the Latin headword, ask for the translation.
    HeadwordToTranslation,
    /// Show the translation, ask for the Latin headword.
    TranslationToHeadword,
}

impl PromptDirection {
    pub const ALL: [PromptDirection; 2] =
        [Self::HeadwordToTranslation, Self::TranslationToHeadword];
}

/// One generated exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSpec {
    pub id: Uuid,
    pub kind: ExerciseKind,
    pub word: WordRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<PromptDirection>,
    pub created_at: DateTime<Utc>,
}

/// Resolution of one exercise, answered or skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseOutcome {
    pub exercise_id: Uuid,
    pub word: WordRecord,
    pub kind: ExerciseKind,
    /// Always false when `was_skipped` is set.
    pub is_correct: bool,
    pub elapsed_seconds: f64,
    pub completed_at: DateTime<Utc>,
    pub was_skipped: bool,
}

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Review,
    Exercises,
    Summary,
}

impl Default for SessionPhase {
    fn default() -> Self {
        Self::Review
    }
}

/// Statistics derived from a result ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub skipped: usize,
    /// `total - skipped`.
    pub attempted: usize,
    /// Rounded percentage of attempted items answered correctly; 0 when
    /// nothing was attempted.
    pub accuracy: u32,
    /// Mean seconds spent on attempted items; 0.0 when nothing was attempted.
    pub average_seconds: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declension_labels_round_trip() {
        for declension in Declension::ALL {
            assert_eq!(Declension::from_str(declension.as_str()), Some(declension));
        }
        assert_eq!(Declension::from_str("sixth"), None);
    }

    #[test]
    fn kind_labels_round_trip() {
        for kind in ExerciseKind::ALL {
            assert_eq!(ExerciseKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(ExerciseKind::from_str("listening"), None);
    }

    #[test]
    fn only_translation_kinds_have_directions() {
        assert_eq!(ExerciseKind::TranslationChoice.directions().len(), 2);
        assert_eq!(ExerciseKind::TypedTranslation.directions().len(), 2);
        assert!(ExerciseKind::DeclensionChoice.directions().is_empty());
        assert!(ExerciseKind::GenderChoice.directions().is_empty());
    }

    #[test]
    fn word_record_deserializes_without_alternates() {
        let json = r#"{
            "id": 7,
            "headword": "puella",
            "genitive": "puellae",
            "declension": "first",
            "gender": "feminine",
            "translation": "girl"
        }"#;
        let word: WordRecord = serde_json::from_str(json).unwrap();
        assert_eq!(word.declension, Declension::First);
        assert_eq!(word.gender, Gender::Feminine);
        assert!(word.alternate_meanings.is_empty());
    }
}
