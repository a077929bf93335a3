//! Grading of typed answers.

use crate::matching::{equals, normalize_whitespace};
use crate::types::{ExerciseKind, ExerciseSpec, PromptDirection};

/// Answers accepted for an exercise, primary answer first.
pub fn expected_answers(spec: &ExerciseSpec) -> Vec<&str> {
    let word = &spec.word;
    match spec.kind {
        ExerciseKind::DeclensionChoice => vec![word.declension.as_str()],
        ExerciseKind::GenderChoice => vec![word.gender.as_str()],
        ExerciseKind::TranslationChoice | ExerciseKind::TypedTranslation => {
            match spec.direction.unwrap_or(PromptDirection::HeadwordToTranslation) {
                PromptDirection::HeadwordToTranslation => std::iter::once(word.translation.as_str())
                    .chain(word.alternate_meanings.iter().map(String::as_str))
                    .collect(),
                PromptDirection::TranslationToHeadword => vec![word.headword.as_str()],
            }
        }
    }
}

/// True if `typed` matches any expected answer, ignoring case, diacritics
/// and surrounding or repeated whitespace.
pub fn grade_typed(spec: &ExerciseSpec, typed: &str) -> bool {
    let typed = normalize_whitespace(typed);
    if typed.is_empty() {
        return false;
    }
    expected_answers(spec)
        .into_iter()
        .any(|answer| equals(&normalize_whitespace(answer), &typed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Declension, Gender, WordRecord};
    use chrono::Utc;
    use uuid::Uuid;

    fn spec(kind: ExerciseKind, direction: Option<PromptDirection>) -> ExerciseSpec {
        ExerciseSpec {
            id: Uuid::new_v4(),
            kind,
            word: WordRecord {
                id: 1,
                headword: "rēgīna".to_string(),
                genitive: "rēgīnae".to_string(),
                declension: Declension::First,
                gender: Gender::Feminine,
                translation: "queen".to_string(),
                alternate_meanings: vec!["lady ruler".to_string()],
            },
            direction,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn accepts_translation_and_alternates() {
        let s = spec(
            ExerciseKind::TypedTranslation,
            Some(PromptDirection::HeadwordToTranslation),
        );
        assert!(grade_typed(&s, "Queen"));
        assert!(grade_typed(&s, "  lady   ruler "));
        assert!(!grade_typed(&s, "king"));
    }

    #[test]
    fn reverse_direction_ignores_macrons() {
        let s = spec(
            ExerciseKind::TypedTranslation,
            Some(PromptDirection::TranslationToHeadword),
        );
        assert!(grade_typed(&s, "regina"));
        assert!(grade_typed(&s, "RĒGĪNA"));
        assert!(!grade_typed(&s, "queen"));
    }

    #[test]
    fn empty_answer_is_wrong() {
        let s = spec(ExerciseKind::GenderChoice, None);
        assert!(!grade_typed(&s, "   "));
        assert!(grade_typed(&s, "feminine"));
    }
}
