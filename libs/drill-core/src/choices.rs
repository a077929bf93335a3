//! Option lists for multiple-choice exercises.

use crate::matching::normalize;
use crate::random::{shuffle, RandomSource};
use crate::types::{Declension, ExerciseKind, ExerciseSpec, Gender, PromptDirection, WordRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default number of options offered for translation choices.
pub const DEFAULT_CHOICE_COUNT: usize = 4;

/// Shuffled options with the position of the right one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choices {
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl Choices {
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }

    pub fn correct(&self) -> &str {
        &self.options[self.correct_index]
    }
}

fn headword_of(word: &WordRecord) -> &str {
    &word.headword
}

fn translation_of(word: &WordRecord) -> &str {
    &word.translation
}

/// Build the options for `spec`, or `None` for typed exercises.
///
/// Translation choices get up to `count` options: the answer plus
/// distractors from the pool that differ from it and from each other after
/// normalization. Declension and gender choices always list every label.
pub fn build_choices(
    spec: &ExerciseSpec,
    pool: &[WordRecord],
    count: usize,
    rng: &mut dyn RandomSource,
) -> Option<Choices> {
    let (correct, candidates): (String, Vec<String>) = match spec.kind {
        ExerciseKind::TypedTranslation => return None,
        ExerciseKind::DeclensionChoice => (
            spec.word.declension.as_str().to_string(),
            Declension::ALL.iter().map(|d| d.as_str().to_string()).collect(),
        ),
        ExerciseKind::GenderChoice => (
            spec.word.gender.as_str().to_string(),
            Gender::ALL.iter().map(|g| g.as_str().to_string()).collect(),
        ),
        ExerciseKind::TranslationChoice => {
            let field = match spec.direction {
                Some(PromptDirection::TranslationToHeadword) => headword_of,
                _ => translation_of,
            };
            let mut candidates: Vec<String> =
                pool.iter().map(|w| field(w).to_string()).collect();
            shuffle(&mut candidates, rng);
            (field(&spec.word).to_string(), candidates)
        }
    };

    let limit = match spec.kind {
        ExerciseKind::TranslationChoice => count.max(1),
        _ => usize::MAX,
    };

    let mut seen = HashSet::new();
    seen.insert(normalize(&correct));
    let mut options: Vec<(String, bool)> = vec![(correct, true)];
    for candidate in candidates {
        if options.len() >= limit {
            break;
        }
        if seen.insert(normalize(&candidate)) {
            options.push((candidate, false));
        }
    }

    shuffle(&mut options, rng);
    let correct_index = options.iter().position(|(_, is_answer)| *is_answer)?;
    Some(Choices {
        options: options.into_iter().map(|(text, _)| text).collect(),
        correct_index,
    })
}
