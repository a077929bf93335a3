//! Text rendering for the terminal drill.

use drill_core::grading::expected_answers;
use drill_core::results::missed_words;
use drill_core::{
    Choices, EndReason, ExerciseKind, ExerciseOutcome, ExerciseSpec, Gender, PromptDirection,
    SessionReport, WordRecord,
};

/// `m:ss` countdown.
pub fn format_remaining(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn gender_abbrev(gender: Gender) -> &'static str {
    match gender {
        Gender::Masculine => "m.",
        Gender::Feminine => "f.",
        Gender::Neuter => "n.",
    }
}

fn dictionary_form(word: &WordRecord) -> String {
    format!("{}, {}", word.headword, word.genitive)
}

/// The words shown before drilling starts.
pub fn review_list(words: &[WordRecord]) -> String {
    words
        .iter()
        .map(|word| {
            format!(
                "  {} ({} {}) - {}",
                dictionary_form(word),
                gender_abbrev(word.gender),
                word.declension.as_str(),
                word.translation
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The question line for an exercise.
pub fn prompt(spec: &ExerciseSpec) -> String {
    let word = &spec.word;
    match spec.kind {
        ExerciseKind::DeclensionChoice => format!("Declension of {}?", dictionary_form(word)),
        ExerciseKind::GenderChoice => format!("Gender of {}?", dictionary_form(word)),
        ExerciseKind::TranslationChoice | ExerciseKind::TypedTranslation => {
            match spec.direction.unwrap_or(PromptDirection::HeadwordToTranslation) {
                PromptDirection::HeadwordToTranslation => {
                    format!("Translate: {}", dictionary_form(word))
                }
                PromptDirection::TranslationToHeadword => {
                    format!("Latin for: {}", word.translation)
                }
            }
        }
    }
}

pub fn render_choices(choices: &Choices) -> String {
    choices
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| format!("  {}) {}", i + 1, option))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Response shown after an exercise is resolved.
pub fn feedback(spec: &ExerciseSpec, outcome: &ExerciseOutcome) -> String {
    let answer = expected_answers(spec).first().copied().unwrap_or_default();
    if outcome.was_skipped {
        format!("Skipped. Answer: {}", answer)
    } else if outcome.is_correct {
        format!("Correct ({:.1}s)", outcome.elapsed_seconds)
    } else {
        format!("Wrong. Answer: {}", answer)
    }
}

/// Final summary block.
pub fn summary(report: &SessionReport) -> String {
    let stats = &report.statistics;
    let reason = match report.end_reason {
        EndReason::Expired => "Time is up!",
        EndReason::EndedByUser => "Session ended.",
    };

    let mut lines = vec![
        reason.to_string(),
        format!(
            "Answered {} of {} ({} skipped)",
            stats.attempted, stats.total, stats.skipped
        ),
        format!(
            "Correct: {}  Wrong: {}  Accuracy: {}%",
            stats.correct, stats.incorrect, stats.accuracy
        ),
    ];
    if stats.attempted > 0 {
        lines.push(format!("Average time: {:.1}s", stats.average_seconds));
    }

    let missed: Vec<&str> = missed_words(&report.ledger)
        .into_iter()
        .map(|word| word.headword.as_str())
        .collect();
    if !missed.is_empty() {
        lines.push(format!("Review these: {}", missed.join(", ")));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_core::results::statistics;
    use drill_core::{Declension, Statistics};
    use pretty_assertions::assert_eq;

    fn rex() -> WordRecord {
        WordRecord {
            id: 7,
            headword: "rēx".to_string(),
            genitive: "rēgis".to_string(),
            declension: Declension::Third,
            gender: Gender::Masculine,
            translation: "king".to_string(),
            alternate_meanings: vec![],
        }
    }

    fn spec(kind: ExerciseKind, direction: Option<PromptDirection>) -> ExerciseSpec {
        ExerciseSpec {
            id: Default::default(),
            kind,
            word: rex(),
            direction,
            created_at: Default::default(),
        }
    }

    fn outcome(is_correct: bool, was_skipped: bool) -> ExerciseOutcome {
        ExerciseOutcome {
            exercise_id: Default::default(),
            word: rex(),
            kind: ExerciseKind::TranslationChoice,
            is_correct,
            elapsed_seconds: if was_skipped { 0.0 } else { 2.5 },
            completed_at: Default::default(),
            was_skipped,
        }
    }

    #[test]
    fn remaining_time_format() {
        assert_eq!(format_remaining(300), "5:00");
        assert_eq!(format_remaining(65), "1:05");
        assert_eq!(format_remaining(0), "0:00");
    }

    #[test]
    fn prompts_by_kind_and_direction() {
        assert_eq!(
            prompt(&spec(
                ExerciseKind::TranslationChoice,
                Some(PromptDirection::HeadwordToTranslation)
            )),
            "Translate: rēx, rēgis"
        );
        assert_eq!(
            prompt(&spec(
                ExerciseKind::TypedTranslation,
                Some(PromptDirection::TranslationToHeadword)
            )),
            "Latin for: king"
        );
        assert_eq!(
            prompt(&spec(ExerciseKind::GenderChoice, None)),
            "Gender of rēx, rēgis?"
        );
    }

    #[test]
    fn choices_are_numbered_from_one() {
        let choices = Choices {
            options: vec!["king".to_string(), "law".to_string()],
            correct_index: 0,
        };
        assert_eq!(render_choices(&choices), "  1) king\n  2) law");
    }

    #[test]
    fn feedback_variants() {
        let s = spec(
            ExerciseKind::TranslationChoice,
            Some(PromptDirection::HeadwordToTranslation),
        );
        assert_eq!(feedback(&s, &outcome(true, false)), "Correct (2.5s)");
        assert_eq!(feedback(&s, &outcome(false, false)), "Wrong. Answer: king");
        assert_eq!(feedback(&s, &outcome(false, true)), "Skipped. Answer: king");
    }

    #[test]
    fn review_list_shows_dictionary_entries() {
        assert_eq!(review_list(&[rex()]), "  rēx, rēgis (m. third) - king");
    }

    #[test]
    fn summary_lists_missed_words() {
        let ledger = vec![outcome(false, false), outcome(true, false), outcome(false, true)];
        let report = SessionReport {
            session_id: Default::default(),
            statistics: statistics(&ledger),
            ledger,
            end_reason: EndReason::Expired,
            ended_at: Default::default(),
        };
        let text = summary(&report);
        assert!(text.starts_with("Time is up!"));
        assert!(text.contains("Answered 2 of 3 (1 skipped)"));
        assert!(text.contains("Accuracy: 50%"));
        assert!(text.contains("Review these: rēx"));
    }

    #[test]
    fn empty_session_summary() {
        let report = SessionReport {
            session_id: Default::default(),
            statistics: Statistics::default(),
            ledger: vec![],
            end_reason: EndReason::EndedByUser,
            ended_at: Default::default(),
        };
        assert_eq!(
            summary(&report),
            "Session ended.\nAnswered 0 of 0 (0 skipped)\nCorrect: 0  Wrong: 0  Accuracy: 0%"
        );
    }
}
