//! Append-only ledger of exercise outcomes.

use crate::error::{DrillError, Result};
use crate::types::{ExerciseOutcome, Statistics, WordRecord};
use std::collections::HashSet;
use uuid::Uuid;

/// Outcomes in the order they were recorded.
///
/// Entries are never replaced or removed. Once frozen, the ledger rejects
/// further records.
#[derive(Debug, Clone, Default)]
pub struct ResultLedger {
    outcomes: Vec<ExerciseOutcome>,
    recorded_ids: HashSet<Uuid>,
    frozen: bool,
}

impl ResultLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outcome.
    pub fn record(&mut self, outcome: ExerciseOutcome) -> Result<()> {
        if self.frozen {
            return Err(DrillError::SessionEnded);
        }
        if !self.recorded_ids.insert(outcome.exercise_id) {
            return Err(DrillError::DuplicateOutcome {
                exercise_id: outcome.exercise_id,
            });
        }
        self.outcomes.push(outcome);
        Ok(())
    }

    /// Refuse all further records. Idempotent.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Statistics recomputed from the current entries.
    pub fn snapshot(&self) -> Statistics {
        statistics(&self.outcomes)
    }

    pub fn ledger(&self) -> &[ExerciseOutcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn last(&self) -> Option<&ExerciseOutcome> {
        self.outcomes.last()
    }

    /// Distinct words answered incorrectly, in order of first miss.
    pub fn missed_words(&self) -> Vec<&WordRecord> {
        missed_words(&self.outcomes)
    }
}

/// Distinct words answered incorrectly, in order of first miss.
/// Skips do not count as misses.
pub fn missed_words(outcomes: &[ExerciseOutcome]) -> Vec<&WordRecord> {
    let mut seen = HashSet::new();
    outcomes
        .iter()
        .filter(|o| !o.was_skipped && !o.is_correct)
        .filter(|o| seen.insert(o.word.id))
        .map(|o| &o.word)
        .collect()
}

/// Derive statistics from a sequence of outcomes.
pub fn statistics(outcomes: &[ExerciseOutcome]) -> Statistics {
    let total = outcomes.len();
    let skipped = outcomes.iter().filter(|o| o.was_skipped).count();
    let correct = outcomes
        .iter()
        .filter(|o| o.is_correct && !o.was_skipped)
        .count();
    let attempted = total - skipped;
    let incorrect = attempted - correct;

    let (accuracy, average_seconds) = if attempted > 0 {
        let accuracy = (correct as f64 / attempted as f64 * 100.0).round() as u32;
        let seconds: f64 = outcomes
            .iter()
            .filter(|o| !o.was_skipped)
            .map(|o| o.elapsed_seconds)
            .sum();
        (accuracy, seconds / attempted as f64)
    } else {
        (0, 0.0)
    };

    Statistics {
        total,
        correct,
        incorrect,
        skipped,
        attempted,
        accuracy,
        average_seconds,
    }
}
