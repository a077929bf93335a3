//! Session configuration.

use crate::choices::DEFAULT_CHOICE_COUNT;
use crate::error::{DrillError, Result};
use crate::queue::DEFAULT_LOOKAHEAD;
use crate::types::ExerciseKind;
use serde::{Deserialize, Serialize};

/// Whether a session opens on the word review screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewMode {
    /// Start in Review; the host must call `begin_exercises`.
    Required,
    /// Move straight to Exercises on construction.
    Skip,
}

impl Default for ReviewMode {
    fn default() -> Self {
        Self::Required
    }
}

/// Everything a session needs besides its word pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub duration_minutes: u32,
    pub exercise_kinds: Vec<ExerciseKind>,
    pub lookahead: usize,
    pub review: ReviewMode,
    /// Options offered per translation choice.
    pub choice_count: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_minutes: 5,
            exercise_kinds: ExerciseKind::ALL.to_vec(),
            lookahead: DEFAULT_LOOKAHEAD,
            review: ReviewMode::default(),
            choice_count: DEFAULT_CHOICE_COUNT,
        }
    }
}

impl SessionConfig {
    pub fn new(duration_minutes: u32, exercise_kinds: Vec<ExerciseKind>) -> Self {
        Self {
            duration_minutes,
            exercise_kinds,
            ..Default::default()
        }
    }

    pub fn with_review(mut self, review: ReviewMode) -> Self {
        self.review = review;
        self
    }

    pub fn with_lookahead(mut self, lookahead: usize) -> Self {
        self.lookahead = lookahead;
        self
    }

    pub fn with_choice_count(mut self, choice_count: usize) -> Self {
        self.choice_count = choice_count;
        self
    }

    /// Check preconditions and drop repeated kinds, keeping first-seen order.
    pub fn validate(mut self) -> Result<Self> {
        if self.duration_minutes == 0 {
            return Err(DrillError::InvalidDuration {
                minutes: self.duration_minutes,
            });
        }
        if self.lookahead == 0 {
            return Err(DrillError::InvalidLookahead);
        }
        if self.choice_count < 2 {
            return Err(DrillError::InvalidChoiceCount {
                count: self.choice_count,
            });
        }

        let mut kinds = Vec::with_capacity(self.exercise_kinds.len());
        for kind in self.exercise_kinds {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        if kinds.is_empty() {
            return Err(DrillError::NoExerciseKinds);
        }
        self.exercise_kinds = kinds;
        Ok(self)
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_minutes.saturating_mul(60)
    }
}
