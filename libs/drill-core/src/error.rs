//! Error types for drill-core.

use crate::types::SessionPhase;
use thiserror::Error;
use uuid::Uuid;

/// Result type alias using DrillError.
pub type Result<T> = std::result::Result<T, DrillError>;

/// Errors raised by the drill engine.
///
/// Learner actions (answer, skip, early end, clock expiry) never produce
/// these; they signal either a refused precondition or engine misuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrillError {
    #[error("word pool is empty")]
    EmptyPool,

    #[error("no exercise kinds enabled")]
    NoExerciseKinds,

    #[error("session duration must be positive, got {minutes} minutes")]
    InvalidDuration { minutes: u32 },

    #[error("clock duration must be positive, got {seconds} seconds")]
    InvalidClockDuration { seconds: u32 },

    #[error("lookahead must be at least 1")]
    InvalidLookahead,

    #[error("choice count must be at least 2, got {count}")]
    InvalidChoiceCount { count: usize },

    #[error("drill queue is exhausted")]
    QueueExhausted,

    #[error("session has already ended")]
    SessionEnded,

    #[error("expected phase {expected:?}, session is in {actual:?}")]
    WrongPhase {
        expected: SessionPhase,
        actual: SessionPhase,
    },

    #[error("clock has already been started")]
    ClockAlreadyStarted,

    #[error("no exercise is current")]
    NoCurrentExercise,

    #[error("outcome for exercise {exercise_id} already recorded")]
    DuplicateOutcome { exercise_id: Uuid },
}
