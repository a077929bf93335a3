//! Vocabulary drill engine.
//!
//! Provides:
//! - Timed drill sessions (review -> exercises -> summary)
//! - Self-refilling randomized exercise queue
//! - Countdown clock driven by host ticks
//! - Append-only result ledger with derived statistics
//! - Diacritic-insensitive word matching, filtering and ranking

pub mod choices;
pub mod clock;
pub mod config;
pub mod error;
pub mod generator;
pub mod grading;
pub mod matching;
pub mod queue;
pub mod random;
pub mod results;
pub mod session;
pub mod time;
pub mod types;

pub use choices::{build_choices, Choices};
pub use clock::{ClockState, SessionClock, Tick};
pub use config::{ReviewMode, SessionConfig};
pub use error::{DrillError, Result};
pub use generator::generate;
pub use matching::{equals, filter, matches_prefix, matches_substring, normalize, rank, FilterCriteria};
pub use queue::DrillQueue;
pub use random::{RandomSource, RngSource, SequenceSource};
pub use results::ResultLedger;
pub use session::{EndReason, Session, SessionReport};
pub use time::{ManualTime, SystemTime, TimeSource};
pub use types::{
    Declension, ExerciseKind, ExerciseOutcome, ExerciseSpec, Gender, PromptDirection,
    SessionPhase, Statistics, WordRecord,
};
