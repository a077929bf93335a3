//! Drill session state machine.
//!
//! A [`Session`] owns its queue, clock and ledger. The host drives it with
//! learner actions (`answer`, `skip`, `end_session`) and one `tick` per
//! second; all state changes go through these methods.
//!
//! ```text
//! Review --begin_exercises--> Exercises --tick (expired) / end_session--> Summary
//!                               ^    |
//!                               +----+ answer / skip
//! ```
//!
//! Summary is terminal. Once entered, the ledger is frozen and every further
//! learner action is rejected with [`DrillError::SessionEnded`].

use crate::choices::{build_choices, Choices};
use crate::clock::{ClockState, SessionClock, Tick};
use crate::config::{ReviewMode, SessionConfig};
use crate::error::{DrillError, Result};
use crate::grading::grade_typed;
use crate::queue::DrillQueue;
use crate::random::{RandomSource, RngSource};
use crate::results::ResultLedger;
use crate::time::{seconds_between, SystemTime, TimeSource};
use crate::types::{
    ExerciseKind, ExerciseOutcome, ExerciseSpec, SessionPhase, Statistics, WordRecord,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Why a session reached Summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// The clock ran out.
    Expired,
    /// The host asked to stop early.
    EndedByUser,
}

/// Final state of a finished session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub session_id: Uuid,
    pub statistics: Statistics,
    pub ledger: Vec<ExerciseOutcome>,
    pub end_reason: EndReason,
    pub ended_at: DateTime<Utc>,
}

type FinishedCallback = Box<dyn FnOnce(&SessionReport) + Send>;

#[derive(Debug, Clone)]
struct CurrentExercise {
    spec: ExerciseSpec,
    choices: Option<Choices>,
    started_at: DateTime<Utc>,
}

pub struct Session {
    id: Uuid,
    config: SessionConfig,
    pool: Arc<[WordRecord]>,
    phase: SessionPhase,
    queue: DrillQueue,
    clock: SessionClock,
    results: ResultLedger,
    current: Option<CurrentExercise>,
    rng: Box<dyn RandomSource>,
    time: Box<dyn TimeSource>,
    report: Option<SessionReport>,
    on_finished: Option<FinishedCallback>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("clock", &self.clock)
            .field("recorded", &self.results.len())
            .field("current", &self.current.as_ref().map(|c| c.spec.id))
            .finish()
    }
}

impl Session {
    /// Create a session over `words`.
    ///
    /// Refuses to start on an empty pool or an invalid configuration. With
    /// [`ReviewMode::Skip`] the session is already in Exercises on return.
    pub fn new<R, T>(words: Vec<WordRecord>, config: SessionConfig, rng: R, time: T) -> Result<Self>
    where
        R: RandomSource + 'static,
        T: TimeSource + 'static,
    {
        let config = config.validate()?;
        if words.is_empty() {
            return Err(DrillError::EmptyPool);
        }

        let mut rng: Box<dyn RandomSource> = Box::new(rng);
        let time: Box<dyn TimeSource> = Box::new(time);
        let pool: Arc<[WordRecord]> = words.into();
        let kinds: Arc<[ExerciseKind]> = config.exercise_kinds.clone().into();
        let queue = DrillQueue::initialize(
            pool.clone(),
            kinds,
            config.lookahead,
            rng.as_mut(),
            time.now(),
        )?;

        let mut session = Self {
            id: Uuid::new_v4(),
            config,
            pool,
            phase: SessionPhase::Review,
            queue,
            clock: SessionClock::new(),
            results: ResultLedger::new(),
            current: None,
            rng,
            time,
            report: None,
            on_finished: None,
        };
        info!(
            session_id = %session.id,
            words = session.pool.len(),
            minutes = session.config.duration_minutes,
            "session created"
        );

        if session.config.review == ReviewMode::Skip {
            session.begin_exercises()?;
        }
        Ok(session)
    }

    /// Create a session using the system clock and an entropy-seeded RNG.
    pub fn with_system_sources(words: Vec<WordRecord>, config: SessionConfig) -> Result<Self> {
        Self::new(words, config, RngSource::from_entropy(), SystemTime)
    }

    /// Leave Review: start the clock and present the first exercise.
    pub fn begin_exercises(&mut self) -> Result<()> {
        match self.phase {
            SessionPhase::Review => {}
            SessionPhase::Summary => return Err(self.reject("begin_exercises")),
            actual => {
                return Err(DrillError::WrongPhase {
                    expected: SessionPhase::Review,
                    actual,
                })
            }
        }

        self.clock.start(self.config.duration_seconds())?;
        self.phase = SessionPhase::Exercises;
        self.advance()?;
        info!(session_id = %self.id, "exercises started");
        Ok(())
    }

    /// Record an answer to the current exercise and move to the next one.
    pub fn answer(&mut self, is_correct: bool) -> Result<ExerciseOutcome> {
        self.resolve(is_correct, false, "answer")
    }

    /// Grade `typed` against the current exercise, then record it.
    pub fn answer_typed(&mut self, typed: &str) -> Result<ExerciseOutcome> {
        self.ensure_exercises("answer_typed")?;
        let current = self.current.as_ref().ok_or(DrillError::NoCurrentExercise)?;
        let is_correct = grade_typed(&current.spec, typed);
        self.resolve(is_correct, false, "answer_typed")
    }

    /// Pass on the current exercise. Recorded as incorrect with zero time.
    pub fn skip(&mut self) -> Result<ExerciseOutcome> {
        self.resolve(false, true, "skip")
    }

    /// Stop the session early. Rejected once the session has ended.
    pub fn end_session(&mut self) -> Result<SessionReport> {
        if self.phase == SessionPhase::Summary {
            return Err(self.reject("end_session"));
        }
        Ok(self.finish(EndReason::EndedByUser))
    }

    /// Advance the clock by one second.
    ///
    /// Returns the final report on the tick that expires the session.
    /// Ticks outside Exercises do nothing.
    pub fn tick(&mut self) -> Option<SessionReport> {
        if self.phase != SessionPhase::Exercises {
            return None;
        }
        match self.clock.tick() {
            Tick::Expired => Some(self.finish(EndReason::Expired)),
            Tick::Counted(_) | Tick::Ignored => None,
        }
    }

    /// Pause the countdown. Returns true if it was running.
    ///
    /// Only the session clock stops. Elapsed time for the current exercise
    /// is wall-clock time since it became current, pauses included.
    pub fn pause(&mut self) -> bool {
        self.phase == SessionPhase::Exercises && self.clock.pause()
    }

    /// Resume a paused countdown. Returns true if it was paused.
    pub fn resume(&mut self) -> bool {
        self.phase == SessionPhase::Exercises && self.clock.resume()
    }

    /// Register the end-of-session notification. Runs once; if the session
    /// has already ended it runs immediately.
    pub fn on_finished<F>(&mut self, callback: F)
    where
        F: FnOnce(&SessionReport) + Send + 'static,
    {
        match &self.report {
            Some(report) => callback(report),
            None => self.on_finished = Some(Box::new(callback)),
        }
    }

    /// Options for the current exercise, or `None` for typed exercises and
    /// outside Exercises. Built once when the exercise becomes current.
    pub fn current_choices(&self) -> Option<&Choices> {
        self.current.as_ref()?.choices.as_ref()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The word pool, e.g. for the review screen.
    pub fn words(&self) -> &[WordRecord] {
        &self.pool
    }

    pub fn current(&self) -> Option<&ExerciseSpec> {
        self.current.as_ref().map(|c| &c.spec)
    }

    /// Exercises buffered behind the current one.
    pub fn upcoming(&self) -> impl Iterator<Item = &ExerciseSpec> {
        self.queue.upcoming()
    }

    pub fn statistics(&self) -> Statistics {
        self.results.snapshot()
    }

    pub fn ledger(&self) -> &[ExerciseOutcome] {
        self.results.ledger()
    }

    pub fn results(&self) -> &ResultLedger {
        &self.results
    }

    /// Seconds left for display. Full duration before exercises begin.
    pub fn remaining_seconds(&self) -> u32 {
        match self.clock.state() {
            ClockState::Idle => self.config.duration_seconds(),
            _ => self.clock.remaining_seconds(),
        }
    }

    pub fn clock_state(&self) -> ClockState {
        self.clock.state()
    }

    /// The final report, once in Summary.
    pub fn report(&self) -> Option<&SessionReport> {
        self.report.as_ref()
    }

    fn resolve(&mut self, is_correct: bool, was_skipped: bool, action: &str) -> Result<ExerciseOutcome> {
        self.ensure_exercises(action)?;
        let current = self.current.as_ref().ok_or(DrillError::NoCurrentExercise)?;

        let now = self.time.now();
        let elapsed_seconds = if was_skipped {
            0.0
        } else {
            seconds_between(current.started_at, now)
        };
        let outcome = ExerciseOutcome {
            exercise_id: current.spec.id,
            word: current.spec.word.clone(),
            kind: current.spec.kind,
            is_correct: is_correct && !was_skipped,
            elapsed_seconds,
            completed_at: now,
            was_skipped,
        };

        self.results.record(outcome.clone())?;
        debug!(
            session_id = %self.id,
            exercise_id = %outcome.exercise_id,
            correct = outcome.is_correct,
            skipped = outcome.was_skipped,
            "outcome recorded"
        );
        self.advance()?;
        Ok(outcome)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = None;
        let now = self.time.now();
        let spec = self.queue.take_next(self.rng.as_mut(), now)?;
        let choices = build_choices(&spec, &self.pool, self.config.choice_count, self.rng.as_mut());
        self.current = Some(CurrentExercise {
            spec,
            choices,
            started_at: now,
        });
        Ok(())
    }

    fn ensure_exercises(&self, action: &str) -> Result<()> {
        match self.phase {
            SessionPhase::Exercises => Ok(()),
            SessionPhase::Summary => Err(self.reject(action)),
            actual => Err(DrillError::WrongPhase {
                expected: SessionPhase::Exercises,
                actual,
            }),
        }
    }

    fn reject(&self, action: &str) -> DrillError {
        warn!(session_id = %self.id, action, "call rejected, session already ended");
        DrillError::SessionEnded
    }

    fn finish(&mut self, end_reason: EndReason) -> SessionReport {
        self.phase = SessionPhase::Summary;
        self.clock.stop();
        self.queue.close();
        self.results.freeze();
        self.current = None;

        let report = SessionReport {
            session_id: self.id,
            statistics: self.results.snapshot(),
            ledger: self.results.ledger().to_vec(),
            end_reason,
            ended_at: self.time.now(),
        };
        info!(
            session_id = %self.id,
            reason = ?end_reason,
            total = report.statistics.total,
            accuracy = report.statistics.accuracy,
            "session ended"
        );

        if let Some(callback) = self.on_finished.take() {
            callback(&report);
        }
        self.report = Some(report.clone());
        report
    }
}
