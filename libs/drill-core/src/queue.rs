//! Self-refilling lookahead buffer of upcoming exercises.
//!
//! The queue never runs dry on its own: every [`DrillQueue::take_next`]
//! generates a replacement, so a session is bounded by its clock rather
//! than by the size of the word pool.

use crate::error::{DrillError, Result};
use crate::generator::generate;
use crate::random::RandomSource;
use crate::types::{ExerciseKind, ExerciseSpec, WordRecord};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::debug;

/// Default number of exercises kept ready.
pub const DEFAULT_LOOKAHEAD: usize = 5;

#[derive(Debug)]
pub struct DrillQueue {
    pool: Arc<[WordRecord]>,
    kinds: Arc<[ExerciseKind]>,
    buffer: VecDeque<ExerciseSpec>,
    lookahead: usize,
    closed: bool,
}

impl DrillQueue {
    /// Build a queue and fill it to `lookahead` exercises.
    pub fn initialize(
        pool: Arc<[WordRecord]>,
        kinds: Arc<[ExerciseKind]>,
        lookahead: usize,
        rng: &mut dyn RandomSource,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        if pool.is_empty() {
            return Err(DrillError::EmptyPool);
        }
        if kinds.is_empty() {
            return Err(DrillError::NoExerciseKinds);
        }
        if lookahead == 0 {
            return Err(DrillError::InvalidLookahead);
        }

        let mut queue = Self {
            pool,
            kinds,
            buffer: VecDeque::with_capacity(lookahead),
            lookahead,
            closed: false,
        };
        while queue.buffer.len() < lookahead {
            queue.refill_one(rng, now)?;
        }
        debug!(lookahead, pool = queue.pool.len(), "drill queue initialized");
        Ok(queue)
    }

    fn refill_one(&mut self, rng: &mut dyn RandomSource, now: DateTime<Utc>) -> Result<()> {
        let spec = generate(&self.pool, &self.kinds, rng, now)?;
        self.buffer.push_back(spec);
        Ok(())
    }

    /// Remove the head of the buffer and generate its replacement.
    ///
    /// An empty buffer is an invariant violation and yields
    /// [`DrillError::QueueExhausted`].
    pub fn take_next(
        &mut self,
        rng: &mut dyn RandomSource,
        now: DateTime<Utc>,
    ) -> Result<ExerciseSpec> {
        let next = self.buffer.pop_front().ok_or(DrillError::QueueExhausted)?;
        if !self.closed {
            self.refill_one(rng, now)?;
        }
        Ok(next)
    }

    /// Stop generating replacements. Idempotent.
    pub fn close(&mut self) {
        if !self.closed {
            debug!(buffered = self.buffer.len(), "drill queue closed");
        }
        self.closed = true;
    }

    /// True when nothing is buffered and nothing more will be generated.
    pub fn is_exhausted(&self) -> bool {
        self.buffer.is_empty() && (self.closed || self.pool.is_empty())
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn lookahead(&self) -> usize {
        self.lookahead
    }

    /// Buffered exercises in the order they will be taken.
    pub fn upcoming(&self) -> impl Iterator<Item = &ExerciseSpec> {
        self.buffer.iter()
    }
}
