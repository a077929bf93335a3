//! Single-exercise generation.

use crate::error::{DrillError, Result};
use crate::random::RandomSource;
use crate::types::{ExerciseKind, ExerciseSpec, WordRecord};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate one exercise: a uniformly drawn word, a uniformly drawn kind,
/// and a uniformly drawn direction when the kind has several.
///
/// Neither input is modified. Consecutive calls may pick the same word.
pub fn generate(
    pool: &[WordRecord],
    kinds: &[ExerciseKind],
    rng: &mut dyn RandomSource,
    now: DateTime<Utc>,
) -> Result<ExerciseSpec> {
    if pool.is_empty() {
        return Err(DrillError::EmptyPool);
    }
    if kinds.is_empty() {
        return Err(DrillError::NoExerciseKinds);
    }

    let word = &pool[rng.next_index(pool.len())];
    let kind = kinds[rng.next_index(kinds.len())];
    let directions = kind.directions();
    let direction = if directions.is_empty() {
        None
    } else {
        Some(directions[rng.next_index(directions.len())])
    };

    Ok(ExerciseSpec {
        id: Uuid::new_v4(),
        kind,
        word: word.clone(),
        direction,
        created_at: now,
    })
}
