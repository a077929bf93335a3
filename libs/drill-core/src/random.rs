//! Random draws used by exercise generation and choice shuffling.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform random indices.
pub trait RandomSource: Send {
    /// Draw an index uniformly from `0..upper`. `upper` is never zero.
    fn next_index(&mut self, upper: usize) -> usize;
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng + Send> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ChaCha8Rng> {
    /// Reproducible source for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng + Send> RandomSource for RngSource<R> {
    fn next_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Each value is reduced modulo the requested upper bound.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<usize>,
    position: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    /// Always draws index 0.
    pub fn zeros() -> Self {
        Self::new(vec![0])
    }
}

impl RandomSource for SequenceSource {
    fn next_index(&mut self, upper: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value % upper
    }
}

/// Shuffle `items` in place (Fisher-Yates).
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sources_agree() {
        let mut a = RngSource::seeded(7);
        let mut b = RngSource::seeded(7);
        let draws_a: Vec<usize> = (0..20).map(|_| a.next_index(10)).collect();
        let draws_b: Vec<usize> = (0..20).map(|_| b.next_index(10)).collect();
        assert_eq!(draws_a, draws_b);
        assert!(draws_a.iter().all(|&i| i < 10));
    }

    #[test]
    fn sequence_cycles_and_wraps() {
        let mut source = SequenceSource::new(vec![1, 5]);
        assert_eq!(source.next_index(3), 1);
        assert_eq!(source.next_index(3), 2);
        assert_eq!(source.next_index(3), 1);
    }

    #[test]
    fn shuffle_keeps_elements() {
        let mut items = vec![1, 2, 3, 4, 5];
        shuffle(&mut items, &mut RngSource::seeded(3));
        items.sort();
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }
}
