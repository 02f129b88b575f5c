use crate::entropy::uniform_below;
use crate::error::Result;
use rand::RngCore;

/// Exclusive upper bound of a randomly chosen counter seed.
pub const INITIAL_COUNT_MAX: u64 = 476_782_367;

/// A monotonically increasing sequence used as a tie-breaker between ids
/// generated within the same millisecond.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    count: i64,
}

impl Counter {
    /// Creates a counter whose first value is `seed`.
    pub fn new(seed: i64) -> Self {
        Self { count: seed }
    }

    /// Creates a counter seeded uniformly in `[0, INITIAL_COUNT_MAX)`.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Result<Self> {
        let seed = uniform_below(rng, INITIAL_COUNT_MAX)?;
        Ok(Self::new(seed as i64))
    }

    /// Returns the current value and advances by one.
    ///
    /// After `i64::MAX` the sequence restarts at zero.
    pub fn next_count(&mut self) -> i64 {
        let current = self.count;
        self.count = current.checked_add(1).unwrap_or(0);
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn first_value_is_the_seed() {
        let mut counter = Counter::new(10);
        assert_eq!(counter.next_count(), 10);
        assert_eq!(counter.next_count(), 11);
        assert_eq!(counter.next_count(), 12);
    }

    #[test]
    fn negative_seed_counts_up() {
        let mut counter = Counter::new(-1);
        assert_eq!(counter.next_count(), -1);
        assert_eq!(counter.next_count(), 0);
    }

    #[test]
    fn wraps_to_zero_after_max() {
        let mut counter = Counter::new(i64::MAX);
        assert_eq!(counter.next_count(), i64::MAX);
        assert_eq!(counter.next_count(), 0);
    }

    #[test]
    fn random_seed_is_bounded() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            let mut counter = Counter::random(&mut rng).unwrap();
            let seed = counter.next_count();
            assert!((0..INITIAL_COUNT_MAX as i64).contains(&seed));
        }
    }
}
