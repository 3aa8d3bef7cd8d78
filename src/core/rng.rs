//! Deterministic random number generation for tie-breaking.
//!
//! Randomness is an injected capability: callers own a `GameRng` and
//! pass it to the operations that draw from it, so a fixed seed always
//! reproduces the same best-response choices.
//!
//! ```
//! use rust_nfg::core::GameRng;
//!
//! let mut rng1 = GameRng::new(7);
//! let mut rng2 = GameRng::new(7);
//! assert_eq!(rng1.random_choice(&[2, 5, 9]), rng2.random_choice(&[2, 5, 9]));
//!
//! // A single candidate is returned without drawing.
//! assert_eq!(rng1.random_choice(&[4]), Some(4));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Pick one of `actions` uniformly at random.
    ///
    /// Returns `None` for an empty slice. A single candidate is returned
    /// directly and consumes no randomness.
    pub fn random_choice(&mut self, actions: &[usize]) -> Option<usize> {
        match actions {
            [] => None,
            [only] => Some(*only),
            _ => self.choose(actions).copied(),
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a uniform float in `[0, 1)`.
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_random_choice_stays_in_set() {
        let mut rng = GameRng::new(3);
        let actions = [1, 4, 6];
        for _ in 0..50 {
            let chosen = rng.random_choice(&actions).unwrap();
            assert!(actions.contains(&chosen));
        }
        assert_eq!(rng.random_choice(&[]), None);
    }

    #[test]
    fn test_random_choice_reaches_every_candidate() {
        let mut rng = GameRng::new(11);
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[rng.random_choice(&[0, 1, 2]).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_single_candidate_draws_nothing() {
        let mut rng = GameRng::new(5);
        let mut untouched = rng.clone();
        assert_eq!(rng.random_choice(&[8]), Some(8));
        assert_eq!(rng.gen_f64(), untouched.gen_f64());
    }

    #[test]
    fn test_gen_f64_unit_interval() {
        let mut rng = GameRng::new(9);
        for _ in 0..100 {
            let x = rng.gen_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_clone_replays_draws() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            rng.gen_range_usize(0..1000);
        }

        let mut replay = rng.clone();
        let expected: Vec<_> = (0..10).map(|_| rng.random_choice(&[0, 1, 2, 3])).collect();
        let actual: Vec<_> = (0..10).map(|_| replay.random_choice(&[0, 1, 2, 3])).collect();
        assert_eq!(expected, actual);
    }
}
