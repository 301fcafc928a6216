//! This module holds the source of randomness the dice are built on.
//!
//! The source is modelled as a trait with a single method so that the game can be driven by a
//! fixed sequence of values when it needs to be reproduced exactly.

use std::cell::RefCell;
use std::ops::RangeInclusive;

use fastrand::Rng;

/// The inclusive range every `RandomSource` draws its values from.
pub const SOURCE_RANGE: RangeInclusive<u32> = 1..=10;

/// This trait represents anything capable of producing a uniformly distributed number within
/// `SOURCE_RANGE`.
///
/// The method takes `&self` because a single source is shared between dice; implementations that
/// keep state do so through interior mutability.
pub trait RandomSource {
    /// Returns the next number from the source, within `SOURCE_RANGE`.
    fn random(&self) -> u32;
}

/// This struct is the default `RandomSource`, backed by a `fastrand` generator.
#[derive(Debug)]
pub struct OneThroughTen {
    /// The generator values are drawn from, behind a `RefCell` so that `random()` can take a
    /// shared reference.
    rng: RefCell<Rng>,
}

impl OneThroughTen {
    /// Creates a new source seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: RefCell::new(Rng::new()),
        }
    }

    /// Creates a new source whose sequence is fully determined by `seed`.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self {
            rng: RefCell::new(Rng::with_seed(seed)),
        }
    }
}

impl Default for OneThroughTen {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for OneThroughTen {
    fn random(&self) -> u32 {
        self.rng.borrow_mut().u32(SOURCE_RANGE)
    }
}

#[cfg(test)]
mod tests {
    use super::{OneThroughTen, RandomSource, SOURCE_RANGE};

    #[test]
    fn stays_within_range() {
        for seed in 0..64 {
            let source = OneThroughTen::with_seed(seed);

            for _ in 0..256 {
                let value = source.random();
                assert!(SOURCE_RANGE.contains(&value), "{value} escaped the range");
            }
        }
    }

    #[test]
    fn covers_every_value() {
        let source = OneThroughTen::with_seed(7);
        let mut seen = [false; 10];

        for _ in 0..1_000 {
            let index = usize::try_from(source.random() - 1).unwrap();
            if let Some(slot) = seen.get_mut(index) {
                *slot = true;
            }
        }

        assert!(seen.iter().all(|hit| *hit), "some values never came up");
    }

    #[test]
    fn same_seed_same_sequence() {
        let first = OneThroughTen::with_seed(42);
        let second = OneThroughTen::with_seed(42);

        let lhs: Vec<u32> = (0..32).map(|_| first.random()).collect();
        let rhs: Vec<u32> = (0..32).map(|_| second.random()).collect();

        assert_eq!(lhs, rhs);
    }
}
