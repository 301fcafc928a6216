//! This module contains the dice the players throw on their turn.

use std::fmt;
use std::rc::Rc;

use crate::error::GameError;
use crate::random::RandomSource;

/// The number of sides of the dice used in a regular game.
pub const DEFAULT_SIDES: u32 = 6;

/// This struct represents a single die, which reduces the output of a shared `RandomSource` to a
/// face between one and its number of sides.
///
/// Rolls are computed as `(source % sides) + 1`. When `sides` does not evenly divide the size of
/// the source's range this is not uniform: with the default ten-valued source and six sides, faces
/// two through five come up twice as often as one and six. The bias is part of how the game plays
/// and is kept as is.
#[derive(Clone)]
pub struct Dice {
    /// The number of faces on the die. Never zero.
    sides: u32,
    /// The source of randomness, shared with any other die built from the same handle.
    source: Rc<dyn RandomSource>,
}

impl Dice {
    /// Creates a new die with `sides` faces drawing from `source`.
    ///
    /// # Errors
    ///
    /// Returns `GameError::ZeroSides` if `sides` is zero.
    pub fn new(sides: u32, source: Rc<dyn RandomSource>) -> Result<Self, GameError> {
        if sides == 0 {
            return Err(GameError::ZeroSides);
        }

        Ok(Self { sides, source })
    }

    /// Rolls the die once, returning a face in `1..=sides`.
    #[must_use]
    pub fn roll(&self) -> u32 {
        self.source.random() % self.sides + 1
    }

    /// Returns the number of faces on the die.
    #[must_use]
    pub const fn sides(&self) -> u32 {
        self.sides
    }
}

impl fmt::Debug for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dice")
            .field("sides", &self.sides)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::Dice;
    use crate::error::GameError;
    use crate::random::{OneThroughTen, RandomSource};
    use crate::test_support::{six_sided, Sequence};

    #[test]
    fn reduces_source_modulo_sides() {
        let source = Rc::new(Sequence::new(&[1, 2, 5, 6, 7, 10]));
        let dice = six_sided(&source);

        let rolls: Vec<u32> = (0..6).map(|_| dice.roll()).collect();

        assert_eq!(rolls, vec![2, 3, 6, 1, 2, 5]);
    }

    #[test]
    fn fixed_five_always_rolls_six() {
        let source = Rc::new(Sequence::repeating(5));
        let dice = six_sided(&source);

        assert!((0..20).all(|_| dice.roll() == 6));
    }

    #[test]
    fn rolls_stay_on_the_die() {
        for sides in 1..=12 {
            let source: Rc<dyn RandomSource> = Rc::new(OneThroughTen::with_seed(u64::from(sides)));
            let dice = Dice::new(sides, source).unwrap();

            for _ in 0..500 {
                let roll = dice.roll();
                assert!((1..=sides).contains(&roll), "{roll} on a d{sides}");
            }
        }
    }

    #[test]
    fn keeps_the_modulo_bias() {
        // every value of the source once; faces 2..=5 are each hit by two of them
        let source = Rc::new(Sequence::new(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]));
        let dice = six_sided(&source);
        let mut counts = [0_u32; 6];

        for _ in 0..10 {
            let face = usize::try_from(dice.roll() - 1).unwrap();
            counts[face] += 1;
        }

        assert_eq!(counts, [1, 2, 2, 2, 2, 1]);
    }

    #[test]
    fn dice_share_one_source() {
        let source = Rc::new(Sequence::new(&[1, 2, 3]));
        let first = six_sided(&source);
        let second = six_sided(&source);

        assert_eq!(first.roll(), 2);
        assert_eq!(second.roll(), 3);
        assert_eq!(first.roll(), 4);
        assert_eq!(source.calls(), 3);
    }

    #[test]
    fn concrete_source_handle_coerces_into_a_die() {
        let source = Rc::new(Sequence::repeating(2));
        let shared: Rc<Sequence> = Rc::clone(&source);
        let dice = Dice::new(4, shared).unwrap();

        assert_eq!(dice.roll(), 3);
        assert_eq!(Rc::strong_count(&source), 2);
    }

    #[test]
    fn rejects_zero_sides() {
        let source: Rc<dyn RandomSource> = Rc::new(Sequence::repeating(1));

        assert_eq!(Dice::new(0, source).unwrap_err(), GameError::ZeroSides);
    }
}
