//! This module holds the deterministic doubles and roster helpers shared by the test modules.

use std::cell::Cell;
use std::rc::Rc;

use crate::dice::Dice;
use crate::player::Player;
use crate::random::RandomSource;

/// This struct is a `RandomSource` cycling through a fixed list of values.
pub(crate) struct Sequence {
    /// The number of values handed out so far.
    next: Cell<usize>,
    /// The values handed out, in order, starting over once exhausted.
    values: Vec<u32>,
}

impl Sequence {
    /// Returns how many values have been drawn from the sequence.
    pub(crate) fn calls(&self) -> usize {
        self.next.get()
    }

    /// Creates a sequence over `values`, which must not be empty.
    pub(crate) fn new(values: &[u32]) -> Self {
        assert!(!values.is_empty(), "a sequence needs at least one value");
        Self {
            next: Cell::new(0),
            values: values.to_vec(),
        }
    }

    /// Creates a sequence that always returns `value`.
    pub(crate) fn repeating(value: u32) -> Self {
        Self::new(&[value])
    }
}

impl RandomSource for Sequence {
    fn random(&self) -> u32 {
        let call = self.next.get();
        self.next.set(call + 1);
        self.values[call % self.values.len()]
    }
}

/// This function builds players numbered from one with the given knock out numbers.
pub(crate) fn roster(knock_out_numbers: &[u32]) -> Vec<Player> {
    knock_out_numbers
        .iter()
        .zip(1..)
        .map(|(number, id)| Player::with_knock_out_number(id, *number).expect("valid number"))
        .collect()
}

/// This function builds a six-sided die drawing from `source`.
pub(crate) fn six_sided(source: &Rc<Sequence>) -> Dice {
    let shared: Rc<Sequence> = Rc::clone(source);
    Dice::new(6, shared).expect("six sides is valid")
}
