//! # knockout
//!
//! This crate is a terminal rendition of Knock Out!, a dice game played with the following rules:
//!
//! 1. Each player gets a knock out number, one of 6, 7, 8 or 9. More than one player can have the
//!    same number.
//! 2. Players take turns throwing both dice, once each turn, and add the sum to their score.
//! 3. A player who rolls their own knock out number is knocked out of the game.
//! 4. Play ends when either every player has been knocked out, or a single player scores 100 points
//!    or more.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use knockout::init;

fn main() -> Result<()> {
    init()
}
