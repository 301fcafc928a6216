//! This module contains all functions related to taking input from the user. They all use the
//! `dialoguer` crate to process the input, and they all check for input validation.
//!
//! Specifically, the two available functions take the number of players for the next game, and ask
//! whether to play another one.

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

use crate::config::DEFAULT_PLAYERS;

/// This function asks the user whether they want to play another game, defaulting to yes.
pub(crate) fn play_again(term: &Term) -> Result<bool> {
    let answer = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("Play another game?").bold()))
        .default(true)
        .interact_on(term)?;

    Ok(answer)
}

/// This function is in charge of taking the number of players for the next game. Zero players is
/// refused right at the prompt.
pub(crate) fn take_player_count(term: &Term) -> Result<u32> {
    let input: u32 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("How many players?").bold()))
        .default(DEFAULT_PLAYERS)
        .validate_with(|input: &u32| -> Result<(), &str> {
            if *input == 0 {
                return Err("A game needs at least one player");
            }
            Ok(())
        })
        .interact_text_on(term)?;

    Ok(input)
}
