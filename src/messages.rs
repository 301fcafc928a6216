//! This module turns what happens in a game into the lines written out to the terminal.

use console::style;

use crate::knock_out::{Event, KnockOut, Outcome};

/// This function returns the styled line announcing a single notification.
pub(crate) fn event_line(event: Event) -> String {
    match event {
        Event::KnockedOut { .. } => format!("{}", style(event).red()),
        Event::Won { .. } => format!("{}", style(event).green().bold()),
    }
}

/// This function returns the styled line summing up how a game ended.
pub(crate) fn outcome_line(outcome: &Outcome) -> String {
    let summary = match *outcome {
        Outcome::AllKnockedOut { rounds } => {
            format!("Everyone got knocked out after {rounds} rounds; nobody wins")
        }
        Outcome::Won { player, rounds } => {
            format!("Player {player} wins after {rounds} rounds")
        }
    };

    format!("{}", style(summary).bold().underlined())
}

/// This function returns one line per player with their final score and knock out number, in turn
/// order, preceded by a header.
pub(crate) fn scoreboard(game: &KnockOut) -> Vec<String> {
    let mut lines = Vec::with_capacity(game.players().len() + 1);
    lines.push(format!(
        "{}",
        style(format!("{:<8} {:>6} {:>10}  status", "player", "score", "knock out")).bold()
    ));

    for player in game.players() {
        let status = if player.is_knocked_out() {
            style("out").red()
        } else {
            style("in").green()
        };

        lines.push(format!(
            "{:<8} {:>6} {:>10}  {status}",
            player.id(),
            player.score(),
            player.knock_out_number()
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use console::strip_ansi_codes;

    use super::{event_line, outcome_line, scoreboard};
    use crate::knock_out::{Event, KnockOut, Outcome};
    use crate::test_support::{roster, six_sided, Sequence};

    #[test]
    fn event_lines_keep_the_announcement() {
        let line = event_line(Event::KnockedOut { player: 4 });

        assert_eq!(strip_ansi_codes(&line), "player 4 is out");
    }

    #[test]
    fn outcome_lines_name_the_winner() {
        let won = outcome_line(&Outcome::Won {
            player: 2,
            rounds: 7,
        });
        let lost = outcome_line(&Outcome::AllKnockedOut { rounds: 1 });

        assert_eq!(strip_ansi_codes(&won), "Player 2 wins after 7 rounds");
        assert_eq!(
            strip_ansi_codes(&lost),
            "Everyone got knocked out after 1 rounds; nobody wins"
        );
    }

    #[test]
    fn scoreboard_lists_players_in_turn_order() {
        let source = Rc::new(Sequence::repeating(3));
        let mut game = KnockOut::from_parts(six_sided(&source), roster(&[8, 6]), 100).unwrap();
        let _ = game.play();

        let lines: Vec<String> = scoreboard(&game)
            .iter()
            .map(|line| strip_ansi_codes(line).into_owned())
            .collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("player"));
        assert_eq!(lines[1], "1             0          8  out");
        assert_eq!(lines[2], "2           104          6  in");
    }
}
