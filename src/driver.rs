//! Console driver: a human against the engine, one-shot solving, and self-play.
//!
//! The driver only talks to the board model and search engine through their
//! public operations. Input and output are generic so games can be scripted.

use crate::config::PlayConfig;
use crate::games::tictactoe::{Action, Board, Outcome};
use crate::search::{SearchResult, search};
use anyhow::{Context, Result, anyhow};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Plays a human against the engine until the game ends or input runs out.
///
/// Returns `None` when input closed before the game finished.
#[instrument(skip_all, fields(human = %config.human()))]
pub fn play<R: BufRead, W: Write>(
    config: &PlayConfig,
    mut input: R,
    mut output: W,
) -> Result<Option<Outcome>> {
    info!("Starting game");
    let mut board = Board::new();

    loop {
        writeln!(output, "{board}\n")?;
        if let Some(outcome) = board.outcome() {
            writeln!(output, "{outcome}")?;
            info!(%outcome, "Game over");
            return Ok(Some(outcome));
        }

        let mover = board.to_move()?;
        let action = if mover == *config.human() {
            match read_action(&board, &mut input, &mut output)? {
                Some(action) => action,
                None => {
                    info!("Input closed before the game finished");
                    return Ok(None);
                }
            }
        } else {
            let result = search(&board)?;
            let action = engine_action(&result)?;
            writeln!(output, "Engine ({mover}) plays {action}")?;
            if *config.show_stats() {
                let stats = result.stats();
                writeln!(
                    output,
                    "  value {} | nodes {} | terminals {} | cutoffs {}",
                    result.value(),
                    stats.nodes,
                    stats.terminals,
                    stats.cutoffs
                )?;
            }
            action
        };

        debug!(%mover, %action, "Applying move");
        board = board.apply(action)?;
    }
}

/// Prompts until the human enters a legal action. `None` on end of input.
fn read_action<R: BufRead, W: Write>(
    board: &Board,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Action>> {
    let legal = board.legal_actions();
    loop {
        write!(output, "Your move (row,col or 1-9): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("Failed to read move")? == 0 {
            return Ok(None);
        }

        match line.parse::<Action>() {
            Ok(action) if legal.contains(&action) => return Ok(Some(action)),
            Ok(action) => {
                warn!(%action, "Rejected illegal move");
                writeln!(output, "{action} is not an empty square on the board")?;
            }
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}

/// Searches `board` and writes the answer, as text or as JSON.
#[instrument(skip(board, output), fields(board = %board))]
pub fn solve<W: Write>(board: &Board, json: bool, mut output: W) -> Result<SearchResult> {
    let result = search(board)?;

    if json {
        writeln!(output, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        match result.action() {
            Some(action) => writeln!(
                output,
                "{} to move: play {} (value {})",
                board.to_move()?,
                action,
                result.value()
            )?,
            None => writeln!(output, "Game is over (value {})", result.value())?,
        }
    }

    Ok(result)
}

/// Lets the engine play both sides from the empty board.
#[instrument(skip_all)]
pub fn self_play<W: Write>(mut output: W) -> Result<Outcome> {
    let mut board = Board::new();

    loop {
        writeln!(output, "{board}\n")?;
        if let Some(outcome) = board.outcome() {
            writeln!(output, "{outcome}")?;
            info!(%outcome, "Self-play finished");
            return Ok(outcome);
        }

        let mover = board.to_move()?;
        let action = engine_action(&search(&board)?)?;
        writeln!(output, "{mover} plays {action}")?;
        board = board.apply(action)?;
    }
}

fn engine_action(result: &SearchResult) -> Result<Action> {
    result
        .action()
        .ok_or_else(|| anyhow!("Search returned no move for a game in progress"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;
    use std::io::Cursor;

    #[test]
    fn test_input_closed_ends_game() {
        let mut output = Vec::new();
        let outcome = play(&PlayConfig::default(), Cursor::new(""), &mut output).unwrap();
        assert_eq!(outcome, None);
    }

    #[test]
    fn test_illegal_and_garbage_input_reprompts() {
        // The engine answers the centre with the first corner, so the human
        // tries the occupied centre again, then garbage, then stops.
        let mut output = Vec::new();
        let outcome = play(
            &PlayConfig::default(),
            Cursor::new("5\n1,1\nnonsense\n"),
            &mut output,
        )
        .unwrap();
        assert_eq!(outcome, None);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Engine (O) plays (0, 0)"));
        assert!(text.contains("(1, 1) is not an empty square"));
        assert!(text.contains("Cannot read"));
    }

    #[test]
    fn test_solve_text_output() {
        let board: Board = "XX. OO. ...".parse().unwrap();
        let mut output = Vec::new();
        let result = solve(&board, false, &mut output).unwrap();
        assert_eq!(result.action(), Some(Action::new(0, 2)));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "X to move: play (0, 2) (value 1)\n"
        );
    }

    #[test]
    fn test_self_play_reports_each_move() {
        let mut output = Vec::new();
        let outcome = self_play(&mut output).unwrap();
        assert!(outcome.is_draw());
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("...\n...\n...\n"));
        assert!(text.contains(&format!("{} plays", Player::X)));
        assert!(text.trim_end().ends_with("Draw"));
    }
}
