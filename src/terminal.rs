use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};
use indicatif::{ProgressBar, ProgressStyle};

use std::io::{BufRead, Write};

use connect4_minimax::{parse_column, Board, MoveError, Outcome, COLS};

/// Prints the board top row first, preceded by a blank line
pub fn print_board<W: Write>(output: &mut W, board: &Board) -> Result<()> {
    writeln!(output)?;
    write!(output, "{}", board)?;
    output.flush()?;
    Ok(())
}

/// Prompts until the player names a playable column
///
/// Returns `None` once the input is closed.
pub fn read_column<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    board: &Board,
) -> Result<Option<usize>> {
    loop {
        write!(output, "Player1 column? ")?;
        output.flush()?;

        let mut buffer = String::new();
        if input.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }

        let column = match parse_column(&buffer) {
            Ok(column) => column,
            Err(err) => {
                writeln!(output, "{}", err)?;
                continue;
            }
        };
        if column >= COLS {
            writeln!(output, "{}", MoveError::OutOfRange(column))?;
            continue;
        }
        if !board.is_valid_location(column) {
            writeln!(output, "{}", MoveError::ColumnFull(column))?;
            continue;
        }

        return Ok(Some(column));
    }
}

/// Prints the final message of the game
pub fn announce<W: Write>(output: &mut W, outcome: Outcome) -> Result<()> {
    let color = match outcome {
        Outcome::PlayerWin => Color::Red,
        Outcome::AiWin => Color::Yellow,
        Outcome::Draw => Color::Cyan,
    };
    output
        .queue(PrintStyledContent(
            style(outcome.to_string())
                .attribute(Attribute::Bold)
                .with(color),
        ))?
        .queue(PrintStyledContent(style("\n")))?;
    output.flush()?;
    Ok(())
}

/// Spinner shown on stderr while the computer searches
pub fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}"));
    spinner.set_message("AI is thinking...");
    spinner.enable_steady_tick(100);
    spinner
}
