//! Human player that types coordinates on a line-based console.

use super::Policy;
use crate::error::PolicyError;
use crate::games::tictactoe::{BOARD_SIZE, GameState};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Human player reading `row col` pairs from a line-based input.
///
/// Malformed, out-of-range or occupied input is reported on the output and
/// the player is asked again. End of input is an error.
pub struct ConsolePolicy<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePolicy<R, W> {
    /// Creates a console policy over the given input and output.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    fn say(&mut self, message: &str) -> Result<(), PolicyError> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(())
    }
}

impl ConsolePolicy<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Console policy on the process's stdin and stdout.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, std::io::stdin().lock(), std::io::stdout())
    }
}

/// Parses `row col` (separated by spaces, commas or semicolons) into an
/// action index.
fn parse_coordinates(line: &str) -> Result<usize, &'static str> {
    let parts: Vec<&str> = line
        .split([' ', ',', ';'])
        .filter(|part| !part.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        return Err("Please enter two coordinates separated by space.");
    };
    let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>()) else {
        return Err("Invalid input. Please enter numbers for row and column.");
    };
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Err("Coordinates must be between 0 and 2.");
    }
    Ok(row * BOARD_SIZE + col)
}

impl<R: BufRead, W: Write> Policy for ConsolePolicy<R, W> {
    #[instrument(skip_all, fields(policy = %self.name))]
    fn choose_action(&mut self, state: &GameState) -> Result<usize, PolicyError> {
        let legal = state.legal_actions();
        if legal.is_empty() {
            return Err(PolicyError::NoLegalActions);
        }

        loop {
            self.say("Enter your move (row [0-2] and column [0-2], e.g., '1 2'): ")?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PolicyError::InputClosed);
            }

            match parse_coordinates(line.trim()) {
                Ok(action) if legal.contains(&action) => {
                    debug!(action, "Console input accepted");
                    return Ok(action);
                }
                Ok(action) => {
                    debug!(action, "Console input targets occupied cell");
                    self.say("That cell is already occupied. Try again.")?;
                }
                Err(message) => self.say(message)?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
