//! Interactive input of the starting guess

use std::io::{BufRead, Write};
use tracing::debug;

use crate::{CliError, Result};

/// Prompt shown before each attempt
pub const GUESS_PROMPT: &str = "Enter your initial guess (e.g., 1.0 or 2.0): ";

/// Parse a starting guess, accepting only finite numbers.
pub fn parse_guess(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Prompt on `output` and read lines from `input` until one parses.
///
/// Rejected lines are echoed back with a retry hint. Running out of input
/// yields [`CliError::InputClosed`].
pub fn read_guess<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<f64> {
    let mut line = String::new();
    loop {
        write!(output, "{}", GUESS_PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }

        let text = line.trim();
        match parse_guess(text) {
            Some(guess) => return Ok(guess),
            None => {
                debug!("Rejected guess input: {:?}", text);
                writeln!(
                    output,
                    "'{}' is not a valid floating-point number. Please try again.",
                    text
                )?;
            }
        }
    }
}
