//! Bounded interactive prompting.
//!
//! Each prompt re-asks on malformed input up to [`MAX_ATTEMPTS`] times and
//! then fails with a structured error, so a non-interactive input source
//! (a closed pipe, a file of garbage) terminates instead of looping
//! forever. End of input is an immediate error.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{CliError, Result};

/// Attempts allowed per prompted value.
pub const MAX_ATTEMPTS: usize = 3;

/// Message shown when a line fails to parse.
const INVALID_INPUT_MSG: &str = "Invalid input. Please enter a numerical value.";

/// Prompts for one value, retrying on parse failure.
///
/// Writes `label` to `output`, reads one line from `input` and parses it as
/// `T`. Surrounding whitespace is trimmed before parsing.
///
/// # Errors
/// - `CliError::UnexpectedEof` when the input ends before a line is read
/// - `CliError::RetriesExhausted` after [`MAX_ATTEMPTS`] malformed lines
/// - `CliError::Io` on terminal failures
pub fn prompt_value<T, R, W>(input: &mut R, output: &mut W, label: &str) -> Result<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    for _ in 0..MAX_ATTEMPTS {
        write!(output, "{}", label)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(CliError::UnexpectedEof);
        }

        match line.trim().parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "{}", INVALID_INPUT_MSG)?,
        }
    }

    Err(CliError::RetriesExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run<T: FromStr>(lines: &str) -> (Result<T>, String) {
        let mut input = Cursor::new(lines.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = prompt_value::<T, _, _>(&mut input, &mut output, "Enter value: ");
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parses_a_clean_line() {
        let (result, transcript) = run::<f64>("100.5\n");
        assert_eq!(result.unwrap(), 100.5);
        assert_eq!(transcript, "Enter value: ");
    }

    #[test]
    fn trims_whitespace_before_parsing() {
        let (result, _) = run::<usize>("  25000 \n");
        assert_eq!(result.unwrap(), 25000);
    }

    #[test]
    fn reprompts_after_malformed_input() {
        let (result, transcript) = run::<f64>("abc\n42\n");
        assert_eq!(result.unwrap(), 42.0);
        assert!(transcript.contains(INVALID_INPUT_MSG));
        assert_eq!(transcript.matches("Enter value: ").count(), 2);
    }

    #[test]
    fn gives_up_after_the_retry_budget() {
        let (result, transcript) = run::<f64>("a\nb\nc\nd\n");
        assert!(matches!(
            result,
            Err(CliError::RetriesExhausted { attempts: 3 })
        ));
        assert_eq!(transcript.matches(INVALID_INPUT_MSG).count(), 3);
    }

    #[test]
    fn eof_is_an_immediate_error() {
        let (result, _) = run::<f64>("");
        assert!(matches!(result, Err(CliError::UnexpectedEof)));
    }

    #[test]
    fn negative_count_is_rejected_by_the_type() {
        // A path count prompt parses usize, so "-5" is malformed input
        // rather than a negative count.
        let (result, transcript) = run::<usize>("-5\n1000\n");
        assert_eq!(result.unwrap(), 1000);
        assert!(transcript.contains(INVALID_INPUT_MSG));
    }
}
