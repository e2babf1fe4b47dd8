//! Validated console input helpers.
//!
//! Every constrained prompt loops until its parser accepts the answer,
//! printing the parser's corrective message on each rejection. The only
//! ways out of a loop are a valid answer or end-of-input on stdin.

use std::io::{self, BufRead, Write};

use crate::error::{CliError, CliResult};

/// Reads one trimmed line, prompting with `label` on the same line.
///
/// # Errors
///
/// Returns `CliError::InputClosed` when stdin has no more input.
pub fn prompt_line(label: &str) -> CliResult<String> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{label}")?;
    stdout.flush()?;

    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Err(CliError::InputClosed);
    }
    Ok(line.trim().to_string())
}

/// Prompts until `parse` accepts the answer.
pub fn prompt_validated<T, F>(label: &str, parse: F) -> CliResult<T>
where
    F: Fn(&str) -> Result<T, String>,
{
    loop {
        let answer = prompt_line(label)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(message) => println!("{message}"),
        }
    }
}

/// Yes/no prompt accepting `y`/`yes`/`n`/`no`, case-insensitive.
pub fn prompt_yes_no(question: &str) -> CliResult<bool> {
    prompt_validated(&format!("{question} (y/n): "), parse_yes_no)
}

/// Parses a yes/no answer.
fn parse_yes_no(answer: &str) -> Result<bool, String> {
    match answer.to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err("Invalid answer. Enter 'y' for yes or 'n' for no.".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yes_no_accepts_both_spellings() {
        assert_eq!(parse_yes_no("y"), Ok(true));
        assert_eq!(parse_yes_no("YES"), Ok(true));
        assert_eq!(parse_yes_no("n"), Ok(false));
        assert_eq!(parse_yes_no("No"), Ok(false));
    }

    #[test]
    fn test_parse_yes_no_rejects_everything_else() {
        assert!(parse_yes_no("").is_err());
        assert!(parse_yes_no("maybe").is_err());
        assert!(parse_yes_no("s").is_err());
    }
}
