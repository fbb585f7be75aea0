//! Interactive acceptance prompt
//!
//! Prints the usage agreement, then asks until the answer is yes or no.
//! Reading and writing go through `BufRead` / `Write` so the prompt can be
//! driven from a locked terminal or from an in-memory buffer.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::decision::Decision;
use crate::terms::{PROMPT, REPROMPT, TERMS};

/// Errors that can occur while prompting
#[derive(Debug, Error)]
pub enum PromptError {
    /// Reading the answer or writing the prompt failed
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Show the agreement and wait for a yes/no answer
///
/// Invalid answers print a short hint and ask again, with no limit on
/// attempts. If input ends before a valid answer, the terms are declined.
pub fn prompt_acceptance<R, W>(input: &mut R, output: &mut W) -> Result<Decision, PromptError>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{TERMS}")?;

    let mut line = Vec::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            log::warn!("input closed before an answer was given, declining terms");
            // Finish the prompt line so the status message starts on its own
            writeln!(output)?;
            return Ok(Decision::Declined);
        }

        // Undecodable bytes count as an invalid answer
        match String::from_utf8_lossy(&line).parse::<Decision>() {
            Ok(decision) => {
                log::debug!("terms {decision}");
                return Ok(decision);
            },
            Err(e) => {
                log::debug!("{e}");
                writeln!(output, "{REPROMPT}")?;
            },
        }
    }
}
