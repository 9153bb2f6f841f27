//! Line-based prompt for non-interactive stdin.

use std::io::{self, BufRead, BufReader, ErrorKind, Write};
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::domain::{PromptMode, PromptOutcome, PromptSpec};
use crate::ports::{CancellationToken, PromptPresenter};

/// Prompt that reads answers line by line, for piped or scripted input.
///
/// `y`/`yes` and `n`/`no` answer a Yes/No prompt; anything else asks again. Any line
/// acknowledges an OK prompt. Once input is exhausted nobody can answer, so the
/// presenter waits for cancellation and reports a timeout.
pub struct LinePresenter {
    input: Mutex<Box<dyn BufRead + Send>>,
    output: Mutex<Box<dyn Write + Send>>,
}

impl LinePresenter {
    pub fn new(input: Box<dyn BufRead + Send>, output: Box<dyn Write + Send>) -> Self {
        Self { input: Mutex::new(input), output: Mutex::new(output) }
    }

    /// Read from stdin, write prompts to stderr.
    pub fn stdio() -> Self {
        Self::new(Box::new(BufReader::new(io::stdin())), Box::new(io::stderr()))
    }

    fn ask(&self, spec: &PromptSpec, cancel: &CancellationToken) -> io::Result<PromptOutcome> {
        let mut input = self.input.lock().unwrap_or_else(PoisonError::into_inner);
        let mut output = self.output.lock().unwrap_or_else(PoisonError::into_inner);

        writeln!(output, "[{}] {}", spec.caption(), spec.message())?;
        let hint = match spec.mode() {
            PromptMode::YesNo => "[y/n]",
            PromptMode::Acknowledge => "[press Enter]",
        };

        loop {
            if cancel.is_cancelled() {
                return Ok(PromptOutcome::TimedOut);
            }
            write!(output, "{} ", hint)?;
            output.flush()?;

            let mut line = String::new();
            match input.read_line(&mut line) {
                Ok(0) => {
                    debug!("prompt input closed; waiting for timeout");
                    cancel.wait();
                    return Ok(PromptOutcome::TimedOut);
                }
                Ok(_) => {}
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }

            match spec.mode() {
                PromptMode::Acknowledge => return Ok(PromptOutcome::Yes),
                PromptMode::YesNo => match parse_answer(&line) {
                    Some(true) => return Ok(PromptOutcome::Yes),
                    Some(false) => return Ok(PromptOutcome::No),
                    None => writeln!(output, "Please answer y or n.")?,
                },
            }
        }
    }
}

impl PromptPresenter for LinePresenter {
    fn present(&self, spec: &PromptSpec, cancel: &CancellationToken) -> PromptOutcome {
        self.ask(spec, cancel)
            .unwrap_or_else(|err| PromptOutcome::PresentationFailed(err.to_string()))
    }
}

fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
