//! Overwrite confirmation
//!
//! The font updater asks once per existing destination file. Each question
//! is a separate call; nothing is batched.

use std::io::{self, BufRead, IsTerminal, Write};

use inquire::InquireError;

use crate::error::Result;

/// Yes/no gate consulted before an existing file is replaced
pub trait Confirmer {
    /// Ask `question`, returning `true` only for an explicit yes.
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Only a case-insensitive `y` accepts; everything else declines.
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Asks on the terminal, or reads one line from redirected stdin
#[derive(Default)]
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        let message = format!("{question} (y/N):");

        if io::stdin().is_terminal() {
            return interpret_answer(inquire::Text::new(&message).prompt());
        }

        let mut stdout = io::stdout().lock();
        write!(stdout, "{message} ")?;
        stdout.flush()?;
        drop(stdout);

        // EOF reads as an empty answer, which declines.
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(is_yes(&line))
    }
}

/// Esc and Ctrl-C at the prompt decline; only terminal failures are errors.
fn interpret_answer(answer: std::result::Result<String, InquireError>) -> Result<bool> {
    match answer {
        Ok(answer) => Ok(is_yes(&answer)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
        Err(err) => Err(err.into()),
    }
}
