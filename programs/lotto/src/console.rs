use anchor_lang::prelude::*;
use anchor_lang::error::Error;
use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::errors::{rule_message, rule_name, LottoError};

pub const ERROR_PREFIX: &str = "[ERROR]";

/// Blocking line console over any reader/writer pair.
pub struct Console<R, W> {
    input:  R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn print(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}").map_err(io_failure)?;
        self.output.flush().map_err(io_failure)
    }

    /// Prints `prompt` on its own line, then blocks for one line of input.
    /// End of input is fatal: there is nobody left to re-prompt.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.print(prompt)?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(io_failure)?;
        require!(read > 0, LottoError::InputClosed);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Re-prompts until `parse` accepts a line. Rule violations are printed and
    /// swallowed; only console failures escape.
    pub fn retry<T>(&mut self, prompt: &str, mut parse: impl FnMut(&str) -> Result<T>) -> Result<T> {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    msg!("rejected {:?}: {}", line, rule_name(&err));
                    self.print(format_args!("{ERROR_PREFIX} {}", rule_message(&err)))?;
                }
            }
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

fn io_failure(err: std::io::Error) -> Error {
    msg!("console i/o failed: {}", err);
    LottoError::ConsoleIo.into()
}
