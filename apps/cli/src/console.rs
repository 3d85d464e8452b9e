//! # Console
//!
//! Line-oriented prompting over any `BufRead`/`Write` pair.
//!
//! The binary wraps locked stdin/stdout; tests wrap a `Cursor` and a
//! `Vec<u8>` so a whole session can be scripted.

use std::fmt::Display;
use std::io::{BufRead, Write};

use inventario_core::ValidationError;

use crate::error::{AppError, AppResult};

/// Operator terminal.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Prints `label`, then reads one line.
    ///
    /// The trailing line terminator is removed; everything else is returned
    /// as typed so the validators decide about whitespace.
    ///
    /// ## Errors
    /// * `AppError::InputClosed` - end of input before a line arrived
    /// * `AppError::Validation` - the line is not valid UTF-8; it is consumed
    ///   so the next prompt reads the following line
    /// * `AppError::Io` - the terminal failed
    pub fn prompt(&mut self, label: &str) -> AppResult<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(AppError::InputClosed);
        }

        while matches!(line.last(), Some(b'\n' | b'\r')) {
            line.pop();
        }
        String::from_utf8(line).map_err(|_| ValidationError::InvalidText.into())
    }

    /// Prints one line.
    pub fn say(&mut self, text: impl Display) -> AppResult<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Consumes the console and returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
