//! Terminal console adapter.
//!
//! Implements [`Console`] over any buffered reader / writer pair.  The
//! binary uses stdin and stdout; prompts are flushed immediately so they
//! show up before the read blocks.

use std::io::{self, BufRead, Write};

use crate::app::ports::{Console, ConsoleError};

pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        self.output.flush()?;
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}
