//! Unified error type for the Dog Walker CLI.
//!
//! [`Error`] is what the session loop returns.  Store failures met while
//! handling a command are reported and swallowed by the session, and
//! start-up failures (config, store open) are reported by `main` with
//! their own types, so only a broken terminal travels this far.

use core::fmt;

use crate::app::ports::ConsoleError;

#[derive(Debug)]
pub enum Error {
    /// Reading or writing the terminal failed.
    Console(ConsoleError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console(e) => write!(f, "console: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Console(e) => Some(e),
        }
    }
}

impl From<ConsoleError> for Error {
    fn from(e: ConsoleError) -> Self {
        Self::Console(e)
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
