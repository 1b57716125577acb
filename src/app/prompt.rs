//! Escape-aware prompt.
//!
//! Every line of operator input goes through [`prompt`].  It owns the
//! `"exit"` sentinel: on seeing it (or end of input) it prints the farewell
//! and returns [`Reply::Exit`], which callers turn into
//! [`Outcome::Terminate`](crate::fsm::Outcome::Terminate).  `"menu"` is
//! handed back untouched because its meaning depends on the caller.

use log::debug;

use super::commands::{EXIT_TOKEN, MENU_TOKEN};
use super::ports::{Console, ConsoleError};
use crate::render::FAREWELL;

/// Result of one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The trimmed line, which may be the `"menu"` sentinel.
    Text(String),
    /// The session must end; the farewell has already been printed.
    Exit,
}

impl Reply {
    pub fn is_menu(&self) -> bool {
        matches!(self, Self::Text(t) if t == MENU_TOKEN)
    }
}

/// Show `text` (if any), read one line and strip trailing whitespace.
pub fn prompt(console: &mut impl Console, text: Option<&str>) -> Result<Reply, ConsoleError> {
    if let Some(text) = text {
        console.write(text)?;
    }
    let Some(line) = console.read_line()? else {
        debug!("Prompt: end of input");
        console.write_line("")?;
        console.write_line(FAREWELL)?;
        return Ok(Reply::Exit);
    };
    let value = line.trim_end();
    if value == EXIT_TOKEN {
        console.write_line(FAREWELL)?;
        return Ok(Reply::Exit);
    }
    Ok(Reply::Text(value.to_owned()))
}
