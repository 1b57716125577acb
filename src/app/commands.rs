//! Inbound menu commands.
//!
//! A line typed at the top-level prompt is parsed into a [`MenuCommand`]
//! which the [`Session`](super::service::Session) dispatches.  The
//! `"exit"` sentinel never reaches this layer; the prompt consumes it.

/// Redisplay the menu, or abort the current form back to it.
pub const MENU_TOKEN: &str = "menu";

/// End the session from any prompt.
pub const EXIT_TOKEN: &str = "exit";

/// Commands an operator can issue at the top-level prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    /// `"menu"` — print the options again.
    ShowMenu,
    /// `"1"` — every dog with its care status.
    ListAll,
    /// `"2"` — guided add-a-dog form.
    AddDog,
    /// `"3"` — record a walk for one dog.
    WalkDog,
    /// `"4"` — record a feeding for one dog.
    FeedDog,
    /// `"5"` — only the hungry dogs.
    ListHungry,
    /// `"6"` — only the dogs due a walk.
    ListNeedsWalk,
    /// Anything else; carries the raw token for logging.
    Unrecognized(String),
}

impl MenuCommand {
    /// Parse a trimmed token.  Matching is exact and case-sensitive.
    pub fn parse(token: &str) -> Self {
        match token {
            MENU_TOKEN => Self::ShowMenu,
            "1" => Self::ListAll,
            "2" => Self::AddDog,
            "3" => Self::WalkDog,
            "4" => Self::FeedDog,
            "5" => Self::ListHungry,
            "6" => Self::ListNeedsWalk,
            other => Self::Unrecognized(other.to_owned()),
        }
    }
}
