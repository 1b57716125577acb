//! Presentation layer.
//!
//! Turns records and [`CareStatus`] categories into console lines.  The
//! status engine never sees colour or punctuation; everything visual is
//! decided here from the category alone.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use crossterm::style::Stylize;

use crate::config::DEFAULT_TIME_FORMAT;
use crate::record::Record;
use crate::status::{self, CareStatus};

pub const BANNER: &str = "Hi there! Welcome to the Dog Walker CLI!";
pub const FAREWELL: &str = "Thanks for using the Dog Walker CLI - buh bye!";
pub const REBUKE: &str = "oops you let the dogs out, grrrr.";
pub const DOG_ADDED: &str = "Your dog has been added. Thanks for playing.";
pub const NO_DOGS: &str = "There are no dogs yet.";
pub const UNKNOWN_AGE: &str = "unknown age";

const MENU_OPTIONS: [&str; 6] = [
    "List all dogs",
    "Add a dog",
    "Walk a dog",
    "Feed a dog",
    "List hungry dogs",
    "List dogs that need a walk",
];

const MENU_HINT: &str =
    "Please choose an option. At any time, type 'menu' to see menu options or 'exit' to leave the program";

/// Colour family for a line of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Alert,
    Ok,
    Accent,
}

/// Rendering options shared by every function in this module.
#[derive(Debug, Clone)]
pub struct Style {
    pub color: bool,
    pub time_format: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: false,
            time_format: DEFAULT_TIME_FORMAT.to_owned(),
        }
    }
}

impl Style {
    /// Wrap `text` in ANSI colour when enabled.
    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_owned();
        }
        match tone {
            Tone::Plain => text.to_owned(),
            Tone::Alert => text.red().to_string(),
            Tone::Ok => text.green().to_string(),
            Tone::Accent => text.blue().to_string(),
        }
    }

    /// Falls back to [`DEFAULT_TIME_FORMAT`] when `time_format` is not a
    /// usable strftime pattern.
    fn format_time(&self, at: Option<DateTime<Utc>>) -> String {
        let Some(ts) = at else {
            return "never".to_owned();
        };
        let mut out = String::new();
        if write!(out, "{}", ts.format(&self.time_format)).is_ok() {
            return out;
        }
        ts.format(DEFAULT_TIME_FORMAT).to_string()
    }
}

/// Suffix and tone for each care category.
pub fn care_decoration(status: CareStatus) -> (Option<&'static str>, Tone) {
    match status {
        CareStatus::NeedsWalkAndHungry => (Some("hungry and in need of a walk!"), Tone::Alert),
        CareStatus::Hungry => (Some("hungry"), Tone::Alert),
        CareStatus::NeedsWalk => (Some("needs a walk"), Tone::Alert),
        CareStatus::Fine => (None, Tone::Ok),
    }
}

/// `"Rex (hungry)"`, coloured by category.
pub fn formatted_name(name: &str, status: CareStatus, style: &Style) -> String {
    let (suffix, tone) = care_decoration(status);
    let text = match suffix {
        Some(s) => format!("{} ({})", name, s),
        None => name.to_owned(),
    };
    style.paint(&text, tone)
}

/// The full block printed for one dog, blank lines included.
pub fn record_lines(record: &Record, now: DateTime<Utc>, style: &Style) -> Vec<String> {
    let age = status::age(record, now).map_or_else(|| UNKNOWN_AGE.to_owned(), |a| a.to_string());
    vec![
        String::new(),
        formatted_name(&record.name, status::care_label(record, now), style),
        format!("  Age: {}", age),
        format!("  Breed: {}", record.breed),
        format!("  Image Url: {}", record.image_url),
        format!("  Last walked at: {}", style.format_time(record.last_walked_at)),
        format!("  Last fed at: {}", style.format_time(record.last_fed_at)),
        String::new(),
    ]
}

pub fn menu_lines() -> Vec<String> {
    let mut lines = vec!["Here are your options:".to_owned()];
    lines.extend(
        MENU_OPTIONS
            .iter()
            .enumerate()
            .map(|(i, label)| format!("  {}. {}", i + 1, label)),
    );
    lines.push(MENU_HINT.to_owned());
    lines
}

/// `"  1. Lennon"` style picker lines for the walk/feed forms.
pub fn picker_lines(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| format!("  {}. {}", i + 1, r.name))
        .collect()
}
