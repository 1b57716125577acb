//! Port traits — the hexagonal boundary between session logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Session (domain)
//! ```
//!
//! Driven adapters (record store, console, clock, event sink) implement
//! these traits.  The [`Session`](super::service::Session) consumes them via
//! generics, so the domain core never touches stdin, the filesystem or the
//! wall clock directly.
//!
//! ## Store notes
//!
//! - `all()` returns records in insertion order.
//! - `create()` must accept any age input; an unparsable one is stored
//!   as-is and later reported as unknown age, never rejected.
//! - Walk/feed stamps only reach the store through `record_walk` /
//!   `record_feeding`.

use chrono::{DateTime, Utc};

use crate::record::{NewRecord, Record, RecordId};

// ───────────────────────────────────────────────────────────────
// Record store port (driven adapter: domain ↔ persistence)
// ───────────────────────────────────────────────────────────────

/// Persistence collaborator for dog records.
pub trait RecordStore {
    /// Persist a new record and return it with its assigned id.
    fn create(&mut self, attrs: NewRecord) -> Result<Record, StoreError>;

    /// Every record, in insertion order.
    fn all(&self) -> Result<Vec<Record>, StoreError>;

    /// Stamp `last_walked_at` and return the updated record.
    fn record_walk(&mut self, id: RecordId, at: DateTime<Utc>) -> Result<Record, StoreError>;

    /// Stamp `last_fed_at` and return the updated record.
    fn record_feeding(&mut self, id: RecordId, at: DateTime<Utc>) -> Result<Record, StoreError>;

    /// Number of stored records.
    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.all()?.len())
    }
}

// ───────────────────────────────────────────────────────────────
// Console port (driven adapter: domain ↔ terminal)
// ───────────────────────────────────────────────────────────────

/// Line-oriented text console.
pub trait Console {
    /// Write text without a trailing newline (used for prompts).
    fn write(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Write one full line.
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError>;

    /// Read one line including its terminator.  `Ok(None)` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError>;
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Source of the reference instant for status checks and care stamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The session emits structured [`SessionEvent`](super::events::SessionEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::SessionEvent);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`RecordStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with this id.
    NotFound(RecordId),
    /// Reading or writing the backing medium failed.
    Io(String),
    /// Stored data could not be decoded.
    Corrupted(String),
    /// The backend refused the write.
    Rejected(String),
}

/// Errors from [`Console`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    Io(String),
}

impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "no dog with id {}", id),
            Self::Io(msg) => write!(f, "store I/O error: {}", msg),
            Self::Corrupted(msg) => write!(f, "store data corrupted: {}", msg),
            Self::Rejected(msg) => write!(f, "store rejected write: {}", msg),
        }
    }
}

impl core::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "console I/O error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
impl std::error::Error for ConsoleError {}

impl From<std::io::Error> for ConsoleError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
