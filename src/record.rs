//! Dog record data model.
//!
//! A [`Record`] is owned by whichever [`RecordStore`](crate::app::ports::RecordStore)
//! created it.  The core only ever builds a [`NewRecord`] (via the add-dog
//! form or the seed data) and hands it over; ids and timestamps after that
//! are the store's business.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier.
pub type RecordId = u64;

/// Attributes collected before a record exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    pub name: String,
    /// Free-text "age input" as typed by the operator, or a birth date.
    pub birth_descriptor: Option<String>,
    pub breed: String,
    pub image_url: String,
}

/// A persisted dog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub birth_descriptor: Option<String>,
    pub breed: String,
    pub image_url: String,
    /// Set only by an explicit walk action.
    pub last_walked_at: Option<DateTime<Utc>>,
    /// Set only by an explicit feed action.
    pub last_fed_at: Option<DateTime<Utc>>,
}

impl Record {
    /// Materialise a record from creation attributes.  Used by store adapters.
    pub fn from_new(id: RecordId, attrs: NewRecord) -> Self {
        Self {
            id,
            name: attrs.name,
            birth_descriptor: attrs.birth_descriptor,
            breed: attrs.breed,
            image_url: attrs.image_url,
            last_walked_at: None,
            last_fed_at: None,
        }
    }

    /// The birth instant, if the descriptor parses as one.
    pub fn birthdate(&self) -> Option<DateTime<Utc>> {
        self.birth_descriptor.as_deref().and_then(parse_birth_descriptor)
    }
}

/// Interpret an age input as a timestamp.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DD` (midnight UTC).
/// Anything else is `None`, which the status engine reports as unknown age.
pub fn parse_birth_descriptor(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
