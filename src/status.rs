//! Status engine: age, hunger and walk-need derived from timestamps.
//!
//! Every function here is pure.  The reference instant `now` is always an
//! argument (the session reads it from the [`Clock`](crate::app::ports::Clock)
//! port), so the same record and the same `now` always give the same answer.
//!
//! ## Trailing windows
//!
//! A care event counts as recent when it lies inside the inclusive window
//! `[now - window, now]`.  Anything outside that range, including a
//! timestamp in the future, means the dog needs attention again.
//!
//! | Check          | Field            | Window |
//! |----------------|------------------|--------|
//! | `needs_a_walk` | `last_walked_at` | 4 h    |
//! | `hungry`       | `last_fed_at`    | 6 h    |

use chrono::{DateTime, Duration, Utc};

use crate::record::Record;

/// A walk older than this means the dog needs another one.
pub const WALK_WINDOW: Duration = Duration::hours(4);

/// A meal older than this means the dog is hungry.
pub const FEED_WINDOW: Duration = Duration::hours(6);

const DAYS_PER_WEEK: i64 = 7;
const DAYS_PER_MONTH: i64 = 30;
const DAYS_PER_YEAR: i64 = 365;

const SECS_PER_DAY: i64 = 86_400;
/// Mean Gregorian month (30.436875 days).
const SECS_PER_MEAN_MONTH: i64 = 2_629_746;
/// Mean Gregorian year (365.2425 days).
const SECS_PER_MEAN_YEAR: i64 = 31_556_952;

// ───────────────────────────────────────────────────────────────
// Age
// ───────────────────────────────────────────────────────────────

/// Unit of an [`Age`] bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeUnit {
    Week,
    Month,
    Year,
}

impl AgeUnit {
    fn singular(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    fn plural(self) -> &'static str {
        match self {
            Self::Week => "weeks",
            Self::Month => "months",
            Self::Year => "years",
        }
    }
}

/// A bucketed age, e.g. `3 months`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age {
    pub value: i64,
    pub unit: AgeUnit,
}

impl Age {
    /// Unit text, singular iff the value is exactly one.
    pub fn unit_label(&self) -> &'static str {
        if self.value == 1 {
            self.unit.singular()
        } else {
            self.unit.plural()
        }
    }
}

impl core::fmt::Display for Age {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.value, self.unit_label())
    }
}

/// Bucket an elapsed duration into weeks, months or years.
///
/// Elapsed time is truncated to whole days first.  Negative spans (a birth
/// instant after `now`) clamp to zero.  The bucket is chosen on whole days
/// (under 30 → weeks, under 365 → months); the value inside the month and
/// year buckets is measured in mean Gregorian months and years, so 30 days
/// reads `0 months` and 365 days reads `0 years`.
pub fn bucket_elapsed(elapsed: Duration) -> Age {
    let days = elapsed.num_days().max(0);
    let secs = days * SECS_PER_DAY;
    if days < DAYS_PER_MONTH {
        Age {
            value: days / DAYS_PER_WEEK,
            unit: AgeUnit::Week,
        }
    } else if days < DAYS_PER_YEAR {
        Age {
            value: secs / SECS_PER_MEAN_MONTH,
            unit: AgeUnit::Month,
        }
    } else {
        Age {
            value: secs / SECS_PER_MEAN_YEAR,
            unit: AgeUnit::Year,
        }
    }
}

/// The record's age at `now`; `None` when the birth descriptor is missing
/// or is not a timestamp.
pub fn age(record: &Record, now: DateTime<Utc>) -> Option<Age> {
    record.birthdate().map(|born| bucket_elapsed(now - born))
}

// ───────────────────────────────────────────────────────────────
// Care predicates
// ───────────────────────────────────────────────────────────────

/// True when `at` lies inside `[now - window, now]`.
pub fn within_trailing_window(at: DateTime<Utc>, now: DateTime<Utc>, window: Duration) -> bool {
    at >= now - window && at <= now
}

fn needs_care(last: Option<DateTime<Utc>>, now: DateTime<Utc>, window: Duration) -> bool {
    match last {
        Some(at) => !within_trailing_window(at, now, window),
        None => true,
    }
}

/// Whether the dog is due a walk.
pub fn needs_a_walk(record: &Record, now: DateTime<Utc>) -> bool {
    needs_care(record.last_walked_at, now, WALK_WINDOW)
}

/// Whether the dog is due a meal.
pub fn hungry(record: &Record, now: DateTime<Utc>) -> bool {
    needs_care(record.last_fed_at, now, FEED_WINDOW)
}

// ───────────────────────────────────────────────────────────────
// Composite label
// ───────────────────────────────────────────────────────────────

/// The four care categories.  Colour and wording live in [`crate::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CareStatus {
    NeedsWalkAndHungry,
    Hungry,
    NeedsWalk,
    Fine,
}

impl CareStatus {
    pub fn from_flags(needs_walk: bool, is_hungry: bool) -> Self {
        match (needs_walk, is_hungry) {
            (true, true) => Self::NeedsWalkAndHungry,
            (false, true) => Self::Hungry,
            (true, false) => Self::NeedsWalk,
            (false, false) => Self::Fine,
        }
    }
}

pub fn care_label(record: &Record, now: DateTime<Utc>) -> CareStatus {
    CareStatus::from_flags(needs_a_walk(record, now), hungry(record, now))
}

// ───────────────────────────────────────────────────────────────
// Queries over a full store scan
// ───────────────────────────────────────────────────────────────

/// Hungry dogs, store order preserved.
pub fn filter_hungry(records: &[Record], now: DateTime<Utc>) -> Vec<Record> {
    records.iter().filter(|r| hungry(r, now)).cloned().collect()
}

/// Dogs due a walk, store order preserved.
pub fn filter_needs_walking(records: &[Record], now: DateTime<Utc>) -> Vec<Record> {
    records
        .iter()
        .filter(|r| needs_a_walk(r, now))
        .cloned()
        .collect()
}
