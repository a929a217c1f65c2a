//! Date ranges and the inclusive overlap test behind every availability decision.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::models::Reservation;
use crate::{CoreError, CoreResult};

/// Storage and form format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An inclusive `[start, end]` span of calendar days with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> CoreResult<Self> {
        if start > end {
            return Err(CoreError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A single-day range, as used for "available today" lookups.
    pub fn day(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    /// Parse two `YYYY-MM-DD` strings as entered in date pickers.
    pub fn parse(start: &str, end: &str) -> CoreResult<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        ranges_overlap(self.start, self.end, other.start, other.end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "from {} to {}", self.start, self.end)
    }
}

pub fn parse_date(value: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| CoreError::InvalidDate(value.to_string()))
}

/// Two inclusive ranges overlap when they share at least one day.
pub fn ranges_overlap(
    start: NaiveDate,
    end: NaiveDate,
    other_start: NaiveDate,
    other_end: NaiveDate,
) -> bool {
    start <= other_end && end >= other_start
}

/// True when none of `existing` overlaps `period`.
///
/// Callers pass every reservation for one (item, location) pair; nothing is
/// filtered out by date, so past bookings still count.
pub fn is_available<'a, I>(existing: I, period: &DateRange) -> bool
where
    I: IntoIterator<Item = &'a Reservation>,
{
    first_conflict(existing, period).is_none()
}

/// The first reservation, in iteration order, that overlaps `period`.
pub fn first_conflict<'a, I>(existing: I, period: &DateRange) -> Option<&'a Reservation>
where
    I: IntoIterator<Item = &'a Reservation>,
{
    existing.into_iter().find(|r| r.overlaps(period))
}
