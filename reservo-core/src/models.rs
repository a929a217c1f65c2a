use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::availability::{ranges_overlap, DateRange};

/// A stored account. `password_hash` is an Argon2id PHC string, never the raw secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Account data as entered on the create-profile form, before hashing.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: reservo_shared::Masked<String>,
}

/// A booked (item, location) for an inclusive date range.
///
/// `user` holds the owner's display name, which is what the booking form knows
/// about the logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub user: String,
    pub item: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Reservation {
    pub fn new(
        user: impl Into<String>,
        item: impl Into<String>,
        location: impl Into<String>,
        period: DateRange,
    ) -> Self {
        Self {
            user: user.into(),
            item: item.into(),
            location: location.into(),
            start_date: period.start(),
            end_date: period.end(),
        }
    }

    /// Inclusive overlap against a requested range.
    pub fn overlaps(&self, period: &DateRange) -> bool {
        ranges_overlap(period.start(), period.end(), self.start_date, self.end_date)
    }
}
