use chrono::NaiveDate;
use reservo_core::DateRange;
use serde::Serialize;
use std::fmt;

/// Successful account creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountCreated {
    pub name: String,
}

impl fmt::Display for AccountCreated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User creation successful. Welcome, {}!", self.name)
    }
}

/// Proof of a stored reservation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationReceipt {
    pub user: String,
    pub item: String,
    pub location: String,
    pub period: DateRange,
}

impl fmt::Display for ReservationReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation successful for {} for {} at {} {}",
            self.user, self.item, self.location, self.period
        )
    }
}

/// Result of asking who holds an item over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RequestOutcome {
    /// Someone holds an overlapping reservation; the requester may ask them for it.
    Held {
        holder: String,
        start: NaiveDate,
        end: NaiveDate,
    },
    /// Nothing overlaps; the item can simply be reserved.
    Free,
}

impl fmt::Display for RequestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestOutcome::Held { holder, start, end } => write!(
                f,
                "The item is already reserved by {} from {} to {}. Do you want to request the reservation from them? (Y/N)",
                holder, start, end
            ),
            RequestOutcome::Free => f.write_str(FREE_MESSAGE),
        }
    }
}

const FREE_MESSAGE: &str = "The item is available for the date range you selected. You can reserve it by choosing the 'Reserve an item' option.";

/// Result of the Y/N follow-up to a held item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestAnswer {
    Sent,
    Cancelled,
    Invalid,
    /// The conflicting reservation was gone by the time the answer arrived.
    Free,
}

impl fmt::Display for RequestAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RequestAnswer::Sent => "Your request is sent to the user who reserved the item. Please wait for their response.",
            RequestAnswer::Cancelled => "Your request is cancelled. You can try to reserve another item or date.",
            RequestAnswer::Invalid => "Invalid input. Please enter Y or N.",
            RequestAnswer::Free => FREE_MESSAGE,
        };
        f.write_str(text)
    }
}

/// One line of the availability board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityRow {
    pub item: String,
    pub location: String,
    pub available: bool,
}
