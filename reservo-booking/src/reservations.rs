use std::sync::Arc;

use chrono::NaiveDate;
use reservo_catalog::Catalog;
use reservo_core::availability::{self, DateRange};
use reservo_core::models::Reservation;
use reservo_core::notify::RequestNotifier;
use reservo_core::repository::{RepoError, ReservationRepository};
use reservo_shared::models::events::ReservationRequested;
use tracing::{info, warn};

use crate::models::{AvailabilityRow, RequestAnswer, RequestOutcome, ReservationReceipt};

/// Books items and answers availability questions for the `reservations` record set.
pub struct ReservationManager {
    reservations: Arc<dyn ReservationRepository>,
    notifier: Arc<dyn RequestNotifier>,
}

impl ReservationManager {
    pub fn new(
        reservations: Arc<dyn ReservationRepository>,
        notifier: Arc<dyn RequestNotifier>,
    ) -> Self {
        Self { reservations, notifier }
    }

    /// True when no reservation for (item, location) overlaps `period`.
    pub async fn is_available(
        &self,
        item: &str,
        location: &str,
        period: &DateRange,
    ) -> Result<bool, BookingError> {
        let existing = self.reservations.list_for(item, location).await?;
        Ok(availability::is_available(&existing, period))
    }

    /// Book (item, location) for `period` if nothing overlaps.
    ///
    /// The caller learns that the item is taken, not by whom.
    #[tracing::instrument(skip(self))]
    pub async fn reserve(
        &self,
        user: &str,
        item: &str,
        location: &str,
        period: DateRange,
    ) -> Result<ReservationReceipt, BookingError> {
        let reservation = Reservation::new(user, item, location, period);

        if !self.reservations.insert_if_available(&reservation).await? {
            return Err(BookingError::Unavailable {
                user: user.to_string(),
                item: item.to_string(),
                location: location.to_string(),
                period,
            });
        }

        info!("Reserved {} at {} for {} {}", item, location, user, period);
        Ok(ReservationReceipt {
            user: reservation.user,
            item: reservation.item,
            location: reservation.location,
            period,
        })
    }

    /// Name the current holder of the first reservation overlapping `period`, if any.
    pub async fn request_reservation(
        &self,
        user: &str,
        item: &str,
        location: &str,
        period: DateRange,
    ) -> Result<RequestOutcome, BookingError> {
        let existing = self.reservations.list_for(item, location).await?;

        let outcome = match availability::first_conflict(&existing, &period) {
            Some(held) => RequestOutcome::Held {
                holder: held.user.clone(),
                start: held.start_date,
                end: held.end_date,
            },
            None => RequestOutcome::Free,
        };

        tracing::debug!("{} asked for {} at {} {}: {:?}", user, item, location, period, outcome);
        Ok(outcome)
    }

    /// Handle the Y/N reply to a held item.
    ///
    /// `Y` hands a [`ReservationRequested`] to the notifier and reports it as sent.
    /// Delivery is up to the notifier; the default one only logs.
    #[tracing::instrument(skip(self))]
    pub async fn answer_request(
        &self,
        user: &str,
        item: &str,
        location: &str,
        period: DateRange,
        answer: &str,
    ) -> Result<RequestAnswer, BookingError> {
        match answer.trim() {
            "Y" => {}
            "N" => return Ok(RequestAnswer::Cancelled),
            _ => return Ok(RequestAnswer::Invalid),
        }

        let holder = match self.request_reservation(user, item, location, period).await? {
            RequestOutcome::Held { holder, .. } => holder,
            RequestOutcome::Free => return Ok(RequestAnswer::Free),
        };

        let request = ReservationRequested::new(
            user,
            holder,
            item,
            location,
            period.start(),
            period.end(),
        );

        self.notifier.dispatch(&request).await.map_err(|e| {
            warn!("Failed to dispatch reservation request {}: {}", request.request_id, e);
            BookingError::Notification(e)
        })?;

        Ok(RequestAnswer::Sent)
    }

    /// Availability of every catalog row for the single day `on`.
    pub async fn availability_board(
        &self,
        catalog: &Catalog,
        on: NaiveDate,
    ) -> Result<Vec<AvailabilityRow>, BookingError> {
        let day = DateRange::day(on);
        let mut rows = Vec::with_capacity(catalog.len());

        for entry in catalog.entries() {
            let available = self.is_available(&entry.item, &entry.location, &day).await?;
            rows.push(AvailabilityRow {
                item: entry.item.clone(),
                location: entry.location.clone(),
                available,
            });
        }

        Ok(rows)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Reservation failed for {user} for {item} at {location} {period}. The item is already reserved by someone else.")]
    Unavailable {
        user: String,
        item: String,
        location: String,
        period: DateRange,
    },

    #[error("Reservation store failure: {0}")]
    Store(#[from] RepoError),

    #[error("Request notification failed: {0}")]
    Notification(RepoError),
}
