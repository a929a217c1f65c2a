use chrono::NaiveDate;
use uuid::Uuid;

/// Raised when a logged-in user asks the current holder of an item to hand over
/// an overlapping reservation.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct ReservationRequested {
    pub request_id: Uuid,
    pub requester: String,
    pub holder: String,
    pub item: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub requested_at: i64,
}

impl ReservationRequested {
    pub fn new(
        requester: impl Into<String>,
        holder: impl Into<String>,
        item: impl Into<String>,
        location: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            requester: requester.into(),
            holder: holder.into(),
            item: item.into(),
            location: location.into(),
            start_date,
            end_date,
            requested_at: chrono::Utc::now().timestamp(),
        }
    }
}
