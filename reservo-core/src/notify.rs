use async_trait::async_trait;
use reservo_shared::models::events::ReservationRequested;

/// Delivery channel for peer reservation requests.
///
/// Accepting a request only records the intent; nothing in the system tells the
/// holder yet. Implementations decide how (and whether) the holder hears about it.
#[async_trait]
pub trait RequestNotifier: Send + Sync {
    async fn dispatch(
        &self,
        request: &ReservationRequested,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Default notifier: logs the request and delivers nothing.
pub struct NoopNotifier;

#[async_trait]
impl RequestNotifier for NoopNotifier {
    async fn dispatch(
        &self,
        request: &ReservationRequested,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let payload = serde_json::to_string(request)?;

        tracing::info!(
            request_id = %request.request_id,
            holder = %request.holder,
            "Reservation request recorded, no delivery channel configured: {}",
            payload
        );

        Ok(())
    }
}
