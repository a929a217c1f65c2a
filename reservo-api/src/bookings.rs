use axum::{
    extract::{Form, State},
    response::Html,
    routing::post,
    Router,
};
use chrono::Local;
use reservo_booking::BookingError;
use reservo_core::DateRange;
use tracing::info;

use crate::{error::AppError, forms::BookingForm, state::AppState, views};

const HEADER: &str = "Reserve an item";

pub fn routes() -> Router<AppState> {
    Router::new().route("/reservations", post(reserve_item))
}

async fn reserve_item(
    State(state): State<AppState>,
    Form(form): Form<BookingForm>,
) -> Result<Html<String>, AppError> {
    let Some(user) = state.authenticate(&form.email, &form.password).await? else {
        return Ok(views::page(HEADER, &views::message(views::INVALID_LOGIN)));
    };

    let result = match DateRange::parse(&form.start_date, &form.end_date) {
        Err(invalid) => invalid.to_string(),
        Ok(period) => match state
            .reservations
            .reserve(&user, &form.item, &form.location, period)
            .await
        {
            Ok(receipt) => receipt.to_string(),
            Err(err @ BookingError::Unavailable { .. }) => {
                info!("Conflict for {} at {}", form.item, form.location);
                err.to_string()
            }
            Err(err) => return Err(err.into()),
        },
    };

    let today = Local::now().date_naive();
    let mut body = views::message(&format!("Welcome, {}!", user));
    body.push_str(&views::reserve_form(form.credentials(), &state.catalog, today));
    body.push_str(&views::message(&result));
    Ok(views::page(HEADER, &body))
}
