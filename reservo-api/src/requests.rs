use axum::{
    extract::{Form, State},
    response::Html,
    routing::post,
    Router,
};
use chrono::Local;
use reservo_booking::RequestOutcome;
use reservo_core::DateRange;

use crate::{
    error::AppError,
    forms::{AnswerForm, BookingForm},
    state::AppState,
    views,
};

const HEADER: &str = "Request a reservation";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/requests", post(request_reservation))
        .route("/requests/answer", post(answer_request))
}

/// Name the holder of an overlapping reservation and offer to ask them for it.
async fn request_reservation(
    State(state): State<AppState>,
    Form(form): Form<BookingForm>,
) -> Result<Html<String>, AppError> {
    let Some(user) = state.authenticate(&form.email, &form.password).await? else {
        return Ok(views::page(HEADER, &views::message(views::INVALID_LOGIN)));
    };

    let today = Local::now().date_naive();
    let mut body = views::message(&format!("Welcome, {}!", user));
    body.push_str(&views::request_form(form.credentials(), &state.catalog, today));

    let period = match DateRange::parse(&form.start_date, &form.end_date) {
        Ok(period) => period,
        Err(invalid) => {
            body.push_str(&views::message(&invalid.to_string()));
            return Ok(views::page(HEADER, &body));
        }
    };

    let outcome = state
        .reservations
        .request_reservation(&user, &form.item, &form.location, period)
        .await?;

    body.push_str(&views::message(&outcome.to_string()));
    if let RequestOutcome::Held { .. } = outcome {
        body.push_str(&views::answer_form(
            form.credentials(),
            &form.item,
            &form.location,
            &period,
        ));
    }

    Ok(views::page(HEADER, &body))
}

/// Y sends the request to the holder's notifier, N drops it.
async fn answer_request(
    State(state): State<AppState>,
    Form(form): Form<AnswerForm>,
) -> Result<Html<String>, AppError> {
    let Some(user) = state.authenticate(&form.email, &form.password).await? else {
        return Ok(views::page(HEADER, &views::message(views::INVALID_LOGIN)));
    };

    let result = match DateRange::parse(&form.start_date, &form.end_date) {
        Err(invalid) => invalid.to_string(),
        Ok(period) => state
            .reservations
            .answer_request(&user, &form.item, &form.location, period, &form.answer)
            .await?
            .to_string(),
    };

    let today = Local::now().date_naive();
    let mut body = views::message(&format!("Welcome, {}!", user));
    body.push_str(&views::request_form(form.credentials(), &state.catalog, today));
    body.push_str(&views::message(&result));
    Ok(views::page(HEADER, &body))
}
