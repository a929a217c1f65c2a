use axum::{
    extract::State,
    response::Html,
    routing::get,
    Json, Router,
};
use chrono::{Local, NaiveDate};
use reservo_booking::AvailabilityRow;

use crate::{error::AppError, state::AppState, views};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/availability", get(show_availability))
        .route("/v1/availability", get(list_availability))
}

async fn board(state: &AppState, on: NaiveDate) -> Result<Vec<AvailabilityRow>, AppError> {
    Ok(state
        .reservations
        .availability_board(&state.catalog, on)
        .await?)
}

/// Today's availability of every catalog row, as a table.
async fn show_availability(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let today = Local::now().date_naive();
    let rows = board(&state, today).await?;
    Ok(views::page("View availability", &views::availability_table(&rows, today)))
}

async fn list_availability(
    State(state): State<AppState>,
) -> Result<Json<Vec<AvailabilityRow>>, AppError> {
    Ok(Json(board(&state, Local::now().date_naive()).await?))
}
