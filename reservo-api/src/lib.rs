use axum::{
    response::Html,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

pub mod availability;
pub mod bookings;
pub mod error;
pub mod forms;
pub mod login;
pub mod profile;
pub mod requests;
pub mod state;
pub mod views;

pub use error::AppError;
pub use state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .merge(profile::routes())
        .merge(login::routes())
        .merge(bookings::routes())
        .merge(requests::routes())
        .merge(availability::routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<String> {
    views::page("Welcome", "<p>Pick an option from the menu above.</p>")
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> AppError {
    AppError::NotFoundError("Page not found".to_string())
}
