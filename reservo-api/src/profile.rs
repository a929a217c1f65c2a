use axum::{
    extract::{Form, State},
    response::Html,
    routing::get,
    Router,
};
use reservo_booking::AccountError;
use reservo_core::NewUser;

use crate::{error::AppError, forms::ProfileForm, state::AppState, views};

const HEADER: &str = "Create a profile";

pub fn routes() -> Router<AppState> {
    Router::new().route("/profile", get(show_profile_form).post(create_profile))
}

async fn show_profile_form() -> Html<String> {
    views::page(HEADER, &views::profile_form())
}

async fn create_profile(
    State(state): State<AppState>,
    Form(form): Form<ProfileForm>,
) -> Result<Html<String>, AppError> {
    let new_user = NewUser {
        name: form.name,
        email: form.email,
        password: form.password,
    };

    let result = match state.accounts.create_user(new_user).await {
        Ok(created) => created.to_string(),
        Err(err @ (AccountError::EmailTaken { .. } | AccountError::MissingFields)) => err.to_string(),
        Err(err) => return Err(err.into()),
    };

    let mut body = views::profile_form();
    body.push_str(&views::message(&result));
    Ok(views::page(HEADER, &body))
}
