use axum::{
    extract::{Form, State},
    response::Html,
    routing::get,
    Router,
};
use chrono::Local;

use crate::{
    error::AppError,
    forms::{Flow, LoginForm},
    state::AppState,
    views,
};

const HEADER: &str = "Log in";

pub fn routes() -> Router<AppState> {
    Router::new().route("/login", get(show_login_form).post(login))
}

async fn show_login_form() -> Html<String> {
    views::page(HEADER, &views::login_form(""))
}

/// Log in, then show the nested Reserve / Request choice and the selected form.
async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Html<String>, AppError> {
    let mut body = views::login_form(&form.email);

    let Some(name) = state.authenticate(&form.email, &form.password).await? else {
        tracing::debug!("Login miss for {}", form.email);
        body.push_str(&views::message(views::INVALID_LOGIN));
        return Ok(views::page(HEADER, &body));
    };

    let flow = form.flow.unwrap_or_default();
    let today = Local::now().date_naive();

    body.push_str(&views::message(&format!("Welcome, {}!", name)));
    body.push_str(&views::flow_choice(form.credentials(), flow));
    body.push_str(&match flow {
        Flow::Reserve => views::reserve_form(form.credentials(), &state.catalog, today),
        Flow::Request => views::request_form(form.credentials(), &state.catalog, today),
    });

    Ok(views::page(HEADER, &body))
}
