//! Server-rendered HTML for every page. Each response is rebuilt from the
//! submitted fields; nothing is remembered between requests.

use std::fmt::Write;

use axum::response::Html;
use chrono::NaiveDate;
use reservo_booking::AvailabilityRow;
use reservo_catalog::Catalog;
use reservo_core::DateRange;

use crate::forms::{Credentials, Flow};

pub const TITLE: &str = "Item Reservation App";
pub const INVALID_LOGIN: &str = "Invalid email or password.";

pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a section in the page shell: title, the top-level option menu, then `body`.
pub fn page(header: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{TITLE}</title></head>
<body>
<h1>{TITLE}</h1>
<nav>
<p>Choose an option:</p>
<ul>
<li><a href="/profile">Create a profile</a></li>
<li><a href="/login">Log in</a></li>
<li><a href="/availability">View availability</a></li>
</ul>
</nav>
<main>
<h2>{header}</h2>
{body}
</main>
</body>
</html>
"#,
        header = escape(header),
    ))
}

pub fn message(text: &str) -> String {
    format!("<p class=\"result\">{}</p>\n", escape(text))
}

pub fn profile_form() -> String {
    r#"<form method="post" action="/profile">
<label>Enter your name: <input type="text" name="name"></label>
<label>Enter your email: <input type="text" name="email"></label>
<label>Enter your password: <input type="password" name="password"></label>
<button type="submit">Submit</button>
</form>
"#
    .to_string()
}

pub fn login_form(email: &str) -> String {
    format!(
        r#"<form method="post" action="/login">
<label>Enter your email: <input type="text" name="email" value="{}"></label>
<label>Enter your password: <input type="password" name="password"></label>
<button type="submit">Submit</button>
</form>
"#,
        escape(email)
    )
}

fn hidden(name: &str, value: &str) -> String {
    format!(
        "<input type=\"hidden\" name=\"{}\" value=\"{}\">\n",
        name,
        escape(value)
    )
}

/// Echoes the login back into the nested form. There is no session layer, so every
/// follow-up submit re-authenticates; the password is in the page source as a result.
fn hidden_credentials(creds: Credentials<'_>) -> String {
    let mut out = hidden("email", creds.email);
    out.push_str(&hidden("password", creds.password.expose()));
    out
}

fn select(name: &str, label: &str, options: &[&str]) -> String {
    let mut out = format!("<label>{} <select name=\"{}\">\n", escape(label), name);
    for option in options {
        let option = escape(option);
        let _ = writeln!(out, "<option value=\"{option}\">{option}</option>");
    }
    out.push_str("</select></label>\n");
    out
}

fn date_input(name: &str, label: &str, value: NaiveDate) -> String {
    format!(
        "<label>{} <input type=\"date\" name=\"{}\" value=\"{}\"></label>\n",
        escape(label),
        name,
        value
    )
}

/// The nested Reserve / Request choice shown after a successful login.
pub fn flow_choice(creds: Credentials<'_>, selected: Flow) -> String {
    let checked = |flow: Flow| if flow == selected { " checked" } else { "" };

    format!(
        r#"<form method="post" action="/login">
{}<p>Choose an option:</p>
<label><input type="radio" name="flow" value="reserve"{}> Reserve an item</label>
<label><input type="radio" name="flow" value="request"{}> Request a reservation</label>
<button type="submit">Go</button>
</form>
"#,
        hidden_credentials(creds),
        checked(Flow::Reserve),
        checked(Flow::Request),
    )
}

fn booking_fields(catalog: &Catalog, today: NaiveDate) -> String {
    let mut out = select("item", "Choose an item:", &catalog.unique_items());
    out.push_str(&select("location", "Choose a location:", &catalog.unique_locations()));
    out.push_str(&date_input("start_date", "Choose a start date:", today));
    out.push_str(&date_input("end_date", "Choose an end date:", today));
    out
}

pub fn reserve_form(creds: Credentials<'_>, catalog: &Catalog, today: NaiveDate) -> String {
    format!(
        "<h3>Reserve an item</h3>\n<form method=\"post\" action=\"/reservations\">\n{}{}<button type=\"submit\">Submit</button>\n</form>\n",
        hidden_credentials(creds),
        booking_fields(catalog, today),
    )
}

pub fn request_form(creds: Credentials<'_>, catalog: &Catalog, today: NaiveDate) -> String {
    format!(
        "<h3>Request a reservation</h3>\n<form method=\"post\" action=\"/requests\">\n{}{}<button type=\"submit\">Submit</button>\n</form>\n",
        hidden_credentials(creds),
        booking_fields(catalog, today),
    )
}

/// Y/N prompt for asking the current holder; repeats the request in hidden fields.
pub fn answer_form(creds: Credentials<'_>, item: &str, location: &str, period: &DateRange) -> String {
    let mut out = String::from("<form method=\"post\" action=\"/requests/answer\">\n");
    out.push_str(&hidden_credentials(creds));
    out.push_str(&hidden("item", item));
    out.push_str(&hidden("location", location));
    out.push_str(&hidden("start_date", &period.start().to_string()));
    out.push_str(&hidden("end_date", &period.end().to_string()));
    out.push_str("<label>Enter Y or N: <input type=\"text\" name=\"answer\"></label>\n");
    out.push_str("<button type=\"submit\">Submit</button>\n</form>\n");
    out
}

pub fn availability_table(rows: &[AvailabilityRow], on: NaiveDate) -> String {
    let mut out = format!(
        "<table>\n<caption>Availability on {}</caption>\n<tr><th>Item</th><th>Location</th><th>Available</th></tr>\n",
        on
    );
    for row in rows {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&row.item),
            escape(&row.location),
            row.available
        );
    }
    out.push_str("</table>\n");
    out
}
