//! Form bodies submitted by the pages in [`crate::views`].
//!
//! Every form after login carries the login fields again: each submission is
//! authenticated on its own.

use reservo_shared::Masked;
use serde::Deserialize;

/// Which nested form a logged-in user is looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    #[default]
    Reserve,
    Request,
}

#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a Masked<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub password: Masked<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: Masked<String>,
    #[serde(default)]
    pub flow: Option<Flow>,
}

/// Item, location and date range, used by both the reserve and the request flow.
#[derive(Debug, Deserialize)]
pub struct BookingForm {
    pub email: String,
    pub password: Masked<String>,
    pub item: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
}

/// The Y/N reply to a held item, with the request it answers.
#[derive(Debug, Deserialize)]
pub struct AnswerForm {
    pub email: String,
    pub password: Masked<String>,
    pub item: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub answer: String,
}

impl LoginForm {
    pub fn credentials(&self) -> Credentials<'_> {
        Credentials { email: &self.email, password: &self.password }
    }
}

impl BookingForm {
    pub fn credentials(&self) -> Credentials<'_> {
        Credentials { email: &self.email, password: &self.password }
    }
}

impl AnswerForm {
    pub fn credentials(&self) -> Credentials<'_> {
        Credentials { email: &self.email, password: &self.password }
    }
}
