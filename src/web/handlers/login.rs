//! Login page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::web::shell::Shell;

/// A labelled input of the login form. `id` doubles as the input name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginField {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: &'static str,
    pub placeholder: &'static str,
}

pub const LOGIN_FIELDS: [LoginField; 2] = [
    LoginField {
        id: "username",
        label: "username",
        kind: "text",
        placeholder: "admin",
    },
    LoginField {
        id: "password",
        label: "password",
        kind: "password",
        placeholder: "password",
    },
];

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - Username and password inputs
/// - A sign-in button of type `button`, so the form is never submitted
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub shell: Shell,
    pub fields: &'static [LoginField],
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
///
/// There is no matching `POST`: the form is a mockup and signs nobody in.
pub async fn login_handler(shell: Shell) -> impl IntoResponse {
    LoginTemplate {
        shell,
        fields: &LOGIN_FIELDS,
    }
}
