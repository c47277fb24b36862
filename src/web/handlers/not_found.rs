//! Fallback page for unmatched paths.

use askama::Template;
use askama_web::WebTemplate;
use axum::{http::StatusCode, response::IntoResponse};

use crate::web::location::RequestedPath;
use crate::web::shell::Shell;

/// Template for the not found page.
///
/// Renders `templates/not_found.html`, echoing the path exactly as requested.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub shell: Shell,
    pub path: String,
}

/// Renders the not found page with status `404`.
///
/// Registered as the router fallback, so it answers every method.
pub async fn not_found_handler(requested: RequestedPath, shell: Shell) -> impl IntoResponse {
    tracing::debug!(path = requested.path(), "No route matched");

    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            shell,
            path: requested.path().to_string(),
        },
    )
}
