//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`                   - Home page
//! - `GET /login`              - Login form mockup
//! - `GET /stats`              - Site statistics
//! - `GET /course/{courseid}`  - Course detail
//! - anything else             - Not found page
//!
//! # Middleware
//!
//! - **Mount** - Wraps each rendered view in the host document
//! - **Requested path** - Records the path as sent, before normalization
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::middleware::{mount, requested_path, tracing};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Constructs the site router with its middleware, without path normalization.
pub fn site_router(state: AppState) -> Router {
    web::routes::view_routes()
        .layer(middleware::from_fn_with_state(state, mount::layer))
        .layer(tracing::layer())
}

/// Constructs the application service.
///
/// Trailing slashes are trimmed before routing, so `/login/` renders the
/// same view as `/login`. The path as sent is recorded first, so the not
/// found page still echoes `/login/x/` rather than `/login/x`.
pub fn app_router(state: AppState) -> Router {
    let normalized = NormalizePathLayer::trim_trailing_slash().layer(site_router(state));

    Router::new()
        .fallback_service(normalized)
        .layer(middleware::from_fn(requested_path::record))
}
