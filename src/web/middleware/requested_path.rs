//! Records the path the client asked for.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::web::location::RequestedPath;

/// Stores the untouched request path as a [`RequestedPath`] extension.
///
/// Must run outside path normalization so views can echo what was sent.
pub async fn record(mut request: Request, next: Next) -> Response {
    let path = RequestedPath::new(request.uri().path());
    request.extensions_mut().insert(path);

    next.run(request).await
}
