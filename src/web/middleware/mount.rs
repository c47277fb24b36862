//! Mounts rendered views into the host document.

use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    http::{HeaderValue, Method, header},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

/// Upper bound for a single rendered view.
const MAX_VIEW_BYTES: usize = 1024 * 1024;

/// Places every HTML response inside the host document's mount element.
///
/// Responses that are not `text/html` pass through untouched. `HEAD`
/// responses carry no body, so only their `Content-Length` is adjusted to
/// the length the mounted `GET` document has.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/", get(index_handler))
///     .layer(middleware::from_fn_with_state(state, mount::layer));
/// ```
///
/// # Errors
///
/// Returns [`AppError::Body`] (`500`) if the view body cannot be collected.
pub async fn layer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let is_head = request.method() == Method::HEAD;
    let response = next.run(request).await;

    if !is_html(&response) {
        return Ok(response);
    }

    if is_head {
        let mut response = response;
        match content_length(&response) {
            Some(fragment_len) => {
                let document_len = state.mount.document_len(fragment_len);
                response
                    .headers_mut()
                    .insert(header::CONTENT_LENGTH, HeaderValue::from(document_len));
            }
            None => {
                response.headers_mut().remove(header::CONTENT_LENGTH);
            }
        }
        return Ok(response);
    }

    let (mut parts, body) = response.into_parts();
    let fragment = to_bytes(body, MAX_VIEW_BYTES).await?;
    let document = state.mount.render(&String::from_utf8_lossy(&fragment));

    parts
        .headers
        .insert(header::CONTENT_LENGTH, HeaderValue::from(document.len()));

    Ok(Response::from_parts(parts, Body::from(document)))
}

fn content_length(response: &Response) -> Option<usize> {
    response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

fn is_html(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/html"))
}
