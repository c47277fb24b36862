//! Current location extractors.

use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

/// Path of the current request, as seen by the router.
///
/// Read-only and rebuilt for every request. Trailing slashes are already
/// trimmed, so this is the path navigation is matched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location(String);

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for Location
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::new(parts.uri.path()))
    }
}

/// Path exactly as the client sent it, before any normalization.
///
/// Recorded as a request extension by
/// [`record`](crate::web::middleware::requested_path::record). Without that
/// middleware the extractor falls back to the current URI path. The path
/// is still percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedPath(String);

impl RequestedPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for RequestedPath
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<RequestedPath>()
            .cloned()
            .unwrap_or_else(|| Self::new(parts.uri.path())))
    }
}
