//! Application error taxonomy.
//!
//! Only startup can really fail: the host document must contain the mount
//! element. Unknown routes and odd course ids are rendered, never reported.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The host document has no element with `id="root"`.
    #[error("root element not found")]
    MountMissing,

    /// The host document configured via `HOST_PAGE` could not be read.
    #[error("failed to read host page {}: {source}", path.display())]
    HostPage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rendered view body could not be collected for mounting.
    #[error("failed to collect view body: {0}")]
    Body(#[from] axum::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
    }
}
