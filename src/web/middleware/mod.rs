//! HTTP middleware for the site.
//!
//! Provides mounting into the host document, recording of the requested
//! path and request tracing.

pub mod mount;
pub mod requested_path;
pub mod tracing;
