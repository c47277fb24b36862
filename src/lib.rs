//! # Course Review
//!
//! A small course review site built with Axum and Askama: a home page, a
//! login mockup, site statistics and per-course detail pages, tied together
//! by a shared header with navigation.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Environment-driven settings
//! - **Server** ([`server`]) - Mounting, binding and shutdown
//! - **Routing** ([`routes`]) - Router and middleware stack
//! - **Web Layer** ([`web`]) - Route table, navigation, shell and views
//!
//! All content is fixed; there is no database and nothing is persisted.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: listen elsewhere (default 0.0.0.0:8080)
//! export LISTEN="127.0.0.1:3000"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::error::AppError;
    pub use crate::routes::{app_router, site_router};
    pub use crate::state::AppState;
    pub use crate::web::host::{DEFAULT_HOST_PAGE, MountPoint};
    pub use crate::web::location::Location;
    pub use crate::web::routes::ViewKind;
}
